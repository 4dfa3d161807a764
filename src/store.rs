//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds the
//! last applied server read; rendering is a projection of it.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cards::{project_cards, ActivityCard};
use crate::commands::ApiError;
use crate::models::ActivityBoard;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Activities from the last applied read
    pub activities: ActivityBoard,
    pub status: LoadStatus,
    /// Email typed into each card, keyed by activity name
    pub email_drafts: HashMap<String, String>,
    /// Sequence number of the newest reload issued
    pub reload_issued: u64,
    /// Sequence number of the newest reload applied
    pub reload_applied: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the sequence number for a new reload
    pub fn begin_reload(&mut self) -> u64 {
        self.reload_issued += 1;
        self.reload_issued
    }

    /// Apply a reload result unless a newer one already landed.
    /// Returns whether the result was applied.
    pub fn apply_reload(&mut self, seq: u64, result: Result<ActivityBoard, ApiError>) -> bool {
        if seq <= self.reload_applied {
            return false;
        }
        let (board, status) = reload_outcome(result);
        self.reload_applied = seq;
        self.activities = board;
        self.status = status;
        true
    }
}

/// Board and status a reload result leaves behind
fn reload_outcome(result: Result<ActivityBoard, ApiError>) -> (ActivityBoard, LoadStatus) {
    match result {
        Ok(board) => (board, LoadStatus::Ready),
        Err(_) => (ActivityBoard::default(), LoadStatus::Failed),
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

// Field-level writes: a reload only notifies the fields it changes.

pub fn store_begin_reload(store: &AppStore) -> u64 {
    store
        .reload_issued()
        .try_update(|issued| {
            *issued += 1;
            *issued
        })
        .unwrap_or_default()
}

pub fn store_apply_reload(store: &AppStore, seq: u64, result: Result<ActivityBoard, ApiError>) -> bool {
    if seq <= store.reload_applied().get_untracked() {
        return false;
    }
    let (board, status) = reload_outcome(result);
    *store.reload_applied().write() = seq;
    *store.activities().write() = board;
    if store.status().get_untracked() != status {
        *store.status().write() = status;
    }
    true
}

pub fn store_status(store: &AppStore) -> LoadStatus {
    store.status().get()
}

/// Load status that only notifies when the value changes
pub fn store_status_memo(store: AppStore) -> Memo<LoadStatus> {
    Memo::new(move |_| store_status(&store))
}

/// Cards for the current board, in server order
pub fn store_cards(store: &AppStore) -> Vec<ActivityCard> {
    project_cards(&store.activities().read())
}

pub fn store_draft(store: &AppStore, activity: &str) -> String {
    store.email_drafts().read().get(activity).cloned().unwrap_or_default()
}

pub fn store_set_draft(store: &AppStore, activity: &str, email: String) {
    store.email_drafts().write().insert(activity.to_string(), email);
}

pub fn store_clear_draft(store: &AppStore, activity: &str) {
    store.email_drafts().write().remove(activity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn board_with(name: &str) -> ActivityBoard {
        ActivityBoard::new(vec![(
            name.to_string(),
            Activity {
                description: "d".to_string(),
                schedule: "s".to_string(),
                max_participants: 10,
                participants: vec![],
            },
        )])
    }

    #[test]
    fn test_reload_applies_in_order() {
        let mut state = AppState::new();
        assert_eq!(state.status, LoadStatus::Loading);

        let seq = state.begin_reload();
        assert!(state.apply_reload(seq, Ok(board_with("Chess Club"))));
        assert_eq!(state.status, LoadStatus::Ready);
        assert!(state.activities.get("Chess Club").is_some());
    }

    #[test]
    fn test_stale_reload_discarded() {
        let mut state = AppState::new();
        let first = state.begin_reload();
        let second = state.begin_reload();

        // Second response arrives first
        assert!(state.apply_reload(second, Ok(board_with("Newer"))));
        assert!(!state.apply_reload(first, Ok(board_with("Older"))));

        assert!(state.activities.get("Newer").is_some());
        assert!(state.activities.get("Older").is_none());
    }

    #[test]
    fn test_store_reload_sequencing() {
        let owner = Owner::new();
        owner.set();
        let store = AppStore::new(AppState::new());

        let first = store_begin_reload(&store);
        let second = store_begin_reload(&store);
        assert_eq!((first, second), (1, 2));

        assert!(store_apply_reload(&store, second, Ok(board_with("Newer"))));
        assert!(!store_apply_reload(&store, first, Ok(board_with("Older"))));
        assert_eq!(store.status().get_untracked(), LoadStatus::Ready);
        assert!(store.activities().get_untracked().get("Newer").is_some());
        assert_eq!(store.reload_applied().get_untracked(), 2);
    }

    #[test]
    fn test_repeat_reload_keeps_status_subscribers_quiet() {
        let owner = Owner::new();
        owner.set();
        let store = AppStore::new(AppState::new());
        let status = store_status_memo(store);

        let runs = Arc::new(AtomicUsize::new(0));
        let list_view = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                status.get()
            }
        });

        let seq = store_begin_reload(&store);
        store_apply_reload(&store, seq, Ok(board_with("Chess Club")));
        assert_eq!(list_view.get_untracked(), LoadStatus::Ready);
        let after_first = runs.load(Ordering::SeqCst);

        // Another successful reload changes the board but not the status
        let seq = store_begin_reload(&store);
        store_apply_reload(&store, seq, Ok(board_with("Art Studio")));
        assert_eq!(list_view.get_untracked(), LoadStatus::Ready);
        assert_eq!(runs.load(Ordering::SeqCst), after_first);
    }

    #[test]
    fn test_failed_reload_clears_board() {
        let mut state = AppState::new();
        let seq = state.begin_reload();
        state.apply_reload(seq, Ok(board_with("Chess Club")));

        let seq = state.begin_reload();
        state.apply_reload(seq, Err(ApiError::Transport("offline".to_string())));

        assert_eq!(state.status, LoadStatus::Failed);
        assert!(state.activities.is_empty());
    }
}
