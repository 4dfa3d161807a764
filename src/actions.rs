//! Board Actions
//!
//! Load, create, register and unregister. Every successful mutation is
//! followed by exactly one full reload; nothing is patched locally.

use crate::commands::{ActivityApi, ApiError};
use crate::flash::{FlashChannel, FlashMessage, CREATE_HIDE_MS, SIGNUP_HIDE_MS, VALIDATION_HIDE_MS};
use crate::forms::{validate_email, NewActivityDraft};
use crate::models::{ActivityBoard, ApiMessage};

/// What the actions need from the UI
pub trait BoardView {
    /// Allocate a sequence number for a reload
    fn begin_reload(&self) -> u64;

    /// Apply a reload result; returns false if it was stale
    fn finish_reload(&self, seq: u64, result: Result<ActivityBoard, ApiError>) -> bool;

    fn show_flash(&self, channel: FlashChannel, message: FlashMessage);

    fn reset_create_form(&self);

    fn clear_email(&self, activity: &str);
}

/// A click on a card control, decoded from its data attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    Register { activity: String },
    Unregister { activity: String, email: String },
}

impl BoardAction {
    pub fn from_data(action: Option<&str>, activity: Option<String>, email: Option<String>) -> Option<Self> {
        let activity = activity?;
        match action? {
            "register" => Some(BoardAction::Register { activity }),
            "unregister" => Some(BoardAction::Unregister { activity, email: email? }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Signup,
    Unregister,
}

impl MutationKind {
    pub fn channel(&self) -> FlashChannel {
        match self {
            MutationKind::Create => FlashChannel::CreateForm,
            MutationKind::Signup | MutationKind::Unregister => FlashChannel::Board,
        }
    }

    pub fn hide_after_ms(&self) -> u32 {
        match self {
            MutationKind::Create => CREATE_HIDE_MS,
            MutationKind::Signup | MutationKind::Unregister => SIGNUP_HIDE_MS,
        }
    }

    fn success_fallback(&self) -> &'static str {
        match self {
            MutationKind::Create => "Activity added!",
            MutationKind::Signup => "Signed up.",
            MutationKind::Unregister => "Unregistered.",
        }
    }

    fn rejected_fallback(&self) -> &'static str {
        match self {
            MutationKind::Create => "Failed to add activity.",
            MutationKind::Signup | MutationKind::Unregister => "An error occurred",
        }
    }

    fn transport_text(&self) -> &'static str {
        match self {
            MutationKind::Create => "Error adding activity.",
            MutationKind::Signup => "Failed to sign up. Please try again.",
            MutationKind::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// Message to show for a mutation result
pub fn mutation_message(kind: MutationKind, result: &Result<ApiMessage, ApiError>) -> FlashMessage {
    let hide = kind.hide_after_ms();
    match result {
        Ok(msg) => FlashMessage::success(
            msg.message.clone().unwrap_or_else(|| kind.success_fallback().to_string()),
            hide,
        ),
        Err(ApiError::Rejected { detail, .. }) => FlashMessage::error(
            detail.clone().unwrap_or_else(|| kind.rejected_fallback().to_string()),
            hide,
        ),
        Err(_) => FlashMessage::error(kind.transport_text(), hide),
    }
}

// ========================
// Operations
// ========================

pub async fn load_activities<A: ActivityApi, V: BoardView>(api: &A, view: &V) {
    let seq = view.begin_reload();
    log::debug!("[BOARD] Reload #{} issued", seq);

    let result = api.list_activities().await;
    match &result {
        Ok(board) => log::info!("[BOARD] Loaded {} activities (reload #{})", board.len(), seq),
        Err(e) => log::error!("[BOARD] Error fetching activities: {}", e),
    }

    if !view.finish_reload(seq, result) {
        log::debug!("[BOARD] Reload #{} is stale, dropped", seq);
    }
}

pub async fn create_activity<A: ActivityApi, V: BoardView>(api: &A, view: &V, draft: &NewActivityDraft) {
    let activity = match draft.validate() {
        Ok(activity) => activity,
        Err(e) => {
            log::warn!("[FORM] Create rejected locally: {}", e);
            view.show_flash(FlashChannel::CreateForm, FlashMessage::error(e.to_string(), VALIDATION_HIDE_MS));
            return;
        }
    };

    let result = api.create_activity(&activity).await;
    finish_mutation(api, view, MutationKind::Create, result, |view| view.reset_create_form()).await;
}

pub async fn register_participant<A: ActivityApi, V: BoardView>(api: &A, view: &V, activity: &str, raw_email: &str) {
    let email = match validate_email(raw_email) {
        Ok(email) => email,
        Err(e) => {
            log::warn!("[FORM] Signup rejected locally for {}: {}", activity, e);
            view.show_flash(FlashChannel::Board, FlashMessage::error(e.to_string(), VALIDATION_HIDE_MS));
            return;
        }
    };

    let result = api.signup_participant(activity, &email).await;
    finish_mutation(api, view, MutationKind::Signup, result, |view| view.clear_email(activity)).await;
}

pub async fn unregister_participant<A: ActivityApi, V: BoardView>(api: &A, view: &V, activity: &str, email: &str) {
    let result = api.unregister_participant(activity, email).await;
    finish_mutation(api, view, MutationKind::Unregister, result, |_| {}).await;
}

/// Show the result and, on success, run `on_success` and reload once
async fn finish_mutation<A, V, F>(api: &A, view: &V, kind: MutationKind, result: Result<ApiMessage, ApiError>, on_success: F)
where
    A: ActivityApi,
    V: BoardView,
    F: FnOnce(&V),
{
    view.show_flash(kind.channel(), mutation_message(kind, &result));

    match result {
        Ok(_) => {
            log::info!("[BOARD] {:?} succeeded", kind);
            on_success(view);
            load_activities(api, view).await;
        }
        Err(e) if e.is_transport() => log::error!("[BOARD] {:?} failed: {}", kind, e),
        Err(e) => log::warn!("[BOARD] {:?} rejected: {}", kind, e),
    }
}
