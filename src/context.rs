//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::BoardView;
use crate::commands::{ApiError, HttpApi};
use crate::config::AppConfig;
use crate::flash::{FlashChannel, FlashMessage, FlashSlot};
use crate::forms::NewActivityDraft;
use crate::models::ActivityBoard;
use crate::store::{store_apply_reload, store_begin_reload, store_clear_draft, AppState, AppStore};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board state
    pub store: AppStore,
    /// Signup/unregister message area
    pub board_flash: RwSignal<FlashSlot>,
    /// Create-form message area
    pub form_flash: RwSignal<FlashSlot>,
    /// Contents of the create-activity form
    pub create_draft: RwSignal<NewActivityDraft>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: AppStore::new(AppState::new()),
            board_flash: RwSignal::new(FlashSlot::default()),
            form_flash: RwSignal::new(FlashSlot::default()),
            create_draft: RwSignal::new(NewActivityDraft::default()),
            config: StoredValue::new(config),
        }
    }

    /// API client for the configured base
    pub fn api(&self) -> HttpApi {
        self.config.with_value(HttpApi::from_config)
    }

    fn slot(&self, channel: FlashChannel) -> RwSignal<FlashSlot> {
        match channel {
            FlashChannel::Board => self.board_flash,
            FlashChannel::CreateForm => self.form_flash,
        }
    }

    /// Trigger a reload of the board
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            crate::actions::load_activities(&ctx.api(), &ctx).await;
        });
    }
}

impl BoardView for AppContext {
    fn begin_reload(&self) -> u64 {
        store_begin_reload(&self.store)
    }

    fn finish_reload(&self, seq: u64, result: Result<ActivityBoard, ApiError>) -> bool {
        store_apply_reload(&self.store, seq, result)
    }

    fn show_flash(&self, channel: FlashChannel, message: FlashMessage) {
        let slot = self.slot(channel);
        let hide_after = message.hide_after_ms;
        let generation = flash_show(slot, message);

        spawn_local(async move {
            TimeoutFuture::new(hide_after).await;
            flash_expire(slot, generation);
        });
    }

    fn reset_create_form(&self) {
        self.create_draft.set(NewActivityDraft::default());
    }

    fn clear_email(&self, activity: &str) {
        store_clear_draft(&self.store, activity);
    }
}

/// Show `message` in `slot`, returning the generation its timer must expire
fn flash_show(slot: RwSignal<FlashSlot>, message: FlashMessage) -> u64 {
    slot.try_update(|s| s.show(message)).unwrap_or_default()
}

/// Hide the message shown at `generation`, if it is still current
fn flash_expire(slot: RwSignal<FlashSlot>, generation: u64) -> bool {
    slot.try_update(|s| s.expire(generation)).unwrap_or(false)
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
