//! Activity List Component
//!
//! Renders every card and handles their controls through one delegated
//! click listener and one delegated input listener on the container.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions::{self, BoardAction};
use crate::components::ActivityCardView;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_cards, store_draft, store_set_draft, store_status_memo, LoadStatus, LOADING_TEXT, LOAD_FAILED_TEXT};

/// Activity list with delegated event handling
#[component]
pub fn ActivityList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let status = store_status_memo(store);

    view! {
        <div
            id="activities-list"
            on:click=move |ev| handle_click(ctx, &ev)
            on:input=move |ev| {
                let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                    return;
                };
                if let Some(activity) = input.get_attribute("data-activity") {
                    store_set_draft(&store, &activity, input.value());
                }
            }
        >
            {move || match status.get() {
                LoadStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                LoadStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                LoadStatus::Ready => view! {
                    <For
                        each=move || store_cards(&store)
                        key=|card| card.clone()
                        children=move |card| view! { <ActivityCardView card=card /> }
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// Dispatch a click on any control carrying `data-action`
fn handle_click(ctx: AppContext, ev: &web_sys::MouseEvent) {
    let Some(control) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("[data-action]").ok().flatten())
    else {
        return;
    };

    let action = BoardAction::from_data(
        control.get_attribute("data-action").as_deref(),
        control.get_attribute("data-activity"),
        control.get_attribute("data-email"),
    );

    match action {
        Some(BoardAction::Register { activity }) => {
            let email = store_draft(&ctx.store, &activity);
            spawn_local(async move {
                actions::register_participant(&ctx.api(), &ctx, &activity, &email).await;
            });
        }
        Some(BoardAction::Unregister { activity, email }) => {
            spawn_local(async move {
                actions::unregister_participant(&ctx.api(), &ctx, &activity, &email).await;
            });
        }
        None => {}
    }
}
