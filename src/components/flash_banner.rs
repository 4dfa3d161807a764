//! Flash Banner Component
//!
//! Message area bound to a `FlashSlot`.

use leptos::prelude::*;

use crate::flash::FlashSlot;

#[component]
pub fn FlashBanner(slot: RwSignal<FlashSlot>, #[prop(into)] id: String) -> impl IntoView {
    let class = move || {
        slot.with(|s| match s.current() {
            Some(message) => message.kind.class(),
            None => "hidden",
        })
    };
    let text = move || slot.with(|s| s.current().map(|m| m.text.clone()).unwrap_or_default());

    view! {
        <div id=id class=class>{text}</div>
    }
}
