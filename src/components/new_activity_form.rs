//! New Activity Form Component
//!
//! Form for creating activities, with its own message area.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::FlashBanner;
use crate::context::use_app_context;

#[component]
pub fn NewActivityForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = ctx.create_draft;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get();
        spawn_local(async move {
            actions::create_activity(&ctx.api(), &ctx, &snapshot).await;
        });
    };

    view! {
        <form id="add-activity-form" on:submit=submit>
            <div class="form-group">
                <label for="activity-name">"Activity Name:"</label>
                <input
                    type="text"
                    id="activity-name"
                    placeholder="e.g. Robotics Club"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity-description">"Description:"</label>
                <input
                    type="text"
                    id="activity-description"
                    placeholder="What happens in this activity?"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity-schedule">"Schedule:"</label>
                <input
                    type="text"
                    id="activity-schedule"
                    placeholder="e.g. Mondays, 3:30 PM - 5:00 PM"
                    prop:value=move || draft.with(|d| d.schedule.clone())
                    on:input=move |ev| draft.update(|d| d.schedule = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity-max">"Max Participants:"</label>
                <input
                    type="number"
                    id="activity-max"
                    min="1"
                    prop:value=move || draft.with(|d| d.max_participants.clone())
                    on:input=move |ev| draft.update(|d| d.max_participants = event_target_value(&ev))
                />
            </div>
            <button type="submit">"Add Activity"</button>
        </form>
        <FlashBanner slot=ctx.form_flash id="add-activity-message" />
    }
}
