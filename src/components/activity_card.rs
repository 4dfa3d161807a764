//! Activity Card Component
//!
//! One activity: details, availability, roster and the signup input.
//! Controls only carry data attributes; `ActivityList` handles the events.

use leptos::prelude::*;

use crate::cards::ActivityCard;
use crate::context::use_app_context;
use crate::store::store_draft;

const EMAIL_PLACEHOLDER: &str = "your-email@mergington.edu";

#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let store = use_app_context().store;
    let name = card.name.clone();
    let draft_key = card.name.clone();

    let roster = if card.participants.is_empty() {
        view! { <p><em>"No participants yet"</em></p> }.into_any()
    } else {
        let activity = card.name.clone();
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {card.participants.iter().map(|email| view! {
                        <li>
                            <span class="participant-email">{email.clone()}</span>
                            <button
                                class="delete-btn"
                                title="Unregister"
                                data-action="unregister"
                                data-activity=activity.clone()
                                data-email=email.clone()
                            >
                                "❌"
                            </button>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        }.into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name.clone()}</h4>
            <p>{card.description.clone()}</p>
            <p><strong>"Schedule:"</strong> " " {card.schedule.clone()}</p>
            <p><strong>"Availability:"</strong> " " {card.availability()}</p>
            <div class="participants-container">{roster}</div>
            <div class="register-section">
                <input
                    type="email"
                    class="register-email"
                    placeholder=EMAIL_PLACEHOLDER
                    data-activity=name.clone()
                    prop:value=move || store_draft(&store, &draft_key)
                />
                <button class="register-btn" data-action="register" data-activity=name>
                    "Register Student"
                </button>
            </div>
        </div>
    }
}
