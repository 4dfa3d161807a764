//! Activity Board App
//!
//! Root component: activity list, create form and the shared message area.

use leptos::prelude::*;

use crate::components::{ActivityList, FlashBanner, NewActivityForm};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| {
        ctx.reload();
    });

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
                <FlashBanner slot=ctx.board_flash id="message" />
            </section>

            <section id="add-activity-container">
                <h3>"Add a New Activity"</h3>
                <NewActivityForm />
            </section>
        </main>
    }
}
