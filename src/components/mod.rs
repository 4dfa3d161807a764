//! UI Components
//!
//! Leptos components for the activity board.

mod activity_card;
mod activity_list;
mod flash_banner;
mod new_activity_form;

pub use activity_card::ActivityCardView;
pub use activity_list::ActivityList;
pub use flash_banner::FlashBanner;
pub use new_activity_form::NewActivityForm;
