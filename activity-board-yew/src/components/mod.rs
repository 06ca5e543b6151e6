//! UI components for the activity board

mod activity_card;
mod activity_list;
mod filter_bar;
mod message_banner;
mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use filter_bar::FilterBar;
pub use message_banner::MessageBanner;
pub use signup_form::SignupForm;
