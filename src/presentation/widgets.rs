pub mod feedback_bar;
pub mod feedback_button;

pub use feedback_bar::{FeedbackBar, FeedbackLayout};
pub use feedback_button::FeedbackButton;
