//! # thumbs - like/dislike feedback widget
//!
//! A two-state feedback widget: two controls (like and dislike) whose
//! presentation follows a small state machine, plus an asynchronous notifier
//! that reports every change of choice to a remote endpoint.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): feedback state and per-control presentation state
//! - **Message** (`core::msg`): clicks, hover changes and settled notifications
//! - **Update** (`core::update`): pure function from message and state to new state and commands
//! - **Command** (`core::cmd`): side effects (notification, diagnostics)
//! - **View** (`presentation`): pure style mapping applied through render adapters
//!
//! [`widget::FeedbackWidget`] ties these together into an explicit instance with
//! injected presentation surface and notifier.
//!
//! ## Example Usage
//!
//! ```rust
//! use thumbs::core::{cmd::Cmd, msg::Msg, state::{Control, FeedbackState, WidgetState}};
//! use thumbs::core::update::update;
//!
//! let state = WidgetState::new();
//! let (state, cmds) = update(Msg::Clicked(Control::Like), state);
//! assert_eq!(state.feedback, FeedbackState::Liked);
//! assert!(matches!(cmds.as_slice(), [Cmd::Notify { .. }]));
//!
//! // Clicking the committed control again does nothing
//! let (_, cmds) = update(Msg::Clicked(Control::Like), state);
//! assert!(cmds.is_empty());
//! ```

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod presentation;
pub mod test_helpers;
pub mod utils;
pub mod widget;

pub use crate::core::{cmd::Cmd, msg::Msg, state::WidgetState, update::update};
pub use widget::FeedbackWidget;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
