//! Presentation layer
//!
//! This module turns widget state into something visible:
//! - Pure mapping from control state to a declarative style
//! - Render adapters (element class lists, terminal surface)
//! - Ratatui widgets and UI configuration

pub mod config;
pub mod controller;
pub mod style;
pub mod widgets;
