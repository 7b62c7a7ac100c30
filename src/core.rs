//! Core Elm Architecture implementation
//!
//! This module contains the core of the feedback widget:
//! - Widget state and the per-control presentation state machine
//! - Messages and commands
//! - The pure update function
//! - The notification payload

pub mod cmd;
pub mod msg;
pub mod notification;
pub mod state;
pub mod update;
