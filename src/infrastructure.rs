//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - CLI argument processing and configuration
//! - Remote notification over HTTP and its delivery worker
//! - Terminal lifecycle

pub mod cli;
pub mod config;
pub mod notifier;
pub mod notifier_service;
pub mod tui;
