//! navstate - Navigation and notification state for the interview-prep UI shell
//!
//! A reducer-driven store holding the shell's user, navigation, notification
//! and preference state, mirrored to session-scoped key-value storage.

pub mod core;
pub mod persistence;
pub mod shell;

/// Application name constant
pub const APP_NAME: &str = "navstate";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
