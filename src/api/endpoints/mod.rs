//! API endpoint handlers.

pub mod diagnostics;
pub mod health;
