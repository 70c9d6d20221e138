//! Centralized theme for the dashboard.
//!
//! - `palette` — raw color constants
//! - `styles` — semantic style builder functions

pub mod palette;
pub mod styles;
