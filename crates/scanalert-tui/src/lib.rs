//! scanalert-tui - Terminal UI for ScanAlert
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! scanalert-app state machine with terminal events, renders the three
//! dashboard tabs, and executes timer side effects on the tokio runtime.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
