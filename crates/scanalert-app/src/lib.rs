//! scanalert-app - Application state and orchestration for ScanAlert
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the input alphabet, and
//! [`handler::update`] the reducer. Side effects (the scan timer) surface as
//! [`UpdateAction`] values for the event loop to execute.

pub mod config;
pub mod forms;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod state;

// Re-export primary types
pub use config::AppConfig;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifications::NotificationCenter;
pub use state::{ActiveTab, AppState};
