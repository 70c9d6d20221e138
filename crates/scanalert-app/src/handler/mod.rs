//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event routing per tab and edit mode
//! - `settings`: Settings item activation

pub(crate) mod keys;
pub(crate) mod settings;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export for internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the single-shot scan timer; it sends `ScanCompleted` when it
    /// fires
    StartScanTimer { duration: Duration },

    /// Abort the pending scan timer, if any
    CancelScanTimer,
}

/// Result of processing a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
