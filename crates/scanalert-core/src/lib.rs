//! # scanalert-core - Core Domain Types
//!
//! Foundation crate for ScanAlert. Provides the domain types shared by the
//! app and TUI layers, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Scans (`scan`)
//! - [`ScanRecord`] - A single historical scan with URL, score, and status
//! - [`ScanStatus`] - Badge tier derived from the numeric score
//! - [`ScoreBreakdown`], [`ScanIssue`] - The mock detailed scan report
//!
//! ### Account (`account`)
//! - [`UserSettings`] - Profile, notification flags, and report frequency
//! - [`Timezone`], [`ReportFrequency`] - Cycling enum fields
//!
//! ### Plans (`plan`)
//! - [`Plan`] - Static Free/Pro plan catalog with feature lists
//!
//! ### Notifications (`notify`)
//! - [`Notification`] - A transient user-facing message
//! - [`Severity`] - Info, Success, Warning, or Destructive
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod account;
pub mod error;
pub mod logging;
pub mod notify;
pub mod plan;
pub mod scan;

/// Prelude for common imports used throughout all ScanAlert crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use account::{NotificationFlags, ReportFrequency, Timezone, UserSettings};
pub use error::{Error, Result, ResultExt};
pub use notify::{Notification, Severity};
pub use plan::{Plan, PlanTier, Testimonial};
pub use scan::{IssueSeverity, ScanIssue, ScanRecord, ScanStatus, ScoreBreakdown};
