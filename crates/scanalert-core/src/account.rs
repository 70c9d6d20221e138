//! Account settings held in UI state.
//!
//! These values are seeded with placeholders at startup, mutated one field
//! at a time by the settings panel, and discarded on exit. "Saving" only
//! emits a notification; there is no backing store.

use serde::{Deserialize, Serialize};

/// Independent notification toggles.
///
/// The four flags have no cross-constraint; toggling one never touches
/// the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFlags {
    /// Scan results and updates via email
    pub email: bool,
    /// Instant notifications in the browser
    pub browser: bool,
    /// Weekly summaries of all websites
    pub weekly: bool,
    /// Immediate alerts for critical issues
    pub critical: bool,
}

impl Default for NotificationFlags {
    fn default() -> Self {
        Self {
            email: true,
            browser: false,
            weekly: true,
            critical: true,
        }
    }
}

/// Supported timezone choices, mirroring the account form's select options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timezone {
    UtcMinus8,
    UtcMinus7,
    UtcMinus6,
    UtcMinus5,
    Utc,
    UtcPlus1,
}

impl Timezone {
    /// All choices in display order
    pub fn all() -> &'static [Timezone] {
        &[
            Timezone::UtcMinus8,
            Timezone::UtcMinus7,
            Timezone::UtcMinus6,
            Timezone::UtcMinus5,
            Timezone::Utc,
            Timezone::UtcPlus1,
        ]
    }

    /// Next choice (wrapping)
    pub fn next(&self) -> Timezone {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous choice (wrapping)
    pub fn prev(&self) -> Timezone {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Timezone::UtcMinus8 => "Pacific Time (UTC-8)",
            Timezone::UtcMinus7 => "Mountain Time (UTC-7)",
            Timezone::UtcMinus6 => "Central Time (UTC-6)",
            Timezone::UtcMinus5 => "Eastern Time (UTC-5)",
            Timezone::Utc => "UTC",
            Timezone::UtcPlus1 => "Central Europe (UTC+1)",
        }
    }
}

impl std::fmt::Display for Timezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How often the (mock) email reports would be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ReportFrequency {
    /// Next choice (wrapping)
    pub fn next(&self) -> ReportFrequency {
        match self {
            ReportFrequency::Daily => ReportFrequency::Weekly,
            ReportFrequency::Weekly => ReportFrequency::Monthly,
            ReportFrequency::Monthly => ReportFrequency::Daily,
        }
    }

    /// Previous choice (wrapping)
    pub fn prev(&self) -> ReportFrequency {
        match self {
            ReportFrequency::Daily => ReportFrequency::Monthly,
            ReportFrequency::Weekly => ReportFrequency::Daily,
            ReportFrequency::Monthly => ReportFrequency::Weekly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportFrequency::Daily => "Daily",
            ReportFrequency::Weekly => "Weekly",
            ReportFrequency::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for ReportFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Account settings edited on the Settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub timezone: Timezone,
    pub notifications: NotificationFlags,
    pub report_frequency: ReportFrequency,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "My Digital Store".to_string(),
            timezone: Timezone::UtcMinus5,
            notifications: NotificationFlags::default(),
            report_frequency: ReportFrequency::Weekly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_placeholders() {
        let settings = UserSettings::default();
        assert_eq!(settings.full_name, "John Doe");
        assert_eq!(settings.email, "john@example.com");
        assert_eq!(settings.company, "My Digital Store");
        assert_eq!(settings.timezone, Timezone::UtcMinus5);
        assert_eq!(settings.report_frequency, ReportFrequency::Weekly);
    }

    #[test]
    fn test_default_notification_flags() {
        let flags = NotificationFlags::default();
        assert!(flags.email);
        assert!(!flags.browser);
        assert!(flags.weekly);
        assert!(flags.critical);
    }

    #[test]
    fn test_timezone_cycle_wraps() {
        assert_eq!(Timezone::UtcPlus1.next(), Timezone::UtcMinus8);
        assert_eq!(Timezone::UtcMinus8.prev(), Timezone::UtcPlus1);
        // next then prev round-trips
        for tz in Timezone::all() {
            assert_eq!(tz.next().prev(), *tz);
        }
    }

    #[test]
    fn test_report_frequency_cycle() {
        assert_eq!(ReportFrequency::Weekly.next(), ReportFrequency::Monthly);
        assert_eq!(ReportFrequency::Monthly.next(), ReportFrequency::Daily);
        assert_eq!(ReportFrequency::Daily.prev(), ReportFrequency::Monthly);
    }

    #[test]
    fn test_timezone_labels() {
        assert_eq!(Timezone::UtcMinus5.label(), "Eastern Time (UTC-5)");
        assert_eq!(Timezone::Utc.label(), "UTC");
    }
}
