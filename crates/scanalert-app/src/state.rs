//! Application state (Model in TEA pattern)

use std::time::Instant;

use scanalert_core::{scan, Notification, ScanIssue, ScoreBreakdown};

use crate::config::AppConfig;
use crate::forms::{AddWebsiteForm, SettingsForm};
use crate::notifications::NotificationCenter;

/// Currently selected top-level UI section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Pricing,
    Settings,
}

impl ActiveTab {
    /// All tabs in display order
    pub fn all() -> &'static [ActiveTab] {
        &[ActiveTab::Dashboard, ActiveTab::Pricing, ActiveTab::Settings]
    }

    /// Next tab (wrapping)
    pub fn next(&self) -> ActiveTab {
        match self {
            ActiveTab::Dashboard => ActiveTab::Pricing,
            ActiveTab::Pricing => ActiveTab::Settings,
            ActiveTab::Settings => ActiveTab::Dashboard,
        }
    }

    /// Previous tab (wrapping)
    pub fn prev(&self) -> ActiveTab {
        match self {
            ActiveTab::Dashboard => ActiveTab::Settings,
            ActiveTab::Pricing => ActiveTab::Dashboard,
            ActiveTab::Settings => ActiveTab::Pricing,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "Dashboard",
            ActiveTab::Pricing => "Pricing",
            ActiveTab::Settings => "Settings",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            ActiveTab::Dashboard => 0,
            ActiveTab::Pricing => 1,
            ActiveTab::Settings => 2,
        }
    }
}

/// Mock scan state: a flag, the static history, and the sample report.
///
/// Idle -> Scanning on request, Scanning -> Idle when the timer fires (or
/// the scan is cancelled). There is no Scanning -> Scanning transition.
#[derive(Debug, Clone)]
pub struct ScanState {
    /// True while the timer is pending
    pub in_progress: bool,

    /// When the running scan started (spinner animation)
    pub started_at: Option<Instant>,

    /// Seed history; never mutated at runtime
    pub history: Vec<scan::ScanRecord>,

    /// Sample detailed report scores
    pub breakdown: ScoreBreakdown,

    /// Sample issues checklist
    pub issues: Vec<ScanIssue>,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            in_progress: false,
            started_at: None,
            history: scan::seed_history(),
            breakdown: ScoreBreakdown::sample(),
            issues: scan::sample_issues(),
        }
    }
}

/// Pricing tab state
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingState {
    /// Index into [`scanalert_core::plan::CATALOG`]
    pub selected: usize,
}

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently selected tab
    pub active_tab: ActiveTab,

    /// Set when the user quits; the runner exits once true
    pub quitting: bool,

    /// Scan trigger state and seed data
    pub scan: ScanState,

    /// "Add New Website" form
    pub add_website: AddWebsiteForm,

    /// Dashboard weekly-reports switch.
    ///
    /// Deliberately independent from the settings panel's weekly flag,
    /// matching the product's duplicated state.
    pub weekly_reports: bool,

    /// Pricing tab selection
    pub pricing: PricingState,

    /// Settings panel: account values plus navigation/edit state
    pub settings_form: SettingsForm,

    /// Active toast queue
    pub notifications: NotificationCenter,

    /// Launch configuration (timer durations, poll rate)
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new AppState with launch configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            active_tab: ActiveTab::Dashboard,
            quitting: false,
            scan: ScanState::default(),
            add_website: AddWebsiteForm::default(),
            weekly_reports: true,
            pricing: PricingState::default(),
            settings_form: SettingsForm::default(),
            notifications: NotificationCenter::new(config.toast_ttl()),
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Queue a toast for display
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Switch tabs. Leaving the Settings tab discards unsaved account
    /// edits (the panel re-seeds on return, like the page it models).
    pub fn select_tab(&mut self, tab: ActiveTab) {
        if self.active_tab == ActiveTab::Settings && tab != ActiveTab::Settings {
            self.settings_form = SettingsForm::default();
        }
        if self.active_tab == ActiveTab::Dashboard && tab != ActiveTab::Dashboard {
            // Form keeps its contents (owned by the page root), but keyboard
            // focus leaves it.
            self.add_website.editing = false;
        }
        self.active_tab = tab;
    }
}
