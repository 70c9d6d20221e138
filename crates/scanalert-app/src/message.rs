//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::ActiveTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry, spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tab Router Messages
    // ─────────────────────────────────────────────────────────
    /// Select a specific tab
    SelectTab(ActiveTab),
    /// Cycle to the next tab (Tab)
    NextTab,
    /// Cycle to the previous tab (Shift+Tab)
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Scan Trigger Messages
    // ─────────────────────────────────────────────────────────
    /// Start a mock scan (ignored while one is in flight)
    RunScan,
    /// Abort the pending scan timer
    CancelScan,
    /// Scan timer fired; reset the flag and announce completion
    ScanCompleted,

    // ─────────────────────────────────────────────────────────
    // Add-Website Form Messages
    // ─────────────────────────────────────────────────────────
    /// Enter form editing (move keyboard focus into the fields)
    FormStartEditing,
    /// Leave form editing without submitting
    FormStopEditing,
    /// Switch focus between the URL and email fields
    FormNextField,
    /// Character input for the focused field
    FormInput(char),
    /// Backspace in the focused field
    FormBackspace,
    /// Submit the form (validates both fields are non-empty)
    SubmitWebsite,
    /// Flip the dashboard weekly-reports switch
    ToggleWeeklyReports,

    // ─────────────────────────────────────────────────────────
    // Pricing Messages
    // ─────────────────────────────────────────────────────────
    /// Select the next plan card
    SelectNextPlan,
    /// Select the previous plan card
    SelectPrevPlan,
    /// Request an upgrade to the selected plan
    UpgradeSelectedPlan,

    // ─────────────────────────────────────────────────────────
    // Settings Messages
    // ─────────────────────────────────────────────────────────
    /// Select next settings item
    SettingsNextItem,
    /// Select previous settings item
    SettingsPrevItem,
    /// Activate the selected item (toggle, cycle, edit, or run action)
    SettingsActivate,
    /// Cycle a choice field forward
    SettingsCycleNext,
    /// Cycle a choice field backward
    SettingsCyclePrev,
    /// Character input while editing a text field
    SettingsInput(char),
    /// Backspace in the edit buffer
    SettingsBackspace,
    /// Commit the current edit
    SettingsCommitEdit,
    /// Cancel the current edit (Escape)
    SettingsCancelEdit,
    /// Save all settings (emits a notification only; no backing store)
    SaveSettings,
    /// Request account deletion (emits a notification only)
    DeleteAccount,
}
