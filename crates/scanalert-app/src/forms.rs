//! Form state: the add-website inputs and the settings item list.

use scanalert_core::UserSettings;

// ─────────────────────────────────────────────────────────────────────────────
// Add-Website Form
// ─────────────────────────────────────────────────────────────────────────────

/// Which add-website input currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddWebsiteField {
    #[default]
    Url,
    Email,
}

impl AddWebsiteField {
    pub fn next(&self) -> AddWebsiteField {
        match self {
            AddWebsiteField::Url => AddWebsiteField::Email,
            AddWebsiteField::Email => AddWebsiteField::Url,
        }
    }
}

/// State for the "Add New Website" form.
///
/// Validation is presence-only: no URL well-formedness or email format
/// check is performed.
#[derive(Debug, Clone, Default)]
pub struct AddWebsiteForm {
    pub url: String,
    pub email: String,
    pub focus: AddWebsiteField,
    /// Whether keyboard focus is inside the form fields
    pub editing: bool,
}

impl AddWebsiteForm {
    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            AddWebsiteField::Url => self.url.push(c),
            AddWebsiteField::Email => self.email.push(c),
        }
    }

    /// Remove the last character from the focused field
    pub fn backspace(&mut self) {
        match self.focus {
            AddWebsiteField::Url => {
                self.url.pop();
            }
            AddWebsiteField::Email => {
                self.email.pop();
            }
        }
    }

    /// Move focus to the other field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Both fields filled in
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.email.is_empty()
    }

    /// Reset after a successful submission
    pub fn clear(&mut self) {
        self.url.clear();
        self.email.clear();
        self.focus = AddWebsiteField::Url;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Form
// ─────────────────────────────────────────────────────────────────────────────

/// How an item reacts to activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Free text, edited through a char buffer
    Text,
    /// Boolean switch
    Toggle,
    /// Enum cycled with left/right
    Choice,
    /// Button that dispatches a message
    Action,
}

/// One row in the settings panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    FullName,
    Email,
    Company,
    Timezone,
    NotifyEmail,
    NotifyBrowser,
    NotifyWeekly,
    NotifyCritical,
    ReportFrequency,
    SaveSettings,
    DeleteAccount,
}

impl SettingsItem {
    /// All items in display order
    pub fn all() -> &'static [SettingsItem] {
        &[
            SettingsItem::FullName,
            SettingsItem::Email,
            SettingsItem::Company,
            SettingsItem::Timezone,
            SettingsItem::NotifyEmail,
            SettingsItem::NotifyBrowser,
            SettingsItem::NotifyWeekly,
            SettingsItem::NotifyCritical,
            SettingsItem::ReportFrequency,
            SettingsItem::SaveSettings,
            SettingsItem::DeleteAccount,
        ]
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            SettingsItem::FullName | SettingsItem::Email | SettingsItem::Company => ItemKind::Text,
            SettingsItem::Timezone | SettingsItem::ReportFrequency => ItemKind::Choice,
            SettingsItem::NotifyEmail
            | SettingsItem::NotifyBrowser
            | SettingsItem::NotifyWeekly
            | SettingsItem::NotifyCritical => ItemKind::Toggle,
            SettingsItem::SaveSettings | SettingsItem::DeleteAccount => ItemKind::Action,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::FullName => "Full Name",
            SettingsItem::Email => "Email Address",
            SettingsItem::Company => "Company/Website",
            SettingsItem::Timezone => "Timezone",
            SettingsItem::NotifyEmail => "Email Notifications",
            SettingsItem::NotifyBrowser => "Browser Notifications",
            SettingsItem::NotifyWeekly => "Weekly Summaries",
            SettingsItem::NotifyCritical => "Critical Alerts",
            SettingsItem::ReportFrequency => "Report Frequency",
            SettingsItem::SaveSettings => "Save All Settings",
            SettingsItem::DeleteAccount => "Delete Account",
        }
    }

    /// Section heading the item is grouped under
    pub fn section(&self) -> &'static str {
        match self {
            SettingsItem::FullName
            | SettingsItem::Email
            | SettingsItem::Company
            | SettingsItem::Timezone => "Profile Information",
            SettingsItem::NotifyEmail
            | SettingsItem::NotifyBrowser
            | SettingsItem::NotifyWeekly
            | SettingsItem::NotifyCritical
            | SettingsItem::ReportFrequency => "Notification Preferences",
            SettingsItem::SaveSettings | SettingsItem::DeleteAccount => "Actions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingsItem::FullName => "Your display name",
            SettingsItem::Email => "Address used for reports",
            SettingsItem::Company => "Shown on white-label reports",
            SettingsItem::Timezone => "Used to schedule report delivery",
            SettingsItem::NotifyEmail => "Receive scan results and updates via email",
            SettingsItem::NotifyBrowser => "Get instant notifications in your browser",
            SettingsItem::NotifyWeekly => "Receive weekly reports of all your websites",
            SettingsItem::NotifyCritical => "Get immediate alerts for critical issues",
            SettingsItem::ReportFrequency => "How often reports are emailed",
            SettingsItem::SaveSettings => "Apply your preference changes",
            SettingsItem::DeleteAccount => "Request account deletion",
        }
    }
}

/// Navigable settings panel state: the settings values plus selection
/// and the in-flight text edit, if any.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub settings: UserSettings,
    /// Index into [`SettingsItem::all`]
    pub selected: usize,
    /// Pending text edit for the selected item
    pub edit_buffer: Option<String>,
}

impl SettingsForm {
    pub fn selected_item(&self) -> SettingsItem {
        SettingsItem::all()[self.selected]
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Move selection down (wrapping); no-op while editing
    pub fn select_next(&mut self) {
        if self.edit_buffer.is_none() {
            self.selected = (self.selected + 1) % SettingsItem::all().len();
        }
    }

    /// Move selection up (wrapping); no-op while editing
    pub fn select_prev(&mut self) {
        if self.edit_buffer.is_none() {
            let len = SettingsItem::all().len();
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Current value of a text item
    pub fn text_value(&self, item: SettingsItem) -> Option<&str> {
        match item {
            SettingsItem::FullName => Some(&self.settings.full_name),
            SettingsItem::Email => Some(&self.settings.email),
            SettingsItem::Company => Some(&self.settings.company),
            _ => None,
        }
    }

    /// Begin editing the selected text item, seeding the buffer with the
    /// current value
    pub fn start_edit(&mut self) {
        if let Some(value) = self.text_value(self.selected_item()) {
            self.edit_buffer = Some(value.to_string());
        }
    }

    /// Write the buffer back to the selected field.
    ///
    /// The whole settings struct is replaced with one field changed, so
    /// untouched fields are always preserved.
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        match self.selected_item() {
            SettingsItem::FullName => self.settings.full_name = buffer,
            SettingsItem::Email => self.settings.email = buffer,
            SettingsItem::Company => self.settings.company = buffer,
            _ => {}
        }
    }

    /// Discard the pending edit
    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    /// Flip the selected toggle item
    pub fn toggle_selected(&mut self) {
        let selected = self.selected_item();
        let flags = &mut self.settings.notifications;
        match selected {
            SettingsItem::NotifyEmail => flags.email = !flags.email,
            SettingsItem::NotifyBrowser => flags.browser = !flags.browser,
            SettingsItem::NotifyWeekly => flags.weekly = !flags.weekly,
            SettingsItem::NotifyCritical => flags.critical = !flags.critical,
            _ => {}
        }
    }

    /// Cycle the selected choice item; `forward` picks next vs previous
    pub fn cycle_selected(&mut self, forward: bool) {
        match self.selected_item() {
            SettingsItem::Timezone => {
                self.settings.timezone = if forward {
                    self.settings.timezone.next()
                } else {
                    self.settings.timezone.prev()
                };
            }
            SettingsItem::ReportFrequency => {
                self.settings.report_frequency = if forward {
                    self.settings.report_frequency.next()
                } else {
                    self.settings.report_frequency.prev()
                };
            }
            _ => {}
        }
    }

    /// Display string for any item's current value
    pub fn display_value(&self, item: SettingsItem) -> String {
        match item {
            SettingsItem::FullName => self.settings.full_name.clone(),
            SettingsItem::Email => self.settings.email.clone(),
            SettingsItem::Company => self.settings.company.clone(),
            SettingsItem::Timezone => self.settings.timezone.to_string(),
            SettingsItem::NotifyEmail => on_off(self.settings.notifications.email),
            SettingsItem::NotifyBrowser => on_off(self.settings.notifications.browser),
            SettingsItem::NotifyWeekly => on_off(self.settings.notifications.weekly),
            SettingsItem::NotifyCritical => on_off(self.settings.notifications.critical),
            SettingsItem::ReportFrequency => self.settings.report_frequency.to_string(),
            SettingsItem::SaveSettings | SettingsItem::DeleteAccount => String::new(),
        }
    }
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanalert_core::{ReportFrequency, Timezone};

    #[test]
    fn test_form_push_and_focus() {
        let mut form = AddWebsiteForm::default();
        form.push_char('a');
        form.focus_next();
        form.push_char('b');
        assert_eq!(form.url, "a");
        assert_eq!(form.email, "b");
    }

    #[test]
    fn test_form_backspace_focused_field_only() {
        let mut form = AddWebsiteForm {
            url: "site".to_string(),
            email: "me@x".to_string(),
            ..Default::default()
        };
        form.backspace();
        assert_eq!(form.url, "sit");
        assert_eq!(form.email, "me@x");
    }

    #[test]
    fn test_form_completeness() {
        let mut form = AddWebsiteForm::default();
        assert!(!form.is_complete());
        form.url = "https://site.com".to_string();
        assert!(!form.is_complete());
        form.email = "me@site.com".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn test_form_clear_resets_focus() {
        let mut form = AddWebsiteForm {
            url: "a".to_string(),
            email: "b".to_string(),
            focus: AddWebsiteField::Email,
            editing: true,
        };
        form.clear();
        assert!(form.url.is_empty());
        assert!(form.email.is_empty());
        assert_eq!(form.focus, AddWebsiteField::Url);
    }

    #[test]
    fn test_settings_selection_wraps() {
        let mut form = SettingsForm::default();
        form.select_prev();
        assert_eq!(form.selected_item(), SettingsItem::DeleteAccount);
        form.select_next();
        assert_eq!(form.selected_item(), SettingsItem::FullName);
    }

    #[test]
    fn test_selection_frozen_while_editing() {
        let mut form = SettingsForm::default();
        form.start_edit();
        assert!(form.is_editing());
        form.select_next();
        assert_eq!(form.selected_item(), SettingsItem::FullName);
    }

    #[test]
    fn test_commit_edit_replaces_one_field() {
        let mut form = SettingsForm::default();
        form.start_edit(); // FullName
        form.edit_buffer = Some("Jane Roe".to_string());
        form.commit_edit();
        assert_eq!(form.settings.full_name, "Jane Roe");
        // Untouched fields preserved
        assert_eq!(form.settings.email, "john@example.com");
        assert_eq!(form.settings.company, "My Digital Store");
    }

    #[test]
    fn test_cancel_edit_keeps_old_value() {
        let mut form = SettingsForm::default();
        form.start_edit();
        form.edit_buffer = Some("scratch".to_string());
        form.cancel_edit();
        assert_eq!(form.settings.full_name, "John Doe");
        assert!(!form.is_editing());
    }

    #[test]
    fn test_toggle_flag_independence() {
        let mut form = SettingsForm::default();
        let before = form.settings.notifications;

        // Toggle only the browser flag
        form.selected = SettingsItem::all()
            .iter()
            .position(|i| *i == SettingsItem::NotifyBrowser)
            .unwrap();
        form.toggle_selected();

        let after = form.settings.notifications;
        assert_ne!(after.browser, before.browser);
        assert_eq!(after.email, before.email);
        assert_eq!(after.weekly, before.weekly);
        assert_eq!(after.critical, before.critical);
    }

    #[test]
    fn test_cycle_choice_fields() {
        let mut form = SettingsForm::default();
        form.selected = SettingsItem::all()
            .iter()
            .position(|i| *i == SettingsItem::ReportFrequency)
            .unwrap();
        form.cycle_selected(true);
        assert_eq!(form.settings.report_frequency, ReportFrequency::Monthly);
        form.cycle_selected(false);
        assert_eq!(form.settings.report_frequency, ReportFrequency::Weekly);

        form.selected = SettingsItem::all()
            .iter()
            .position(|i| *i == SettingsItem::Timezone)
            .unwrap();
        form.cycle_selected(true);
        assert_eq!(form.settings.timezone, Timezone::Utc);
    }

    #[test]
    fn test_start_edit_on_non_text_item_is_noop() {
        let mut form = SettingsForm::default();
        form.selected = SettingsItem::all()
            .iter()
            .position(|i| *i == SettingsItem::SaveSettings)
            .unwrap();
        form.start_edit();
        assert!(!form.is_editing());
    }

    #[test]
    fn test_items_grouped_by_section() {
        assert_eq!(SettingsItem::FullName.section(), "Profile Information");
        assert_eq!(
            SettingsItem::NotifyWeekly.section(),
            "Notification Preferences"
        );
        assert_eq!(SettingsItem::DeleteAccount.section(), "Actions");
    }
}
