//! Keyboard routing: translates an [`InputKey`] into a [`Message`] based
//! on the active tab and editing mode.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveTab, AppState};

/// Map a key press to a message, or `None` if the key is unbound.
///
/// Text-editing modes capture the keyboard first; Ctrl+C always quits.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.active_tab == ActiveTab::Dashboard && state.add_website.editing {
        return handle_form_key(key);
    }

    if state.active_tab == ActiveTab::Settings && state.settings_form.is_editing() {
        return handle_settings_edit_key(key);
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PrevTab),
        InputKey::Char('1') => Some(Message::SelectTab(ActiveTab::Dashboard)),
        InputKey::Char('2') => Some(Message::SelectTab(ActiveTab::Pricing)),
        InputKey::Char('3') => Some(Message::SelectTab(ActiveTab::Settings)),
        _ => match state.active_tab {
            ActiveTab::Dashboard => handle_dashboard_key(key),
            ActiveTab::Pricing => handle_pricing_key(key),
            ActiveTab::Settings => handle_settings_key(key),
        },
    }
}

/// Keys while the add-website form owns the keyboard
fn handle_form_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FormStopEditing),
        InputKey::Tab => Some(Message::FormNextField),
        InputKey::Enter => Some(Message::SubmitWebsite),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

/// Keys while a settings text field is being edited
fn handle_settings_edit_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SettingsCancelEdit),
        InputKey::Enter => Some(Message::SettingsCommitEdit),
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::Char(c) => Some(Message::SettingsInput(c)),
        _ => None,
    }
}

fn handle_dashboard_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a') => Some(Message::FormStartEditing),
        InputKey::Char('s') => Some(Message::RunScan),
        InputKey::Char('x') => Some(Message::CancelScan),
        InputKey::Char('w') => Some(Message::ToggleWeeklyReports),
        _ => None,
    }
}

fn handle_pricing_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Left => Some(Message::SelectPrevPlan),
        InputKey::Down | InputKey::Right => Some(Message::SelectNextPlan),
        InputKey::Enter => Some(Message::UpgradeSelectedPlan),
        _ => None,
    }
}

fn handle_settings_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SettingsPrevItem),
        InputKey::Down => Some(Message::SettingsNextItem),
        InputKey::Enter => Some(Message::SettingsActivate),
        InputKey::Left => Some(Message::SettingsCyclePrev),
        InputKey::Right => Some(Message::SettingsCycleNext),
        _ => None,
    }
}
