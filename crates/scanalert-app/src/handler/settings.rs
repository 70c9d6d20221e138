//! Settings panel activation dispatch.

use crate::forms::{ItemKind, SettingsItem};
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Activate the selected settings item according to its kind.
///
/// Toggles flip in place, choices cycle forward, text items open an edit
/// buffer, and the two action buttons dispatch their message as a
/// follow-up so the notification logic stays in one place.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let item = state.settings_form.selected_item();
    match item.kind() {
        ItemKind::Toggle => {
            state.settings_form.toggle_selected();
            UpdateResult::none()
        }
        ItemKind::Choice => {
            state.settings_form.cycle_selected(true);
            UpdateResult::none()
        }
        ItemKind::Text => {
            state.settings_form.start_edit();
            UpdateResult::none()
        }
        ItemKind::Action => match item {
            SettingsItem::SaveSettings => UpdateResult::message(Message::SaveSettings),
            SettingsItem::DeleteAccount => UpdateResult::message(Message::DeleteAccount),
            _ => UpdateResult::none(),
        },
    }
}
