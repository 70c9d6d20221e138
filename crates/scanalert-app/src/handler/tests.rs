//! Tests for handler module

use std::time::{Duration, Instant};

use super::*;
use crate::forms::SettingsItem;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveTab, AppState};
use scanalert_core::Severity;

/// Drive a message through update, following one follow-up hop (the
/// settings action buttons use it)
fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    let result = update(state, message);
    if let Some(follow_up) = result.message.clone() {
        return update(state, follow_up);
    }
    result
}

fn severities(state: &AppState) -> Vec<Severity> {
    state
        .notifications
        .iter()
        .map(|t| t.notification.severity)
        .collect()
}

// ─────────────────────────────────────────────────────────────
// Quit / keys
// ─────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_quits_even_while_editing() {
    let mut state = AppState::new();
    state.add_website.editing = true;
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_q_is_text_input_while_form_editing() {
    let mut state = AppState::new();
    state.add_website.editing = true;
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::FormInput('q'))));
}

// ─────────────────────────────────────────────────────────────
// Tab router
// ─────────────────────────────────────────────────────────────

#[test]
fn test_select_tab_switches_view() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectTab(ActiveTab::Pricing));
    assert_eq!(state.active_tab, ActiveTab::Pricing);
}

#[test]
fn test_reselecting_active_tab_is_noop() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectTab(ActiveTab::Dashboard));
    assert_eq!(state.active_tab, ActiveTab::Dashboard);
    assert!(state.notifications.is_empty());
}

#[test]
fn test_tab_switch_preserves_scan_and_form_state() {
    let mut state = AppState::new();
    update(&mut state, Message::RunScan);
    state.add_website.url = "mysite.com".to_string();

    update(&mut state, Message::SelectTab(ActiveTab::Settings));
    update(&mut state, Message::SelectTab(ActiveTab::Dashboard));

    assert!(state.scan.in_progress);
    assert_eq!(state.add_website.url, "mysite.com");
}

#[test]
fn test_leaving_settings_discards_unsaved_edits() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectTab(ActiveTab::Settings));
    state.settings_form.settings.full_name = "Jane Roe".to_string();

    update(&mut state, Message::SelectTab(ActiveTab::Dashboard));
    update(&mut state, Message::SelectTab(ActiveTab::Settings));

    assert_eq!(state.settings_form.settings.full_name, "John Doe");
}

#[test]
fn test_number_keys_jump_to_tabs() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::SelectTab(ActiveTab::Pricing))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectTab(ActiveTab::Settings))
    ));
}

// ─────────────────────────────────────────────────────────────
// Scan trigger
// ─────────────────────────────────────────────────────────────

#[test]
fn test_run_scan_sets_flag_and_starts_timer() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::RunScan);

    assert!(state.scan.in_progress);
    assert!(matches!(
        result.action,
        Some(UpdateAction::StartScanTimer { .. })
    ));
}

#[test]
fn test_run_scan_uses_configured_duration() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::RunScan);
    assert_eq!(
        result.action,
        Some(UpdateAction::StartScanTimer {
            duration: Duration::from_millis(3000),
        })
    );
}

#[test]
fn test_run_scan_while_scanning_is_noop() {
    let mut state = AppState::new();
    update(&mut state, Message::RunScan);
    let result = update(&mut state, Message::RunScan);

    assert!(state.scan.in_progress);
    assert!(result.action.is_none());
}

#[test]
fn test_scan_completed_resets_flag_and_notifies_once() {
    let mut state = AppState::new();
    update(&mut state, Message::RunScan);
    update(&mut state, Message::ScanCompleted);

    assert!(!state.scan.in_progress);
    assert_eq!(severities(&state), vec![Severity::Info]);
}

#[test]
fn test_stale_scan_completed_is_ignored() {
    let mut state = AppState::new();
    update(&mut state, Message::ScanCompleted);
    assert!(state.notifications.is_empty());
}

#[test]
fn test_cancel_scan_aborts_timer() {
    let mut state = AppState::new();
    update(&mut state, Message::RunScan);
    let result = update(&mut state, Message::CancelScan);

    assert!(!state.scan.in_progress);
    assert_eq!(result.action, Some(UpdateAction::CancelScanTimer));
}

#[test]
fn test_cancel_scan_when_idle_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::CancelScan);
    assert!(result.action.is_none());
    assert!(state.notifications.is_empty());
}

#[test]
fn test_scan_leaves_history_untouched() {
    let mut state = AppState::new();
    let before = state.scan.history.clone();
    update(&mut state, Message::RunScan);
    update(&mut state, Message::ScanCompleted);
    assert_eq!(state.scan.history, before);
}

// ─────────────────────────────────────────────────────────────
// Add-website form
// ─────────────────────────────────────────────────────────────

#[test]
fn test_submit_with_empty_fields_rejected() {
    let mut state = AppState::new();
    update(&mut state, Message::SubmitWebsite);

    assert_eq!(severities(&state), vec![Severity::Destructive]);
    assert_eq!(state.scan.history.len(), 5);
}

#[test]
fn test_submit_with_only_url_rejected() {
    let mut state = AppState::new();
    state.add_website.url = "mysite.com".to_string();
    update(&mut state, Message::SubmitWebsite);

    assert_eq!(severities(&state), vec![Severity::Destructive]);
    // Entered text survives the failed submission
    assert_eq!(state.add_website.url, "mysite.com");
}

#[test]
fn test_submit_complete_form_succeeds_and_clears() {
    let mut state = AppState::new();
    state.add_website.url = "mysite.com".to_string();
    state.add_website.email = "me@mysite.com".to_string();
    update(&mut state, Message::SubmitWebsite);

    assert_eq!(severities(&state), vec![Severity::Success]);
    assert!(state.add_website.url.is_empty());
    assert!(state.add_website.email.is_empty());
}

#[test]
fn test_success_toast_names_the_url() {
    let mut state = AppState::new();
    state.add_website.url = "mysite.com".to_string();
    state.add_website.email = "me@mysite.com".to_string();
    update(&mut state, Message::SubmitWebsite);

    let toast = state.notifications.iter().next().unwrap();
    assert!(toast.notification.description.contains("mysite.com"));
}

#[test]
fn test_submission_never_mutates_history() {
    let mut state = AppState::new();
    let before = state.scan.history.clone();
    state.add_website.url = "brand-new.site".to_string();
    state.add_website.email = "me@brand-new.site".to_string();
    update(&mut state, Message::SubmitWebsite);
    assert_eq!(state.scan.history, before);
}

#[test]
fn test_form_input_routes_to_focused_field() {
    let mut state = AppState::new();
    update(&mut state, Message::FormStartEditing);
    update(&mut state, Message::FormInput('a'));
    update(&mut state, Message::FormNextField);
    update(&mut state, Message::FormInput('b'));

    assert_eq!(state.add_website.url, "a");
    assert_eq!(state.add_website.email, "b");
}

#[test]
fn test_toggle_weekly_reports_independent_of_settings() {
    let mut state = AppState::new();
    let settings_weekly = state.settings_form.settings.notifications.weekly;

    update(&mut state, Message::ToggleWeeklyReports);

    assert!(!state.weekly_reports);
    assert_eq!(
        state.settings_form.settings.notifications.weekly,
        settings_weekly
    );
}

// ─────────────────────────────────────────────────────────────
// Pricing
// ─────────────────────────────────────────────────────────────

#[test]
fn test_plan_selection_wraps() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectPrevPlan);
    assert_eq!(state.pricing.selected, 1);
    update(&mut state, Message::SelectNextPlan);
    assert_eq!(state.pricing.selected, 0);
}

#[test]
fn test_upgrade_pro_fires_single_toast_no_state_change() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectNextPlan); // Pro
    update(&mut state, Message::UpgradeSelectedPlan);

    assert_eq!(severities(&state), vec![Severity::Info]);
    // Repeat fires again; nothing latches
    update(&mut state, Message::UpgradeSelectedPlan);
    assert_eq!(state.notifications.len(), 2);
}

#[test]
fn test_upgrade_free_plan_is_inert() {
    let mut state = AppState::new();
    update(&mut state, Message::UpgradeSelectedPlan);
    assert!(state.notifications.is_empty());
}

// ─────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────

fn select_item(state: &mut AppState, item: SettingsItem) {
    state.settings_form.selected = SettingsItem::all()
        .iter()
        .position(|i| *i == item)
        .unwrap();
}

#[test]
fn test_activate_toggle_flips_only_that_flag() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::NotifyBrowser);
    let before = state.settings_form.settings.notifications;

    dispatch(&mut state, Message::SettingsActivate);

    let after = state.settings_form.settings.notifications;
    assert!(after.browser);
    assert_eq!(after.email, before.email);
    assert_eq!(after.weekly, before.weekly);
    assert_eq!(after.critical, before.critical);
}

#[test]
fn test_activate_text_item_opens_edit() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::Email);
    dispatch(&mut state, Message::SettingsActivate);

    assert!(state.settings_form.is_editing());
    assert_eq!(
        state.settings_form.edit_buffer.as_deref(),
        Some("john@example.com")
    );
}

#[test]
fn test_edit_commit_updates_single_field() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::Email);
    dispatch(&mut state, Message::SettingsActivate);

    for _ in 0.."john@example.com".len() {
        update(&mut state, Message::SettingsBackspace);
    }
    for c in "jane@roe.dev".chars() {
        update(&mut state, Message::SettingsInput(c));
    }
    update(&mut state, Message::SettingsCommitEdit);

    assert_eq!(state.settings_form.settings.email, "jane@roe.dev");
    assert_eq!(state.settings_form.settings.full_name, "John Doe");
}

#[test]
fn test_save_settings_notifies_success() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::SaveSettings);
    dispatch(&mut state, Message::SettingsActivate);

    assert_eq!(severities(&state), vec![Severity::Success]);
}

#[test]
fn test_delete_account_notifies_warning_only() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::DeleteAccount);
    dispatch(&mut state, Message::SettingsActivate);

    assert_eq!(severities(&state), vec![Severity::Warning]);
    // Account data untouched
    assert_eq!(state.settings_form.settings.full_name, "John Doe");
}

#[test]
fn test_activate_choice_cycles_forward() {
    let mut state = AppState::new();
    select_item(&mut state, SettingsItem::ReportFrequency);
    dispatch(&mut state, Message::SettingsActivate);

    assert_eq!(
        state.settings_form.settings.report_frequency.label(),
        "Monthly"
    );
}

// ─────────────────────────────────────────────────────────────
// Tick / toast expiry
// ─────────────────────────────────────────────────────────────

#[test]
fn test_tick_prunes_expired_toasts() {
    let mut state = AppState::new();
    let start = Instant::now();
    state
        .notifications
        .push_at(scanalert_core::Notification::info("a", "b"), start);

    state.notifications.prune(start + state.config.toast_ttl());
    assert!(state.notifications.is_empty());
}
