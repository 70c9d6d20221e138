//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use scanalert_core::plan::{self, PlanTier};
use scanalert_core::Notification;
use tracing::{debug, info};

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, settings, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notifications.prune(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Router Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.select_tab(tab);
            UpdateResult::none()
        }

        Message::NextTab => {
            state.select_tab(state.active_tab.next());
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.select_tab(state.active_tab.prev());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scan Trigger Messages
        // ─────────────────────────────────────────────────────────
        Message::RunScan => {
            // No Scanning -> Scanning transition: a request while a scan is
            // in flight is dropped.
            if state.scan.in_progress {
                debug!("Scan already in progress, ignoring request");
                return UpdateResult::none();
            }
            state.scan.in_progress = true;
            state.scan.started_at = Some(Instant::now());
            info!("Scan started");
            UpdateResult::action(UpdateAction::StartScanTimer {
                duration: state.config.scan_duration(),
            })
        }

        Message::ScanCompleted => {
            if !state.scan.in_progress {
                return UpdateResult::none();
            }
            state.scan.in_progress = false;
            state.scan.started_at = None;
            info!("Scan completed");
            state.notify(Notification::info(
                "Scan Complete",
                "Your website has been thoroughly analyzed.",
            ));
            UpdateResult::none()
        }

        Message::CancelScan => {
            if !state.scan.in_progress {
                return UpdateResult::none();
            }
            state.scan.in_progress = false;
            state.scan.started_at = None;
            info!("Scan cancelled");
            state.notify(Notification::info(
                "Scan Cancelled",
                "The scan in progress was stopped.",
            ));
            UpdateResult::action(UpdateAction::CancelScanTimer)
        }

        // ─────────────────────────────────────────────────────────
        // Add-Website Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormStartEditing => {
            state.add_website.editing = true;
            UpdateResult::none()
        }

        Message::FormStopEditing => {
            state.add_website.editing = false;
            UpdateResult::none()
        }

        Message::FormNextField => {
            state.add_website.focus_next();
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            state.add_website.push_char(c);
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.add_website.backspace();
            UpdateResult::none()
        }

        Message::SubmitWebsite => {
            if !state.add_website.is_complete() {
                state.notify(Notification::destructive(
                    "Missing Information",
                    "Please fill in both website URL and email address.",
                ));
                return UpdateResult::none();
            }

            // The monitoring list is mock data: the submission only fires a
            // toast, the history list is untouched.
            let url = state.add_website.url.clone();
            info!("Website added: {}", url);
            state.notify(Notification::success(
                "Website Added Successfully",
                format!("{url} has been added to your monitoring list."),
            ));
            state.add_website.clear();
            state.add_website.editing = false;
            UpdateResult::none()
        }

        Message::ToggleWeeklyReports => {
            state.weekly_reports = !state.weekly_reports;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pricing Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextPlan => {
            state.pricing.selected = (state.pricing.selected + 1) % plan::CATALOG.len();
            UpdateResult::none()
        }

        Message::SelectPrevPlan => {
            let len = plan::CATALOG.len();
            state.pricing.selected = (state.pricing.selected + len - 1) % len;
            UpdateResult::none()
        }

        Message::UpgradeSelectedPlan => {
            let selected = plan::CATALOG[state.pricing.selected];
            // The Free card's button is the inert "Current Plan"
            if selected.tier == PlanTier::Free {
                return UpdateResult::none();
            }
            info!("Upgrade requested: {}", selected.name);
            state.notify(Notification::info(
                format!("Upgrading to {}", selected.name),
                "Redirecting to secure payment portal...",
            ));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextItem => {
            state.settings_form.select_next();
            UpdateResult::none()
        }

        Message::SettingsPrevItem => {
            state.settings_form.select_prev();
            UpdateResult::none()
        }

        Message::SettingsActivate => settings::handle_activate(state),

        Message::SettingsCycleNext => {
            state.settings_form.cycle_selected(true);
            UpdateResult::none()
        }

        Message::SettingsCyclePrev => {
            state.settings_form.cycle_selected(false);
            UpdateResult::none()
        }

        Message::SettingsInput(c) => {
            if let Some(buffer) = state.settings_form.edit_buffer.as_mut() {
                buffer.push(c);
            }
            UpdateResult::none()
        }

        Message::SettingsBackspace => {
            if let Some(buffer) = state.settings_form.edit_buffer.as_mut() {
                buffer.pop();
            }
            UpdateResult::none()
        }

        Message::SettingsCommitEdit => {
            state.settings_form.commit_edit();
            UpdateResult::none()
        }

        Message::SettingsCancelEdit => {
            state.settings_form.cancel_edit();
            UpdateResult::none()
        }

        Message::SaveSettings => {
            info!("Settings saved");
            state.notify(Notification::success(
                "Settings Saved",
                "Your preferences have been updated successfully.",
            ));
            UpdateResult::none()
        }

        Message::DeleteAccount => {
            info!("Account deletion requested");
            state.notify(Notification::warning(
                "Account Deletion Requested",
                "Please check your email to confirm account deletion.",
            ));
            UpdateResult::none()
        }
    }
}
