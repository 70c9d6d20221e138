//! Status bar widget
//!
//! One row of keybinding hints that follows the active tab and editing
//! mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scanalert_app::{ActiveTab, AppState};

use crate::theme::styles;

/// Status bar showing contextual keybindings
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.active_tab == ActiveTab::Dashboard && self.state.add_website.editing {
            return vec![
                ("Tab", "switch field"),
                ("Enter", "submit"),
                ("Esc", "done"),
            ];
        }
        if self.state.active_tab == ActiveTab::Settings && self.state.settings_form.is_editing() {
            return vec![("Enter", "apply"), ("Esc", "cancel")];
        }

        let mut hints = vec![("Tab", "next tab")];
        match self.state.active_tab {
            ActiveTab::Dashboard => {
                hints.push(("a", "add website"));
                if self.state.scan.in_progress {
                    hints.push(("x", "cancel scan"));
                } else {
                    hints.push(("s", "run scan"));
                }
                hints.push(("w", "weekly reports"));
            }
            ActiveTab::Pricing => {
                hints.push(("↑/↓", "select plan"));
                hints.push(("Enter", "upgrade"));
            }
            ActiveTab::Settings => {
                hints.push(("↑/↓", "navigate"));
                hints.push(("Enter", "edit/toggle"));
                hints.push(("←/→", "cycle"));
            }
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
