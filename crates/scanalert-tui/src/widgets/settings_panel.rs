//! Settings tab: navigable list of profile fields, notification
//! toggles, and the two action buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scanalert_app::forms::{ItemKind, SettingsForm, SettingsItem};

use crate::theme::styles;

/// Settings tab body
pub struct SettingsPanel<'a> {
    form: &'a SettingsForm,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(form: &'a SettingsForm) -> Self {
        Self { form }
    }

    fn item_line(&self, item: SettingsItem, selected: bool) -> Line<'static> {
        let marker = if selected { "› " } else { "  " };
        let label_style = if selected {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let value = if selected && self.form.is_editing() {
            // Live buffer with a block cursor while editing
            let buffer = self.form.edit_buffer.clone().unwrap_or_default();
            Span::styled(format!("{buffer}█"), styles::text_primary())
        } else {
            match item.kind() {
                ItemKind::Action => Span::styled(
                    format!("[ {} ]", item.label()),
                    if item == SettingsItem::DeleteAccount {
                        styles::toast_severity(scanalert_core::Severity::Destructive)
                    } else {
                        styles::accent()
                    },
                ),
                ItemKind::Toggle => {
                    let on = self.form.display_value(item) == "on";
                    if on {
                        Span::styled("on".to_string(), styles::accent())
                    } else {
                        Span::styled("off".to_string(), styles::text_muted())
                    }
                }
                _ => Span::styled(self.form.display_value(item), styles::text_secondary()),
            }
        };

        if item.kind() == ItemKind::Action {
            Line::from(vec![Span::styled(marker.to_string(), label_style), value])
        } else {
            Line::from(vec![
                Span::styled(marker.to_string(), label_style),
                Span::styled(format!("{:<24}", item.label()), label_style),
                value,
            ])
        }
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" Account Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        let selected_item = self.form.selected_item();
        let mut lines = Vec::new();
        let mut current_section = "";

        for item in SettingsItem::all() {
            if item.section() != current_section {
                current_section = item.section();
                if !lines.is_empty() {
                    lines.push(Line::raw(""));
                }
                lines.push(Line::from(Span::styled(
                    current_section.to_uppercase(),
                    styles::text_muted(),
                )));
            }
            lines.push(self.item_line(*item, *item == selected_item));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            selected_item.description(),
            styles::text_muted(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
