//! Toast overlay card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use scanalert_core::Notification;

use crate::theme::{palette, styles};

/// A single toast card, rendered over the main UI
pub struct ToastCard<'a> {
    notification: &'a Notification,
}

impl<'a> ToastCard<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for ToastCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let severity = self.notification.severity;
        let block = styles::card_block(false)
            .border_style(styles::toast_severity(severity))
            .style(Style::default().bg(palette::TOAST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", severity.icon()),
                    styles::toast_severity(severity),
                ),
                Span::styled(self.notification.title.clone(), styles::text_primary()),
            ]),
            Line::from(Span::styled(
                self.notification.description.clone(),
                styles::text_secondary(),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
