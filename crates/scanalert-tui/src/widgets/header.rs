//! Branding header widget
//!
//! Shows the product name, the static plan badge, and a spinner while a
//! scan is running.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Main header showing product name, plan badge, and scan indicator
pub struct MainHeader {
    scanning_since: Option<Instant>,
}

impl MainHeader {
    pub fn new() -> Self {
        Self {
            scanning_since: None,
        }
    }

    /// Show the scanning spinner, animated from the scan start time
    pub fn scanning_since(mut self, since: Option<Instant>) -> Self {
        self.scanning_since = since;
        self
    }

    fn spinner_frame(&self) -> Option<&'static str> {
        self.scanning_since.map(|since| {
            let ticks = since.elapsed().as_millis() / 120;
            SPINNER_FRAMES[(ticks % SPINNER_FRAMES.len() as u128) as usize]
        })
    }
}

impl Default for MainHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled("ScanAlert", styles::accent_bold()),
            Span::styled("  Website Monitoring", styles::text_secondary()),
            Span::raw("  "),
            // The badge never changes; upgrading is a mock flow
            Span::styled("[Free Plan]", styles::text_muted()),
        ];

        if let Some(frame) = self.spinner_frame() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{frame} Scanning..."),
                styles::keybinding(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
