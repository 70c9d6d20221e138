//! Tab bar widget for the three dashboard sections

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use scanalert_app::ActiveTab;

use crate::theme::styles;

/// Tab bar showing Dashboard / Pricing / Settings
pub struct TabBar {
    active: ActiveTab,
}

impl TabBar {
    pub fn new(active: ActiveTab) -> Self {
        Self { active }
    }

    fn titles() -> Vec<Line<'static>> {
        ActiveTab::all()
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
            .collect()
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(Self::titles())
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        tabs.render(padded_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(bar: TabBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(bar, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_tab_bar_lists_all_sections() {
        let content = render_to_string(TabBar::new(ActiveTab::Dashboard));
        assert!(content.contains("Dashboard"));
        assert!(content.contains("Pricing"));
        assert!(content.contains("Settings"));
    }

    #[test]
    fn test_tab_bar_shows_number_shortcuts() {
        let content = render_to_string(TabBar::new(ActiveTab::Pricing));
        assert!(content.contains("1 Dashboard"));
        assert!(content.contains("2 Pricing"));
        assert!(content.contains("3 Settings"));
    }
}
