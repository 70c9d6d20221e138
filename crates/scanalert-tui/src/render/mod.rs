//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use scanalert_app::{ActiveTab, AppState};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure with respect to `state`: rendering never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new().scanning_since(state.scan.started_at);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::TabBar::new(state.active_tab), areas.tabs);

    match state.active_tab {
        ActiveTab::Dashboard => {
            frame.render_widget(widgets::Dashboard::new(state), areas.content);
        }
        ActiveTab::Pricing => {
            frame.render_widget(widgets::PricingPage::new(state.pricing.selected), areas.content);
        }
        ActiveTab::Settings => {
            frame.render_widget(widgets::SettingsPanel::new(&state.settings_form), areas.content);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status_bar);

    // Toasts overlay the top-right corner, oldest first
    for (i, toast) in state.notifications.iter().enumerate() {
        let toast_area = layout::toast_area(area, i);
        if toast_area.bottom() > areas.status_bar.y {
            break;
        }
        frame.render_widget(widgets::ToastCard::new(&toast.notification), toast_area);
    }
}
