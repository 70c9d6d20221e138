//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest toast card in the overlay corner
pub const TOAST_WIDTH: u16 = 44;

/// Rows one toast card occupies (border + title + description)
pub const TOAST_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Branding header (app name, plan badge, scan indicator)
    pub header: Rect,

    /// Tab bar row
    pub tabs: Rect,

    /// Active tab body
    pub content: Rect,

    /// Keybinding hints
    pub status_bar: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(1), // Tab bar
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        status_bar: chunks[3],
    }
}

/// Overlay rect for the toast at `index` (0 = oldest), anchored to the
/// top-right corner of the screen
pub fn toast_area(area: Rect, index: usize) -> Rect {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.right().saturating_sub(width + 1);
    let y = area.y + 1 + index as u16 * TOAST_HEIGHT;
    Rect::new(x, y, width, TOAST_HEIGHT.min(area.height.saturating_sub(y)))
}
