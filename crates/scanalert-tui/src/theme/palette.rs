//! Color palette for the ScanAlert dashboard

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const TOAST_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status / severity ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Pricing ---
pub const HIGHLIGHT_RIBBON: Color = Color::Magenta;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }
}
