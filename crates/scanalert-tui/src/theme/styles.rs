//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use scanalert_core::{IssueSeverity, ScanStatus, Severity};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style for the status bar
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Color-code a scan record's status tag
pub fn scan_status(status: ScanStatus) -> Style {
    let color = match status {
        ScanStatus::Excellent => palette::STATUS_GREEN,
        ScanStatus::Completed => palette::STATUS_YELLOW,
        ScanStatus::Issues => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

/// Color-code a report issue line
pub fn issue_severity(severity: IssueSeverity) -> Style {
    let color = match severity {
        IssueSeverity::Success => palette::STATUS_GREEN,
        IssueSeverity::Warning => palette::STATUS_YELLOW,
        IssueSeverity::Error => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

/// Color-code a toast by notification severity
pub fn toast_severity(severity: Severity) -> Style {
    let color = match severity {
        Severity::Info => palette::STATUS_BLUE,
        Severity::Success => palette::STATUS_GREEN,
        Severity::Warning => palette::STATUS_YELLOW,
        Severity::Destructive => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
