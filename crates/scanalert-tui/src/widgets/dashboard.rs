//! Dashboard tab: add-website form, scan controls, history, and the
//! latest scan report.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table, Widget},
};

use scanalert_app::forms::AddWebsiteField;
use scanalert_app::AppState;
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// Dashboard tab body
pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let form = &self.state.add_website;
        let block = styles::card_block(form.editing).title(" Add New Website ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        render_input_line(
            buf,
            rows[0],
            "Website URL  ",
            &form.url,
            "https://your-website.com",
            form.editing && form.focus == AddWebsiteField::Url,
        );
        render_input_line(
            buf,
            rows[1],
            "Email        ",
            &form.email,
            "you@example.com",
            form.editing && form.focus == AddWebsiteField::Email,
        );

        let weekly = if self.state.weekly_reports {
            Span::styled("[x] Weekly reports", styles::accent())
        } else {
            Span::styled("[ ] Weekly reports", styles::text_muted())
        };
        Paragraph::new(Line::from(vec![Span::raw(" "), weekly])).render(rows[2], buf);

        let action = if self.state.scan.in_progress {
            Span::styled("Scanning in progress... (x to cancel)", styles::accent_bold())
        } else {
            Span::styled("Run Scan (s)", styles::text_secondary())
        };
        Paragraph::new(Line::from(vec![Span::raw(" "), action])).render(rows[3], buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" Recent Scans ");
        let inner = block.inner(area);
        block.render(area, buf);

        let header = Row::new(vec!["Website", "Score", "Date", "Status"])
            .style(styles::text_muted());

        let rows: Vec<Row> = self
            .state
            .scan
            .history
            .iter()
            .map(|record| {
                Row::new(vec![
                    Cell::from(record.url.clone()).style(styles::text_primary()),
                    Cell::from(format!("{}", record.score)).style(styles::text_secondary()),
                    Cell::from(record.date.format("%Y-%m-%d").to_string())
                        .style(styles::text_muted()),
                    Cell::from(record.status.label()).style(styles::scan_status(record.status)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Length(9),
            ],
        )
        .header(header);

        Widget::render(table, inner, buf);
    }

    fn render_report(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" Latest Scan Report ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let breakdown = self.state.scan.breakdown.entries();
        let gauges = breakdown.len() as u16;
        let mut constraints: Vec<Constraint> = (0..gauges).map(|_| Constraint::Length(1)).collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for (i, (label, score)) in breakdown.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let gauge = Gauge::default()
                .label(format!("{label} {score}/100"))
                .ratio(f64::from(*score) / 100.0)
                .gauge_style(styles::accent())
                .use_unicode(true);
            gauge.render(rows[i], buf);
        }

        let issue_lines: Vec<Line> = self
            .state
            .scan
            .issues
            .iter()
            .map(|issue| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", issue.severity.glyph()),
                        styles::issue_severity(issue.severity),
                    ),
                    Span::styled(issue.text, styles::text_secondary()),
                    Span::styled(format!("  ({})", issue.count), styles::text_muted()),
                ])
            })
            .collect();
        Paragraph::new(issue_lines).render(rows[gauges as usize], buf);
    }
}

fn render_input_line(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    // Keep the tail (and the cursor) visible when the value outgrows the row
    let available = area.width.saturating_sub(label.width() as u16 + 3) as usize;
    let value = clip_tail(value, available);

    let value_span = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), styles::text_muted())
    } else if focused {
        // Trailing block marks the insertion point
        Span::styled(format!("{value}█"), styles::text_primary())
    } else {
        Span::styled(value, styles::text_primary())
    };

    let label_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };

    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
        value_span,
    ]))
    .render(area, buf);
}

/// Keep the last `max_width` columns of a string
fn clip_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut clipped: String = value
        .chars()
        .rev()
        .scan(0usize, |width, c| {
            *width += c.to_string().width();
            (*width < max_width).then_some(c)
        })
        .collect();
    clipped = clipped.chars().rev().collect();
    format!("…{clipped}")
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = ratatui::widgets::Block::default()
            .style(ratatui::style::Style::default().bg(palette::DEEPEST_BG));
        bg.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(6), Constraint::Min(8)]).split(area);
        let bottom =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[1]);

        self.render_form(rows[0], buf);
        self.render_history(bottom[0], buf);
        self.render_report(bottom[1], buf);
    }
}
