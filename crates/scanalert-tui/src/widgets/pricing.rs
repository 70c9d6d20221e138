//! Pricing tab: the two plan cards and customer testimonials

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use scanalert_core::plan::{Plan, CATALOG, TESTIMONIALS};

use crate::theme::{palette, styles};

/// Pricing tab body
pub struct PricingPage {
    selected: usize,
}

impl PricingPage {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }

    fn render_plan_card(&self, plan: &Plan, selected: bool, area: Rect, buf: &mut Buffer) {
        let mut block = styles::card_block(selected).title(format!(" {} ", plan.name));
        if plan.highlighted {
            block = block.title_top(
                Line::from(Span::styled(
                    " Most Popular ",
                    ratatui::style::Style::default().fg(palette::HIGHLIGHT_RIBBON),
                ))
                .right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("${}", plan.price), styles::accent_bold()),
                Span::styled("/month", styles::text_muted()),
            ]),
            Line::from(Span::styled(plan.tagline, styles::text_secondary())),
            Line::raw(""),
        ];
        for feature in plan.features {
            lines.push(Line::from(vec![
                Span::styled(" + ", styles::accent()),
                Span::styled(*feature, styles::text_primary()),
            ]));
        }
        lines.push(Line::raw(""));

        let button = if plan.price == 0 {
            Span::styled("  Current Plan  ", styles::text_muted())
        } else if selected {
            Span::styled("  Upgrade to Pro (Enter)  ", styles::focused_selected())
        } else {
            Span::styled("  Upgrade to Pro  ", styles::accent())
        };
        lines.push(Line::from(button));

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_testimonials(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title(" What Our Users Say ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for testimonial in TESTIMONIALS {
            let stars = "*".repeat(testimonial.rating as usize);
            lines.push(Line::from(vec![
                Span::styled(stars, styles::keybinding()),
                Span::styled(
                    format!("  {} - {}", testimonial.name, testimonial.role),
                    styles::text_secondary(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", testimonial.quote),
                styles::text_muted(),
            )));
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for PricingPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(8),
        ])
        .split(area);
        let cards =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

        for (i, plan) in CATALOG.iter().enumerate() {
            if let Some(card_area) = cards.get(i) {
                self.render_plan_card(plan, i == self.selected, *card_area, buf);
            }
        }

        Paragraph::new(Line::from(Span::styled(
            "Secure payment processing with 30-day money-back guarantee",
            styles::text_muted(),
        )))
        .centered()
        .render(rows[1], buf);

        self.render_testimonials(rows[2], buf);
    }
}
