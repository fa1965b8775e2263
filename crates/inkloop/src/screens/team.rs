use crossterm::event::KeyEvent;
use inkloop_core::format::{NOT_AVAILABLE, currency_or_na, percent_or_na};
use inkloop_core::format_currency;
use inkloop_core::metrics::build_partner_table_with;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::{
    Series, halves, panel, render_empty, render_headline, render_series_chart, thousands_label,
    whole_label,
};
use crate::components::{Component, EventResult};
use crate::state::AppState;

pub struct TeamScreen;

impl TeamScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_partner_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = build_partner_table_with(&state.snapshot, state.settings.share_basis);
        if rows.is_empty() {
            render_empty(frame, area, "PARTNER PERFORMANCE", "No partners recorded");
            return;
        }

        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!(
                "{:<14} {:>8} {:>12} {:>10} {:>8}",
                "Partner", "Hours", "Revenue", "Avg Rate", "Share"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )))];
        items.extend(rows.iter().map(|row| {
            ListItem::new(Line::from(format!(
                "{:<14} {:>8} {:>12} {:>10} {:>8}",
                row.partner,
                if row.hours.is_finite() {
                    row.hours.to_string()
                } else {
                    NOT_AVAILABLE.to_string()
                },
                format_currency(row.revenue),
                currency_or_na(&row.average_rate),
                percent_or_na(&row.share)
            )))
        }));

        frame.render_widget(List::new(items).block(panel("PARTNER PERFORMANCE")), area);
    }

    /// Hours and revenue per partner, side by side
    fn render_partner_charts(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let partners = &state.snapshot.team.partner_contribution;
        let labels: Vec<&str> = partners.iter().map(|p| p.name.as_str()).collect();
        let [left, right] = halves(area);

        let hours = Series {
            values: partners.iter().map(|p| p.hours).collect(),
            color: Color::Magenta,
        };
        render_series_chart(
            frame,
            left,
            "PARTNER CONTRIBUTIONS (HOURS)",
            &labels,
            &[hours],
            whole_label,
        );

        let revenue = Series {
            values: partners.iter().map(|p| p.revenue).collect(),
            color: Color::Cyan,
        };
        render_series_chart(
            frame,
            right,
            "REVENUE BY PARTNER",
            &labels,
            &[revenue],
            thousands_label,
        );
    }
}

impl Default for TeamScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TeamScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = render_headline(frame, area, state);
        let partner_rows = state.snapshot.team.partner_contribution.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(partner_rows.saturating_add(3)), // Header + borders
                Constraint::Min(0),
            ])
            .split(body);

        self.render_partner_table(frame, chunks[0], state);
        self.render_partner_charts(frame, chunks[1], state);
    }
}
