use crossterm::event::KeyEvent;
use inkloop_core::format_currency;
use inkloop_core::metrics::{windowed_months, windowed_revenue};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::{
    Series, halves, panel, render_headline, render_series_chart, thousands_label,
};
use crate::components::{Component, EventResult};
use crate::state::AppState;

pub struct FinancialScreen;

impl FinancialScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_monthly_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let range = state.range();
        let months = windowed_months(&state.snapshot, range);

        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!(
                "{:<6} {:>12} {:>12} {:>12}",
                "Month", "Revenue", "Expenses", "Profit"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )))];
        for month in months {
            let line = format!(
                "{:<6} {:>12} {:>12} {:>12}",
                month.month,
                format_currency(month.revenue),
                format_currency(month.expenses),
                format_currency(month.profit)
            );
            // Flag months whose stored profit disagrees with revenue - expenses
            let style = if month.profit_matches() {
                Style::default()
            } else {
                Style::default().fg(Color::Yellow)
            };
            items.push(ListItem::new(Line::from(Span::styled(line, style))));
        }
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(format!(
            "{:<6} {:>12}",
            "Range",
            format_currency(windowed_revenue(&state.snapshot, range))
        ))));

        frame.render_widget(List::new(items).block(panel("MONTHLY BREAKDOWN")), area);
    }
}

impl Default for FinancialScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FinancialScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = render_headline(frame, area, state);
        let [left, right] = halves(body);

        let months = windowed_months(&state.snapshot, state.range());
        let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        let profit = Series {
            values: months.iter().map(|m| m.profit).collect(),
            color: Color::Green,
        };
        render_series_chart(frame, left, "PROFIT", &labels, &[profit], thousands_label);
        self.render_monthly_table(frame, right, state);
    }
}
