use crossterm::event::KeyEvent;
use inkloop_core::metrics::windowed_months;
use ratatui::{Frame, layout::Rect, style::Color};

use super::{
    Series, halves, render_client_mix, render_headline, render_series_chart, thousands_label,
};
use crate::components::{Component, EventResult};
use crate::state::AppState;

pub struct OverviewScreen;

impl OverviewScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = render_headline(frame, area, state);
        let [left, right] = halves(body);

        let months = windowed_months(&state.snapshot, state.range());
        let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        let series = [
            Series {
                values: months.iter().map(|m| m.revenue).collect(),
                color: Color::Cyan,
            },
            Series {
                values: months.iter().map(|m| m.profit).collect(),
                color: Color::Green,
            },
        ];
        render_series_chart(
            frame,
            left,
            "REVENUE vs PROFIT",
            &labels,
            &series,
            thousands_label,
        );
        render_client_mix(frame, right, state, "CLIENT MIX");
    }
}
