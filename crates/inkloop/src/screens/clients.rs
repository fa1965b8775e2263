use crossterm::event::KeyEvent;
use inkloop_core::format::format_percent;
use inkloop_core::key_client_metrics;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Gauge,
};

use super::{panel, render_client_mix, render_headline};
use crate::components::{Component, EventResult, metric_card};
use crate::state::AppState;

pub struct ClientsScreen;

impl ClientsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_retention(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rate = state.snapshot.clients.retention_rate;
        let ratio = if rate.is_finite() {
            (rate / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(panel("RETENTION"))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio)
            .label(format_percent(rate));

        frame.render_widget(gauge, area);
    }
}

impl Default for ClientsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ClientsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = render_headline(frame, area, state);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(metric_card::CARD_HEIGHT),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(body);

        metric_card::render_card_row(frame, chunks[0], &key_client_metrics(&state.snapshot));
        self.render_retention(frame, chunks[1], state);
        render_client_mix(frame, chunks[2], state, "CLIENTS BY TYPE");
    }
}
