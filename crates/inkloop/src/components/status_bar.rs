use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::{AppState, StatusKind};

const HELP_TEXT: &str = "1-5/Tab: view | r: range | e: export | Esc: dismiss | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn status_line(state: &AppState) -> Line<'_> {
        let mut spans = match &state.status {
            Some(status) if status.kind == StatusKind::Error => vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(status.text.as_str()),
            ],
            Some(status) => vec![Span::styled(
                status.text.as_str(),
                Style::default().fg(Color::Green),
            )],
            None => vec![Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))],
        };

        if !state.data_quality.is_empty() {
            spans.push(Span::styled(
                format!("  [{} data issue(s), see log]", state.data_quality.len()),
                Style::default().fg(Color::Yellow),
            ));
        }

        Line::from(spans)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::status_line(state)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
