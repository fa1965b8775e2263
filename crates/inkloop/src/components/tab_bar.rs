use crossterm::event::{KeyCode, KeyEvent};
use inkloop_core::View;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult};
use crate::state::AppState;

/// View selector across the top of the dashboard
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }

    fn header_title(state: &AppState) -> String {
        let mut title = format!(" Inkloop | {} ", state.range().label());
        if let Some(as_of) = state.snapshot.as_of {
            title.push_str(&format!("| as of {} ", as_of));
        }
        title
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    state.switch_view(view);
                }
                EventResult::Handled
            }
            KeyCode::Tab => {
                state.views.next_view();
                EventResult::Handled
            }
            KeyCode::BackTab => {
                state.views.previous_view();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let active = state.active_view();
        let titles: Vec<Line> = View::ALL
            .iter()
            .map(|view| {
                let content = format!("[{}] {}", view.index() + 1, view.title());
                if *view == active {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(Self::header_title(state)),
            )
            .select(active.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
