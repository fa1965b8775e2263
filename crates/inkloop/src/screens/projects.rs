use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::{Series, halves, panel, render_headline, render_series_chart, whole_label};
use crate::components::{Component, EventResult};
use crate::state::AppState;

pub struct ProjectsScreen;

impl ProjectsScreen {
    pub fn new() -> Self {
        Self
    }

    /// Completed and started counts per month, grouped side by side
    fn render_activity_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let months = state.range().window(&state.snapshot.projects.projects_by_month);
        let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        let series = [
            Series {
                values: months.iter().map(|m| f64::from(m.completed)).collect(),
                color: Color::Green,
            },
            Series {
                values: months.iter().map(|m| f64::from(m.started)).collect(),
                color: Color::Blue,
            },
        ];

        render_series_chart(
            frame,
            area,
            "PROJECT ACTIVITY (completed / started)",
            &labels,
            &series,
            whole_label,
        );
    }

    fn render_monthly_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let months = state.range().window(&state.snapshot.projects.projects_by_month);

        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!("{:<6} {:>10} {:>10}", "Month", "Completed", "Started"),
            Style::default().add_modifier(Modifier::BOLD),
        )))];
        items.extend(months.iter().map(|month| {
            ListItem::new(Line::from(format!(
                "{:<6} {:>10} {:>10}",
                month.month, month.completed, month.started
            )))
        }));

        frame.render_widget(List::new(items).block(panel("PROJECTS BY MONTH")), area);
    }
}

impl Default for ProjectsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProjectsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = render_headline(frame, area, state);
        let [left, right] = halves(body);

        self.render_activity_chart(frame, left, state);
        self.render_monthly_table(frame, right, state);
    }
}
