use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use inkloop_core::{MemorySaveTarget, SaveTarget, View};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions;
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{
    clients::ClientsScreen, financial::FinancialScreen, overview::OverviewScreen,
    projects::ProjectsScreen, team::TeamScreen,
};
use crate::state::AppState;

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    overview_screen: OverviewScreen,
    financial_screen: FinancialScreen,
    clients_screen: ClientsScreen,
    projects_screen: ProjectsScreen,
    team_screen: TeamScreen,
    save_target: Box<dyn SaveTarget>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default(), Box::new(MemorySaveTarget::new()))
    }
}

impl App {
    pub fn new(state: AppState, save_target: Box<dyn SaveTarget>) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            overview_screen: OverviewScreen::new(),
            financial_screen: FinancialScreen::new(),
            clients_screen: ClientsScreen::new(),
            projects_screen: ProjectsScreen::new(),
            team_screen: TeamScreen::new(),
            save_target,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(view = %self.state.active_view(), "dashboard started");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_view() {
            View::Overview => self.overview_screen.render(frame, area, &self.state),
            View::Financial => self.financial_screen.render(frame, area, &self.state),
            View::Clients => self.clients_screen.render(frame, area, &self.state),
            View::Projects => self.projects_screen.render(frame, area, &self.state),
            View::Team => self.team_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                // First Esc dismisses a notice, a second one quits
                if self.state.status.is_some() {
                    self.state.clear_status();
                } else {
                    self.state.exit = true;
                }
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                let range = self.state.views.cycle_range();
                self.state.set_info(format!("Range: {}", range.label()));
                return;
            }
            KeyCode::Char('e') if key_event.modifiers.is_empty() => {
                // Outcome is reported through the status line
                let _ = actions::export_active_view(&mut self.state, self.save_target.as_ref());
                return;
            }
            _ => {}
        }

        let result = match self.tab_bar.handle_key(key_event, &mut self.state) {
            EventResult::NotHandled => self.handle_screen_key(key_event),
            handled => handled,
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    fn handle_screen_key(&mut self, key_event: KeyEvent) -> EventResult {
        match self.state.active_view() {
            View::Overview => self.overview_screen.handle_key(key_event, &mut self.state),
            View::Financial => self.financial_screen.handle_key(key_event, &mut self.state),
            View::Clients => self.clients_screen.handle_key(key_event, &mut self.state),
            View::Projects => self.projects_screen.handle_key(key_event, &mut self.state),
            View::Team => self.team_screen.handle_key(key_event, &mut self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;
    use inkloop_core::Range;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_every_view() {
        let mut app = App::default();
        let text = screen_text(&mut app, 140, 40);
        assert!(text.contains("Overview"));
        assert!(text.contains("Total Revenue"));
        assert!(text.contains("REVENUE vs PROFIT"));

        for (key, expected) in [
            ('2', "MONTHLY BREAKDOWN"),
            ('3', "Average Client Value"),
            ('4', "PROJECTS BY MONTH"),
            ('5', "PARTNER PERFORMANCE"),
        ] {
            app.handle_key_event(press(KeyCode::Char(key)));
            let text = screen_text(&mut app, 140, 40);
            assert!(text.contains(expected), "missing {expected}");
        }
        let team = screen_text(&mut app, 140, 40);
        assert!(team.contains("Shanil"));
        assert!(team.contains("PARTNER CONTRIBUTIONS (HOURS)"));
        assert!(team.contains("REVENUE BY PARTNER"));
    }

    #[test]
    fn test_renders_empty_snapshot() {
        let state = AppState::new(Default::default(), Default::default());
        let mut app = App::new(state, Box::new(MemorySaveTarget::new()));

        for key in ['1', '2', '3', '4', '5'] {
            app.handle_key_event(press(KeyCode::Char(key)));
            let text = screen_text(&mut app, 120, 30);
            assert!(text.contains("N/A") || text.contains("No "));
        }
    }

    #[test]
    fn test_range_key_cycles() {
        let mut app = App::default();
        assert_eq!(app.state().range(), Range::SixMonths);

        app.handle_key_event(press(KeyCode::Char('r')));
        assert_eq!(app.state().range(), Range::TwelveMonths);
        app.handle_key_event(press(KeyCode::Char('r')));
        assert_eq!(app.state().range(), Range::ThreeMonths);
    }

    #[test]
    fn test_export_key_sets_status() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('e')));

        let status = app.state().status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(status.text, "Exported 4 rows to inkloop_partners.csv");
    }

    #[test]
    fn test_escape_dismisses_then_quits() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('r')));
        assert!(app.state().status.is_some());

        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.state().status.is_none());
        assert!(!app.state().exit);

        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.state().exit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.state().exit);

        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }
}
