use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;

use super::app::{App, HistoryTab, Screen};
use super::widgets;
use crate::state::SessionStore;

/// How the interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiOutcome {
    Quit,
    SignedOut,
}

/// Tui manages the terminal lifecycle around the app state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Tui {
    /// Take over the terminal
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal, app })
    }

    /// Run the event loop until the user quits or signs out
    pub fn run(&mut self, session: &mut SessionStore) -> Result<TuiOutcome> {
        loop {
            let app = &self.app;
            self.terminal.draw(|f| ui(f, app))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == event::KeyEventKind::Press {
                        self.app.handle_key(key.code, session)?;
                    }
                }
            }

            if self.app.signed_out {
                return Ok(TuiOutcome::SignedOut);
            }
            if self.app.should_quit {
                return Ok(TuiOutcome::Quit);
            }
        }
    }

    /// Cleanup terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to restore terminal")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;

        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the UI
fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    let has_input = app.input.is_some();
    let constraints: Vec<Constraint> = if has_input {
        vec![
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    widgets::render_screen_tabs(chunks[0], f.buffer_mut(), app.screen);

    match app.screen {
        Screen::Dashboard => render_dashboard(chunks[1], f, app),
        Screen::History => render_history(chunks[1], f, app),
        Screen::Profile => render_profile(chunks[1], f, app),
    }

    if let Some(input) = app.input.as_ref() {
        widgets::render_input_line(chunks[2], f.buffer_mut(), input);
    }

    let status_area = if has_input { chunks[3] } else { chunks[2] };
    widgets::render_status_bar(status_area, f.buffer_mut(), app.status.as_ref());

    if app.show_help {
        let help_area = centered_rect(60, 80, size);
        widgets::render_help_overlay(help_area, f.buffer_mut());
    }
}

/// Dashboard: goal gauges on the left, profile and recent workouts right
fn render_dashboard(area: Rect, f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(columns[1]);

    widgets::render_goal_gauges(left[0], f.buffer_mut(), " 📊 Daily Goals ", &app.daily_goals);
    widgets::render_goal_gauges(left[1], f.buffer_mut(), " 📈 Weekly Goals ", &app.weekly_goals);
    widgets::render_profile_card(right[0], f.buffer_mut(), app.profile());
    widgets::render_recent_workouts(right[1], f.buffer_mut(), &app.recent_workouts);
}

fn render_history(area: Rect, f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    widgets::render_history_tabs(rows[0], f.buffer_mut(), app.history_tab);

    match app.history_tab {
        HistoryTab::Workouts => widgets::render_workout_history(
            rows[1],
            f.buffer_mut(),
            &app.workout_history,
            app.selected_index,
        ),
        HistoryTab::Weight => widgets::render_weight_history(
            rows[1],
            f.buffer_mut(),
            &app.weight_entries,
            app.selected_index,
        ),
    }
}

fn render_profile(area: Rect, f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    widgets::render_profile_card(rows[0], f.buffer_mut(), app.profile());
    widgets::render_profile_fields(
        rows[1],
        f.buffer_mut(),
        app.profile(),
        app.editor.is_editing(),
        app.field_index,
        app.editor.staged_photo(),
    );
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
