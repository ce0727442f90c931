use anyhow::Result;
use crossterm::event::KeyCode;
use std::path::Path;

use crate::models::goals::{daily_goals, weekly_goals, weight_history};
use crate::models::{FitnessLevel, GoalMetric, User, WeightEntry, WorkoutRecord};
use crate::projection::{self, export};
use crate::state::{CatalogStore, ProfileEditor, SessionStore};

/// Top-level screens, one per page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    History,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Dashboard, Screen::History, Screen::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::History => "History",
            Screen::Profile => "Profile",
        }
    }
}

/// Tabs on the history screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryTab {
    Workouts,
    Weight,
}

/// Profile fields addressable by the edit cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Goal,
    Age,
    Weight,
    Height,
    FitnessLevel,
    WeeklyGoal,
    Photo,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Name,
        ProfileField::Goal,
        ProfileField::Age,
        ProfileField::Weight,
        ProfileField::Height,
        ProfileField::FitnessLevel,
        ProfileField::WeeklyGoal,
        ProfileField::Photo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Goal => "Goal",
            ProfileField::Age => "Age",
            ProfileField::Weight => "Weight (kg)",
            ProfileField::Height => "Height (cm)",
            ProfileField::FitnessLevel => "Fitness Level",
            ProfileField::WeeklyGoal => "Weekly Goal (days)",
            ProfileField::Photo => "Photo",
        }
    }
}

/// In-progress text entry for one profile field
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub field: ProfileField,
    pub buffer: String,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Application state for the TUI
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Did the user ask to sign out instead of quitting?
    pub signed_out: bool,
    /// Active screen
    pub screen: Screen,
    /// Show help overlay
    pub show_help: bool,
    /// Active history tab
    pub history_tab: HistoryTab,
    /// Selected row in the active list
    pub selected_index: usize,
    /// Selected profile field while editing
    pub field_index: usize,
    /// Active inline text entry, if any
    pub input: Option<FieldInput>,
    /// Transient status message
    pub status: Option<StatusLine>,
    /// Profile view/edit state machine
    pub editor: ProfileEditor,
    /// Flattened catalog sorted by date, most recent first
    pub workout_history: Vec<WorkoutRecord>,
    /// Top three of the sorted history, for the dashboard
    pub recent_workouts: Vec<WorkoutRecord>,
    pub daily_goals: Vec<GoalMetric>,
    pub weekly_goals: Vec<GoalMetric>,
    pub weight_entries: Vec<WeightEntry>,
}

impl App {
    /// Build the app state for an authenticated user over the current
    /// catalog snapshot
    pub fn new(user: User, catalog: &CatalogStore) -> Self {
        let mut app = Self {
            should_quit: false,
            signed_out: false,
            screen: Screen::Dashboard,
            show_help: false,
            history_tab: HistoryTab::Workouts,
            selected_index: 0,
            field_index: 0,
            input: None,
            status: None,
            editor: ProfileEditor::new(user),
            workout_history: Vec::new(),
            recent_workouts: Vec::new(),
            daily_goals: daily_goals(),
            weekly_goals: weekly_goals(),
            weight_entries: weight_history(),
        };
        app.refresh_views(catalog);
        app
    }

    /// Recompute the derived workout views from the catalog
    pub fn refresh_views(&mut self, catalog: &CatalogStore) {
        let flattened = projection::flatten(catalog.categories());
        let sorted = projection::sort_by_date_desc(&flattened);
        self.recent_workouts = projection::top_n(sorted.clone(), 3);
        self.workout_history = sorted;
    }

    /// Profile as currently displayed
    pub fn profile(&self) -> &User {
        self.editor.draft()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode, session: &mut SessionStore) -> Result<()> {
        self.status = None;

        // Help overlay takes precedence
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return Ok(());
        }

        // Active text entry captures everything next
        if self.input.is_some() {
            self.handle_input_key(key);
            return Ok(());
        }

        match key {
            // Quit
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }

            // Sign out, back to the auth prompt
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.signed_out = true;
            }

            // Help
            KeyCode::Char('?') => {
                self.show_help = true;
            }

            // Direct screen selection
            KeyCode::Char('1') => self.switch_screen(Screen::Dashboard),
            KeyCode::Char('2') => self.switch_screen(Screen::History),
            KeyCode::Char('3') => self.switch_screen(Screen::Profile),

            // Tab to cycle screens
            KeyCode::Tab => self.next_screen(),
            KeyCode::BackTab => self.prev_screen(),

            _ => self.handle_screen_key(key, session)?,
        }

        Ok(())
    }

    fn handle_screen_key(&mut self, key: KeyCode, session: &mut SessionStore) -> Result<()> {
        match self.screen {
            Screen::Dashboard => {}

            Screen::History => match key {
                KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_history_tab(),
                KeyCode::Char('e') | KeyCode::Char('E') => self.export_current_tab(),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                _ => {}
            },

            Screen::Profile => {
                if self.editor.is_editing() {
                    self.handle_edit_key(key, session)?;
                } else if matches!(key, KeyCode::Char('e') | KeyCode::Char('E')) {
                    self.begin_edit(session);
                }
            }
        }

        Ok(())
    }

    fn handle_edit_key(&mut self, key: KeyCode, session: &mut SessionStore) -> Result<()> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.field_index > 0 {
                    self.field_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.field_index < ProfileField::ALL.len() - 1 {
                    self.field_index += 1;
                }
            }
            KeyCode::Left => self.cycle_fitness_level(false),
            KeyCode::Right => self.cycle_fitness_level(true),
            KeyCode::Enter => self.begin_input(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_profile(session)?,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => self.cancel_edit(session),
            _ => {}
        }
        Ok(())
    }

    fn handle_input_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
            }
            KeyCode::Enter => self.commit_input(),
            KeyCode::Esc => {
                self.input = None;
            }
            _ => {}
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected_index = 0;
    }

    fn next_screen(&mut self) {
        let screen = match self.screen {
            Screen::Dashboard => Screen::History,
            Screen::History => Screen::Profile,
            Screen::Profile => Screen::Dashboard,
        };
        self.switch_screen(screen);
    }

    fn prev_screen(&mut self) {
        let screen = match self.screen {
            Screen::Dashboard => Screen::Profile,
            Screen::History => Screen::Dashboard,
            Screen::Profile => Screen::History,
        };
        self.switch_screen(screen);
    }

    fn toggle_history_tab(&mut self) {
        self.history_tab = match self.history_tab {
            HistoryTab::Workouts => HistoryTab::Weight,
            HistoryTab::Weight => HistoryTab::Workouts,
        };
        self.selected_index = 0;
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        let rows = match self.history_tab {
            HistoryTab::Workouts => self.workout_history.len(),
            HistoryTab::Weight => self.weight_entries.len(),
        };
        if self.selected_index + 1 < rows {
            self.selected_index += 1;
        }
    }

    fn export_current_tab(&mut self) {
        let result = match self.history_tab {
            HistoryTab::Workouts => export::write_csv(
                &export::workout_history_rows(&self.workout_history),
                Path::new(export::WORKOUT_HISTORY_FILE),
            )
            .map(|_| export::WORKOUT_HISTORY_FILE),
            HistoryTab::Weight => export::write_csv(
                &export::weight_history_rows(&self.weight_entries),
                Path::new(export::WEIGHT_HISTORY_FILE),
            )
            .map(|_| export::WEIGHT_HISTORY_FILE),
        };

        match result {
            Ok(name) => self.set_status(format!("Exported {}", name)),
            Err(err) => self.set_error(format!("Export failed: {}", err)),
        }
    }

    fn begin_edit(&mut self, session: &SessionStore) {
        if let Some(user) = session.current_user() {
            let current = user.clone();
            self.editor.begin_edit(&current);
            self.field_index = 0;
        }
    }

    fn cancel_edit(&mut self, session: &SessionStore) {
        if let Some(user) = session.current_user() {
            let current = user.clone();
            self.editor.cancel(&current);
        }
        self.input = None;
    }

    fn save_profile(&mut self, session: &mut SessionStore) -> Result<()> {
        self.editor.save(session)?;
        self.set_status("Profile saved");
        Ok(())
    }

    fn begin_input(&mut self) {
        let field = ProfileField::ALL[self.field_index];
        let draft = self.editor.draft();

        let buffer = match field {
            ProfileField::Name => draft.name.clone(),
            ProfileField::Goal => draft.goal.clone(),
            ProfileField::Age => draft.age.to_string(),
            ProfileField::Weight => draft.weight.to_string(),
            ProfileField::Height => draft.height.to_string(),
            ProfileField::WeeklyGoal => draft.weekly_goal.to_string(),
            ProfileField::Photo => String::new(),
            ProfileField::FitnessLevel => {
                self.cycle_fitness_level(true);
                return;
            }
        };

        self.input = Some(FieldInput { field, buffer });
    }

    fn commit_input(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };
        let value = input.buffer.trim().to_string();

        match input.field {
            ProfileField::Name => {
                if let Some(draft) = self.editor.draft_mut() {
                    draft.name = value;
                }
            }
            ProfileField::Goal => {
                if let Some(draft) = self.editor.draft_mut() {
                    draft.goal = value;
                }
            }
            ProfileField::Age => match value.parse::<u32>() {
                Ok(age) => {
                    if let Some(draft) = self.editor.draft_mut() {
                        draft.age = age;
                    }
                }
                Err(_) => self.reject_input(input, "Age must be a whole number"),
            },
            ProfileField::Weight => match value.parse::<f64>() {
                Ok(weight) if weight > 0.0 => {
                    if let Some(draft) = self.editor.draft_mut() {
                        draft.weight = weight;
                    }
                }
                _ => self.reject_input(input, "Weight must be a positive number"),
            },
            ProfileField::Height => match value.parse::<f64>() {
                Ok(height) if height > 0.0 => {
                    if let Some(draft) = self.editor.draft_mut() {
                        draft.height = height;
                    }
                }
                _ => self.reject_input(input, "Height must be a positive number"),
            },
            ProfileField::WeeklyGoal => match value.parse::<u8>() {
                Ok(days) if (1..=7).contains(&days) => {
                    if let Some(draft) = self.editor.draft_mut() {
                        draft.weekly_goal = days;
                    }
                }
                _ => self.reject_input(input, "Weekly goal must be between 1 and 7"),
            },
            ProfileField::Photo => self.stage_photo(&value),
            ProfileField::FitnessLevel => {}
        }
    }

    /// Keep the entry open and explain what went wrong
    fn reject_input(&mut self, input: FieldInput, message: &str) {
        self.set_error(message);
        self.input = Some(input);
    }

    fn stage_photo(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        match std::fs::canonicalize(raw) {
            Ok(path) => {
                self.editor.stage_photo(path.to_string_lossy());
                self.set_status("Photo staged for next save");
            }
            Err(_) => self.set_error(format!("File not found: {}", raw)),
        }
    }

    fn cycle_fitness_level(&mut self, forward: bool) {
        if ProfileField::ALL[self.field_index] != ProfileField::FitnessLevel {
            return;
        }
        if let Some(draft) = self.editor.draft_mut() {
            let levels = FitnessLevel::all();
            let position = levels
                .iter()
                .position(|level| *level == draft.fitness_level)
                .unwrap_or(0);
            let next = if forward {
                (position + 1) % levels.len()
            } else {
                (position + levels.len() - 1) % levels.len()
            };
            draft.fitness_level = levels[next];
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: true,
        });
    }
}
