use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Widget},
};

use super::app::{FieldInput, HistoryTab, ProfileField, Screen, StatusLine};
use crate::models::{FitnessLevel, GoalMetric, User, WeightEntry, WorkoutRecord};
use crate::projection;

/// Render the screen selector across the top
pub fn render_screen_tabs(area: Rect, buf: &mut Buffer, active: Screen) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(idx, screen)| Line::from(format!(" {} {} ", idx + 1, screen.title())))
        .collect();

    let selected = Screen::ALL
        .iter()
        .position(|screen| *screen == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    tabs.render(area, buf);
}

/// Render the user card shown on the dashboard and profile screens
pub fn render_profile_card(area: Rect, buf: &mut Buffer, user: &User) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 👤 Profile ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    let initials = some_or(projection::initials(&user.name), "FE");
    let name = some_or(user.name.clone(), "Fitness Enthusiast");
    let goal = some_or(user.goal.clone(), "Stay healthy");

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", initials),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Goal: ", Style::default().fg(Color::Gray)),
            Span::raw(goal),
        ]),
        Line::from(vec![
            Span::styled("Age: ", Style::default().fg(Color::Gray)),
            Span::raw(user.age.to_string()),
            Span::styled("   Weight: ", Style::default().fg(Color::Gray)),
            Span::raw(format!("{} kg", user.weight)),
            Span::styled("   Height: ", Style::default().fg(Color::Gray)),
            Span::raw(format!("{} cm", user.height)),
        ]),
        Line::from(vec![
            Span::styled("Level: ", Style::default().fg(Color::Gray)),
            Span::styled(
                user.fitness_level.display_name(),
                Style::default().fg(level_color(user.fitness_level)),
            ),
            Span::styled("   Weekly goal: ", Style::default().fg(Color::Gray)),
            Span::raw(format!("{} days", user.weekly_goal)),
        ]),
    ];

    Paragraph::new(lines).render(inner, buf);
}

/// Render one goal panel as labelled progress gauges
pub fn render_goal_gauges(area: Rect, buf: &mut Buffer, title: &str, metrics: &[GoalMetric]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    let mut constraints: Vec<Constraint> = Vec::with_capacity(metrics.len() * 2 + 1);
    for _ in metrics {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, metric) in metrics.iter().enumerate() {
        let label = Line::from(vec![
            Span::styled(
                metric.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", metric.progress_label()),
                Style::default().fg(Color::Gray),
            ),
        ]);
        Paragraph::new(label).render(rows[idx * 2], buf);

        let color = if metric.ratio() >= 1.0 {
            Color::Green
        } else {
            Color::Cyan
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .ratio(metric.gauge_ratio())
            .label(format!("{:.0}%", metric.percent()));
        gauge.render(rows[idx * 2 + 1], buf);
    }
}

/// Render the dashboard's recent-workouts list
pub fn render_recent_workouts(area: Rect, buf: &mut Buffer, workouts: &[WorkoutRecord]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🏃 Recent Workouts ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    if workouts.is_empty() {
        Paragraph::new("No workouts yet.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = workouts
        .iter()
        .map(|workout| {
            let date = workout
                .date
                .map(projection::format_day)
                .unwrap_or_else(|| "-".to_string());

            let content = Line::from(vec![
                Span::styled(format!("{:<13}", date), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:<14}", workout.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "{:>4} min {:>5} kcal",
                    workout.duration_minutes, workout.calories
                )),
            ]);

            ListItem::new(content)
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render the history tab selector
pub fn render_history_tabs(area: Rect, buf: &mut Buffer, active: HistoryTab) {
    let titles = vec![
        Line::from(" Workout History "),
        Line::from(" Weight History "),
    ];
    let selected = match active {
        HistoryTab::Workouts => 0,
        HistoryTab::Weight => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    tabs.render(area, buf);
}

/// Render the full workout history table
pub fn render_workout_history(
    area: Rect,
    buf: &mut Buffer,
    workouts: &[WorkoutRecord],
    selected_index: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📅 Workout History ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    if workouts.is_empty() {
        Paragraph::new("No workouts recorded.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let header = Line::from(Span::styled(
        format!(
            "{:<13}{:<14}{:>10}{:>10}{:>10}",
            "Date", "Workout", "Duration", "Calories", "Weight"
        ),
        Style::default().fg(Color::Cyan),
    ));

    let mut items: Vec<ListItem> = vec![ListItem::new(header)];
    items.extend(workouts.iter().enumerate().map(|(idx, workout)| {
        let date = workout
            .date
            .map(projection::format_day)
            .unwrap_or_else(|| "-".to_string());
        let weight = workout
            .weight
            .map(|w| format!("{} kg", w))
            .unwrap_or_else(|| "-".to_string());

        let style = if idx == selected_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let content = format!(
            "{:<13}{:<14}{:>6} min{:>5} kcal{:>10}",
            date, workout.name, workout.duration_minutes, workout.calories, weight
        );

        ListItem::new(Line::from(Span::styled(content, style)))
    }));

    List::new(items).render(inner, buf);
}

/// Render the tracked-weight table
pub fn render_weight_history(
    area: Rect,
    buf: &mut Buffer,
    entries: &[WeightEntry],
    selected_index: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ⚖ Weight History ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    if entries.is_empty() {
        Paragraph::new("No weight entries.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let header = Line::from(Span::styled(
        format!("{:<13}{:>12}{:>12}{:>12}", "Date", "Weight", "Target", "To go"),
        Style::default().fg(Color::Cyan),
    ));

    let mut items: Vec<ListItem> = vec![ListItem::new(header)];
    items.extend(entries.iter().enumerate().map(|(idx, entry)| {
        let style = if idx == selected_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let content = format!(
            "{:<13}{:>9} kg{:>9} kg{:>9} kg",
            projection::format_day(entry.date),
            entry.current,
            entry.target,
            format!("{:.1}", entry.current - entry.target),
        );

        ListItem::new(Line::from(Span::styled(content, style)))
    }));

    List::new(items).render(inner, buf);
}

/// Render the editable field list on the profile screen
pub fn render_profile_fields(
    area: Rect,
    buf: &mut Buffer,
    user: &User,
    editing: bool,
    field_index: usize,
    staged_photo: Option<&str>,
) {
    let title = if editing {
        " ✏ Edit Profile "
    } else {
        " 👤 Profile Details "
    };

    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let items: Vec<ListItem> = ProfileField::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = match field {
                ProfileField::Name => user.name.clone(),
                ProfileField::Goal => user.goal.clone(),
                ProfileField::Age => user.age.to_string(),
                ProfileField::Weight => user.weight.to_string(),
                ProfileField::Height => user.height.to_string(),
                ProfileField::FitnessLevel => user.fitness_level.to_string(),
                ProfileField::WeeklyGoal => user.weekly_goal.to_string(),
                ProfileField::Photo => match staged_photo {
                    Some(reference) => format!("{} (staged)", reference),
                    None => user.photo.clone().unwrap_or_else(|| "-".to_string()),
                },
            };

            let cursor = if editing && idx == field_index {
                "› "
            } else {
                "  "
            };

            let style = if editing && idx == field_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(
                format!("{}{:<20}{}", cursor, field.label(), value),
                style,
            )))
        })
        .collect();

    List::new(items).render(inner, buf);

    // Hint line at the bottom of the panel
    if inner.height > ProfileField::ALL.len() as u16 + 1 {
        let hint_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let hint = if editing {
            "Enter edit field   ←/→ cycle level   s save   Esc cancel"
        } else {
            "Press e to edit"
        };
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .render(hint_area, buf);
    }
}

/// Render the inline text entry line
pub fn render_input_line(area: Rect, buf: &mut Buffer, input: &FieldInput) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", input.field.label()),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ),
        Span::styled(
            format!("{}█", input.buffer),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .render(area, buf);
}

/// Render the status bar at the bottom
pub fn render_status_bar(area: Rect, buf: &mut Buffer, status: Option<&StatusLine>) {
    let message = match status {
        Some(status) if status.is_error => Span::styled(
            format!(" ✗ {} ", status.text),
            Style::default().fg(Color::Red).bg(Color::DarkGray),
        ),
        Some(status) => Span::styled(
            format!(" ✓ {} ", status.text),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ),
        None => Span::styled(
            " Press ? for help ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
    };

    let hint = Span::styled(
        " q quit · o sign out ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    );

    Paragraph::new(Line::from(vec![message, hint])).render(area, buf);
}

/// Render the help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ❓ Help ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Screens:", Style::default().fg(Color::Cyan))),
        Line::from("  1        - Dashboard"),
        Line::from("  2        - History"),
        Line::from("  3        - Profile"),
        Line::from("  Tab      - Next screen"),
        Line::from("  Shift+Tab - Previous screen"),
        Line::from(""),
        Line::from(Span::styled("History:", Style::default().fg(Color::Cyan))),
        Line::from("  t        - Toggle workout/weight tab"),
        Line::from("  e        - Export current tab to CSV"),
        Line::from("  ↑/k ↓/j  - Move selection"),
        Line::from(""),
        Line::from(Span::styled("Profile:", Style::default().fg(Color::Cyan))),
        Line::from("  e        - Edit profile"),
        Line::from("  Enter    - Edit selected field"),
        Line::from("  ←/→      - Cycle fitness level"),
        Line::from("  s        - Save changes"),
        Line::from("  Esc/c    - Cancel editing"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Cyan))),
        Line::from("  o        - Sign out"),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(help_text).render(inner, buf);
}

fn level_color(level: FitnessLevel) -> Color {
    match level {
        FitnessLevel::Beginner => Color::Green,
        FitnessLevel::Intermediate => Color::Yellow,
        FitnessLevel::Advanced => Color::Red,
    }
}

fn some_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
