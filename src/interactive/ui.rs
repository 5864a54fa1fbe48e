use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::{AppMode, Focus, InteractiveApp, MainView};
use super::toast;
use crate::formatting::render_gantt;
use crate::formatting::tree::row_marker;
use crate::formatting::utils::{extract_first_name, format_due, format_relative_time, status_icon, truncate};
use crate::gantt::GanttLayout;
use crate::models::{Task, TaskPriority, TaskStatus};
use crate::navigation::NodeRef;

const SIDEBAR_WIDTH: u16 = 32;

/// Colors for the two display modes.
struct Palette {
    bar_bg: Color,
    text: Color,
    muted: Color,
    accent: Color,
    border: Color,
    highlight_bg: Color,
}

impl Palette {
    fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                bar_bg: Color::Rgb(20, 22, 30),
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Rgb(70, 70, 80),
                highlight_bg: Color::Rgb(45, 50, 70),
            }
        } else {
            Self {
                bar_bg: Color::Rgb(225, 230, 240),
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                highlight_bg: Color::Rgb(200, 215, 240),
            }
        }
    }
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Gray,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Review => Color::Magenta,
        TaskStatus::Completed => Color::Green,
    }
}

fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::Blue,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::High => Color::Red,
    }
}

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let palette = Palette::for_mode(app.dark_mode);
    let toast_height = if app.toasts.is_empty() {
        0
    } else {
        app.toasts.visible_count() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Topbar
            Constraint::Min(5),               // Body
            Constraint::Length(toast_height), // Toasts
            Constraint::Length(1),            // Footer
        ])
        .split(frame.size());

    draw_topbar(frame, chunks[0], app, &palette);

    let main_area = if app.nav.collapsed {
        chunks[1]
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        draw_sidebar(frame, body[0], app, &palette);
        body[1]
    };

    match (app.mode, app.selected_task()) {
        (AppMode::Detail, Some(task)) => draw_task_detail(frame, main_area, task, &palette),
        _ => match app.view {
            MainView::List => draw_task_list(frame, main_area, app, &palette),
            MainView::Gantt => draw_gantt(frame, main_area, app, &palette),
        },
    }

    toast::draw(frame, chunks[2], &app.toasts);
    draw_footer(frame, chunks[3], app, &palette);
}

fn draw_topbar(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let width = area.width as usize;

    let mut left = vec![Span::styled(
        " Taskboard ",
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )];
    if let Some(name) = &app.current_name {
        left.push(Span::styled(format!("› {}", truncate(name, width / 3)), Style::default().fg(palette.text)));
    }
    if app.loading {
        left.push(Span::styled("  ⟳", Style::default().fg(Color::Yellow)));
    }

    let mut right = Vec::new();
    let unread = app.feed.unread_count();
    if unread > 0 {
        right.push(Span::styled(
            format!("● {} unread ", unread),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
    } else {
        right.push(Span::styled("○ 0 unread ", Style::default().fg(palette.muted)));
    }
    if let Some(user) = &app.user {
        right.push(Span::styled(
            format!(" {} ", extract_first_name(&user.name)),
            Style::default().fg(Color::Green),
        ));
    }

    let used: usize = left.iter().chain(right.iter()).map(|s| s.content.chars().count()).sum();
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
    spans.extend(right);

    let topbar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bar_bg));
    frame.render_widget(topbar, area);
}

fn panel_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    let border = if focused { palette.accent } else { palette.border };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let rows = app.nav.visible_rows();
    let inner_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let color = match row.node {
                NodeRef::Workspace { .. } => palette.accent,
                NodeRef::Project(_) => Color::Magenta,
                NodeRef::Task { .. } => palette.text,
            };
            let indent = "  ".repeat(row.depth);
            let label = truncate(&row.label, inner_width.saturating_sub(indent.len() + 2));
            let mut spans = vec![
                Span::raw(indent),
                Span::styled(format!("{} ", row_marker(row)), Style::default().fg(palette.muted)),
                Span::styled(label, Style::default().fg(color)),
            ];
            if row.expanded && !row.loaded {
                spans.push(Span::styled(" …", Style::default().fg(palette.muted)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let focused = app.focus == Focus::Sidebar;
    let list = List::new(items)
        .block(panel_block(" Workspaces ", focused, palette))
        .highlight_style(Style::default().bg(palette.highlight_bg).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    if focused && !rows.is_empty() {
        state.select(Some(app.sidebar_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_task_list(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let focused = app.focus == Focus::Tasks;
    let block = panel_block(" Tasks ", focused, palette);

    if app.current.is_none() {
        let hint = Paragraph::new("Select a project in the sidebar (Enter) to see its tasks.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }
    if app.tasks.is_empty() {
        let empty = Paragraph::new("No tasks in this project.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let today = Local::now().date_naive();
    let title_width = (area.width as usize).saturating_sub(44).max(10);

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .map(|task| {
            let due = format_due(task.due_date, today);
            let due_style = if due.ends_with("overdue") && !task.is_completed() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(palette.muted)
            };
            let assignee = task
                .assignee
                .as_ref()
                .map(|a| extract_first_name(a.display_name()).to_string())
                .unwrap_or_else(|| "—".to_string());

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", status_icon(task.status)),
                    Style::default().fg(status_color(task.status)),
                ),
                Span::styled(
                    format!("{:<6} ", task.priority.as_str()),
                    Style::default().fg(priority_color(task.priority)),
                ),
                Span::styled(
                    format!("{:<width$} ", truncate(&task.title, title_width), width = title_width),
                    Style::default().fg(palette.text),
                ),
                Span::styled(format!("{:<12} ", truncate(&assignee, 12)), Style::default().fg(Color::Green)),
                Span::styled(due, due_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.highlight_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_gantt(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let today = Local::now().date_naive();
    let layout = GanttLayout::compute(&app.tasks, today);
    let lines: Vec<Line> = render_gantt(&layout, today, false)
        .into_iter()
        .map(Line::from)
        .collect();

    let chart = Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .block(panel_block(" Timeline ", app.focus == Focus::Tasks, palette));
    frame.render_widget(chart, area);
}

fn draw_task_detail(frame: &mut Frame, area: Rect, task: &Task, palette: &Palette) {
    let today = Local::now().date_naive();
    let label = |text: &str| Span::styled(format!("{:<10}", text), Style::default().fg(palette.muted));

    let mut lines = vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Status"),
            Span::styled(task.status.label(), Style::default().fg(status_color(task.status))),
        ]),
        Line::from(vec![
            label("Priority"),
            Span::styled(task.priority.as_str(), Style::default().fg(priority_color(task.priority))),
        ]),
        Line::from(vec![
            label("Assignee"),
            Span::raw(task.assignee.as_ref().map(|a| a.display_name()).unwrap_or("Unassigned").to_string()),
        ]),
        Line::from(vec![label("Due"), Span::raw(format_due(task.due_date, today))]),
        Line::from(vec![label("Created"), Span::raw(format_relative_time(task.created_at))]),
    ];

    if !task.followers.is_empty() {
        let names: Vec<&str> = task.followers.iter().map(|f| f.display_name()).collect();
        lines.push(Line::from(vec![label("Followers"), Span::raw(names.join(", "))]));
    }

    if let Some(desc) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(Line::from(""));
        lines.extend(desc.lines().map(|l| Line::from(l.to_string())));
    }

    if !task.subtasks.is_empty() {
        let (done, total) = task.subtask_progress();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Subtasks {}/{}", done, total),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for subtask in &task.subtasks {
            let (mark, color) = if subtask.completed { ("[x]", Color::Green) } else { ("[ ]", palette.text) };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", mark), Style::default().fg(color)),
                Span::raw(subtask.title.clone()),
            ]));
        }
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel_block(" Task ", true, palette));
    frame.render_widget(detail, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let hints = match app.mode {
        AppMode::Detail => "Esc back  r refresh  m mark read",
        AppMode::Normal => "j/k move  Tab focus  Enter open  g gantt  b sidebar  d dark  r refresh  m mark read  q quit",
    };
    let footer = Paragraph::new(Line::from(Span::styled(format!(" {}", hints), Style::default().fg(palette.muted))))
        .style(Style::default().bg(palette.bar_bg));
    frame.render_widget(footer, area);
}
