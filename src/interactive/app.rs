use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use super::toast::Toasts;
use crate::client::ProjectScope;
use crate::constants::NOTIFICATION_POLL_SECS;
use crate::models::{Task, User};
use crate::navigation::{NavTree, NodeRef, TreeRow};
use crate::notification_feed::NotificationFeed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Sidebar,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainView {
    List,
    Gantt,
}

/// Work the event loop has to do after a key press. Anything that needs
/// the network or the config file goes through here.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Refresh,
    MarkAllRead,
    SavePreferences,
    ExpandWorkspace(String),
    OpenProject(ProjectScope),
    OpenTask { scope: ProjectScope, task_id: String },
}

pub struct InteractiveApp {
    pub mode: AppMode,
    pub focus: Focus,
    pub view: MainView,
    pub nav: NavTree,
    pub sidebar_index: usize,
    pub user: Option<User>,
    pub current: Option<ProjectScope>,
    pub current_name: Option<String>,
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub feed: NotificationFeed,
    pub toasts: Toasts,
    pub dark_mode: bool,
    pub loading: bool,
    pub should_quit: bool,
    pub last_poll: Option<Instant>,
}

impl InteractiveApp {
    pub fn new(dark_mode: bool, sidebar_collapsed: bool) -> Self {
        Self {
            mode: AppMode::Normal,
            focus: if sidebar_collapsed { Focus::Tasks } else { Focus::Sidebar },
            view: MainView::List,
            nav: NavTree::new(sidebar_collapsed),
            sidebar_index: 0,
            user: None,
            current: None,
            current_name: None,
            tasks: Vec::new(),
            selected_index: 0,
            feed: NotificationFeed::new(),
            toasts: Toasts::default(),
            dark_mode,
            loading: false,
            should_quit: false,
            last_poll: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode_key(key),
            AppMode::Detail => self.handle_detail_mode_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('m') => Some(Action::MarkAllRead),
            KeyCode::Char('d') => {
                self.dark_mode = !self.dark_mode;
                Some(Action::SavePreferences)
            }
            KeyCode::Char('b') => {
                if self.nav.toggle_collapsed() {
                    self.focus = Focus::Tasks;
                }
                Some(Action::SavePreferences)
            }
            KeyCode::Char('g') => {
                self.view = match self.view {
                    MainView::List => MainView::Gantt,
                    MainView::Gantt => MainView::List,
                };
                None
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Tasks if !self.nav.collapsed => Focus::Sidebar,
                    _ => Focus::Tasks,
                };
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => self.activate(),
            _ => None,
        }
    }

    fn handle_detail_mode_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
                self.mode = AppMode::Normal;
                None
            }
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('m') => Some(Action::MarkAllRead),
            _ => None,
        }
    }

    fn activate(&mut self) -> Option<Action> {
        match self.focus {
            Focus::Sidebar => match self.selected_row()?.node {
                NodeRef::Workspace { workspace_id } => Some(Action::ExpandWorkspace(workspace_id)),
                NodeRef::Project(scope) => Some(Action::OpenProject(scope)),
                NodeRef::Task { scope, task_id } => Some(Action::OpenTask { scope, task_id }),
            },
            Focus::Tasks => {
                if self.selected_task().is_some() {
                    self.mode = AppMode::Detail;
                }
                None
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (index, len) = match self.focus {
            Focus::Sidebar => (&mut self.sidebar_index, self.nav.visible_rows().len()),
            Focus::Tasks => (&mut self.selected_index, self.tasks.len()),
        };
        if len == 0 {
            *index = 0;
            return;
        }
        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
    }

    pub fn selected_row(&self) -> Option<TreeRow> {
        self.nav.visible_rows().into_iter().nth(self.sidebar_index)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Swaps in the task list of the selected project.
    pub fn set_tasks(&mut self, scope: ProjectScope, name: Option<String>, tasks: Vec<Task>) {
        if self.current.as_ref() != Some(&scope) {
            self.selected_index = 0;
        }
        self.current = Some(scope);
        self.current_name = name;
        self.tasks = tasks;
        self.clamp_selection();
    }

    pub fn select_task(&mut self, task_id: &str) -> bool {
        match self.tasks.iter().position(|t| t.id == task_id) {
            Some(index) => {
                self.selected_index = index;
                self.focus = Focus::Tasks;
                self.mode = AppMode::Detail;
                true
            }
            None => false,
        }
    }

    pub fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
        let rows = self.nav.visible_rows().len();
        if self.sidebar_index >= rows {
            self.sidebar_index = rows.saturating_sub(1);
        }
    }

    pub fn poll_due(&self, now: Instant) -> bool {
        match self.last_poll {
            Some(last) => now.saturating_duration_since(last) >= Duration::from_secs(NOTIFICATION_POLL_SECS),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_toggle_moves_focus_to_tasks() {
        let mut app = InteractiveApp::new(false, false);
        assert_eq!(app.focus, Focus::Sidebar);

        assert_eq!(app.handle_key(KeyCode::Char('b')), Some(Action::SavePreferences));
        assert!(app.nav.collapsed);
        assert_eq!(app.focus, Focus::Tasks);

        // Tab cannot reach a hidden sidebar
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, Focus::Tasks);
    }

    #[test]
    fn dark_mode_and_gantt_toggles() {
        let mut app = InteractiveApp::new(false, true);
        assert_eq!(app.handle_key(KeyCode::Char('d')), Some(Action::SavePreferences));
        assert!(app.dark_mode);

        assert_eq!(app.handle_key(KeyCode::Char('g')), None);
        assert_eq!(app.view, MainView::Gantt);
    }

    #[test]
    fn enter_without_tasks_stays_in_list() {
        let mut app = InteractiveApp::new(false, true);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn first_poll_is_due_immediately() {
        let mut app = InteractiveApp::new(false, false);
        let now = Instant::now();
        assert!(app.poll_due(now));
        app.last_poll = Some(now);
        assert!(!app.poll_due(now + Duration::from_secs(1)));
        assert!(app.poll_due(now + Duration::from_secs(NOTIFICATION_POLL_SECS)));
    }
}
