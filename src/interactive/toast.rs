use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::TOAST_TTL_SECS;

/// Rows shown at once; older toasts wait their turn.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn remaining(&self, now: Instant) -> Duration {
        Duration::from_secs(TOAST_TTL_SECS).saturating_sub(now.saturating_duration_since(self.created_at))
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            message: message.into(),
            kind,
            created_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Drops toasts whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| !t.remaining(now).is_zero());
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev().take(MAX_VISIBLE)
    }

    pub fn visible_count(&self) -> usize {
        self.items.len().min(MAX_VISIBLE)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn draw(frame: &mut Frame, area: Rect, toasts: &Toasts) {
    if toasts.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let now = Instant::now();
    let lines: Vec<Line> = toasts
        .visible()
        .map(|t| {
            let (icon, color) = match t.kind {
                ToastKind::Success => ("✓", Color::Green),
                ToastKind::Error => ("✗", Color::Red),
                ToastKind::Info => ("ⓘ", Color::Blue),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(t.message.clone(), Style::default().fg(color)),
                Span::styled(
                    format!("  [{}s]", t.remaining(now).as_secs() + 1),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push_at(ToastKind::Info, "saved", start);

        toasts.expire(start + Duration::from_secs(TOAST_TTL_SECS - 1));
        assert!(!toasts.is_empty());

        toasts.expire(start + Duration::from_secs(TOAST_TTL_SECS));
        assert!(toasts.is_empty());
    }

    #[test]
    fn newest_toasts_shown_first() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        for i in 0..5 {
            toasts.push_at(ToastKind::Info, format!("t{}", i), start);
        }
        let shown: Vec<&str> = toasts.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(shown, vec!["t4", "t3", "t2"]);
        assert_eq!(toasts.visible_count(), MAX_VISIBLE);
    }
}
