use std::collections::HashSet;

use crate::models::Notification;

/// Polling state behind the notification indicator: remembers what has
/// already been shown so each poll only surfaces new arrivals.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    seen: HashSet<String>,
    unread_count: usize,
    primed: bool,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a poll result and returns the notifications not seen in any
    /// earlier poll, in the order the backend sent them.
    pub fn ingest(&mut self, notifications: &[Notification]) -> Vec<Notification> {
        self.unread_count = notifications.iter().filter(|n| !n.read).count();
        self.primed = true;

        notifications
            .iter()
            .filter(|n| self.seen.insert(n.id.clone()))
            .cloned()
            .collect()
    }

    /// Like `ingest`, but the first call only establishes the baseline.
    pub fn ingest_arrivals(&mut self, notifications: &[Notification]) -> Vec<Notification> {
        let first_poll = !self.primed;
        let fresh = self.ingest(notifications);
        if first_poll {
            Vec::new()
        } else {
            fresh
        }
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn mark_all_read(&mut self) {
        self.unread_count = 0;
    }

    pub fn has_polled(&self) -> bool {
        self.primed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            message: format!("notification {}", id),
            kind: None,
            read,
            link: None,
            created_at: None,
        }
    }

    #[test]
    fn only_new_ids_are_returned() {
        let mut feed = NotificationFeed::new();
        let first = feed.ingest(&[notification("a", false), notification("b", true)]);
        assert_eq!(first.len(), 2);
        assert_eq!(feed.unread_count(), 1);

        let second = feed.ingest(&[notification("c", false), notification("a", false), notification("b", true)]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, "c");
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn first_arrival_poll_is_a_baseline() {
        let mut feed = NotificationFeed::new();
        assert!(feed.ingest_arrivals(&[notification("a", false)]).is_empty());
        assert!(feed.has_polled());

        let arrivals = feed.ingest_arrivals(&[notification("a", false), notification("b", false)]);
        assert_eq!(arrivals.len(), 1);
    }
}
