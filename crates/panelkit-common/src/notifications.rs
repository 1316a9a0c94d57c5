use std::collections::VecDeque;

use serde::Serialize;

/// Severity of a user-visible alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// An alert raised for the user, typically because a host call failed.
/// The host decides how and for how long to show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, title, body)
    }

    fn with_level(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Bounded queue of alerts. When full, the oldest entry is dropped.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Hand every queued alert to the host and clear the queue.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_at_capacity() {
        let mut queue = NotificationQueue::new(2);
        queue.push(Notification::info("a", ""));
        queue.push(Notification::warning("b", ""));
        queue.push(Notification::error("c", ""));

        let titles: Vec<_> = queue.visible().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn drain_clears() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::error("Bridge error", "bad base64"));
        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].level, NotificationLevel::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn serializes_for_host() {
        let json = serde_json::to_string(&Notification::warning("t", "b")).unwrap();
        assert_eq!(json, r#"{"level":"warning","title":"t","body":"b"}"#);
    }
}
