//! In-memory message log

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::broadcast;

use super::MessageSink;

/// Capacity of the live subscription channel
const BROADCAST_CAPACITY: usize = 256;

/// One recorded audit message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Ordered log of audit messages.
///
/// With a non-zero capacity only the newest `capacity` messages are kept.
/// Each message is also published to live subscribers; publishing with no
/// subscribers is not an error.
pub struct MessageLog {
    entries: Mutex<VecDeque<Message>>,
    capacity: usize,
    broadcast_tx: broadcast::Sender<Message>,
}

impl MessageLog {
    /// Create a log keeping at most `capacity` messages (0 = unbounded)
    pub fn new(capacity: usize) -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity,
            broadcast_tx,
        }
    }

    /// Snapshot of the retained messages, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.entries().iter().cloned().collect()
    }

    /// Drop every retained message
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Receive every message added from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.broadcast_tx.subscribe()
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<Message>> {
        // A panic while holding the lock cannot leave the deque half-updated
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: &str) {
        let message = Message {
            text: message.to_string(),
            at: Utc::now(),
        };

        {
            let mut entries = self.entries();
            entries.push_back(message.clone());
            if self.capacity > 0 {
                while entries.len() > self.capacity {
                    entries.pop_front();
                }
            }
        }

        let _ = self.broadcast_tx.send(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read_in_order() {
        let log = MessageLog::default();
        log.add("one");
        log.add("two");

        let texts: Vec<String> = log.messages().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear() {
        let log = MessageLog::default();
        log.add("one");
        log.clear();
        assert!(log.is_empty());
        assert!(log.messages().is_empty());
    }

    #[test]
    fn test_capacity_keeps_newest() {
        let log = MessageLog::new(2);
        log.add("one");
        log.add("two");
        log.add("three");

        let texts: Vec<String> = log.messages().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.capacity(), 2);
    }

    #[test]
    fn test_unbounded_by_default() {
        let log = MessageLog::default();
        for i in 0..500 {
            log.add(&format!("message {}", i));
        }
        assert_eq!(log.len(), 500);
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let log = MessageLog::default();
        log.add("first");
        log.add("second");
        let messages = log.messages();
        assert!(messages[0].at <= messages[1].at);
    }

    #[tokio::test]
    async fn test_subscribers_receive_messages() {
        let log = MessageLog::default();
        let mut rx = log.subscribe();

        log.add("live");

        let received = rx.recv().await.unwrap();
        assert_eq!(received.text, "live");
    }

    #[test]
    fn test_add_without_subscribers() {
        let log = MessageLog::default();
        log.add("nobody listening");
        assert_eq!(log.len(), 1);
    }
}
