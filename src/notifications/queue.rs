//! Notification queue with time-based expiry for info/success entries.
//!
//! The queue is thread-safe and can be cloned cheaply; clones share the same
//! entries.

use crate::models::{Notification, Severity};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::debug;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct QueueEntry {
    notification: Notification,
    expires_at: Option<Instant>,
}

impl QueueEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

/// Newest-first list of notifications for the current user.
///
/// `Info` and `Success` entries are removed once the TTL elapses; `Warning`
/// and `Error` entries stay until removed or cleared. When a tokio runtime is
/// available a timer task removes expired entries; otherwise they are hidden
/// from reads and dropped on the next mutation.
#[derive(Clone)]
pub struct NotificationQueue {
    entries: Arc<RwLock<Vec<QueueEntry>>>,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
    events: broadcast::Sender<Notification>,
}

impl NotificationQueue {
    /// Create a queue whose info/success entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            ttl,
            events,
        }
    }

    /// Add a notification at the front of the queue and return its id.
    pub fn enqueue(
        &self,
        user_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            user_id: user_id.into(),
            title: title.into(),
            message: message.into(),
            severity,
            read: false,
            created_at: Utc::now(),
        };

        let expires_at = severity
            .auto_expires()
            .then(|| Instant::now() + self.ttl);

        if let Ok(mut entries) = self.entries.write() {
            let now = Instant::now();
            entries.retain(|entry| entry.is_live(now));
            entries.insert(
                0,
                QueueEntry {
                    notification: notification.clone(),
                    expires_at,
                },
            );
        }

        debug!(id, severity = ?severity, "Notification enqueued");

        if expires_at.is_some() {
            self.schedule_removal(id);
        }

        // No subscribers is fine
        let _ = self.events.send(notification);

        id
    }

    fn schedule_removal(&self, id: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let queue = self.clone();
        let ttl = self.ttl;
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            queue.remove(id);
        });
    }

    /// Receive every notification enqueued from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }

    /// Current notifications, newest first.
    pub fn list(&self) -> Vec<Notification> {
        let now = Instant::now();
        match self.entries.read() {
            Ok(entries) => entries
                .iter()
                .filter(|entry| entry.is_live(now))
                .map(|entry| entry.notification.clone())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn get(&self, id: u64) -> Option<Notification> {
        self.list().into_iter().find(|n| n.id == id)
    }

    /// Mark a notification as read. Returns false if it no longer exists.
    pub fn mark_read(&self, id: u64) -> bool {
        let now = Instant::now();
        if let Ok(mut entries) = self.entries.write() {
            if let Some(entry) = entries
                .iter_mut()
                .find(|entry| entry.notification.id == id && entry.is_live(now))
            {
                entry.notification.read = true;
                return true;
            }
        }
        false
    }

    /// Remove a specific notification.
    pub fn remove(&self, id: u64) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|entry| entry.notification.id != id);
        }
    }

    /// Clear all notifications.
    pub fn clear_all(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn unread_count(&self) -> usize {
        self.list().iter().filter(|n| !n.read).count()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_newest_first() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let first = queue.enqueue("current", "Uno", "primero", Severity::Warning);
        let second = queue.enqueue("current", "Dos", "segundo", Severity::Error);

        let ids: Vec<u64> = queue.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn test_mark_read_and_unread_count() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let id = queue.enqueue("current", "Aviso", "revisar", Severity::Warning);
        queue.enqueue("current", "Error", "fallo", Severity::Error);

        assert_eq!(queue.unread_count(), 2);
        assert!(queue.mark_read(id));
        assert_eq!(queue.unread_count(), 1);
        assert!(queue.get(id).unwrap().read);
        assert!(!queue.mark_read(999));
    }

    #[test]
    fn test_remove_and_clear_all() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let id = queue.enqueue("current", "A", "a", Severity::Error);
        queue.enqueue("current", "B", "b", Severity::Warning);

        queue.remove(id);
        assert_eq!(queue.len(), 1);
        assert!(queue.get(id).is_none());

        queue.clear_all();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expiry_without_runtime() {
        let queue = NotificationQueue::new(Duration::from_millis(50));
        queue.enqueue("current", "Listo", "ok", Severity::Success);
        queue.enqueue("current", "Error", "fallo", Severity::Error);
        assert_eq!(queue.len(), 2);

        std::thread::sleep(Duration::from_millis(80));

        let remaining = queue.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].severity, Severity::Error);
    }

    #[test]
    fn test_clone_shares_entries() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let observer = queue.clone();
        queue.enqueue("current", "A", "a", Severity::Warning);
        assert_eq!(observer.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_removes_success_entries() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        queue.enqueue("current", "Bienvenido", "sesión iniciada", Severity::Success);
        queue.enqueue("current", "Info", "dato", Severity::Info);
        queue.enqueue("current", "Error", "fallo", Severity::Error);

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(queue.len(), 3);

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.list()[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_subscribe_receives_new_entries() {
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let mut rx = queue.subscribe();
        queue.enqueue("current", "Aviso", "nuevo", Severity::Warning);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.title, "Aviso");
    }
}
