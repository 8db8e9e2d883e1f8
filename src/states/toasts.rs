//! Toast Queue
//!
//! Drains [`UIEvent::Toast`]s published by the store into a bounded list of
//! visible notifications. Toasts expire after a fixed lifetime or when
//! dismissed by id.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use uuid::Uuid;

use crate::constants::{TOAST_CAPACITY, TOAST_TTL_MS};
use crate::helpers::BoundedDeque;
use crate::states::{NotificationSeverity, Operation, UIEvent};

/// A visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: Arc<str>,
    pub severity: NotificationSeverity,
    pub created_at: Instant,
}

/// Bounded, expiring toast list
#[derive(Debug)]
pub struct ToastCenter {
    toasts: BoundedDeque<Toast>,
    ttl: Duration,
}

impl ToastCenter {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            toasts: BoundedDeque::new(capacity),
            ttl,
        }
    }

    /// Queue a toast and return its id
    pub fn push(&mut self, message: impl Into<Arc<str>>, severity: NotificationSeverity) -> Uuid {
        self.push_at(message, severity, Instant::now())
    }

    fn push_at(
        &mut self,
        message: impl Into<Arc<str>>,
        severity: NotificationSeverity,
        created_at: Instant,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            created_at,
        });
        id
    }

    /// Drain pending events; toasts are queued, the operations whose state
    /// changed are returned in arrival order.
    pub fn ingest(&mut self, events: &Receiver<UIEvent>) -> Vec<Operation> {
        let mut changed = Vec::new();
        for event in events.try_iter() {
            match event {
                UIEvent::Toast { message, severity } => {
                    tracing::debug!(severity = severity.tag(), message = %message, "Toast");
                    self.push(message, severity);
                }
                UIEvent::StateChanged { operation } => changed.push(operation),
            }
        }
        changed
    }

    /// Remove a toast; returns whether it was present
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Drop toasts older than the lifetime
    pub fn prune_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }

    /// Visible toasts, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_TTL_MS), TOAST_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_queues_toasts_and_reports_state_changes() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(UIEvent::error("Failed to load history.")).expect("send");
        tx.send(UIEvent::StateChanged {
            operation: Operation::History,
        })
        .expect("send");
        tx.send(UIEvent::success("CSV uploaded and dashboard updated."))
            .expect("send");

        let mut center = ToastCenter::default();
        let changed = center.ingest(&rx);

        assert_eq!(changed, vec![Operation::History]);
        let messages: Vec<_> = center.active().map(|t| t.message.to_string()).collect();
        assert_eq!(
            messages,
            vec!["Failed to load history.", "CSV uploaded and dashboard updated."]
        );
        assert_eq!(
            center.active().next().map(|t| t.severity),
            Some(NotificationSeverity::Error)
        );
    }

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut center = ToastCenter::new(Duration::from_millis(3500), 8);
        let start = Instant::now();
        center.push_at("old", NotificationSeverity::Info, start);
        center.push_at("new", NotificationSeverity::Info, start + Duration::from_millis(2000));

        center.prune_expired(start + Duration::from_millis(3499));
        assert_eq!(center.len(), 2);

        center.prune_expired(start + Duration::from_millis(3500));
        let remaining: Vec<_> = center.active().map(|t| t.message.to_string()).collect();
        assert_eq!(remaining, vec!["new"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut center = ToastCenter::default();
        let first = center.push("one", NotificationSeverity::Success);
        let second = center.push("two", NotificationSeverity::Success);
        assert_ne!(first, second);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.active().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn oldest_toast_is_evicted_when_full() {
        let mut center = ToastCenter::new(Duration::from_secs(60), 2);
        center.push("a", NotificationSeverity::Info);
        center.push("b", NotificationSeverity::Info);
        center.push("c", NotificationSeverity::Info);

        let messages: Vec<_> = center.active().map(|t| t.message.to_string()).collect();
        assert_eq!(messages, vec!["b", "c"]);
        center.clear();
        assert!(center.is_empty());
    }
}
