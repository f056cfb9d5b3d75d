//! Notification delivery
//!
//! Dashboards never own notification state. They are handed a [`Notifier`]
//! by whoever mounted them and write every outcome to it. The root keeps a
//! [`NotificationSlot`]: one shared slot where the newest notification wins.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::Notification;

/// Receiver for notifications raised by dashboard actions
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Single shared notification slot, last write wins
///
/// Clones share the slot. Nothing is queued and nothing expires; a banner
/// reading the slot decides when to clear it.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Arc<RwLock<Option<Notification>>>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification currently on display
    pub fn current(&self) -> Option<Notification> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dismiss whatever is on display
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Notifier for NotificationSlot {
    fn notify(&self, notification: Notification) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(notification);
    }
}

/// Notifier that keeps every notification, for assertions
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingNotifier {
    seen: Arc<RwLock<Vec<Notification>>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn all(&self) -> Vec<Notification> {
        self.seen.read().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.all().into_iter().map(|n| n.message).collect()
    }

    pub(crate) fn errors(&self) -> usize {
        self.all().iter().filter(|n| n.is_error()).count()
    }

    pub(crate) fn successes(&self) -> usize {
        self.all().iter().filter(|n| !n.is_error()).count()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.write().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_slot_last_write_wins() {
        let slot = NotificationSlot::new();
        assert!(slot.current().is_none());

        slot.notify(Notification::success("Asset submitted successfully"));
        slot.notify(Notification::error("Failed to fetch assets"));

        let current = slot.current().unwrap();
        assert_eq!(current.message, "Failed to fetch assets");
        assert!(current.is_error());

        slot.clear();
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_slot_clones_share_state() {
        let root = NotificationSlot::new();
        let handed_to_view = root.clone();

        handed_to_view.notify(Notification::success("Asset minted successfully"));
        assert_eq!(
            root.current().map(|n| n.message),
            Some("Asset minted successfully".to_string())
        );
    }

    #[test]
    fn test_closure_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: Notification| seen.borrow_mut().push(n.message);

        notifier.notify(Notification::error("Failed to verify asset"));
        assert_eq!(*seen.borrow(), vec!["Failed to verify asset".to_string()]);
    }
}
