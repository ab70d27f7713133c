//! Change notifications for storage mutations
//!
//! Queries return owned snapshots; anything that wants to stay current
//! subscribes here and re-queries when an event arrives. Each subscriber
//! gets its own `std::sync::mpsc` channel, and senders whose receiver has
//! been dropped are pruned on the next notification.

use std::sync::mpsc;
use std::sync::Mutex;

/// Which store changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The account store changed (create, update, or delete)
    Accounts,
    /// The transaction store changed
    Transactions,
    /// The user profile changed
    Profile,
}

/// Fan-out notifier for store changes
#[derive(Default)]
pub struct ChangeNotifier {
    senders: Mutex<Vec<mpsc::Sender<ChangeEvent>>>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to change events
    ///
    /// The receiver sees every event emitted after this call. Dropping the
    /// receiver unsubscribes implicitly.
    pub fn subscribe(&self) -> mpsc::Receiver<ChangeEvent> {
        let (sender, receiver) = mpsc::channel();
        match self.senders.lock() {
            Ok(mut senders) => senders.push(sender),
            Err(poisoned) => poisoned.into_inner().push(sender),
        }
        receiver
    }

    /// Emit an event to all live subscribers
    pub fn notify(&self, event: ChangeEvent) {
        let mut senders = match self.senders.lock() {
            Ok(senders) => senders,
            Err(poisoned) => poisoned.into_inner(),
        };
        senders.retain(|sender| sender.send(event).is_ok());
    }

    /// Number of live subscribers (after the last prune)
    pub fn subscriber_count(&self) -> usize {
        match self.senders.lock() {
            Ok(senders) => senders.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
