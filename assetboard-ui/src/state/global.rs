//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use assetboard::{Account, Notification, Notifier};

/// Success notifications clear themselves after this long; errors stay until dismissed
const SUCCESS_DISMISS_MS: u32 = 3000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The single notification slot; the newest notification replaces the last
    pub notification: RwSignal<Option<Notification>>,
    /// Account entered on the landing page
    pub account: RwSignal<Account>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        notification: create_rw_signal(None),
        account: create_rw_signal(Account::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Notifier writing into this state's notification slot
    pub fn notifier(&self) -> SignalNotifier {
        SignalNotifier {
            slot: self.notification,
        }
    }

    /// The entered account, or `fallback` when none was entered
    pub fn account_or(&self, fallback: &str) -> Account {
        active_account(self.account.get(), fallback)
    }

    pub fn dismiss(&self) {
        self.notification.set(None);
    }
}

fn active_account(entered: Account, fallback: &str) -> Account {
    if entered.is_empty() {
        Account::from(fallback)
    } else {
        entered
    }
}

/// `Notifier` backed by the root notification signal
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    slot: RwSignal<Option<Notification>>,
}

impl Notifier for SignalNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            web_sys::console::error_1(
                &format!(
                    "{}: {}",
                    notification.message,
                    notification.detail.as_deref().unwrap_or("no detail")
                )
                .into(),
            );
        } else {
            let slot = self.slot;
            let id = notification.id;
            gloo_timers::callback::Timeout::new(SUCCESS_DISMISS_MS, move || {
                slot.update(|current| {
                    if still_showing(current.as_ref(), id) {
                        *current = None;
                    }
                });
            })
            .forget();
        }

        self.slot.set(Some(notification));
    }
}

/// A timed dismissal only clears the notification it was started for
fn still_showing(current: Option<&Notification>, id: uuid::Uuid) -> bool {
    current.is_some_and(|n| n.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_account_fallback() {
        assert_eq!(
            active_account(Account::default(), "dummyAccount"),
            Account::from("dummyAccount")
        );
        assert_eq!(
            active_account(Account::from("0xA"), "dummyAccount"),
            Account::from("0xA")
        );
    }

    #[test]
    fn test_timed_dismiss_skips_newer_notification() {
        let first = Notification::success("Asset submitted successfully");
        let second = Notification::error("Failed to fetch assets");

        assert!(still_showing(Some(&first), first.id));
        assert!(!still_showing(Some(&second), first.id));
        assert!(!still_showing(None, first.id));
    }
}
