//! # Session State
//!
//! Holds the connected account list shared by the connect button and the mint
//! panel. The list is replaced wholesale, never appended to and never cleared.
//! Observers are notified synchronously after every replace so that anything
//! showing "connected" status can re-evaluate it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Ordered list of wallet address strings (0 or 1 entries in practice).
pub type AccountList = Vec<String>;

type Observer = Box<dyn Fn(&[String])>;

#[derive(Default)]
struct Inner {
    accounts: AccountList,
    observers: Vec<Observer>,
}

/// Shared handle to the account list. Cloning shares the same state.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Rc<RefCell<Inner>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> AccountList {
        self.inner.borrow().accounts.clone()
    }

    /// Replace the account list. No validation: any list, including an empty one,
    /// is stored as given.
    pub fn replace(&self, accounts: AccountList) {
        self.inner.borrow_mut().accounts = accounts;

        // Observers may read the session again, so notify on a shared borrow
        let inner = self.inner.borrow();
        for observer in &inner.observers {
            observer(&inner.accounts);
        }
    }

    /// Register an observer called with the new list after each replace.
    ///
    /// Observers may read the session but must not call [`replace`](Self::replace).
    pub fn subscribe(&self, observer: impl Fn(&[String]) + 'static) {
        self.inner.borrow_mut().observers.push(Box::new(observer));
    }

    /// First account, if any.
    pub fn primary(&self) -> Option<String> {
        self.inner.borrow().accounts.first().cloned()
    }

    /// Connected when the first entry exists and is not empty.
    pub fn is_connected(&self) -> bool {
        is_connected(&self.inner.borrow().accounts)
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SessionState")
            .field("accounts", &inner.accounts)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

/// Connected status for an account list snapshot.
pub fn is_connected(accounts: &[String]) -> bool {
    accounts.first().is_some_and(|account| !account.is_empty())
}
