//! In-flight guard serializing wallet round trips.

use std::cell::Cell;

use crate::error::{AppError, Result};

/// Marks one operation as waiting on the wallet. At most one ticket exists at a time.
#[derive(Debug)]
pub struct InFlight {
    operation: &'static str,
    busy: Cell<bool>,
}

impl InFlight {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            busy: Cell::new(false),
        }
    }

    /// Take the ticket, or fail with [`AppError::InFlight`] if another call holds it.
    pub fn begin(&self) -> Result<Ticket<'_>> {
        if self.busy.replace(true) {
            return Err(AppError::InFlight(self.operation));
        }
        Ok(Ticket { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Releases the guard when dropped, whether the call succeeded or failed.
#[derive(Debug)]
pub struct Ticket<'a> {
    guard: &'a InFlight,
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        self.guard.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected() {
        let guard = InFlight::new("connect");
        let ticket = guard.begin().unwrap();

        assert!(guard.is_busy());
        assert_eq!(guard.begin().unwrap_err(), AppError::InFlight("connect"));

        drop(ticket);
        assert!(!guard.is_busy());
        assert!(guard.begin().is_ok());
    }
}
