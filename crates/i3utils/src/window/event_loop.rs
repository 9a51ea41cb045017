//! Process-wide event loop ownership
//!
//! The GUI toolkit runs a single blocking event loop per process. Whoever
//! holds the [`EventLoopGuard`] owns that loop; a second dialog trying to
//! run while the guard is held gets [`WindowError::EventLoopBusy`] instead of
//! nesting loops. The guard is released when dropped, including on unwind.

use std::sync::atomic::{AtomicBool, Ordering};

use super::WindowError;

static LOOP_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Exclusive ownership of the process-wide event loop
#[derive(Debug)]
pub struct EventLoopGuard {
    _private: (),
}

impl EventLoopGuard {
    /// Claim the event loop
    pub fn acquire() -> Result<Self, WindowError> {
        LOOP_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| WindowError::EventLoopBusy)?;

        log::trace!("Event loop acquired");
        Ok(Self { _private: () })
    }
}

impl Drop for EventLoopGuard {
    fn drop(&mut self) {
        LOOP_ACTIVE.store(false, Ordering::Release);
        log::trace!("Event loop released");
    }
}

/// Whether some dialog currently owns the event loop
pub fn is_active() -> bool {
    LOOP_ACTIVE.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_is_exclusive_until_dropped() {
        let guard = EventLoopGuard::acquire().unwrap();
        assert!(is_active());
        assert!(matches!(EventLoopGuard::acquire(), Err(WindowError::EventLoopBusy)));

        drop(guard);
        assert!(!is_active());

        let again = EventLoopGuard::acquire();
        assert!(again.is_ok());
    }
}
