//! Single-flight gating for one kind of request.

use std::sync::atomic::{AtomicBool, Ordering};

/// At most one in-flight operation per flag.
#[derive(Debug, Default)]
pub struct FlightFlag {
    busy: AtomicBool,
}

impl FlightFlag {
    /// Create an idle flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag, or `None` if an operation is already in flight.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_client::FlightFlag;
    ///
    /// let flag = FlightFlag::new();
    /// let guard = flag.try_begin().unwrap();
    /// assert!(flag.try_begin().is_none());
    /// drop(guard);
    /// assert!(!flag.is_busy());
    /// ```
    pub fn try_begin(&self) -> Option<FlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard { flag: self })
    }

    /// Whether an operation holds the flag.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its flag when dropped, whatever the operation's outcome.
#[derive(Debug)]
pub struct FlightGuard<'a> {
    flag: &'a FlightFlag,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}
