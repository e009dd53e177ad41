use std::sync::atomic::{AtomicU64, Ordering};

/// Cumulative count of handled API calls since process start.
///
/// Static assets and the root page do not touch the counter; every `/api`
/// handler records exactly one call.
#[derive(Debug, Default)]
pub struct RequestCounter {
    handled: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one handled call and returns how many were handled before it.
    ///
    /// The health report shows the returned value as-is (a fresh process
    /// reports zero), while the load-test response adds one to report its
    /// own ordinal.
    pub fn record(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::Relaxed)
    }
}
