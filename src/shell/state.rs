use std::sync::Arc;

use crate::modules::diagnostics::counter::RequestCounter;
use crate::modules::diagnostics::health::HealthMonitor;
use crate::modules::expenses::adapters::in_memory::InMemoryExpenseStore;
use crate::modules::expenses::store::ExpenseStore;

/// Everything the handlers share, built once in main and injected into the
/// router. Nothing lives in module-level statics.
#[derive(Clone)]
pub struct AppState {
    pub expenses: Arc<dyn ExpenseStore + Send + Sync>,
    pub counter: Arc<RequestCounter>,
    pub monitor: Arc<HealthMonitor>,
}

impl AppState {
    /// Fresh state: empty store, zeroed counter, uptime starting now.
    pub fn new() -> Self {
        Self {
            expenses: Arc::new(InMemoryExpenseStore::new()),
            counter: Arc::new(RequestCounter::new()),
            monitor: Arc::new(HealthMonitor::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
