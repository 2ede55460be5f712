use std::sync::Arc;
use std::time::Instant;

use crate::db::WordStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    store: Option<Arc<WordStore>>,
}

impl AppState {
    pub fn new(store: Option<Arc<WordStore>>) -> Self {
        Self {
            started_at: Instant::now(),
            store,
        }
    }

    pub fn store(&self) -> Option<Arc<WordStore>> {
        self.store.clone()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
