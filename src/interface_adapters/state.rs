use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::ports::{Clock, MediaAssetStore};
use crate::use_cases::authenticate::ApiKeyGuard;

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // Any store implementation; PostgreSQL in production, in-memory for local runs and tests.
    pub store: Arc<dyn MediaAssetStore>,
    pub api_key: ApiKeyGuard,
}

impl AppState {
    pub fn new(store: Arc<dyn MediaAssetStore>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_key: ApiKeyGuard::new(api_key),
        }
    }
}

// System clock adapter used by the create use case.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
