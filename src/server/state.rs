use crate::store::ClimateStore;
use std::sync::Arc;

/// Shared application state: the immutable snapshot behind an `Arc`, cloned
/// cheaply into every request task.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClimateStore>,
}

impl AppState {
    pub fn new(store: Arc<ClimateStore>) -> Self {
        Self { store }
    }
}
