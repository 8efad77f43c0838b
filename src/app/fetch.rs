//! Per-view fetch state

use std::sync::{Arc, Mutex};

use crate::registry::RegistryError;

/// Lifecycle of a view's single outstanding request
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Slot a spawned request writes its result into. Every fetch installs a
/// fresh slot, so a response to a superseded navigation lands in an
/// orphaned slot and is dropped with it.
pub type ResultSlot<T> = Arc<Mutex<Option<Result<T, RegistryError>>>>;

pub fn new_slot<T>() -> ResultSlot<T> {
    Arc::new(Mutex::new(None))
}
