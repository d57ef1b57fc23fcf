//! Snapshot sharing for hosts that configure and render on different threads
//!
//! A single writer publishes whole `TransformManager` values; render passes
//! take an immutable `Arc` snapshot up front and never observe a half-applied
//! update.

use std::sync::{Arc, RwLock};

use super::manager::TransformManager;

#[derive(Debug, Clone, Default)]
pub struct SharedTransform {
    current: Arc<RwLock<Arc<TransformManager>>>,
}

impl SharedTransform {
    pub fn new(manager: TransformManager) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(manager))) }
    }

    /// The currently published configuration.
    ///
    /// The lock is only held long enough to clone the `Arc`.
    pub fn snapshot(&self) -> Arc<TransformManager> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Apply `edit` to a copy of the current configuration and publish it.
    ///
    /// Readers holding an older snapshot keep using it until they ask again.
    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut TransformManager),
    {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut next = TransformManager::clone(&guard);
        edit(&mut next);
        *guard = Arc::new(next);
    }

    /// Replace the configuration wholesale.
    pub fn publish(&self, manager: TransformManager) {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(manager);
    }
}
