//! Scoped registration of the global pointer listener

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Tracks how many pointer listeners are currently registered
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Arc<AtomicUsize>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the guard drops
    pub fn acquire(&self) -> PointerListener {
        let count = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Pointer listener registered ({} active)", count);
        PointerListener {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of live registrations
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Guard for one registered pointer listener
#[derive(Debug)]
pub struct PointerListener {
    active: Arc<AtomicUsize>,
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        let count = self.active.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Pointer listener released ({} active)", count);
    }
}
