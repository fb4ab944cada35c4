//! Per-action in-flight guard
//!
//! At most one request per action is outstanding. The ticket returned by
//! [`InFlightGuard::try_acquire`] releases its action on drop, whatever way the
//! action ended.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use super::Action;

#[derive(Debug, Clone)]
pub struct InFlightGuard {
    enabled: bool,
    active: Arc<Mutex<HashSet<Action>>>,
}

/// Proof that an action is running; dropping it frees the action
#[derive(Debug)]
pub struct InFlightTicket {
    action: Action,
    active: Option<Arc<Mutex<HashSet<Action>>>>,
}

impl InFlightGuard {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// `None` when the action is already in flight
    pub fn try_acquire(&self, action: Action) -> Option<InFlightTicket> {
        if !self.enabled {
            return Some(InFlightTicket { action, active: None });
        }

        if !lock(&self.active).insert(action) {
            return None;
        }

        Some(InFlightTicket {
            action,
            active: Some(Arc::clone(&self.active)),
        })
    }

    pub fn is_in_flight(&self, action: Action) -> bool {
        lock(&self.active).contains(&action)
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        if let Some(active) = &self.active {
            lock(active).remove(&self.action);
        }
    }
}

fn lock(active: &Mutex<HashSet<Action>>) -> MutexGuard<'_, HashSet<Action>> {
    active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
