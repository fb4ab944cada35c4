//! In-memory document
//!
//! Holds form values, checkboxes, list containers, shown notifications and the
//! navigation history. Used by the binary and by tests in place of a browser.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::utils::errors::{BridgeError, Result};
use super::{ids, Document};

/// Form state as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub values: HashMap<String, String>,
    #[serde(default)]
    pub checked: HashMap<String, bool>,
}

#[derive(Debug, Default)]
struct DocumentState {
    values: HashMap<String, String>,
    checked: HashMap<String, bool>,
    lists: HashMap<String, Vec<String>>,
    alerts: Vec<String>,
    navigations: Vec<String>,
}

/// Thread-safe in-memory [`Document`]
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    /// An empty document with no elements at all
    pub fn new() -> Self {
        Self::default()
    }

    /// A document carrying every element of the admin page, all blank
    pub fn standard() -> Self {
        let document = Self::new();
        {
            let mut state = document.lock();
            for id in ids::TEXT_FIELDS {
                state.values.insert(id.to_string(), String::new());
            }
            for id in ids::CHECKBOXES {
                state.checked.insert(id.to_string(), false);
            }
            for id in ids::LISTS {
                state.lists.insert(id.to_string(), Vec::new());
            }
        }
        document
    }

    /// The admin page with the snapshot's values filled in
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let document = Self::standard();
        for (id, value) in &snapshot.values {
            document.set_value(id, value);
        }
        for (id, checked) in &snapshot.checked {
            document.set_checked(id, *checked);
        }
        document
    }

    /// Load a TOML form snapshot from disk
    pub fn load_snapshot(path: &Path) -> Result<FormSnapshot> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: FormSnapshot = toml::from_str(&raw)
            .map_err(|e| BridgeError::Snapshot(format!("{}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            values = snapshot.values.len(),
            checked = snapshot.checked.len(),
            "Loaded form snapshot"
        );
        Ok(snapshot)
    }

    pub fn with_value(self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    pub fn with_checked(self, id: &str, checked: bool) -> Self {
        self.set_checked(id, checked);
        self
    }

    pub fn with_list(self, id: &str, items: &[&str]) -> Self {
        self.lock()
            .lists
            .insert(id.to_string(), items.iter().map(|item| item.to_string()).collect());
        self
    }

    pub fn set_value(&self, id: &str, value: &str) {
        self.lock().values.insert(id.to_string(), value.to_string());
    }

    pub fn set_checked(&self, id: &str, checked: bool) {
        self.lock().checked.insert(id.to_string(), checked);
    }

    /// Items of a container, `None` when the container does not exist
    pub fn list(&self, id: &str) -> Option<Vec<String>> {
        self.lock().lists.get(id).cloned()
    }

    /// Every notification shown so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.lock().alerts.last().cloned()
    }

    /// Every page navigated to, oldest first
    pub fn navigations(&self) -> Vec<String> {
        self.lock().navigations.clone()
    }

    pub fn current_page(&self) -> Option<String> {
        self.lock().navigations.last().cloned()
    }

    /// Names of the containers, sorted
    pub fn list_ids(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().lists.keys().cloned().collect();
        names.sort();
        names
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Document for MemoryDocument {
    fn value(&self, id: &str) -> Result<String> {
        self.lock()
            .values
            .get(id)
            .cloned()
            .ok_or_else(|| BridgeError::element_not_found(id))
    }

    fn checked(&self, id: &str) -> Result<bool> {
        self.lock()
            .checked
            .get(id)
            .copied()
            .ok_or_else(|| BridgeError::element_not_found(id))
    }

    fn clear(&self, id: &str) -> Result<()> {
        let mut state = self.lock();
        let list = state.lists.get_mut(id).ok_or_else(|| BridgeError::element_not_found(id))?;
        list.clear();
        Ok(())
    }

    fn append_item(&self, id: &str, text: &str) -> Result<()> {
        let mut state = self.lock();
        let list = state.lists.get_mut(id).ok_or_else(|| BridgeError::element_not_found(id))?;
        list.push(text.to_string());
        Ok(())
    }

    fn alert(&self, message: &str) {
        debug!(message = message, "Alert shown");
        self.lock().alerts.push(message.to_string());
    }

    fn navigate(&self, page: &str) {
        debug!(page = page, "Navigating");
        self.lock().navigations.push(page.to_string());
    }
}
