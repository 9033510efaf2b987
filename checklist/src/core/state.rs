//! In-memory checklist state: completed set and open step.

use crate::core::layout::ChecklistLayout;
use crate::core::snapshot::PersistedSnapshot;

/// Completed step ids plus the single open step id.
///
/// `completed` keeps insertion order so a restored snapshot encodes back to the
/// same text. Each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    completed: Vec<String>,
    open_id: Option<String>,
}

impl ChecklistState {
    /// Defaults for a fresh session: nothing complete, first step open.
    pub fn with_defaults(layout: &ChecklistLayout) -> Self {
        Self {
            completed: Vec::new(),
            open_id: layout.first().map(str::to_string),
        }
    }

    /// Merge a persisted snapshot over the defaults.
    ///
    /// A missing `openId` keeps the default open step. Duplicate completed ids
    /// collapse to their first occurrence.
    pub fn restore(layout: &ChecklistLayout, snapshot: Option<PersistedSnapshot>) -> Self {
        let mut state = Self::with_defaults(layout);
        let Some(snapshot) = snapshot else {
            return state;
        };
        for id in snapshot.completed {
            state.mark_complete(&id);
        }
        if let Some(open_id) = snapshot.open_id {
            state.open_id = Some(open_id);
        }
        state
    }

    /// Add `id` to the completed set. Returns whether membership changed.
    pub fn mark_complete(&mut self, id: &str) -> bool {
        if self.is_complete(id) {
            return false;
        }
        self.completed.push(id.to_string());
        true
    }

    /// Remove `id` from the completed set. Returns whether membership changed.
    pub fn mark_incomplete(&mut self, id: &str) -> bool {
        let before = self.completed.len();
        self.completed.retain(|done| done != id);
        self.completed.len() != before
    }

    pub fn set_open(&mut self, id: Option<&str>) {
        self.open_id = id.map(str::to_string);
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.iter().any(|done| done == id)
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            completed: self.completed.clone(),
            open_id: self.open_id.clone(),
        }
    }
}
