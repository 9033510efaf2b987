//! Test-only helpers for layouts, stores and mounted controllers.

use anyhow::{Result, anyhow};

use crate::controller::ChecklistController;
use crate::core::layout::ChecklistLayout;
use crate::io::config::ChecklistConfig;
use crate::io::document::StaticDocument;
use crate::io::store::{KeyValueStore, MemoryStore};

/// Layout with the given steps and one navigation entry per step.
pub fn layout(ids: &[&str]) -> ChecklistLayout {
    layout_with_nav(ids, ids)
}

/// Layout with explicit navigation targets.
pub fn layout_with_nav(ids: &[&str], nav: &[&str]) -> ChecklistLayout {
    ChecklistLayout::new(ids.iter().copied(), nav.iter().copied()).expect("valid test layout")
}

/// Mount `layout` on a fresh [`StaticDocument`] with default config.
pub fn mount<S: KeyValueStore>(
    layout: ChecklistLayout,
    store: S,
) -> ChecklistController<S, StaticDocument> {
    let doc = StaticDocument::from_layout(&layout);
    ChecklistController::mount(layout, store, doc, ChecklistConfig::default()).expect("mount")
}

/// Memory store pre-seeded with `raw` under the default storage key.
pub fn seeded_store(raw: &str) -> RecordingStore {
    RecordingStore::with_inner(
        MemoryStore::new().with_entry(ChecklistConfig::default().storage_key, raw),
    )
}

/// Store that records every successful write and can refuse reads or writes.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    writes: Vec<String>,
    reject_reads: bool,
    reject_writes: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inner(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Every read fails as if storage were blocked.
    pub fn unreadable() -> Self {
        Self {
            reject_reads: true,
            ..Self::default()
        }
    }

    /// Every write fails as if the quota were exceeded.
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    /// Values written so far, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.inner.entry(key)
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.reject_reads {
            return Err(anyhow!("storage unavailable"));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(anyhow!("storage quota exceeded"));
        }
        self.inner.set(key, value)?;
        self.writes.push(value.to_string());
        Ok(())
    }
}
