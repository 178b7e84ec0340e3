//! # Content Store
//!
//! Single source of truth for all page content; bridges the in-memory tree
//! and durable storage.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Get/Update/Apply → Persist    (one write per update, no batching)
//!   │                          │
//! Snapshot                  Snapshot
//! ```
//!
//! A snapshot that fails to parse, or carries an unknown schema version, is
//! logged and ignored; the store keeps whatever it already holds (the
//! defaults on first load). Reset restores the built-in tree and deletes the
//! snapshot.

use crate::{Mutation, Storage, StoreError};
use renobook_content::{ContentPatch, SiteContent};
use serde::{Deserialize, Serialize};

/// Storage key the snapshot lives under
pub const CONTENT_KEY: &str = "content";

/// Current snapshot layout version. Load ignores snapshots written with any
/// other version instead of guessing at their shape.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    schema_version: u32,
    content: &'a SiteContent,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    schema_version: u32,
    content: SiteContent,
}

/// Canonical content tree plus its persistence side effect
pub struct ContentStore<S: Storage> {
    content: SiteContent,
    storage: S,
}

impl<S: Storage> ContentStore<S> {
    /// Initialize from storage. Starts from the built-in defaults and
    /// overwrites them with the persisted snapshot when one exists and
    /// parses; a broken snapshot degrades to the defaults, never to a crash.
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            content: SiteContent::default(),
            storage,
        };

        if let Some(raw) = store.storage.read(CONTENT_KEY) {
            match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) if snapshot.schema_version == SCHEMA_VERSION => {
                    store.content = snapshot.content;
                }
                Ok(snapshot) => {
                    tracing::warn!(
                        found = snapshot.schema_version,
                        expected = SCHEMA_VERSION,
                        "Ignoring content snapshot with unknown schema version"
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to parse content snapshot, keeping current content");
                }
            }
        }

        store
    }

    /// Read-only view of the current tree
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Shallow-merge a partial tree: top-level keys present in the patch
    /// wholly replace the current ones. Persists synchronously.
    pub fn update(&mut self, patch: ContentPatch) -> Result<(), StoreError> {
        self.content.merge(patch);
        self.persist()
    }

    /// Apply a field mutation and persist. Returns whether the tree changed;
    /// an unknown id is a silent no-op (still one persistence write, per the
    /// one-write-per-update contract).
    pub fn apply(&mut self, mutation: &Mutation) -> Result<bool, StoreError> {
        let changed = mutation.apply(&mut self.content);
        self.persist()?;
        Ok(changed)
    }

    /// Discard local overrides: restore the built-in tree and delete the
    /// persisted snapshot.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.content = SiteContent::default();
        self.storage.remove(CONTENT_KEY)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&SnapshotRef {
            schema_version: SCHEMA_VERSION,
            content: &self.content,
        })?;
        self.storage.write(CONTENT_KEY, &raw)?;
        tracing::debug!(bytes = raw.len(), "Persisted content snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeroField, MemoryStorage};

    #[test]
    fn test_load_without_snapshot_uses_defaults() {
        let store = ContentStore::load(MemoryStorage::new());
        assert_eq!(store.content(), &SiteContent::default());
    }

    #[test]
    fn test_load_with_invalid_json_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entry(CONTENT_KEY, "{ not json at all");
        let store = ContentStore::load(storage);
        assert_eq!(store.content(), &SiteContent::default());
    }

    #[test]
    fn test_load_rejects_unknown_schema_version() {
        let mut seeded = ContentStore::load(MemoryStorage::new());
        seeded
            .apply(&Mutation::SetHeroField {
                field: HeroField::Subtitle,
                value: "Notebooks".to_string(),
            })
            .unwrap();
        let raw = seeded
            .storage()
            .read(CONTENT_KEY)
            .unwrap()
            .replace("\"schemaVersion\":1", "\"schemaVersion\":99");

        let store = ContentStore::load(MemoryStorage::with_entry(CONTENT_KEY, &raw));
        assert_eq!(store.content(), &SiteContent::default());
    }

    #[test]
    fn test_update_persists_one_snapshot() {
        let mut store = ContentStore::load(MemoryStorage::new());
        assert!(!store.storage().contains(CONTENT_KEY));

        store
            .update(ContentPatch {
                newsletter: Some(renobook_content::NewsletterCopy {
                    title: "Fresh deals".to_string(),
                    description: "Weekly".to_string(),
                }),
                ..ContentPatch::default()
            })
            .unwrap();

        assert!(store.storage().contains(CONTENT_KEY));
        assert_eq!(store.content().newsletter.title, "Fresh deals");
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_snapshot() {
        let mut store = ContentStore::load(MemoryStorage::new());
        store
            .apply(&Mutation::SetHeroField {
                field: HeroField::Subtitle,
                value: "Notebooks".to_string(),
            })
            .unwrap();
        assert!(store.storage().contains(CONTENT_KEY));

        store.reset().unwrap();
        assert_eq!(store.content(), &SiteContent::default());
        assert!(!store.storage().contains(CONTENT_KEY));
    }
}
