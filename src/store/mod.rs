//! In-memory record store
//!
//! Caches parsed records per [`StoreKey`]. Collections are loaded and
//! persisted through a [`Backend`]; in between, callers mutate them through
//! `&mut self`, so a mutation is never observed half-applied.
//!
//! Every cached record carries a [`RecordId`] assigned by the store, both for
//! records loaded by [`RecordStore::fetch`] and for those created by
//! [`RecordStore::add`]. Ids are not persisted and change on every fetch.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use crate::error::{HulkError, Result};
use crate::model::{AliasRecord, EnvRecord};

/// Identifier assigned to a record when it enters the store
pub type RecordId = Uuid;

/// The fixed set of collection keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKey {
    Aliases,
    Env,
    BashRc,
}

impl StoreKey {
    pub const ALL: [StoreKey; 3] = [StoreKey::Aliases, StoreKey::Env, StoreKey::BashRc];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Aliases => "aliases",
            StoreKey::Env => "env",
            StoreKey::BashRc => "bashrc",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoreKey {
    type Err = HulkError;

    fn from_str(s: &str) -> Result<Self> {
        StoreKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| HulkError::UnknownKey(s.to_string()))
    }
}

/// A record of any collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Alias(AliasRecord),
    Env(EnvRecord),
    /// Unparsed line (bashrc)
    Raw(String),
}

impl Record {
    pub fn as_alias(&self) -> Option<&AliasRecord> {
        match self {
            Record::Alias(record) => Some(record),
            _ => None,
        }
    }

    fn is_heading_titled(&self, title: &str) -> bool {
        matches!(self, Record::Alias(r) if r.heading_title() == Some(title))
    }

    fn is_heading(&self) -> bool {
        matches!(self, Record::Alias(AliasRecord::Heading { .. }))
    }

    fn is_blank(&self) -> bool {
        match self {
            Record::Alias(r) => r.is_blank(),
            Record::Env(EnvRecord::Line { text, .. }) | Record::Raw(text) => {
                text.trim().is_empty()
            }
            Record::Env(_) => false,
        }
    }
}

/// A record together with its store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub record: Record,
}

impl StoredRecord {
    fn new(record: Record) -> Self {
        Self {
            id: Uuid::new_v4(),
            record,
        }
    }
}

/// Source and sink of store collections.
pub trait Backend {
    /// Load the full collection for `key`.
    fn retrieve(&self, key: StoreKey) -> Result<Vec<Record>>;

    /// Write the full collection for `key`.
    fn persist(&self, key: StoreKey, records: &[Record]) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn retrieve(&self, key: StoreKey) -> Result<Vec<Record>> {
        (**self).retrieve(key)
    }

    fn persist(&self, key: StoreKey, records: &[Record]) -> Result<()> {
        (**self).persist(key, records)
    }
}

/// Record store over a [`Backend`]
pub struct RecordStore<B> {
    backend: B,
    collections: HashMap<StoreKey, Vec<StoredRecord>>,
}

impl<B: Backend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            collections: HashMap::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load `key` from the backend, replacing any cached collection.
    pub fn fetch(&mut self, key: StoreKey) -> Result<&[StoredRecord]> {
        let records: Vec<StoredRecord> = self
            .backend
            .retrieve(key)?
            .into_iter()
            .map(StoredRecord::new)
            .collect();
        tracing::debug!(%key, count = records.len(), "fetched collection");

        let slot = self.collections.entry(key).or_default();
        *slot = records;
        Ok(slot.as_slice())
    }

    /// Insert an alias record and return its new id.
    ///
    /// An alias goes after the last non-blank line of the section opened by
    /// the heading titled like its group (right after the heading if the
    /// section is empty), or at the top when no such heading exists. Headings
    /// and plain lines are appended. Only a fetched aliases collection
    /// accepts records; otherwise `None` is returned and nothing changes.
    pub fn add(&mut self, key: StoreKey, record: AliasRecord) -> Option<RecordId> {
        if key != StoreKey::Aliases {
            tracing::debug!(%key, "add ignored for non-alias collection");
            return None;
        }

        let Some(list) = self.collections.get_mut(&key) else {
            tracing::debug!(%key, "add ignored for unfetched collection");
            return None;
        };
        let index = match record.group() {
            Some(group) => insertion_index(list, group),
            None => list.len(),
        };

        let stored = StoredRecord::new(Record::Alias(record));
        let id = stored.id;
        list.insert(index, stored);
        tracing::debug!(%key, %id, index, "added record");

        Some(id)
    }

    /// The cached collection for `key`, if fetched.
    pub fn get(&self, key: StoreKey) -> Option<&[StoredRecord]> {
        self.collections.get(&key).map(Vec::as_slice)
    }

    /// Look up a single record by id.
    pub fn get_by_id(&self, key: StoreKey, id: RecordId) -> Option<&StoredRecord> {
        self.collections.get(&key)?.iter().find(|r| r.id == id)
    }

    /// Remove a record by id, returning whether it was present.
    pub fn delete(&mut self, key: StoreKey, id: RecordId) -> bool {
        let Some(list) = self.collections.get_mut(&key) else {
            return false;
        };
        match list.iter().position(|r| r.id == id) {
            Some(index) => {
                list.remove(index);
                tracing::debug!(%key, %id, "deleted record");
                true
            }
            None => false,
        }
    }

    /// Persist the full cached collection for `key` through the backend.
    ///
    /// Saving a key that was never loaded is an error rather than a write of
    /// an empty file.
    pub fn save(&self, key: StoreKey) -> Result<()> {
        let list = self.collections.get(&key).ok_or(HulkError::NotLoaded(key))?;
        let records: Vec<Record> = list.iter().map(|r| r.record.clone()).collect();
        self.backend.persist(key, &records)
    }

    /// Keys with a cached collection.
    pub fn keys(&self) -> BTreeSet<StoreKey> {
        self.collections.keys().copied().collect()
    }
}

fn insertion_index(list: &[StoredRecord], group: &str) -> usize {
    let Some(heading) = list.iter().position(|r| r.record.is_heading_titled(group)) else {
        return 0;
    };

    let mut index = heading + 1;
    for (offset, stored) in list[heading + 1..].iter().enumerate() {
        if stored.record.is_heading() {
            break;
        }
        if !stored.record.is_blank() {
            index = heading + offset + 2;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{AliasParser, Parser};
    use std::cell::RefCell;

    /// Backend serving fixed alias content and recording what gets persisted
    struct MemoryBackend {
        aliases: String,
        persisted: RefCell<Vec<Vec<Record>>>,
    }

    impl MemoryBackend {
        fn new(aliases: &str) -> Self {
            Self {
                aliases: aliases.to_string(),
                persisted: RefCell::new(Vec::new()),
            }
        }
    }

    impl Backend for MemoryBackend {
        fn retrieve(&self, key: StoreKey) -> Result<Vec<Record>> {
            match key {
                StoreKey::Aliases => Ok(AliasParser::new()
                    .parse(&self.aliases)
                    .into_iter()
                    .map(Record::Alias)
                    .collect()),
                _ => Err(HulkError::Unmapped {
                    key,
                    operation: "retrieval",
                }),
            }
        }

        fn persist(&self, _key: StoreKey, records: &[Record]) -> Result<()> {
            self.persisted.borrow_mut().push(records.to_vec());
            Ok(())
        }
    }

    const SAMPLE: &str = "# Git\nalias gs=\"git status\"\nalias gd=\"git diff\"\n\n# System\nalias ll=\"ls -la\"";

    fn names(store: &RecordStore<MemoryBackend>) -> Vec<String> {
        store
            .get(StoreKey::Aliases)
            .unwrap()
            .iter()
            .map(|r| match &r.record {
                Record::Alias(AliasRecord::Alias { name, .. }) => name.clone(),
                Record::Alias(AliasRecord::Heading { title, .. }) => format!("#{}", title),
                Record::Alias(AliasRecord::Line { text, .. }) => text.clone(),
                other => panic!("unexpected record {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_key_allow_list() {
        assert_eq!("aliases".parse::<StoreKey>().unwrap(), StoreKey::Aliases);
        assert_eq!("bashrc".parse::<StoreKey>().unwrap(), StoreKey::BashRc);
        assert!(matches!(
            "profile".parse::<StoreKey>(),
            Err(HulkError::UnknownKey(ref k)) if k == "profile"
        ));
    }

    #[test]
    fn test_fetch_replaces_wholesale() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        assert!(store.keys().is_empty());

        let first_ids: Vec<_> = store
            .fetch(StoreKey::Aliases)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        store.add(StoreKey::Aliases, AliasRecord::alias("gp", "git push", "Git"));
        assert_eq!(store.get(StoreKey::Aliases).unwrap().len(), 7);

        let refetched = store.fetch(StoreKey::Aliases).unwrap();
        assert_eq!(refetched.len(), 6);
        assert!(refetched.iter().all(|r| !first_ids.contains(&r.id)));
        assert_eq!(store.keys().into_iter().collect::<Vec<_>>(), vec![StoreKey::Aliases]);
    }

    #[test]
    fn test_fetch_unmapped_key() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        assert!(matches!(
            store.fetch(StoreKey::Env),
            Err(HulkError::Unmapped { key: StoreKey::Env, .. })
        ));
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_add_after_last_record_of_group() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();

        store.add(StoreKey::Aliases, AliasRecord::alias("gp", "git push", "Git"));

        assert_eq!(
            names(&store),
            vec!["#Git", "gs", "gd", "gp", "", "#System", "ll"]
        );
    }

    #[test]
    fn test_add_to_empty_section_goes_after_heading() {
        let mut store = RecordStore::new(MemoryBackend::new("# Docker\n\n# Git\nalias gs=git"));
        store.fetch(StoreKey::Aliases).unwrap();

        store.add(StoreKey::Aliases, AliasRecord::alias("dc", "docker compose", "Docker"));

        assert_eq!(names(&store), vec!["#Docker", "dc", "", "#Git", "gs"]);
    }

    #[test]
    fn test_add_to_last_section() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();

        store.add(StoreKey::Aliases, AliasRecord::alias("la", "ls -A", "System"));

        assert_eq!(names(&store).last().unwrap(), "la");
    }

    #[test]
    fn test_add_unknown_group_prepends() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();

        store.add(StoreKey::Aliases, AliasRecord::alias("k", "kubectl", "Kube"));

        assert_eq!(names(&store)[0], "k");
    }

    #[test]
    fn test_add_heading_appends() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();

        store.add(StoreKey::Aliases, AliasRecord::heading("Kube"));

        assert_eq!(names(&store).last().unwrap(), "#Kube");
    }

    #[test]
    fn test_add_other_key_is_noop() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        assert!(store
            .add(StoreKey::Env, AliasRecord::alias("a", "b", "General"))
            .is_none());
        assert!(store.get(StoreKey::Env).is_none());
    }

    #[test]
    fn test_get_by_id_and_delete() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();

        let id = store
            .add(StoreKey::Aliases, AliasRecord::alias("gp", "git push", "Git"))
            .unwrap();
        let found = store.get_by_id(StoreKey::Aliases, id).unwrap();
        assert_eq!(found.record.as_alias().and_then(|r| r.name()), Some("gp"));

        assert!(store.delete(StoreKey::Aliases, id));
        assert!(store.get_by_id(StoreKey::Aliases, id).is_none());
        assert!(!names(&store).contains(&"gp".to_string()));
        assert!(!store.delete(StoreKey::Aliases, id));
    }

    #[test]
    fn test_delete_unfetched_key() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        assert!(!store.delete(StoreKey::Aliases, Uuid::new_v4()));
    }

    #[test]
    fn test_save_passes_full_list() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));
        store.fetch(StoreKey::Aliases).unwrap();
        store.add(StoreKey::Aliases, AliasRecord::alias("gp", "git push", "Git"));

        store.save(StoreKey::Aliases).unwrap();

        let persisted = store.backend().persisted.borrow();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].len(), 7);
        assert_eq!(persisted[0][3].as_alias().and_then(|r| r.name()), Some("gp"));
    }

    #[test]
    fn test_add_before_fetch_is_rejected() {
        let mut store = RecordStore::new(MemoryBackend::new(SAMPLE));

        assert!(store
            .add(StoreKey::Aliases, AliasRecord::alias("gp", "git push", "Git"))
            .is_none());
        assert!(store.keys().is_empty());
        assert!(matches!(
            store.save(StoreKey::Aliases),
            Err(HulkError::NotLoaded(StoreKey::Aliases))
        ));
        assert!(store.backend().persisted.borrow().is_empty());
    }

    #[test]
    fn test_save_unloaded_key_fails() {
        let store = RecordStore::new(MemoryBackend::new(SAMPLE));
        assert!(matches!(
            store.save(StoreKey::Aliases),
            Err(HulkError::NotLoaded(StoreKey::Aliases))
        ));
        assert!(store.backend().persisted.borrow().is_empty());
    }
}
