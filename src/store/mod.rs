//! In-memory record store with snapshot persistence.

use uuid::Uuid;

use crate::{
    domain::BiddingRecord,
    errors::LicitError,
    storage::{Result, StorageBackend},
};

/// Owned, injectable record collection.
///
/// Loads the persisted collection once at construction and holds it in
/// memory; every read goes through the in-memory snapshot. Mutations do not
/// persist by themselves: the owning layer calls [`RecordStore::save_snapshot`]
/// after each successful mutation, so persistence can later become
/// incremental without touching the mutation API.
pub struct RecordStore {
    records: Vec<BiddingRecord>,
    storage: Box<dyn StorageBackend>,
}

impl RecordStore {
    /// Loads the store from `storage`. A load failure (unreadable or
    /// malformed data) is logged and recovered by starting empty; it is
    /// never fatal.
    pub fn load(storage: Box<dyn StorageBackend>) -> Self {
        let records = match storage.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("failed to load record collection, starting empty: {err}");
                Vec::new()
            }
        };
        Self { records, storage }
    }

    pub fn records(&self) -> &[BiddingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&BiddingRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Inserts a new record at the front of the collection (newest first).
    pub fn add(&mut self, record: BiddingRecord) {
        self.records.insert(0, record);
    }

    /// Replaces the stored record carrying the same id. Records are always
    /// replaced whole, never patched.
    pub fn replace(&mut self, record: BiddingRecord) -> Result<()> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(LicitError::RecordNotFound(record.id)),
        }
    }

    /// Removes the record with `id`, returning it. Confirmation before
    /// destructive deletion is the caller's responsibility.
    pub fn remove(&mut self, id: Uuid) -> Result<BiddingRecord> {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(LicitError::RecordNotFound(id)),
        }
    }

    /// Persists the entire collection to the backing storage.
    pub fn save_snapshot(&self) -> Result<()> {
        self.storage.save(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::RecordService;
    use crate::domain::BiddingRecord;
    use std::sync::Mutex;

    /// Backend stub that keeps the snapshot in memory.
    struct MemoryBackend {
        snapshot: Mutex<Vec<BiddingRecord>>,
    }

    impl MemoryBackend {
        fn new(records: Vec<BiddingRecord>) -> Self {
            Self {
                snapshot: Mutex::new(records),
            }
        }
    }

    impl StorageBackend for MemoryBackend {
        fn save(&self, records: &[BiddingRecord]) -> Result<()> {
            *self.snapshot.lock().unwrap() = records.to_vec();
            Ok(())
        }

        fn load(&self) -> Result<Vec<BiddingRecord>> {
            Ok(self.snapshot.lock().unwrap().clone())
        }
    }

    fn empty_store() -> RecordStore {
        RecordStore::load(Box::new(MemoryBackend::new(Vec::new())))
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = empty_store();
        let first = RecordService::create(BiddingRecord::template());
        let second = RecordService::create(BiddingRecord::template());
        store.add(first.clone());
        store.add(second.clone());
        assert_eq!(store.records()[0].id, second.id);
        assert_eq!(store.records()[1].id, first.id);
    }

    #[test]
    fn replace_swaps_the_whole_record() {
        let mut store = empty_store();
        let record = RecordService::create(BiddingRecord::template());
        store.add(record.clone());
        let mut edited = record.clone();
        edited.entidade = "SENAI".to_string();
        store.replace(edited).expect("replace record");
        assert_eq!(store.get(record.id).unwrap().entidade, "SENAI");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_unknown_id_is_record_not_found() {
        let mut store = empty_store();
        let ghost = RecordService::create(BiddingRecord::template());
        let err = store.replace(ghost.clone()).expect_err("must fail");
        assert!(matches!(err, LicitError::RecordNotFound(id) if id == ghost.id));
    }

    #[test]
    fn remove_returns_the_deleted_record() {
        let mut store = empty_store();
        let record = RecordService::create(BiddingRecord::template());
        store.add(record.clone());
        let removed = store.remove(record.id).expect("remove record");
        assert_eq!(removed.id, record.id);
        assert!(store.is_empty());
    }

    #[test]
    fn save_snapshot_persists_the_full_collection() {
        let mut store = empty_store();
        store.add(RecordService::create(BiddingRecord::template()));
        store.save_snapshot().expect("save snapshot");
        let reloaded = RecordStore::load(Box::new(MemoryBackend::new(
            store.storage.load().unwrap(),
        )));
        assert_eq!(reloaded.len(), 1);
    }
}
