use super::Gateway;
use super::snapshot::Snapshot;
use crate::{
    config::{FarmConfig, IdMode, StorageSettings},
    error::{FarmError, Result},
    model::{Entity, EntityKind, ForeignKey},
};
use chrono::Utc;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Document store holding every record in memory, optionally mirrored to a
/// JSON snapshot file after each write.
pub struct MemoryStore {
    state: RwLock<Snapshot>,
    id_mode: IdMode,
    id_length: usize,
    snapshot_path: Option<PathBuf>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty, unpersisted store with default identifier settings.
    pub fn new() -> Self {
        let settings = StorageSettings::default();
        Self::with_ids(settings.id_mode, settings.id_length)
    }

    pub fn with_ids(id_mode: IdMode, id_length: usize) -> Self {
        Self {
            state: RwLock::new(Snapshot::default()),
            id_mode,
            id_length,
            snapshot_path: None,
        }
    }

    /// Open a store backed by `path`, loading whatever it already holds.
    pub fn open(path: &Path, id_mode: IdMode, id_length: usize) -> Result<Self> {
        let snapshot = Snapshot::load(path)?;
        let records: usize = snapshot.tables.values().map(IndexMap::len).sum();
        tracing::info!(path = %path.display(), records, "Loaded store snapshot");
        Ok(Self {
            state: RwLock::new(snapshot),
            id_mode,
            id_length,
            snapshot_path: Some(path.to_path_buf()),
        })
    }

    pub fn from_config(config: &FarmConfig, project_root: &Path) -> Result<Self> {
        let storage = &config.storage;
        match config.snapshot_path(project_root) {
            Some(path) => Self::open(&path, storage.id_mode, storage.id_length),
            None => Ok(Self::with_ids(storage.id_mode, storage.id_length)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>> {
        self.state
            .read()
            .map_err(|_| FarmError::Storage("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>> {
        self.state
            .write()
            .map_err(|_| FarmError::Storage("store lock poisoned".to_string()))
    }

    fn persist(&self, state: &Snapshot) -> Result<()> {
        match &self.snapshot_path {
            Some(path) => state.save(path),
            None => Ok(()),
        }
    }

    fn generate_id(&self, state: &mut Snapshot, kind: EntityKind) -> String {
        loop {
            let id = match self.id_mode {
                IdMode::Random => format!(
                    "{}{}",
                    kind.id_prefix(),
                    nanoid::format(nanoid::rngs::default, &ALPHABET, self.id_length)
                ),
                IdMode::Sequential => {
                    let counter = state.counters.entry(kind.name().to_string()).or_insert(0);
                    *counter += 1;
                    format!(
                        "{}{:0>width$}",
                        kind.id_prefix(),
                        counter,
                        width = self.id_length
                    )
                }
            };
            // Snapshots written by hand or imported may hold ids without a counter.
            let taken = state
                .tables
                .get(kind.name())
                .is_some_and(|table| table.contains_key(&id));
            if !taken {
                return id;
            }
            tracing::debug!(%kind, id = %id, "Skipping identifier already in use");
        }
    }
}

fn decode<E: Entity>(document: &serde_json::Value) -> Result<E> {
    serde_json::from_value(document.clone()).map_err(|e| {
        FarmError::Storage(format!("Corrupt {} record: {}", E::KIND, e))
    })
}

impl<E: Entity> Gateway<E> for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<E>> {
        let state = self.read()?;
        state
            .tables
            .get(E::KIND.name())
            .and_then(|table| table.get(id))
            .map(decode)
            .transpose()
    }

    fn list_all(&self) -> Result<Vec<E>> {
        let state = self.read()?;
        match state.tables.get(E::KIND.name()) {
            Some(table) => table.values().map(decode).collect(),
            None => Ok(Vec::new()),
        }
    }

    fn list_by_parent(&self, key: ForeignKey, parent_id: &str) -> Result<Vec<E>> {
        let records = Gateway::<E>::list_all(self)?;
        Ok(records
            .into_iter()
            .filter(|record| record.reference(key) == Some(parent_id))
            .collect())
    }

    fn create(&self, mut record: E) -> Result<E> {
        let mut state = self.write()?;
        let id = self.generate_id(&mut state, E::KIND);
        record.assign(id.clone(), Utc::now());
        let document = serde_json::to_value(&record)?;

        let table = state.tables.entry(E::KIND.name().to_string()).or_default();
        if table.contains_key(&id) {
            return Err(FarmError::Storage(format!(
                "{} id already in use: {}",
                E::KIND,
                id
            )));
        }
        table.insert(id.clone(), document);

        if let Err(e) = self.persist(&state) {
            if let Some(table) = state.tables.get_mut(E::KIND.name()) {
                table.shift_remove(&id);
            }
            return Err(e);
        }

        Ok(record)
    }

    fn update(&self, id: &str, mut record: E) -> Result<Option<E>> {
        let mut state = self.write()?;
        record.touch(Utc::now());
        let document = serde_json::to_value(&record)?;

        let Some(slot) = state
            .tables
            .get_mut(E::KIND.name())
            .and_then(|table| table.get_mut(id))
        else {
            return Ok(None);
        };
        let previous = std::mem::replace(slot, document);

        if let Err(e) = self.persist(&state) {
            if let Some(slot) = state
                .tables
                .get_mut(E::KIND.name())
                .and_then(|table| table.get_mut(id))
            {
                *slot = previous;
            }
            return Err(e);
        }

        Ok(Some(record))
    }
}
