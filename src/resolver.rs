//! Relationship resolution for one response-building pass.
//!
//! A [`ResolutionScope`] is created per request and dropped with it. Forward
//! references (a crop's farm, a farm's owner) go through a memo keyed by
//! identifier, so sibling nodes pointing at the same parent cause a single
//! storage `get`. Reverse collections (a farm's crops) are computed from
//! storage on demand with `list_by_parent`; they are never stored on the
//! parent record.

use crate::{
    error::{FarmError, Result},
    model::{Entity, EntityKind, Farm, ForeignKey, User},
    storage::{Gateway, Storage},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-request memo of `get` results for one entity kind.
struct Memo<E> {
    entries: Mutex<HashMap<String, Option<E>>>,
}

impl<E: Entity> Memo<E> {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The lock is held across `fetch`, so concurrent siblings asking for the
    /// same id wait for the first lookup instead of issuing their own.
    fn get_or_fetch<F>(&self, id: &str, fetch: F) -> Result<Option<E>>
    where
        F: FnOnce(&str) -> Result<Option<E>>,
    {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| FarmError::Storage("resolution scope lock poisoned".to_string()))?;

        if let Some(cached) = entries.get(id) {
            tracing::debug!(kind = %E::KIND, id, "Resolved from request scope");
            return Ok(cached.clone());
        }

        tracing::debug!(kind = %E::KIND, id, "Fetching from storage");
        let fetched = fetch(id)?;
        entries.insert(id.to_string(), fetched.clone());
        Ok(fetched)
    }

    fn forget(&self, id: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(id);
        }
    }
}

pub struct ResolutionScope {
    store: Arc<dyn Storage>,
    users: Memo<User>,
    farms: Memo<Farm>,
}

impl ResolutionScope {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            users: Memo::new(),
            farms: Memo::new(),
        }
    }

    pub fn store(&self) -> &dyn Storage {
        self.store.as_ref()
    }

    /// A farm by id, memoized for the rest of the request.
    pub fn find_farm(&self, farm_id: &str) -> Result<Option<Farm>> {
        let store = self.store.as_ref();
        self.farms
            .get_or_fetch(farm_id, |id| Gateway::<Farm>::get(store, id))
    }

    pub fn find_user(&self, user_id: &str) -> Result<Option<User>> {
        let store = self.store.as_ref();
        self.users
            .get_or_fetch(user_id, |id| Gateway::<User>::get(store, id))
    }

    /// The farm `from.farmId` points at.
    pub fn farm(&self, from: EntityKind, farm_id: &str) -> Result<Farm> {
        self.find_farm(farm_id)?
            .ok_or_else(|| dangling(from, ForeignKey::FarmId, farm_id))
    }

    /// The user `from.userId` points at.
    pub fn user(&self, from: EntityKind, user_id: &str) -> Result<User> {
        self.find_user(user_id)?
            .ok_or_else(|| dangling(from, ForeignKey::UserId, user_id))
    }

    /// Drop a memoized record after a mutation in the same request changed it.
    pub fn forget(&self, kind: EntityKind, id: &str) {
        match kind {
            EntityKind::Farm => self.farms.forget(id),
            EntityKind::User => self.users.forget(id),
            _ => {}
        }
    }

    /// Records of kind `E` whose `key` equals `parent_id`.
    pub fn children<E>(&self, key: ForeignKey, parent_id: &str) -> Result<Vec<E>>
    where
        E: Entity,
        dyn Storage: Gateway<E>,
    {
        Gateway::<E>::list_by_parent(self.store.as_ref(), key, parent_id)
    }
}

fn dangling(from: EntityKind, key: ForeignKey, id: &str) -> FarmError {
    tracing::warn!(%from, field = key.field_name(), id, "Dangling reference");
    FarmError::DanglingReference {
        from,
        field: key.field_name(),
        id: id.to_string(),
    }
}
