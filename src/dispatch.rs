//! Entity operations shared by every kind.
//!
//! Each GraphQL root field is a thin call into one of these functions. Writes
//! follow a fixed order: structural checks on the input, target lookup
//! (updates only), referential checks, then the single storage write. Any
//! failure before the write leaves storage untouched.

use crate::{
    error::{FarmError, Result},
    model::{CreateInput, Entity, ForeignKey, UpdateInput},
    storage::{Gateway, Storage},
    validation::{check_create, check_patch, check_references, validate_id},
};

/// One record by identifier; `NotFound` when there is none.
pub fn fetch<E, S>(store: &S, id: &str) -> Result<E>
where
    E: Entity,
    S: Gateway<E> + ?Sized,
{
    Gateway::<E>::get(store, id)?.ok_or_else(|| FarmError::not_found(E::KIND, id))
}

pub fn list<E, S>(store: &S) -> Result<Vec<E>>
where
    E: Entity,
    S: Gateway<E> + ?Sized,
{
    Gateway::<E>::list_all(store)
}

/// Records whose `key` equals `parent_id`. An unknown parent yields an empty list.
pub fn list_by<E, S>(store: &S, key: ForeignKey, parent_id: &str) -> Result<Vec<E>>
where
    E: Entity,
    S: Gateway<E> + ?Sized,
{
    Gateway::<E>::list_by_parent(store, key, parent_id)
}

pub fn create<I, S>(store: &S, input: I) -> Result<I::Entity>
where
    I: CreateInput,
    S: Storage + Gateway<I::Entity> + ?Sized,
{
    let kind = <I::Entity as Entity>::KIND;
    check_create(&input)?;
    check_references(store, kind, &input)?;

    let created = Gateway::<I::Entity>::create(store, input.into_record())?;
    tracing::info!(%kind, id = created.id(), "Created record");
    Ok(created)
}

pub fn update<P, S>(store: &S, id: &str, patch: P) -> Result<P::Entity>
where
    P: UpdateInput,
    S: Storage + Gateway<P::Entity> + ?Sized,
{
    let kind = <P::Entity as Entity>::KIND;
    validate_id(kind.descriptor().id_field, id)?;
    check_patch(&patch)?;

    let existing: P::Entity = fetch(store, id)?;
    check_references(store, kind, &patch)?;

    let merged = patch.merge(existing);
    let updated = Gateway::<P::Entity>::update(store, id, merged)?
        .ok_or_else(|| FarmError::not_found(kind, id))?;
    tracing::info!(%kind, id, "Updated record");
    Ok(updated)
}
