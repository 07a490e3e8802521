//! Storage gateway for farm records.
//!
//! The resolvers only ever talk to [`Storage`], the union of one
//! [`Gateway`] per entity kind. The persistence engine behind it is
//! replaceable; [`MemoryStore`] is the implementation shipped with the crate.
//!
//! ## Contract
//!
//! - `get` returns `Ok(None)` for an unknown identifier.
//! - `create` assigns the identifier and creation timestamp.
//! - `update` replaces a whole record and refreshes server timestamps;
//!   `Ok(None)` when the identifier is unknown.
//! - A read issued after a completed write observes that write.

mod memory;
mod snapshot;

pub use memory::MemoryStore;

use crate::{
    error::Result,
    model::{
        Crop, Entity, EntityKind, Farm, Field, ForeignKey, IoTDevice, Labor, Livestock,
        MachineryEquipment, User, WeatherData,
    },
};

/// CRUD access to records of one kind.
pub trait Gateway<E: Entity>: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<E>>;

    fn list_all(&self) -> Result<Vec<E>>;

    /// Records whose `key` equals `parent_id`.
    fn list_by_parent(&self, key: ForeignKey, parent_id: &str) -> Result<Vec<E>>;

    fn create(&self, record: E) -> Result<E>;

    fn update(&self, id: &str, record: E) -> Result<Option<E>>;
}

/// Every gateway the farm graph needs, bundled for injection as one object.
pub trait Storage:
    Gateway<User>
    + Gateway<Farm>
    + Gateway<Crop>
    + Gateway<Livestock>
    + Gateway<WeatherData>
    + Gateway<IoTDevice>
    + Gateway<Field>
    + Gateway<Labor>
    + Gateway<MachineryEquipment>
{
    /// Whether a record of `kind` with this identifier exists.
    fn exists(&self, kind: EntityKind, id: &str) -> Result<bool> {
        let found = match kind {
            EntityKind::User => Gateway::<User>::get(self, id)?.is_some(),
            EntityKind::Farm => Gateway::<Farm>::get(self, id)?.is_some(),
            EntityKind::Crop => Gateway::<Crop>::get(self, id)?.is_some(),
            EntityKind::Livestock => Gateway::<Livestock>::get(self, id)?.is_some(),
            EntityKind::WeatherData => Gateway::<WeatherData>::get(self, id)?.is_some(),
            EntityKind::IoTDevice => Gateway::<IoTDevice>::get(self, id)?.is_some(),
            EntityKind::Field => Gateway::<Field>::get(self, id)?.is_some(),
            EntityKind::Labor => Gateway::<Labor>::get(self, id)?.is_some(),
            EntityKind::MachineryEquipment => {
                Gateway::<MachineryEquipment>::get(self, id)?.is_some()
            }
        };
        Ok(found)
    }
}

impl<T> Storage for T where
    T: Gateway<User>
        + Gateway<Farm>
        + Gateway<Crop>
        + Gateway<Livestock>
        + Gateway<WeatherData>
        + Gateway<IoTDevice>
        + Gateway<Field>
        + Gateway<Labor>
        + Gateway<MachineryEquipment>
        + ?Sized
{
}
