//! Data models for the farm graph.
//!
//! - [`EntityKind`] and [`EntityDescriptor`]: the nine record types and their
//!   writable field layout
//! - [`Entity`]: the trait every stored record implements
//! - Records: [`User`], [`Farm`], [`Crop`], [`Livestock`], [`WeatherData`],
//!   [`IoTDevice`], [`Field`], [`Labor`], [`MachineryEquipment`]
//! - Value types: [`Location`], [`NutrientLevel`], [`JsonObject`]
//! - Create and update inputs, see [`input`]

mod entities;
pub mod input;
mod kind;
mod types;

pub use entities::{
    Crop, Farm, Field, IoTDevice, Labor, Livestock, MachineryEquipment, User, WeatherData,
};
pub use input::{CreateInput, FieldValue, Fields, UpdateInput};
pub use kind::{Entity, EntityDescriptor, EntityKind, ForeignKey};
pub use types::{CropStage, JsonObject, Location, NutrientLevel, Role, Unit};
