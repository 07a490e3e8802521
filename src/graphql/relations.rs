//! Relationship fields of the farm graph.
//!
//! Forward references (`farm`, `user`) resolve through the request's
//! [`ResolutionScope`](crate::resolver::ResolutionScope) memo and are
//! nullable, so a dangling key nulls that one field and reports the error at
//! its path. Reverse collections are computed from storage when selected.
//!
//! Identifier and foreign key columns are plain strings on the records and
//! are published here as `ID!`.

use async_graphql::{ComplexObject, Context, ID, Result};

use super::errors::ResultExt;
use super::scope;
use crate::model::{
    Crop, EntityKind, Farm, Field, ForeignKey, IoTDevice, Labor, Livestock, MachineryEquipment,
    User, WeatherData,
};

#[ComplexObject]
impl User {
    async fn user_id(&self) -> ID {
        ID(self.user_id.clone())
    }

    /// Farms owned by this user.
    async fn farms(&self, ctx: &Context<'_>) -> Result<Vec<Farm>> {
        scope(ctx)?
            .children(ForeignKey::UserId, &self.user_id)
            .extended()
    }
}

#[ComplexObject]
impl Farm {
    async fn farm_id(&self) -> ID {
        ID(self.farm_id.clone())
    }

    async fn user_id(&self) -> ID {
        ID(self.user_id.clone())
    }

    /// The owning user.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        scope(ctx)?
            .user(EntityKind::Farm, &self.user_id)
            .map(Some)
            .extended()
    }

    async fn crops(&self, ctx: &Context<'_>) -> Result<Vec<Crop>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn livestocks(&self, ctx: &Context<'_>) -> Result<Vec<Livestock>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn weather_data(&self, ctx: &Context<'_>) -> Result<Vec<WeatherData>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn iot_devices(&self, ctx: &Context<'_>) -> Result<Vec<IoTDevice>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn fields(&self, ctx: &Context<'_>) -> Result<Vec<Field>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn labors(&self, ctx: &Context<'_>) -> Result<Vec<Labor>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }

    async fn machinery_equipments(&self, ctx: &Context<'_>) -> Result<Vec<MachineryEquipment>> {
        scope(ctx)?
            .children(ForeignKey::FarmId, &self.farm_id)
            .extended()
    }
}

/// `farm` and `user` for kinds that carry both keys.
macro_rules! farm_and_user {
    ($entity:ident, $id:ident) => {
        #[ComplexObject]
        impl $entity {
            async fn $id(&self) -> ID {
                ID(self.$id.clone())
            }

            async fn farm_id(&self) -> ID {
                ID(self.farm_id.clone())
            }

            async fn user_id(&self) -> ID {
                ID(self.user_id.clone())
            }

            async fn farm(&self, ctx: &Context<'_>) -> Result<Option<Farm>> {
                scope(ctx)?
                    .farm(EntityKind::$entity, &self.farm_id)
                    .map(Some)
                    .extended()
            }

            async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
                scope(ctx)?
                    .user(EntityKind::$entity, &self.user_id)
                    .map(Some)
                    .extended()
            }
        }
    };
}

/// `farm` for kinds that only belong to a farm.
macro_rules! farm_only {
    ($entity:ident) => {
        #[ComplexObject]
        impl $entity {
            async fn id(&self) -> ID {
                ID(self.id.clone())
            }

            async fn farm_id(&self) -> ID {
                ID(self.farm_id.clone())
            }

            async fn farm(&self, ctx: &Context<'_>) -> Result<Option<Farm>> {
                scope(ctx)?
                    .farm(EntityKind::$entity, &self.farm_id)
                    .map(Some)
                    .extended()
            }
        }
    };
}

farm_and_user!(Crop, crop_id);
farm_and_user!(Livestock, livestock_id);
farm_and_user!(WeatherData, weather_data_id);
farm_and_user!(IoTDevice, device_id);

farm_only!(Field);
farm_only!(Labor);
farm_only!(MachineryEquipment);
