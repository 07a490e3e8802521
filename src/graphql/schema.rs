use async_graphql::{Context, EmptySubscription, ID, Object, Result, Schema};

use super::errors::ResultExt;
use super::scope;
use crate::dispatch;
use crate::error::FarmError;
use crate::model::input::{
    CreateFarmInput, CreateUserInput, CropInput, CropUpdateInput, FieldInput, FieldUpdateInput,
    IoTDeviceInput, IoTDeviceUpdateInput, LaborInput, LaborUpdateInput, LivestockInput,
    LivestockUpdateInput, MachineryEquipmentInput, MachineryEquipmentUpdateInput, UpdateFarmInput,
    UpdateUserInput, WeatherDataInput, WeatherDataUpdateInput,
};
use crate::model::{
    Crop, EntityKind, Farm, Field, ForeignKey, IoTDevice, Labor, Livestock, MachineryEquipment,
    User, WeatherData,
};

pub type FarmSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema() -> FarmSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_user(&self, ctx: &Context<'_>, user_id: ID) -> Result<Option<User>> {
        scope(ctx)?
            .find_user(&user_id)
            .and_then(|user| {
                user.map(Some)
                    .ok_or_else(|| FarmError::not_found(EntityKind::User, &*user_id))
            })
            .extended()
    }

    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_farm(&self, ctx: &Context<'_>, farm_id: ID) -> Result<Option<Farm>> {
        scope(ctx)?
            .find_farm(&farm_id)
            .and_then(|farm| {
                farm.map(Some)
                    .ok_or_else(|| FarmError::not_found(EntityKind::Farm, &*farm_id))
            })
            .extended()
    }

    async fn get_farms(&self, ctx: &Context<'_>) -> Result<Vec<Farm>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_farms_by_user_id(&self, ctx: &Context<'_>, user_id: ID) -> Result<Vec<Farm>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::UserId, &user_id).extended()
    }

    async fn get_crop(&self, ctx: &Context<'_>, crop_id: ID) -> Result<Option<Crop>> {
        dispatch::fetch(scope(ctx)?.store(), &crop_id)
            .map(Some)
            .extended()
    }

    async fn get_crops(&self, ctx: &Context<'_>) -> Result<Vec<Crop>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_crops_by_farm_id(&self, ctx: &Context<'_>, farm_id: ID) -> Result<Vec<Crop>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    async fn get_livestock(
        &self,
        ctx: &Context<'_>,
        livestock_id: ID,
    ) -> Result<Option<Livestock>> {
        dispatch::fetch(scope(ctx)?.store(), &livestock_id)
            .map(Some)
            .extended()
    }

    async fn get_livestocks(&self, ctx: &Context<'_>) -> Result<Vec<Livestock>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    /// Same as `getLivestocks`.
    async fn get_all_livestock(&self, ctx: &Context<'_>) -> Result<Vec<Livestock>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_livestocks_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<Livestock>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    /// Same as `getLivestocksByFarmId`.
    async fn get_livestock_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<Livestock>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    async fn get_weather_data(
        &self,
        ctx: &Context<'_>,
        weather_data_id: ID,
    ) -> Result<Option<WeatherData>> {
        dispatch::fetch(scope(ctx)?.store(), &weather_data_id)
            .map(Some)
            .extended()
    }

    async fn get_weather_datas(&self, ctx: &Context<'_>) -> Result<Vec<WeatherData>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    /// Same as `getWeatherDatas`.
    async fn get_all_weather_data(&self, ctx: &Context<'_>) -> Result<Vec<WeatherData>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_weather_datas_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<WeatherData>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    /// Same as `getWeatherDatasByFarmId`.
    async fn get_weather_data_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<WeatherData>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    #[graphql(name = "getIoTDevice")]
    async fn get_iot_device(&self, ctx: &Context<'_>, device_id: ID) -> Result<Option<IoTDevice>> {
        dispatch::fetch(scope(ctx)?.store(), &device_id)
            .map(Some)
            .extended()
    }

    #[graphql(name = "getIoTDevices")]
    async fn get_iot_devices(&self, ctx: &Context<'_>) -> Result<Vec<IoTDevice>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    /// Same as `getIoTDevices`.
    #[graphql(name = "getAllIoTDevices")]
    async fn get_all_iot_devices(&self, ctx: &Context<'_>) -> Result<Vec<IoTDevice>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    #[graphql(name = "getIoTDevicesByFarmId")]
    async fn get_iot_devices_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<IoTDevice>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    async fn get_field(&self, ctx: &Context<'_>, field_id: ID) -> Result<Option<Field>> {
        dispatch::fetch(scope(ctx)?.store(), &field_id)
            .map(Some)
            .extended()
    }

    async fn get_fields(&self, ctx: &Context<'_>) -> Result<Vec<Field>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_fields_by_farm_id(&self, ctx: &Context<'_>, farm_id: ID) -> Result<Vec<Field>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    async fn get_labor(&self, ctx: &Context<'_>, labor_id: ID) -> Result<Option<Labor>> {
        dispatch::fetch(scope(ctx)?.store(), &labor_id)
            .map(Some)
            .extended()
    }

    async fn get_labors(&self, ctx: &Context<'_>) -> Result<Vec<Labor>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    /// Same as `getLabors`.
    async fn get_all_labor(&self, ctx: &Context<'_>) -> Result<Vec<Labor>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_labors_by_farm_id(&self, ctx: &Context<'_>, farm_id: ID) -> Result<Vec<Labor>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    /// Same as `getLaborsByFarmId`.
    async fn get_labor_by_farm_id(&self, ctx: &Context<'_>, farm_id: ID) -> Result<Vec<Labor>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    async fn get_machinery_equipment(
        &self,
        ctx: &Context<'_>,
        machinery_equipment_id: ID,
    ) -> Result<Option<MachineryEquipment>> {
        dispatch::fetch(scope(ctx)?.store(), &machinery_equipment_id)
            .map(Some)
            .extended()
    }

    async fn get_machinery_equipments(&self, ctx: &Context<'_>) -> Result<Vec<MachineryEquipment>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    /// Same as `getMachineryEquipments`.
    async fn get_all_machinery_equipment(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<MachineryEquipment>> {
        dispatch::list(scope(ctx)?.store()).extended()
    }

    async fn get_machinery_equipments_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<MachineryEquipment>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }

    /// Same as `getMachineryEquipmentsByFarmId`.
    async fn get_machinery_equipment_by_farm_id(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
    ) -> Result<Vec<MachineryEquipment>> {
        dispatch::list_by(scope(ctx)?.store(), ForeignKey::FarmId, &farm_id).extended()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        let scope = scope(ctx)?;
        let created: User = dispatch::create(scope.store(), input).extended()?;
        scope.forget(EntityKind::User, &created.user_id);
        Ok(created)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        input: UpdateUserInput,
    ) -> Result<User> {
        let scope = scope(ctx)?;
        let updated = dispatch::update(scope.store(), &user_id, input).extended()?;
        scope.forget(EntityKind::User, &user_id);
        Ok(updated)
    }

    async fn create_farm(&self, ctx: &Context<'_>, input: CreateFarmInput) -> Result<Farm> {
        let scope = scope(ctx)?;
        let created: Farm = dispatch::create(scope.store(), input).extended()?;
        scope.forget(EntityKind::Farm, &created.farm_id);
        Ok(created)
    }

    async fn update_farm(
        &self,
        ctx: &Context<'_>,
        farm_id: ID,
        input: UpdateFarmInput,
    ) -> Result<Farm> {
        let scope = scope(ctx)?;
        let updated = dispatch::update(scope.store(), &farm_id, input).extended()?;
        scope.forget(EntityKind::Farm, &farm_id);
        Ok(updated)
    }

    async fn create_crop(&self, ctx: &Context<'_>, input: CropInput) -> Result<Crop> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_crop(
        &self,
        ctx: &Context<'_>,
        crop_id: ID,
        input: CropUpdateInput,
    ) -> Result<Crop> {
        dispatch::update(scope(ctx)?.store(), &crop_id, input).extended()
    }

    async fn create_livestock(&self, ctx: &Context<'_>, input: LivestockInput) -> Result<Livestock> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_livestock(
        &self,
        ctx: &Context<'_>,
        livestock_id: ID,
        input: LivestockUpdateInput,
    ) -> Result<Livestock> {
        dispatch::update(scope(ctx)?.store(), &livestock_id, input).extended()
    }

    async fn create_weather_data(
        &self,
        ctx: &Context<'_>,
        input: WeatherDataInput,
    ) -> Result<WeatherData> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_weather_data(
        &self,
        ctx: &Context<'_>,
        weather_data_id: ID,
        input: WeatherDataUpdateInput,
    ) -> Result<WeatherData> {
        dispatch::update(scope(ctx)?.store(), &weather_data_id, input).extended()
    }

    #[graphql(name = "createIoTDevice")]
    async fn create_iot_device(&self, ctx: &Context<'_>, input: IoTDeviceInput) -> Result<IoTDevice> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    #[graphql(name = "updateIoTDevice")]
    async fn update_iot_device(
        &self,
        ctx: &Context<'_>,
        device_id: ID,
        input: IoTDeviceUpdateInput,
    ) -> Result<IoTDevice> {
        dispatch::update(scope(ctx)?.store(), &device_id, input).extended()
    }

    async fn create_field(&self, ctx: &Context<'_>, input: FieldInput) -> Result<Field> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_field(
        &self,
        ctx: &Context<'_>,
        field_id: ID,
        input: FieldUpdateInput,
    ) -> Result<Field> {
        dispatch::update(scope(ctx)?.store(), &field_id, input).extended()
    }

    async fn create_labor(&self, ctx: &Context<'_>, input: LaborInput) -> Result<Labor> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_labor(
        &self,
        ctx: &Context<'_>,
        labor_id: ID,
        input: LaborUpdateInput,
    ) -> Result<Labor> {
        dispatch::update(scope(ctx)?.store(), &labor_id, input).extended()
    }

    async fn create_machinery_equipment(
        &self,
        ctx: &Context<'_>,
        input: MachineryEquipmentInput,
    ) -> Result<MachineryEquipment> {
        dispatch::create(scope(ctx)?.store(), input).extended()
    }

    async fn update_machinery_equipment(
        &self,
        ctx: &Context<'_>,
        machinery_equipment_id: ID,
        input: MachineryEquipmentUpdateInput,
    ) -> Result<MachineryEquipment> {
        dispatch::update(scope(ctx)?.store(), &machinery_equipment_id, input).extended()
    }
}
