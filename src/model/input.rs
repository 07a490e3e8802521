//! Create and update input shapes.
//!
//! Create inputs carry every client-writable field of a kind, required
//! exactly when the entity requires it. Update inputs carry the same fields,
//! all optional. Server-assigned fields (identifiers, `dateCreated`,
//! `lastUpdated`) appear in neither.

use super::entities::{
    Crop, Farm, Field, IoTDevice, Labor, Livestock, MachineryEquipment, User, WeatherData,
};
use super::kind::Entity;
use super::types::{CropStage, JsonObject, Location, NutrientLevel, Role, Unit};
use async_graphql::InputObject;
use chrono::{DateTime, Utc};

/// A field as seen by the validation engine.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Not supplied (omitted or explicitly null).
    Absent,
    Text(&'a str),
    Id(&'a str),
    Number(f64),
    Integer(i64),
    /// A member of a closed enum; membership is enforced when the input is parsed.
    Choice,
    Location(&'a Location),
    Object(&'a JsonObject),
    Nutrients(&'a [NutrientLevel]),
}

impl<'a> FieldValue<'a> {
    fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }

    fn id(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Id)
    }

    fn number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Number)
    }

    fn choice<T>(value: &Option<T>) -> Self {
        if value.is_some() {
            FieldValue::Choice
        } else {
            FieldValue::Absent
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// Field lookup by wire name, the names used in [`EntityDescriptor`](super::EntityDescriptor).
pub trait Fields {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

pub trait CreateInput: Fields {
    type Entity: Entity;

    /// Build the record to hand to storage. Identifier and timestamps are
    /// placeholders until the gateway assigns them.
    fn into_record(self) -> Self::Entity;
}

pub trait UpdateInput: Fields {
    type Entity: Entity;

    /// Overlay this patch on `existing`: supplied fields replace, absent ones keep.
    fn merge(self, existing: Self::Entity) -> Self::Entity;
}

fn unassigned() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub email: String,
    pub display_name: String,
    #[graphql(name = "profileImageURL")]
    pub profile_image_url: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[graphql(name = "profileImageURL")]
    pub profile_image_url: Option<String>,
    pub role: Option<Role>,
}

impl Fields for CreateUserInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "email" => FieldValue::Text(&self.email),
            "displayName" => FieldValue::Text(&self.display_name),
            "profileImageURL" => FieldValue::text(self.profile_image_url.as_deref()),
            "role" => FieldValue::Choice,
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for UpdateUserInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "email" => FieldValue::text(self.email.as_deref()),
            "displayName" => FieldValue::text(self.display_name.as_deref()),
            "profileImageURL" => FieldValue::text(self.profile_image_url.as_deref()),
            "role" => FieldValue::choice(&self.role),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for CreateUserInput {
    type Entity = User;

    fn into_record(self) -> User {
        User {
            user_id: String::new(),
            email: self.email,
            display_name: self.display_name,
            profile_image_url: self.profile_image_url,
            role: self.role,
            date_created: unassigned(),
        }
    }
}

impl UpdateInput for UpdateUserInput {
    type Entity = User;

    fn merge(self, existing: User) -> User {
        User {
            email: self.email.unwrap_or(existing.email),
            display_name: self.display_name.unwrap_or(existing.display_name),
            profile_image_url: self.profile_image_url.or(existing.profile_image_url),
            role: self.role.unwrap_or(existing.role),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// Farm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct CreateFarmInput {
    pub user_id: String,
    pub name: String,
    pub location: Location,
    pub size: f64,
    pub unit: Unit,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateFarmInput {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<Location>,
    pub size: Option<f64>,
    pub unit: Option<Unit>,
    pub description: Option<String>,
}

impl Fields for CreateFarmInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "userId" => FieldValue::Id(&self.user_id),
            "name" => FieldValue::Text(&self.name),
            "location" => FieldValue::Location(&self.location),
            "size" => FieldValue::Number(self.size),
            "unit" => FieldValue::Choice,
            "description" => FieldValue::text(self.description.as_deref()),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for UpdateFarmInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "userId" => FieldValue::id(self.user_id.as_deref()),
            "name" => FieldValue::text(self.name.as_deref()),
            "location" => self
                .location
                .as_ref()
                .map_or(FieldValue::Absent, FieldValue::Location),
            "size" => FieldValue::number(self.size),
            "unit" => FieldValue::choice(&self.unit),
            "description" => FieldValue::text(self.description.as_deref()),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for CreateFarmInput {
    type Entity = Farm;

    fn into_record(self) -> Farm {
        Farm {
            farm_id: String::new(),
            user_id: self.user_id,
            name: self.name,
            location: self.location,
            size: self.size,
            unit: self.unit,
            description: self.description,
            date_created: unassigned(),
        }
    }
}

impl UpdateInput for UpdateFarmInput {
    type Entity = Farm;

    fn merge(self, existing: Farm) -> Farm {
        Farm {
            user_id: self.user_id.unwrap_or(existing.user_id),
            name: self.name.unwrap_or(existing.name),
            location: self.location.unwrap_or(existing.location),
            size: self.size.unwrap_or(existing.size),
            unit: self.unit.unwrap_or(existing.unit),
            description: self.description.or(existing.description),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// Crop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct CropInput {
    pub farm_id: String,
    pub user_id: String,
    #[graphql(name = "type")]
    pub crop_type: String,
    pub stage: CropStage,
    pub planting_date: String,
    pub harvest_date: Option<String>,
    pub health_status: String,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct CropUpdateInput {
    pub farm_id: Option<String>,
    pub user_id: Option<String>,
    #[graphql(name = "type")]
    pub crop_type: Option<String>,
    pub stage: Option<CropStage>,
    pub planting_date: Option<String>,
    pub harvest_date: Option<String>,
    pub health_status: Option<String>,
}

impl Fields for CropInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "userId" => FieldValue::Id(&self.user_id),
            "type" => FieldValue::Text(&self.crop_type),
            "stage" => FieldValue::Choice,
            "plantingDate" => FieldValue::Text(&self.planting_date),
            "harvestDate" => FieldValue::text(self.harvest_date.as_deref()),
            "healthStatus" => FieldValue::Text(&self.health_status),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for CropUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "userId" => FieldValue::id(self.user_id.as_deref()),
            "type" => FieldValue::text(self.crop_type.as_deref()),
            "stage" => FieldValue::choice(&self.stage),
            "plantingDate" => FieldValue::text(self.planting_date.as_deref()),
            "harvestDate" => FieldValue::text(self.harvest_date.as_deref()),
            "healthStatus" => FieldValue::text(self.health_status.as_deref()),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for CropInput {
    type Entity = Crop;

    fn into_record(self) -> Crop {
        Crop {
            crop_id: String::new(),
            farm_id: self.farm_id,
            user_id: self.user_id,
            crop_type: self.crop_type,
            stage: self.stage,
            planting_date: self.planting_date,
            harvest_date: self.harvest_date,
            health_status: self.health_status,
            date_created: unassigned(),
        }
    }
}

impl UpdateInput for CropUpdateInput {
    type Entity = Crop;

    fn merge(self, existing: Crop) -> Crop {
        Crop {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            user_id: self.user_id.unwrap_or(existing.user_id),
            crop_type: self.crop_type.unwrap_or(existing.crop_type),
            stage: self.stage.unwrap_or(existing.stage),
            planting_date: self.planting_date.unwrap_or(existing.planting_date),
            harvest_date: self.harvest_date.or(existing.harvest_date),
            health_status: self.health_status.unwrap_or(existing.health_status),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// Livestock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct LivestockInput {
    pub farm_id: String,
    pub user_id: String,
    #[graphql(name = "type")]
    pub livestock_type: String,
    pub quantity: i32,
    pub health_status: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct LivestockUpdateInput {
    pub farm_id: Option<String>,
    pub user_id: Option<String>,
    #[graphql(name = "type")]
    pub livestock_type: Option<String>,
    pub quantity: Option<i32>,
    pub health_status: Option<String>,
    pub location: Option<String>,
}

impl Fields for LivestockInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "userId" => FieldValue::Id(&self.user_id),
            "type" => FieldValue::Text(&self.livestock_type),
            "quantity" => FieldValue::Integer(i64::from(self.quantity)),
            "healthStatus" => FieldValue::Text(&self.health_status),
            "location" => FieldValue::text(self.location.as_deref()),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for LivestockUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "userId" => FieldValue::id(self.user_id.as_deref()),
            "type" => FieldValue::text(self.livestock_type.as_deref()),
            "quantity" => self
                .quantity
                .map_or(FieldValue::Absent, |q| FieldValue::Integer(i64::from(q))),
            "healthStatus" => FieldValue::text(self.health_status.as_deref()),
            "location" => FieldValue::text(self.location.as_deref()),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for LivestockInput {
    type Entity = Livestock;

    fn into_record(self) -> Livestock {
        Livestock {
            livestock_id: String::new(),
            farm_id: self.farm_id,
            user_id: self.user_id,
            livestock_type: self.livestock_type,
            quantity: self.quantity,
            health_status: self.health_status,
            location: self.location,
            date_created: unassigned(),
        }
    }
}

impl UpdateInput for LivestockUpdateInput {
    type Entity = Livestock;

    fn merge(self, existing: Livestock) -> Livestock {
        Livestock {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            user_id: self.user_id.unwrap_or(existing.user_id),
            livestock_type: self.livestock_type.unwrap_or(existing.livestock_type),
            quantity: self.quantity.unwrap_or(existing.quantity),
            health_status: self.health_status.unwrap_or(existing.health_status),
            location: self.location.or(existing.location),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// WeatherData
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct WeatherDataInput {
    pub farm_id: String,
    pub user_id: String,
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct WeatherDataUpdateInput {
    pub farm_id: Option<String>,
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl Fields for WeatherDataInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "userId" => FieldValue::Id(&self.user_id),
            "date" => FieldValue::Text(&self.date),
            "temperature" => FieldValue::Number(self.temperature),
            "humidity" => FieldValue::Number(self.humidity),
            "rainfall" => FieldValue::Number(self.rainfall),
            "windSpeed" => FieldValue::Number(self.wind_speed),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for WeatherDataUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "userId" => FieldValue::id(self.user_id.as_deref()),
            "date" => FieldValue::text(self.date.as_deref()),
            "temperature" => FieldValue::number(self.temperature),
            "humidity" => FieldValue::number(self.humidity),
            "rainfall" => FieldValue::number(self.rainfall),
            "windSpeed" => FieldValue::number(self.wind_speed),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for WeatherDataInput {
    type Entity = WeatherData;

    fn into_record(self) -> WeatherData {
        WeatherData {
            weather_data_id: String::new(),
            farm_id: self.farm_id,
            user_id: self.user_id,
            date: self.date,
            temperature: self.temperature,
            humidity: self.humidity,
            rainfall: self.rainfall,
            wind_speed: self.wind_speed,
        }
    }
}

impl UpdateInput for WeatherDataUpdateInput {
    type Entity = WeatherData;

    fn merge(self, existing: WeatherData) -> WeatherData {
        WeatherData {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            user_id: self.user_id.unwrap_or(existing.user_id),
            date: self.date.unwrap_or(existing.date),
            temperature: self.temperature.unwrap_or(existing.temperature),
            humidity: self.humidity.unwrap_or(existing.humidity),
            rainfall: self.rainfall.unwrap_or(existing.rainfall),
            wind_speed: self.wind_speed.unwrap_or(existing.wind_speed),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// IoTDevice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct IoTDeviceInput {
    pub user_id: String,
    pub farm_id: String,
    #[graphql(name = "type")]
    pub device_type: String,
    pub location: Location,
    pub data: JsonObject,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct IoTDeviceUpdateInput {
    pub user_id: Option<String>,
    pub farm_id: Option<String>,
    #[graphql(name = "type")]
    pub device_type: Option<String>,
    pub location: Option<Location>,
    pub data: Option<JsonObject>,
}

impl Fields for IoTDeviceInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "userId" => FieldValue::Id(&self.user_id),
            "farmId" => FieldValue::Id(&self.farm_id),
            "type" => FieldValue::Text(&self.device_type),
            "location" => FieldValue::Location(&self.location),
            "data" => FieldValue::Object(&self.data),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for IoTDeviceUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "userId" => FieldValue::id(self.user_id.as_deref()),
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "type" => FieldValue::text(self.device_type.as_deref()),
            "location" => self
                .location
                .as_ref()
                .map_or(FieldValue::Absent, FieldValue::Location),
            "data" => self
                .data
                .as_ref()
                .map_or(FieldValue::Absent, FieldValue::Object),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for IoTDeviceInput {
    type Entity = IoTDevice;

    fn into_record(self) -> IoTDevice {
        IoTDevice {
            device_id: String::new(),
            user_id: self.user_id,
            farm_id: self.farm_id,
            device_type: self.device_type,
            location: self.location,
            data: self.data,
            last_updated: unassigned(),
        }
    }
}

impl UpdateInput for IoTDeviceUpdateInput {
    type Entity = IoTDevice;

    fn merge(self, existing: IoTDevice) -> IoTDevice {
        IoTDevice {
            user_id: self.user_id.unwrap_or(existing.user_id),
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            device_type: self.device_type.unwrap_or(existing.device_type),
            location: self.location.unwrap_or(existing.location),
            data: self.data.unwrap_or(existing.data),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct FieldInput {
    pub farm_id: String,
    pub name: String,
    pub field_area: f64,
    pub soil_type: String,
    pub soil_moisture: f64,
    #[graphql(name = "soilPH")]
    pub soil_ph: f64,
    pub soil_fertility: Vec<NutrientLevel>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct FieldUpdateInput {
    pub farm_id: Option<String>,
    pub name: Option<String>,
    pub field_area: Option<f64>,
    pub soil_type: Option<String>,
    pub soil_moisture: Option<f64>,
    #[graphql(name = "soilPH")]
    pub soil_ph: Option<f64>,
    /// Replaces the whole list when supplied.
    pub soil_fertility: Option<Vec<NutrientLevel>>,
}

impl Fields for FieldInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "name" => FieldValue::Text(&self.name),
            "fieldArea" => FieldValue::Number(self.field_area),
            "soilType" => FieldValue::Text(&self.soil_type),
            "soilMoisture" => FieldValue::Number(self.soil_moisture),
            "soilPH" => FieldValue::Number(self.soil_ph),
            "soilFertility" => FieldValue::Nutrients(&self.soil_fertility),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for FieldUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "name" => FieldValue::text(self.name.as_deref()),
            "fieldArea" => FieldValue::number(self.field_area),
            "soilType" => FieldValue::text(self.soil_type.as_deref()),
            "soilMoisture" => FieldValue::number(self.soil_moisture),
            "soilPH" => FieldValue::number(self.soil_ph),
            "soilFertility" => self
                .soil_fertility
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::Nutrients),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for FieldInput {
    type Entity = Field;

    fn into_record(self) -> Field {
        Field {
            id: String::new(),
            farm_id: self.farm_id,
            name: self.name,
            field_area: self.field_area,
            soil_type: self.soil_type,
            soil_moisture: self.soil_moisture,
            soil_ph: self.soil_ph,
            soil_fertility: self.soil_fertility,
        }
    }
}

impl UpdateInput for FieldUpdateInput {
    type Entity = Field;

    fn merge(self, existing: Field) -> Field {
        Field {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            name: self.name.unwrap_or(existing.name),
            field_area: self.field_area.unwrap_or(existing.field_area),
            soil_type: self.soil_type.unwrap_or(existing.soil_type),
            soil_moisture: self.soil_moisture.unwrap_or(existing.soil_moisture),
            soil_ph: self.soil_ph.unwrap_or(existing.soil_ph),
            soil_fertility: self.soil_fertility.unwrap_or(existing.soil_fertility),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// Labor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct LaborInput {
    pub farm_id: String,
    pub name: String,
    pub job_title: String,
    pub employment_status: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub hours_worked: f64,
    pub wage_rate: f64,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct LaborUpdateInput {
    pub farm_id: Option<String>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub employment_status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub hours_worked: Option<f64>,
    pub wage_rate: Option<f64>,
}

impl Fields for LaborInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "name" => FieldValue::Text(&self.name),
            "jobTitle" => FieldValue::Text(&self.job_title),
            "employmentStatus" => FieldValue::Text(&self.employment_status),
            "startDate" => FieldValue::Text(&self.start_date),
            "endDate" => FieldValue::text(self.end_date.as_deref()),
            "hoursWorked" => FieldValue::Number(self.hours_worked),
            "wageRate" => FieldValue::Number(self.wage_rate),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for LaborUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "name" => FieldValue::text(self.name.as_deref()),
            "jobTitle" => FieldValue::text(self.job_title.as_deref()),
            "employmentStatus" => FieldValue::text(self.employment_status.as_deref()),
            "startDate" => FieldValue::text(self.start_date.as_deref()),
            "endDate" => FieldValue::text(self.end_date.as_deref()),
            "hoursWorked" => FieldValue::number(self.hours_worked),
            "wageRate" => FieldValue::number(self.wage_rate),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for LaborInput {
    type Entity = Labor;

    fn into_record(self) -> Labor {
        Labor {
            id: String::new(),
            farm_id: self.farm_id,
            name: self.name,
            job_title: self.job_title,
            employment_status: self.employment_status,
            start_date: self.start_date,
            end_date: self.end_date,
            hours_worked: self.hours_worked,
            wage_rate: self.wage_rate,
        }
    }
}

impl UpdateInput for LaborUpdateInput {
    type Entity = Labor;

    fn merge(self, existing: Labor) -> Labor {
        Labor {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            name: self.name.unwrap_or(existing.name),
            job_title: self.job_title.unwrap_or(existing.job_title),
            employment_status: self.employment_status.unwrap_or(existing.employment_status),
            start_date: self.start_date.unwrap_or(existing.start_date),
            end_date: self.end_date.or(existing.end_date),
            hours_worked: self.hours_worked.unwrap_or(existing.hours_worked),
            wage_rate: self.wage_rate.unwrap_or(existing.wage_rate),
            ..existing
        }
    }
}

// ---------------------------------------------------------------------------
// MachineryEquipment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, InputObject)]
pub struct MachineryEquipmentInput {
    pub farm_id: String,
    pub name: String,
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub purchase_date: String,
    pub maintenance_schedule: String,
    pub operational_hours: f64,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct MachineryEquipmentUpdateInput {
    pub farm_id: Option<String>,
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub purchase_date: Option<String>,
    pub maintenance_schedule: Option<String>,
    pub operational_hours: Option<f64>,
}

impl Fields for MachineryEquipmentInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::Id(&self.farm_id),
            "name" => FieldValue::Text(&self.name),
            "equipmentType" => FieldValue::Text(&self.equipment_type),
            "manufacturer" => FieldValue::Text(&self.manufacturer),
            "model" => FieldValue::Text(&self.model),
            "purchaseDate" => FieldValue::Text(&self.purchase_date),
            "maintenanceSchedule" => FieldValue::Text(&self.maintenance_schedule),
            "operationalHours" => FieldValue::Number(self.operational_hours),
            _ => FieldValue::Absent,
        }
    }
}

impl Fields for MachineryEquipmentUpdateInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "farmId" => FieldValue::id(self.farm_id.as_deref()),
            "name" => FieldValue::text(self.name.as_deref()),
            "equipmentType" => FieldValue::text(self.equipment_type.as_deref()),
            "manufacturer" => FieldValue::text(self.manufacturer.as_deref()),
            "model" => FieldValue::text(self.model.as_deref()),
            "purchaseDate" => FieldValue::text(self.purchase_date.as_deref()),
            "maintenanceSchedule" => FieldValue::text(self.maintenance_schedule.as_deref()),
            "operationalHours" => FieldValue::number(self.operational_hours),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateInput for MachineryEquipmentInput {
    type Entity = MachineryEquipment;

    fn into_record(self) -> MachineryEquipment {
        MachineryEquipment {
            id: String::new(),
            farm_id: self.farm_id,
            name: self.name,
            equipment_type: self.equipment_type,
            manufacturer: self.manufacturer,
            model: self.model,
            purchase_date: self.purchase_date,
            maintenance_schedule: self.maintenance_schedule,
            operational_hours: self.operational_hours,
        }
    }
}

impl UpdateInput for MachineryEquipmentUpdateInput {
    type Entity = MachineryEquipment;

    fn merge(self, existing: MachineryEquipment) -> MachineryEquipment {
        MachineryEquipment {
            farm_id: self.farm_id.unwrap_or(existing.farm_id),
            name: self.name.unwrap_or(existing.name),
            equipment_type: self.equipment_type.unwrap_or(existing.equipment_type),
            manufacturer: self.manufacturer.unwrap_or(existing.manufacturer),
            model: self.model.unwrap_or(existing.model),
            purchase_date: self.purchase_date.unwrap_or(existing.purchase_date),
            maintenance_schedule: self
                .maintenance_schedule
                .unwrap_or(existing.maintenance_schedule),
            operational_hours: self.operational_hours.unwrap_or(existing.operational_hours),
            ..existing
        }
    }
}
