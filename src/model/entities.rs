use super::kind::{Entity, EntityKind, ForeignKey};
use super::types::{CropStage, JsonObject, Location, NutrientLevel, Role, Unit};
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, rename = "profileImageURL", skip_serializing_if = "Option::is_none")]
    #[graphql(name = "profileImageURL")]
    pub profile_image_url: Option<String>,
    pub role: Role,
    pub date_created: DateTime<Utc>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.user_id
    }

    fn reference(&self, _key: ForeignKey) -> Option<&str> {
        None
    }

    fn assign(&mut self, id: String, now: DateTime<Utc>) {
        self.user_id = id;
        self.date_created = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Farm {
    #[graphql(skip)]
    pub farm_id: String,
    #[graphql(skip)]
    pub user_id: String,
    pub name: String,
    pub location: Location,
    pub size: f64,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl Entity for Farm {
    const KIND: EntityKind = EntityKind::Farm;

    fn id(&self) -> &str {
        &self.farm_id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::UserId => Some(&self.user_id),
            ForeignKey::FarmId => None,
        }
    }

    fn assign(&mut self, id: String, now: DateTime<Utc>) {
        self.farm_id = id;
        self.date_created = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Crop {
    #[graphql(skip)]
    pub crop_id: String,
    #[graphql(skip)]
    pub farm_id: String,
    #[graphql(skip)]
    pub user_id: String,
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub crop_type: String,
    pub stage: CropStage,
    pub planting_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    pub health_status: String,
    pub date_created: DateTime<Utc>,
}

impl Entity for Crop {
    const KIND: EntityKind = EntityKind::Crop;

    fn id(&self) -> &str {
        &self.crop_id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => Some(&self.user_id),
        }
    }

    fn assign(&mut self, id: String, now: DateTime<Utc>) {
        self.crop_id = id;
        self.date_created = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Livestock {
    #[graphql(skip)]
    pub livestock_id: String,
    #[graphql(skip)]
    pub farm_id: String,
    #[graphql(skip)]
    pub user_id: String,
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub livestock_type: String,
    pub quantity: i32,
    pub health_status: String,
    /// Free-text pen or paddock description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl Entity for Livestock {
    const KIND: EntityKind = EntityKind::Livestock;

    fn id(&self) -> &str {
        &self.livestock_id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => Some(&self.user_id),
        }
    }

    fn assign(&mut self, id: String, now: DateTime<Utc>) {
        self.livestock_id = id;
        self.date_created = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct WeatherData {
    #[graphql(skip)]
    pub weather_data_id: String,
    #[graphql(skip)]
    pub farm_id: String,
    #[graphql(skip)]
    pub user_id: String,
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
}

impl Entity for WeatherData {
    const KIND: EntityKind = EntityKind::WeatherData;

    fn id(&self) -> &str {
        &self.weather_data_id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => Some(&self.user_id),
        }
    }

    fn assign(&mut self, id: String, _now: DateTime<Utc>) {
        self.weather_data_id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct IoTDevice {
    #[graphql(skip)]
    pub device_id: String,
    #[graphql(skip)]
    pub user_id: String,
    #[graphql(skip)]
    pub farm_id: String,
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub device_type: String,
    pub location: Location,
    pub data: JsonObject,
    pub last_updated: DateTime<Utc>,
}

impl Entity for IoTDevice {
    const KIND: EntityKind = EntityKind::IoTDevice;

    fn id(&self) -> &str {
        &self.device_id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => Some(&self.user_id),
        }
    }

    fn assign(&mut self, id: String, now: DateTime<Utc>) {
        self.device_id = id;
        self.last_updated = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Field {
    #[graphql(skip)]
    pub id: String,
    #[graphql(skip)]
    pub farm_id: String,
    pub name: String,
    pub field_area: f64,
    pub soil_type: String,
    pub soil_moisture: f64,
    #[serde(rename = "soilPH")]
    #[graphql(name = "soilPH")]
    pub soil_ph: f64,
    /// Ordered as supplied by the client.
    #[serde(default)]
    pub soil_fertility: Vec<NutrientLevel>,
}

impl Entity for Field {
    const KIND: EntityKind = EntityKind::Field;

    fn id(&self) -> &str {
        &self.id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => None,
        }
    }

    fn assign(&mut self, id: String, _now: DateTime<Utc>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Labor {
    #[graphql(skip)]
    pub id: String,
    #[graphql(skip)]
    pub farm_id: String,
    pub name: String,
    pub job_title: String,
    pub employment_status: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub hours_worked: f64,
    pub wage_rate: f64,
}

impl Entity for Labor {
    const KIND: EntityKind = EntityKind::Labor;

    fn id(&self) -> &str {
        &self.id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => None,
        }
    }

    fn assign(&mut self, id: String, _now: DateTime<Utc>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct MachineryEquipment {
    #[graphql(skip)]
    pub id: String,
    #[graphql(skip)]
    pub farm_id: String,
    pub name: String,
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub purchase_date: String,
    pub maintenance_schedule: String,
    pub operational_hours: f64,
}

impl Entity for MachineryEquipment {
    const KIND: EntityKind = EntityKind::MachineryEquipment;

    fn id(&self) -> &str {
        &self.id
    }

    fn reference(&self, key: ForeignKey) -> Option<&str> {
        match key {
            ForeignKey::FarmId => Some(&self.farm_id),
            ForeignKey::UserId => None,
        }
    }

    fn assign(&mut self, id: String, _now: DateTime<Utc>) {
        self.id = id;
    }
}
