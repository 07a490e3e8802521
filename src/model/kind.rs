use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// The nine record types of the farm graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    User,
    Farm,
    Crop,
    Livestock,
    WeatherData,
    IoTDevice,
    Field,
    Labor,
    MachineryEquipment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::User,
        EntityKind::Farm,
        EntityKind::Crop,
        EntityKind::Livestock,
        EntityKind::WeatherData,
        EntityKind::IoTDevice,
        EntityKind::Field,
        EntityKind::Labor,
        EntityKind::MachineryEquipment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Farm => "Farm",
            EntityKind::Crop => "Crop",
            EntityKind::Livestock => "Livestock",
            EntityKind::WeatherData => "WeatherData",
            EntityKind::IoTDevice => "IoTDevice",
            EntityKind::Field => "Field",
            EntityKind::Labor => "Labor",
            EntityKind::MachineryEquipment => "MachineryEquipment",
        }
    }

    /// Prefix for identifiers assigned to records of this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::User => "user-",
            EntityKind::Farm => "farm-",
            EntityKind::Crop => "crop-",
            EntityKind::Livestock => "livestock-",
            EntityKind::WeatherData => "weather-",
            EntityKind::IoTDevice => "device-",
            EntityKind::Field => "field-",
            EntityKind::Labor => "labor-",
            EntityKind::MachineryEquipment => "machinery-",
        }
    }

    pub fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            EntityKind::User => &USER,
            EntityKind::Farm => &FARM,
            EntityKind::Crop => &CROP,
            EntityKind::Livestock => &LIVESTOCK,
            EntityKind::WeatherData => &WEATHER_DATA,
            EntityKind::IoTDevice => &IOT_DEVICE,
            EntityKind::Field => &FIELD,
            EntityKind::Labor => &LABOR,
            EntityKind::MachineryEquipment => &MACHINERY_EQUIPMENT,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field holding the identifier of another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignKey {
    FarmId,
    UserId,
}

impl ForeignKey {
    pub fn field_name(self) -> &'static str {
        match self {
            ForeignKey::FarmId => "farmId",
            ForeignKey::UserId => "userId",
        }
    }

    /// The kind of record this key must resolve to.
    pub fn target(self) -> EntityKind {
        match self {
            ForeignKey::FarmId => EntityKind::Farm,
            ForeignKey::UserId => EntityKind::User,
        }
    }
}

/// Client-writable field layout of one entity kind.
///
/// `required` and `optional` name the fields of the create input; server
/// assigned fields (identifier, timestamps) never appear here. Every
/// foreign key is also listed in `required`.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub id_field: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
}

impl EntityDescriptor {
    pub fn is_known(&self, field: &str) -> bool {
        self.required.contains(&field) || self.optional.contains(&field)
    }
}

static USER: EntityDescriptor = EntityDescriptor {
    id_field: "userId",
    required: &["email", "displayName", "role"],
    optional: &["profileImageURL"],
    foreign_keys: &[],
};

static FARM: EntityDescriptor = EntityDescriptor {
    id_field: "farmId",
    required: &["userId", "name", "location", "size", "unit"],
    optional: &["description"],
    foreign_keys: &[ForeignKey::UserId],
};

static CROP: EntityDescriptor = EntityDescriptor {
    id_field: "cropId",
    required: &[
        "farmId",
        "userId",
        "type",
        "stage",
        "plantingDate",
        "healthStatus",
    ],
    optional: &["harvestDate"],
    foreign_keys: &[ForeignKey::FarmId, ForeignKey::UserId],
};

static LIVESTOCK: EntityDescriptor = EntityDescriptor {
    id_field: "livestockId",
    required: &["farmId", "userId", "type", "quantity", "healthStatus"],
    optional: &["location"],
    foreign_keys: &[ForeignKey::FarmId, ForeignKey::UserId],
};

static WEATHER_DATA: EntityDescriptor = EntityDescriptor {
    id_field: "weatherDataId",
    required: &[
        "farmId",
        "userId",
        "date",
        "temperature",
        "humidity",
        "rainfall",
        "windSpeed",
    ],
    optional: &[],
    foreign_keys: &[ForeignKey::FarmId, ForeignKey::UserId],
};

static IOT_DEVICE: EntityDescriptor = EntityDescriptor {
    id_field: "deviceId",
    required: &["userId", "farmId", "type", "location", "data"],
    optional: &[],
    foreign_keys: &[ForeignKey::UserId, ForeignKey::FarmId],
};

static FIELD: EntityDescriptor = EntityDescriptor {
    id_field: "id",
    required: &[
        "farmId",
        "name",
        "fieldArea",
        "soilType",
        "soilMoisture",
        "soilPH",
        "soilFertility",
    ],
    optional: &[],
    foreign_keys: &[ForeignKey::FarmId],
};

static LABOR: EntityDescriptor = EntityDescriptor {
    id_field: "id",
    required: &[
        "farmId",
        "name",
        "jobTitle",
        "employmentStatus",
        "startDate",
        "hoursWorked",
        "wageRate",
    ],
    optional: &["endDate"],
    foreign_keys: &[ForeignKey::FarmId],
};

static MACHINERY_EQUIPMENT: EntityDescriptor = EntityDescriptor {
    id_field: "id",
    required: &[
        "farmId",
        "name",
        "equipmentType",
        "manufacturer",
        "model",
        "purchaseDate",
        "maintenanceSchedule",
        "operationalHours",
    ],
    optional: &[],
    foreign_keys: &[ForeignKey::FarmId],
};

/// A stored record of one entity kind.
///
/// Records are plain data; their relationship fields are derived at
/// resolution time from the foreign keys exposed through [`Entity::reference`].
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Value of a foreign key, if this kind carries it.
    fn reference(&self, key: ForeignKey) -> Option<&str>;

    /// Stamp the server-assigned identifier and creation time.
    fn assign(&mut self, id: String, now: DateTime<Utc>);

    /// Refresh server-maintained timestamps after an update.
    fn touch(&mut self, _now: DateTime<Utc>) {}
}
