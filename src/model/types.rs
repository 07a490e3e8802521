use async_graphql::{
    Enum, InputObject, InputValueError, InputValueResult, Scalar, ScalarType, SimpleObject, Value,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Farmer,
    Agronomist,
    Researcher,
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Farmer => write!(f, "FARMER"),
            Role::Agronomist => write!(f, "AGRONOMIST"),
            Role::Researcher => write!(f, "RESEARCHER"),
            Role::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Hectares,
    Acres,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Hectares => write!(f, "HECTARES"),
            Unit::Acres => write!(f, "ACRES"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CropStage {
    Germination,
    Flowering,
    Harvest,
}

impl fmt::Display for CropStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropStage::Germination => write!(f, "GERMINATION"),
            CropStage::Flowering => write!(f, "FLOWERING"),
            CropStage::Harvest => write!(f, "HARVEST"),
        }
    }
}

/// A latitude/longitude pair. Always embedded, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "LocationInput")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "NutrientLevelInput")]
pub struct NutrientLevel {
    pub nutrient: String,
    pub value: f64,
}

/// Opaque structured payload reported by an IoT device.
///
/// Anything that is a JSON object is accepted; scalars and arrays are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObject(pub serde_json::Map<String, serde_json::Value>);

#[Scalar(name = "JSONObject")]
impl ScalarType for JsonObject {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value.into_json() {
            Ok(serde_json::Value::Object(map)) => Ok(JsonObject(map)),
            Ok(other) => Err(InputValueError::custom(format!(
                "expected a JSON object, found {}",
                other
            ))),
            Err(e) => Err(InputValueError::custom(e)),
        }
    }

    fn to_value(&self) -> Value {
        Value::from_json(serde_json::Value::Object(self.0.clone())).unwrap_or(Value::Null)
    }
}
