//! Input validation for create and update operations.
//!
//! Checks run in two phases. Structural checks ([`check_create`],
//! [`check_patch`]) look only at the input; referential checks
//! ([`check_references`]) consult storage. Callers run the structural phase
//! first so a malformed request never reaches storage.

use crate::{
    error::{FarmError, Result},
    model::{CreateInput, Entity, EntityKind, FieldValue, Fields, UpdateInput},
    storage::Storage,
};

/// Maximum allowed length for a record identifier.
pub const MAX_ID_LENGTH: usize = 64;

/// Maximum allowed length for any free-text field.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Structural checks for a create input: every required field present and
/// every supplied field well formed.
pub fn check_create<I: CreateInput>(input: &I) -> Result<()> {
    let descriptor = <I::Entity as Entity>::KIND.descriptor();
    for name in descriptor.required {
        let value = input.field(name);
        if value.is_absent() {
            return Err(FarmError::validation(*name, "is required"));
        }
        check_value(name, value, true)?;
    }
    for name in descriptor.optional {
        check_value(name, input.field(name), false)?;
    }
    Ok(())
}

/// Structural checks for an update patch. Absent fields are fine; supplied
/// ones must satisfy the same rules as on create.
pub fn check_patch<P: UpdateInput>(patch: &P) -> Result<()> {
    let descriptor = <P::Entity as Entity>::KIND.descriptor();
    for name in descriptor.required {
        check_value(name, patch.field(name), true)?;
    }
    for name in descriptor.optional {
        check_value(name, patch.field(name), false)?;
    }
    Ok(())
}

/// Resolve every supplied foreign key of `kind` against storage.
pub fn check_references<S>(store: &S, kind: EntityKind, input: &dyn Fields) -> Result<()>
where
    S: Storage + ?Sized,
{
    for key in kind.descriptor().foreign_keys {
        let FieldValue::Id(id) = input.field(key.field_name()) else {
            continue;
        };
        if !store.exists(key.target(), id)? {
            tracing::debug!(%kind, field = key.field_name(), id, "Reference does not resolve");
            return Err(FarmError::ReferenceNotFound {
                kind: key.target(),
                field: key.field_name(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a record identifier.
pub fn validate_id(field: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(FarmError::validation(field, "ID cannot be empty"));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(FarmError::validation(
            field,
            format!("ID exceeds maximum length of {} characters", MAX_ID_LENGTH),
        ));
    }
    if id.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(FarmError::validation(
            field,
            "ID cannot contain whitespace or control characters",
        ));
    }
    Ok(())
}

fn validate_text(field: &str, text: &str, required: bool) -> Result<()> {
    if required && text.trim().is_empty() {
        return Err(FarmError::validation(field, "cannot be empty"));
    }
    if text.len() > MAX_TEXT_LENGTH {
        return Err(FarmError::validation(
            field,
            format!("exceeds maximum length of {} characters", MAX_TEXT_LENGTH),
        ));
    }
    Ok(())
}

fn validate_number(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FarmError::validation(field, "must be a finite number"));
    }
    Ok(())
}

fn check_value(field: &str, value: FieldValue<'_>, required: bool) -> Result<()> {
    match value {
        FieldValue::Absent | FieldValue::Choice | FieldValue::Integer(_) => Ok(()),
        FieldValue::Object(_) => Ok(()),
        FieldValue::Text(text) => validate_text(field, text, required),
        FieldValue::Id(id) => validate_id(field, id),
        FieldValue::Number(n) => validate_number(field, n),
        FieldValue::Location(location) => {
            validate_number(&format!("{}.latitude", field), location.latitude)?;
            validate_number(&format!("{}.longitude", field), location.longitude)
        }
        FieldValue::Nutrients(levels) => {
            for (i, level) in levels.iter().enumerate() {
                validate_text(&format!("{}[{}].nutrient", field, i), &level.nutrient, true)?;
                validate_number(&format!("{}[{}].value", field, i), level.value)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::input::{
        CreateFarmInput, CropInput, FieldInput, LaborUpdateInput, UpdateFarmInput,
    };
    use crate::model::{CropStage, Location, NutrientLevel, Unit, User};
    use crate::storage::{Gateway, MemoryStore};

    fn farm_input(user_id: &str) -> CreateFarmInput {
        CreateFarmInput {
            user_id: user_id.to_string(),
            name: "Green Acres".to_string(),
            location: Location {
                latitude: 10.0,
                longitude: 20.0,
            },
            size: 50.0,
            unit: Unit::Hectares,
            description: None,
        }
    }

    fn field_of(err: FarmError) -> String {
        match err {
            FarmError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(check_create(&farm_input("user-1")).is_ok());
    }

    #[test]
    fn test_blank_required_text_rejected() {
        let mut input = farm_input("user-1");
        input.name = "   ".to_string();
        assert_eq!(field_of(check_create(&input).unwrap_err()), "name");
    }

    #[test]
    fn test_non_finite_number_rejected() {
        let mut input = farm_input("user-1");
        input.size = f64::NAN;
        assert_eq!(field_of(check_create(&input).unwrap_err()), "size");

        let mut input = farm_input("user-1");
        input.location.longitude = f64::INFINITY;
        assert_eq!(
            field_of(check_create(&input).unwrap_err()),
            "location.longitude"
        );
    }

    #[test]
    fn test_empty_foreign_key_rejected() {
        let input = farm_input("");
        assert_eq!(field_of(check_create(&input).unwrap_err()), "userId");
    }

    #[test]
    fn test_nutrient_entries_checked() {
        let input = FieldInput {
            farm_id: "farm-1".to_string(),
            name: "North".to_string(),
            field_area: 4.2,
            soil_type: "clay".to_string(),
            soil_moisture: 0.4,
            soil_ph: 6.8,
            soil_fertility: vec![
                NutrientLevel {
                    nutrient: "N".to_string(),
                    value: 1.0,
                },
                NutrientLevel {
                    nutrient: "P".to_string(),
                    value: f64::NAN,
                },
            ],
        };
        assert_eq!(
            field_of(check_create(&input).unwrap_err()),
            "soilFertility[1].value"
        );
    }

    #[test]
    fn test_patch_allows_absent_fields() {
        assert!(check_patch(&UpdateFarmInput::default()).is_ok());
        assert!(check_patch(&LaborUpdateInput::default()).is_ok());
    }

    #[test]
    fn test_patch_checks_supplied_fields() {
        let patch = UpdateFarmInput {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(field_of(check_patch(&patch).unwrap_err()), "name");

        let patch = LaborUpdateInput {
            wage_rate: Some(f64::NEG_INFINITY),
            ..Default::default()
        };
        assert_eq!(field_of(check_patch(&patch).unwrap_err()), "wageRate");
    }

    #[test]
    fn test_optional_text_may_be_empty() {
        let patch = UpdateFarmInput {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(check_patch(&patch).is_ok());
    }

    #[test]
    fn test_missing_reference_reported() {
        let store = MemoryStore::new();
        let input = CropInput {
            farm_id: "farm-missing".to_string(),
            user_id: "user-missing".to_string(),
            crop_type: "corn".to_string(),
            stage: CropStage::Germination,
            planting_date: "2024-03-01".to_string(),
            harvest_date: None,
            health_status: "good".to_string(),
        };
        let err = check_references(&store, EntityKind::Crop, &input).unwrap_err();
        assert!(matches!(
            err,
            FarmError::ReferenceNotFound {
                kind: EntityKind::Farm,
                field: "farmId",
                ..
            }
        ));
    }

    #[test]
    fn test_existing_reference_accepted() {
        let store = MemoryStore::new();
        let user = Gateway::<User>::create(
            &store,
            User {
                user_id: String::new(),
                email: "ana@example.com".to_string(),
                display_name: "Ana".to_string(),
                profile_image_url: None,
                role: crate::model::Role::Farmer,
                date_created: Default::default(),
            },
        )
        .unwrap();
        assert!(check_references(&store, EntityKind::Farm, &farm_input(&user.user_id)).is_ok());
    }

    #[test]
    fn test_absent_reference_in_patch_skipped() {
        let store = MemoryStore::new();
        let patch = UpdateFarmInput::default();
        assert!(check_references(&store, EntityKind::Farm, &patch).is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("farmId", "farm-1234").is_ok());
        assert!(validate_id("farmId", "").is_err());
        assert!(validate_id("farmId", "farm 1").is_err());
        assert!(validate_id("farmId", &"a".repeat(MAX_ID_LENGTH + 1)).is_err());
    }
}
