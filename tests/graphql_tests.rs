use farmgraph::error::Result;
use farmgraph::graphql::FarmApi;
use farmgraph::model::{Crop, CropStage, Entity, EntityKind, ForeignKey};
use farmgraph::storage::{Gateway, MemoryStore};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Records every `get` that reaches storage.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    gets: Mutex<Vec<(EntityKind, String)>>,
}

impl CountingStore {
    fn gets_of(&self, kind: EntityKind, id: &str) -> usize {
        self.gets
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, i)| *k == kind && i == id)
            .count()
    }

    fn reset(&self) {
        self.gets.lock().unwrap().clear();
    }
}

impl<E: Entity> Gateway<E> for CountingStore {
    fn get(&self, id: &str) -> Result<Option<E>> {
        self.gets.lock().unwrap().push((E::KIND, id.to_string()));
        Gateway::<E>::get(&self.inner, id)
    }

    fn list_all(&self) -> Result<Vec<E>> {
        Gateway::<E>::list_all(&self.inner)
    }

    fn list_by_parent(&self, key: ForeignKey, parent_id: &str) -> Result<Vec<E>> {
        Gateway::<E>::list_by_parent(&self.inner, key, parent_id)
    }

    fn create(&self, record: E) -> Result<E> {
        Gateway::<E>::create(&self.inner, record)
    }

    fn update(&self, id: &str, record: E) -> Result<Option<E>> {
        Gateway::<E>::update(&self.inner, id, record)
    }
}

fn setup() -> (Arc<CountingStore>, FarmApi) {
    let store = Arc::new(CountingStore::default());
    let api = FarmApi::new(store.clone());
    (store, api)
}

async fn run(api: &FarmApi, document: &str) -> Value {
    let response = api.execute(document).await;
    serde_json::to_value(&response).unwrap()
}

fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["extensions"]["code"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

async fn create_user(api: &FarmApi) -> String {
    let response = run(
        api,
        r#"mutation { createUser(input: { email: "ana@example.com", displayName: "Ana", role: FARMER }) { userId } }"#,
    )
    .await;
    response["data"]["createUser"]["userId"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_farm(api: &FarmApi, user_id: &str) -> String {
    let document = format!(
        r#"mutation {{ createFarm(input: {{ name: "Green Acres", location: {{ latitude: 10, longitude: 20 }}, size: 50, unit: HECTARES, userId: "{user_id}" }}) {{ farmId dateCreated }} }}"#
    );
    let response = run(api, &document).await;
    assert!(response["data"]["createFarm"]["dateCreated"].is_string());
    response["data"]["createFarm"]["farmId"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_crop(api: &FarmApi, farm_id: &str, user_id: &str) -> Value {
    let document = format!(
        r#"mutation {{ createCrop(input: {{ farmId: "{farm_id}", userId: "{user_id}", type: "corn", stage: GERMINATION, plantingDate: "2024-03-01", healthStatus: "good" }}) {{ cropId farmId userId type stage plantingDate harvestDate healthStatus dateCreated }} }}"#
    );
    run(api, &document).await
}

// =============================================================================
// Create and reverse collections
// =============================================================================

#[tokio::test]
async fn test_green_acres_farm_lists_its_crop() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;

    let created = create_crop(&api, &farm_id, &user_id).await;
    let crop = &created["data"]["createCrop"];
    assert!(crop["cropId"].as_str().unwrap().starts_with("crop-"));
    assert_eq!(crop["type"], "corn");
    assert_eq!(crop["stage"], "GERMINATION");
    assert_eq!(crop["harvestDate"], Value::Null);
    assert!(crop["dateCreated"].is_string());

    let document = format!(r#"{{ getFarm(farmId: "{farm_id}") {{ name crops {{ cropId type }} }} }}"#);
    let response = run(&api, &document).await;
    assert_eq!(
        response["data"]["getFarm"],
        json!({
            "name": "Green Acres",
            "crops": [{ "cropId": crop["cropId"], "type": "corn" }],
        })
    );
}

#[tokio::test]
async fn test_every_child_kind_appears_under_its_farm() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    let other_farm = create_farm(&api, &user_id).await;

    let document = format!(
        r#"mutation {{
            livestock: createLivestock(input: {{ farmId: "{farm_id}", userId: "{user_id}", type: "sheep", quantity: 40, healthStatus: "good" }}) {{ livestockId }}
            weather: createWeatherData(input: {{ farmId: "{farm_id}", userId: "{user_id}", date: "2024-05-01", temperature: 18.5, humidity: 0.6, rainfall: 2.0, windSpeed: 12.0 }}) {{ weatherDataId }}
            device: createIoTDevice(input: {{ farmId: "{farm_id}", userId: "{user_id}", type: "soil-probe", location: {{ latitude: 10.1, longitude: 20.1 }}, data: {{ moisture: 0.31, battery: "ok" }} }}) {{ deviceId lastUpdated data }}
            field: createField(input: {{ farmId: "{farm_id}", name: "North", fieldArea: 4.2, soilType: "clay", soilMoisture: 0.4, soilPH: 6.8, soilFertility: [{{ nutrient: "N", value: 1.5 }}] }}) {{ id soilPH }}
            labor: createLabor(input: {{ farmId: "{farm_id}", name: "Sam", jobTitle: "Hand", employmentStatus: "full-time", startDate: "2024-01-01", hoursWorked: 160, wageRate: 18 }}) {{ id }}
            machine: createMachineryEquipment(input: {{ farmId: "{farm_id}", name: "Tractor", equipmentType: "tractor", manufacturer: "Deere", model: "5075E", purchaseDate: "2022-04-01", maintenanceSchedule: "quarterly", operationalHours: 1200 }}) {{ id }}
            stray: createLabor(input: {{ farmId: "{other_farm}", name: "Kim", jobTitle: "Driver", employmentStatus: "part-time", startDate: "2024-02-01", hoursWorked: 40, wageRate: 20 }}) {{ id }}
        }}"#
    );
    let created = run(&api, &document).await;
    assert!(created.get("errors").is_none(), "{created}");
    assert_eq!(created["data"]["device"]["data"], json!({ "moisture": 0.31, "battery": "ok" }));
    assert!(created["data"]["device"]["lastUpdated"].is_string());
    assert_eq!(created["data"]["field"]["soilPH"], 6.8);

    let document = format!(
        r#"{{ getFarm(farmId: "{farm_id}") {{
            livestocks {{ livestockId }}
            weatherData {{ weatherDataId }}
            iotDevices {{ deviceId }}
            fields {{ id soilFertility {{ nutrient value }} }}
            labors {{ id }}
            machineryEquipments {{ id }}
        }} }}"#
    );
    let response = run(&api, &document).await;
    let farm = &response["data"]["getFarm"];
    let data = &created["data"];
    assert_eq!(farm["livestocks"], json!([{ "livestockId": data["livestock"]["livestockId"] }]));
    assert_eq!(farm["weatherData"], json!([{ "weatherDataId": data["weather"]["weatherDataId"] }]));
    assert_eq!(farm["iotDevices"], json!([{ "deviceId": data["device"]["deviceId"] }]));
    assert_eq!(
        farm["fields"],
        json!([{ "id": data["field"]["id"], "soilFertility": [{ "nutrient": "N", "value": 1.5 }] }])
    );
    assert_eq!(farm["labors"], json!([{ "id": data["labor"]["id"] }]));
    assert_eq!(farm["machineryEquipments"], json!([{ "id": data["machine"]["id"] }]));
}

#[tokio::test]
async fn test_user_farms_and_farms_by_user_id() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;

    let document = format!(
        r#"{{
            getUser(userId: "{user_id}") {{ farms {{ farmId user {{ displayName }} }} }}
            getFarmsByUserId(userId: "{user_id}") {{ farmId }}
            none: getFarmsByUserId(userId: "user-unknown") {{ farmId }}
        }}"#
    );
    let response = run(&api, &document).await;
    assert_eq!(
        response["data"]["getUser"]["farms"],
        json!([{ "farmId": farm_id, "user": { "displayName": "Ana" } }])
    );
    assert_eq!(response["data"]["getFarmsByUserId"], json!([{ "farmId": farm_id }]));
    assert_eq!(response["data"]["none"], json!([]));
}

#[tokio::test]
async fn test_list_aliases_match_plural_queries() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    run(
        &api,
        &format!(
            r#"mutation {{ createLabor(input: {{ farmId: "{farm_id}", name: "Sam", jobTitle: "Hand", employmentStatus: "full-time", startDate: "2024-01-01", hoursWorked: 160, wageRate: 18 }}) {{ id }} }}"#
        ),
    )
    .await;

    let document = format!(
        r#"{{
            getLabors {{ id }}
            getAllLabor {{ id }}
            getLaborsByFarmId(farmId: "{farm_id}") {{ id }}
            getLaborByFarmId(farmId: "{farm_id}") {{ id }}
            getAllLivestock {{ livestockId }}
            getAllWeatherData {{ weatherDataId }}
            getAllIoTDevices {{ deviceId }}
            getAllMachineryEquipment {{ id }}
        }}"#
    );
    let response = run(&api, &document).await;
    let data = &response["data"];
    assert_eq!(data["getLabors"].as_array().unwrap().len(), 1);
    assert_eq!(data["getLabors"], data["getAllLabor"]);
    assert_eq!(data["getLabors"], data["getLaborsByFarmId"]);
    assert_eq!(data["getLabors"], data["getLaborByFarmId"]);
    assert_eq!(data["getAllLivestock"], json!([]));
    assert_eq!(data["getAllIoTDevices"], json!([]));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_crop_with_missing_farm_is_rejected_without_write() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;

    let response = create_crop(&api, "farm-missing", &user_id).await;
    assert_eq!(error_codes(&response), vec!["REFERENCE_NOT_FOUND"]);
    assert_eq!(response["errors"][0]["extensions"]["field"], "farmId");
    assert_eq!(response["errors"][0]["extensions"]["id"], "farm-missing");

    let crops = run(&api, "{ getCrops { cropId } }").await;
    assert_eq!(crops["data"]["getCrops"], json!([]));
}

#[tokio::test]
async fn test_structural_errors_reported_before_lookup() {
    let (store, api) = setup();
    store.reset();

    let response = run(
        &api,
        r#"mutation { createFarm(input: { name: "  ", location: { latitude: 1, longitude: 2 }, size: 5, unit: ACRES, userId: "user-missing" }) { farmId } }"#,
    )
    .await;
    assert_eq!(error_codes(&response), vec!["VALIDATION_FAILED"]);
    assert_eq!(response["errors"][0]["extensions"]["field"], "name");
    assert_eq!(store.gets_of(EntityKind::User, "user-missing"), 0);
}

#[tokio::test]
async fn test_enum_and_shape_errors_rejected() {
    let (_, api) = setup();

    let bad_role = run(
        &api,
        r#"mutation { createUser(input: { email: "x@example.com", displayName: "X", role: KING }) { userId } }"#,
    )
    .await;
    assert!(bad_role["errors"].is_array());

    let server_field = run(
        &api,
        r#"mutation { createUser(input: { email: "x@example.com", displayName: "X", role: OTHER, dateCreated: "2024-01-01T00:00:00Z" }) { userId } }"#,
    )
    .await;
    assert!(server_field["errors"].is_array());

    let users = run(&api, "{ getUsers { userId } }").await;
    assert_eq!(users["data"]["getUsers"], json!([]));
}

#[tokio::test]
async fn test_iot_data_must_be_an_object() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;

    let document = format!(
        r#"mutation {{ createIoTDevice(input: {{ farmId: "{farm_id}", userId: "{user_id}", type: "probe", location: {{ latitude: 1, longitude: 2 }}, data: "not an object" }}) {{ deviceId }} }}"#
    );
    let response = run(&api, &document).await;
    assert!(response["errors"].is_array());

    let devices = run(&api, "{ getIoTDevices { deviceId } }").await;
    assert_eq!(devices["data"]["getIoTDevices"], json!([]));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_missing_labor_is_not_found() {
    let (_, api) = setup();

    let response = run(
        &api,
        r#"mutation { updateLabor(laborId: "labor-404", input: { name: "Ghost" }) { id } }"#,
    )
    .await;
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["extensions"]["kind"], "Labor");

    let labors = run(&api, "{ getLabors { id } }").await;
    assert_eq!(labors["data"]["getLabors"], json!([]));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    let created = create_crop(&api, &farm_id, &user_id).await;
    let crop = created["data"]["createCrop"].clone();
    let crop_id = crop["cropId"].as_str().unwrap();

    let document = format!(
        r#"mutation {{ updateCrop(cropId: "{crop_id}", input: {{ stage: FLOWERING, harvestDate: null }}) {{ cropId farmId userId type stage plantingDate harvestDate healthStatus dateCreated }} }}"#
    );
    let response = run(&api, &document).await;
    let updated = &response["data"]["updateCrop"];

    let mut expected = crop.clone();
    expected["stage"] = json!("FLOWERING");
    assert_eq!(*updated, expected);
}

#[tokio::test]
async fn test_update_rechecks_foreign_keys() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;

    let document = format!(
        r#"mutation {{ updateFarm(farmId: "{farm_id}", input: {{ userId: "user-ghost", name: "Renamed" }}) {{ name }} }}"#
    );
    let response = run(&api, &document).await;
    assert_eq!(error_codes(&response), vec!["REFERENCE_NOT_FOUND"]);

    let farm = run(&api, &format!(r#"{{ getFarm(farmId: "{farm_id}") {{ name }} }}"#)).await;
    assert_eq!(farm["data"]["getFarm"]["name"], "Green Acres");
}

#[tokio::test]
async fn test_nested_read_after_update_in_same_request() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    let created = create_crop(&api, &farm_id, &user_id).await;
    let crop_id = created["data"]["createCrop"]["cropId"].as_str().unwrap();

    let document = format!(
        r#"mutation {{
            before: updateCrop(cropId: "{crop_id}", input: {{ healthStatus: "fair" }}) {{ farm {{ name }} }}
            rename: updateFarm(farmId: "{farm_id}", input: {{ name: "Blue Acres" }}) {{ name }}
            after: updateCrop(cropId: "{crop_id}", input: {{ healthStatus: "good" }}) {{ farm {{ name }} }}
        }}"#
    );
    let response = run(&api, &document).await;
    assert_eq!(response["data"]["before"]["farm"]["name"], "Green Acres");
    assert_eq!(response["data"]["after"]["farm"]["name"], "Blue Acres");
}

// =============================================================================
// Resolution
// =============================================================================

#[tokio::test]
async fn test_shared_parent_fetched_once_per_request() {
    let (store, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    for _ in 0..3 {
        create_crop(&api, &farm_id, &user_id).await;
    }

    store.reset();
    let response = run(&api, "{ getCrops { cropId farm { name } user { displayName } } }").await;
    let crops = response["data"]["getCrops"].as_array().unwrap();
    assert_eq!(crops.len(), 3);
    assert!(crops.iter().all(|c| c["farm"]["name"] == "Green Acres"));
    assert_eq!(store.gets_of(EntityKind::Farm, &farm_id), 1);
    assert_eq!(store.gets_of(EntityKind::User, &user_id), 1);

    run(&api, "{ getCrops { farm { name } } }").await;
    assert_eq!(store.gets_of(EntityKind::Farm, &farm_id), 2);
}

#[tokio::test]
async fn test_root_lookup_shares_the_request_memo() {
    let (store, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    create_crop(&api, &farm_id, &user_id).await;
    create_crop(&api, &farm_id, &user_id).await;

    store.reset();
    let document = format!(
        r#"{{
            getFarm(farmId: "{farm_id}") {{ crops {{ farm {{ name }} }} user {{ displayName }} }}
            getUser(userId: "{user_id}") {{ farms {{ farmId }} }}
        }}"#
    );
    let response = run(&api, &document).await;
    assert!(response["errors"].is_null(), "{response}");
    let crops = response["data"]["getFarm"]["crops"].as_array().unwrap();
    assert_eq!(crops.len(), 2);
    assert!(crops.iter().all(|c| c["farm"]["name"] == "Green Acres"));
    assert_eq!(store.gets_of(EntityKind::Farm, &farm_id), 1);
    assert_eq!(store.gets_of(EntityKind::User, &user_id), 1);
}

#[tokio::test]
async fn test_unselected_relationships_are_not_fetched() {
    let (store, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    create_crop(&api, &farm_id, &user_id).await;

    store.reset();
    run(&api, "{ getCrops { cropId farmId } }").await;
    assert_eq!(store.gets_of(EntityKind::Farm, &farm_id), 0);
}

#[tokio::test]
async fn test_dangling_reference_is_field_level() {
    let (store, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;
    create_crop(&api, &farm_id, &user_id).await;

    // Written straight to storage, as an outside process could.
    let orphan = Gateway::<Crop>::create(
        store.as_ref(),
        Crop {
            crop_id: String::new(),
            farm_id: "farm-gone".to_string(),
            user_id: user_id.clone(),
            crop_type: "wheat".to_string(),
            stage: CropStage::Harvest,
            planting_date: "2023-10-01".to_string(),
            harvest_date: None,
            health_status: "good".to_string(),
            date_created: Default::default(),
        },
    )
    .unwrap();

    let response = run(&api, "{ getCrops { cropId type farm { name } } }").await;
    let crops = response["data"]["getCrops"].as_array().unwrap();
    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0]["farm"]["name"], "Green Acres");
    assert_eq!(crops[1]["cropId"], orphan.crop_id.as_str());
    assert_eq!(crops[1]["type"], "wheat");
    assert_eq!(crops[1]["farm"], Value::Null);

    assert_eq!(error_codes(&response), vec!["DANGLING_REFERENCE"]);
    assert_eq!(response["errors"][0]["path"], json!(["getCrops", 1, "farm"]));
    assert_eq!(response["errors"][0]["extensions"]["kind"], "Crop");
    assert_eq!(response["errors"][0]["extensions"]["field"], "farmId");
}

#[tokio::test]
async fn test_failed_sibling_does_not_abort_response() {
    let (_, api) = setup();
    let user_id = create_user(&api).await;
    let farm_id = create_farm(&api, &user_id).await;

    let document = format!(
        r#"{{
            missing: getFarm(farmId: "farm-nope") {{ name }}
            found: getFarm(farmId: "{farm_id}") {{ name }}
            all: getFarms {{ farmId }}
        }}"#
    );
    let response = run(&api, &document).await;
    assert_eq!(response["data"]["missing"], Value::Null);
    assert_eq!(response["data"]["found"]["name"], "Green Acres");
    assert_eq!(response["data"]["all"], json!([{ "farmId": farm_id }]));
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["path"], json!(["missing"]));
}

// =============================================================================
// Schema
// =============================================================================

fn type_block<'a>(sdl: &'a str, name: &str) -> &'a str {
    let start = sdl
        .find(&format!("type {name} {{"))
        .unwrap_or_else(|| panic!("type {name} missing"));
    let end = start + sdl[start..].find('}').unwrap();
    &sdl[start..end]
}

#[test]
fn test_identifier_fields_are_ids() {
    let api = FarmApi::new(Arc::new(MemoryStore::new()));
    let sdl = api.sdl();

    let cases: &[(&str, &[&str])] = &[
        ("User", &["userId"]),
        ("Farm", &["farmId", "userId"]),
        ("Crop", &["cropId", "farmId", "userId"]),
        ("Livestock", &["livestockId", "farmId", "userId"]),
        ("WeatherData", &["weatherDataId", "farmId", "userId"]),
        ("IoTDevice", &["deviceId", "farmId", "userId"]),
        ("Field", &["id", "farmId"]),
        ("Labor", &["id", "farmId"]),
        ("MachineryEquipment", &["id", "farmId"]),
    ];
    for (kind, fields) in cases {
        let block = type_block(&sdl, kind);
        for field in *fields {
            assert!(
                block.contains(&format!("{field}: ID!")),
                "{kind}.{field} is not ID!\n{block}"
            );
        }
    }
}
