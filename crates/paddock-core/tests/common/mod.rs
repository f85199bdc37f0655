// Stateful in-memory stand-in for the facility backend.
//
// Mounted on a wiremock server as a single catch-all responder, it
// mimics the REST contract: prefixed sequential ids, 201 on create,
// missing-field and empty-update 400s, `<Entity> not found` 404s, and
// server-derived inventory status.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use paddock_core::{Facility, FacilityConfig};
use serde_json::{Map, Value, json};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

struct CollectionSpec {
    path: &'static str,
    prefix: char,
    label: &'static str,
    required: &'static [&'static str],
}

const COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        path: "animals",
        prefix: 'A',
        label: "Animal",
        required: &["name", "species", "breed", "age", "gender", "status"],
    },
    CollectionSpec {
        path: "health-records",
        prefix: 'H',
        label: "Health record",
        required: &["animalId", "recordType", "description", "date", "veterinarian", "status"],
    },
    CollectionSpec {
        path: "feeding-tasks",
        prefix: 'F',
        label: "Feeding task",
        required: &[
            "animalId",
            "animalName",
            "foodType",
            "quantity",
            "time",
            "frequency",
            "status",
            "startDate",
        ],
    },
    CollectionSpec {
        path: "breeding-records",
        prefix: 'B',
        label: "Breeding record",
        required: &["motherId", "fatherId", "matingDate", "dueDate", "status"],
    },
    CollectionSpec {
        path: "inventory",
        prefix: 'I',
        label: "Inventory item",
        required: &["name", "category", "quantity", "unit", "reorderLevel", "costPerUnit"],
    },
    CollectionSpec {
        path: "staff",
        prefix: 'S',
        label: "Staff member",
        required: &["name", "role", "email", "phone", "status", "joined"],
    },
];

const TIMESTAMP: &str = "2024-06-01T12:00:00+00:00";

#[derive(Default)]
struct State {
    collections: HashMap<&'static str, Vec<Value>>,
    counters: HashMap<&'static str, u32>,
    settings: Value,
    failing: HashSet<String>,
    settings_writes: Vec<Value>,
    writes: usize,
}

/// Cloneable handle shared by the mock responder and the test body.
#[derive(Clone)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let state = State {
            settings: json!({
                "facilityName": "Green Valley Animal Care Center",
                "registrationNumber": "FAC-2023-001",
                "address": "123 Animal Care Lane, Green Valley, CA 90210",
                "phone": "(555) 123-4567",
                "email": "contact@greenvalley.com",
                "operatingHours": "Monday - Saturday: 8:00 AM - 6:00 PM",
                "notificationPreferences": {
                    "lowStockAlerts": true,
                    "healthReminders": true,
                    "breedingAlerts": true,
                    "feedingReminders": true,
                    "emailSummary": false,
                },
                "lastBackup": TIMESTAMP,
            }),
            ..State::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Make every request under `/api/{path}` answer 500.
    pub fn fail(&self, path: &str) {
        self.state.lock().unwrap().failing.insert(path.to_owned());
    }

    /// Undo [`fail`](Self::fail).
    pub fn recover(&self, path: &str) {
        self.state.lock().unwrap().failing.remove(path);
    }

    /// Change one stored settings field, as if edited elsewhere.
    pub fn set_setting(&self, key: &str, value: Value) {
        let mut state = self.state.lock().unwrap();
        if let Some(settings) = state.settings.as_object_mut() {
            settings.insert(key.to_owned(), value);
        }
    }

    /// Insert a record directly, as if another client had created it.
    pub fn seed(&self, path: &str, record: Value) -> String {
        let mut state = self.state.lock().unwrap();
        let spec = spec_for(path).unwrap();
        insert(&mut state, spec, record.as_object().cloned().unwrap_or_default())
    }

    pub fn records(&self, path: &str) -> Vec<Value> {
        let state = self.state.lock().unwrap();
        state.collections.get(path).cloned().unwrap_or_default()
    }

    pub fn settings_writes(&self) -> Vec<Value> {
        self.state.lock().unwrap().settings_writes.clone()
    }

    /// Number of POST / PUT / DELETE requests served.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    /// Start a mock server backed by this state and return a facility
    /// pointed at it (not yet loaded).
    pub async fn start(&self) -> (MockServer, Facility) {
        let server = MockServer::start().await;
        Mock::given(path_regex(r"^/api(/.*)?$"))
            .respond_with(self.clone())
            .mount(&server)
            .await;

        let url = server.uri().parse().unwrap();
        let facility = Facility::new(FacilityConfig::new(url)).unwrap();
        (server, facility)
    }
}

fn spec_for(path: &str) -> Option<&'static CollectionSpec> {
    COLLECTIONS.iter().find(|c| c.path == path)
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}

fn derive_stock_status(record: &mut Map<String, Value>) {
    let quantity = record.get("quantity").and_then(Value::as_f64).unwrap_or(0.0);
    let reorder = record
        .get("reorderLevel")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let status = if quantity <= 0.0 {
        "Out of Stock"
    } else if quantity <= reorder {
        "Low Stock"
    } else {
        "In Stock"
    };
    record.insert("status".into(), json!(status));
}

fn insert(state: &mut State, spec: &'static CollectionSpec, mut record: Map<String, Value>) -> String {
    let counter = state.counters.entry(spec.path).or_insert(0);
    *counter += 1;
    let id = format!("{}{:03}", spec.prefix, counter);

    if spec.path == "inventory" {
        derive_stock_status(&mut record);
    }
    record.insert("id".into(), json!(id));
    record.insert("createdAt".into(), json!(TIMESTAMP));
    record.insert("updatedAt".into(), json!(TIMESTAMP));
    state
        .collections
        .entry(spec.path)
        .or_default()
        .push(Value::Object(record));
    id
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        let method = request.method.as_str().to_owned();
        let segments: Vec<&str> = request
            .url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        let body: Option<Value> = serde_json::from_slice(&request.body).ok();

        if method != "GET" {
            state.writes += 1;
        }

        match (method.as_str(), segments.as_slice()) {
            ("GET", ["api", "health"]) => ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "OK", "message": "Server is running" })),

            (_, ["api", "settings"]) if state.failing.contains("settings") => {
                error(500, "Unable to load settings")
            }
            ("GET", ["api", "settings"]) => {
                ResponseTemplate::new(200).set_body_json(state.settings.clone())
            }
            ("PUT", ["api", "settings"]) => {
                let payload = body.unwrap_or_else(|| json!({}));
                state.settings_writes.push(payload.clone());
                if let (Some(current), Some(changes)) =
                    (state.settings.as_object_mut(), payload.as_object())
                {
                    for (k, v) in changes {
                        current.insert(k.clone(), v.clone());
                    }
                    current.insert("updatedAt".into(), json!(TIMESTAMP));
                }
                ResponseTemplate::new(200).set_body_json(state.settings.clone())
            }

            (_, ["api", path, ..]) if state.failing.contains(*path) => {
                error(500, "Database unavailable")
            }

            (verb, ["api", path, rest @ ..]) => {
                let Some(spec) = spec_for(path) else {
                    return error(404, "Not found");
                };
                match (verb, rest) {
                    ("GET", []) => ResponseTemplate::new(200)
                        .set_body_json(state.collections.get(spec.path).cloned().unwrap_or_default()),
                    ("POST", []) => {
                        let payload = body.and_then(|b| b.as_object().cloned()).unwrap_or_default();
                        let missing: Vec<&str> = spec
                            .required
                            .iter()
                            .copied()
                            .filter(|f| !payload.contains_key(*f))
                            .collect();
                        if !missing.is_empty() {
                            let mut missing = missing;
                            missing.sort_unstable();
                            return error(
                                400,
                                &format!("Missing required fields: {}", missing.join(", ")),
                            );
                        }
                        let id = insert(&mut state, spec, payload);
                        let created = state.collections[spec.path]
                            .iter()
                            .find(|r| r["id"] == id)
                            .cloned()
                            .unwrap();
                        ResponseTemplate::new(201).set_body_json(created)
                    }
                    ("GET", [id]) => match state
                        .collections
                        .get(spec.path)
                        .and_then(|rs| rs.iter().find(|r| r["id"] == *id))
                    {
                        Some(record) => ResponseTemplate::new(200).set_body_json(record.clone()),
                        None => error(404, &format!("{} not found", spec.label)),
                    },
                    ("PUT", [id]) => {
                        let changes = body.and_then(|b| b.as_object().cloned()).unwrap_or_default();
                        if changes.is_empty() {
                            return error(400, "No data provided");
                        }
                        let Some(record) = state
                            .collections
                            .get_mut(spec.path)
                            .and_then(|rs| rs.iter_mut().find(|r| r["id"] == *id))
                            .and_then(Value::as_object_mut)
                        else {
                            return error(404, &format!("{} not found", spec.label));
                        };
                        for (k, v) in changes {
                            record.insert(k, v);
                        }
                        if spec.path == "inventory" {
                            derive_stock_status(record);
                        }
                        record.insert("updatedAt".into(), json!(TIMESTAMP));
                        ResponseTemplate::new(200).set_body_json(Value::Object(record.clone()))
                    }
                    ("DELETE", [id]) => {
                        let records = state.collections.entry(spec.path).or_default();
                        let before = records.len();
                        records.retain(|r| r["id"] != *id);
                        if records.len() == before {
                            return error(404, &format!("{} not found", spec.label));
                        }
                        ResponseTemplate::new(200).set_body_json(
                            json!({ "message": format!("{} deleted successfully", spec.label) }),
                        )
                    }
                    _ => error(405, "Method not allowed"),
                }
            }

            _ => error(404, "Not found"),
        }
    }
}

// ── Request builders ────────────────────────────────────────────────

pub fn rex() -> paddock_core::CreateAnimalRequest {
    serde_json::from_value(json!({
        "name": "Rex",
        "species": "Dog",
        "breed": "Labrador",
        "age": 3,
        "gender": "Male",
        "weight": 30.5,
        "status": "Healthy",
    }))
    .unwrap()
}

pub fn animal_json(name: &str) -> Value {
    json!({
        "name": name,
        "species": "Cow",
        "breed": "Holstein",
        "age": 4,
        "gender": "Female",
        "status": "Healthy",
    })
}
