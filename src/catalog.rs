/// Static catalog of backend procedures and views
///
/// Every screen in the console is driven by this table. A procedure entry
/// pairs a title with its ordered field list and a request descriptor
/// (HTTP method, URL builder, body builder). The backend owns all
/// validation — the console sends raw text values verbatim and surfaces
/// whatever the server says about them.

use serde_json::{json, Value};

/// HTTP method used to invoke a procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Delete,
}

/// Ordered mapping from field name to current text input value
///
/// Built from a procedure's static field list with every value empty,
/// mutated on each keystroke, and discarded when the user navigates away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(&'static str, String)>,
}

impl FieldMap {
    /// Create a field map with one empty value per declared field
    pub fn new(fields: &'static [&'static str]) -> Self {
        Self {
            entries: fields.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    /// Current value of a field, or "" if the catalog never declared it
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Replace the value at a field position (no-op if out of range)
    pub fn set(&mut self, index: usize, value: String) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.1 = value;
        }
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All fields as one JSON object, keys in declaration order
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.entries {
            map.insert((*name).to_string(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}

/// One backend stored procedure as the console knows it
///
/// `url` builds the request path from the current field values;
/// `body` builds the JSON payload. Most procedures send the whole
/// field map — the ones with a path parameter or a trimmed body
/// carry their own builders.
#[derive(Debug)]
pub struct ProcedureSpec {
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub method: Method,
    pub url: fn(&FieldMap) -> String,
    pub body: fn(&FieldMap) -> Value,
}

fn all_fields(values: &FieldMap) -> Value {
    values.to_json()
}

/// Every procedure the backend exposes, in menu order
pub static PROCEDURES: &[ProcedureSpec] = &[
    ProcedureSpec {
        title: "Add Airplane",
        fields: &[
            "ip_airlineID",
            "ip_tail_num",
            "ip_seat_capacity",
            "ip_speed",
            "ip_locationID",
            "ip_plane_type",
            "ip_maintenanced",
            "ip_model",
            "ip_neo",
        ],
        method: Method::Post,
        url: |_| "/airplanes".to_string(),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Add Airport",
        fields: &[
            "ip_airportID",
            "ip_airport_name",
            "ip_city",
            "ip_state",
            "ip_country",
            "ip_locationID",
        ],
        method: Method::Post,
        url: |_| "/airports".to_string(),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Add Person",
        fields: &[
            "ip_personID",
            "ip_first_name",
            "ip_last_name",
            "ip_locationID",
            "ip_taxID",
            "ip_experience",
            "ip_miles",
            "ip_funds",
        ],
        method: Method::Post,
        url: |_| "/people".to_string(),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Grant/Revoke Pilot License",
        fields: &["personID", "ip_license"],
        method: Method::Post,
        url: |v| format!("/pilots/{}/license", v.get("personID")),
        body: |v| json!({ "ip_license": v.get("ip_license") }),
    },
    ProcedureSpec {
        title: "Offer Flight",
        fields: &[
            "ip_flightID",
            "ip_routeID",
            "ip_support_airline",
            "ip_support_tail",
            "ip_progress",
            "ip_next_time",
            "ip_cost",
        ],
        method: Method::Post,
        url: |_| "/flights".to_string(),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Flight Landing",
        fields: &["flightID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/land", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Flight Takeoff",
        fields: &["flightID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/takeoff", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Board Passengers",
        fields: &["flightID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/board", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Disembark Passengers",
        fields: &["flightID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/disembark", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Assign Pilot",
        fields: &["flightID", "ip_personID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/assign-pilot", v.get("flightID")),
        body: |v| json!({ "ip_personID": v.get("ip_personID") }),
    },
    ProcedureSpec {
        title: "Recycle Crew",
        fields: &["flightID"],
        method: Method::Post,
        url: |v| format!("/flights/{}/recycle-crew", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Retire Flight",
        fields: &["flightID"],
        method: Method::Delete,
        url: |v| format!("/flights/{}", v.get("flightID")),
        body: all_fields,
    },
    ProcedureSpec {
        title: "Simulation Cycle",
        fields: &[],
        method: Method::Post,
        url: |_| "/simulation-cycle".to_string(),
        body: |_| json!({}),
    },
];

/// Every read-only view the backend exposes, in menu order
pub static VIEWS: &[&str] = &[
    "flights_in_the_air",
    "flights_on_the_ground",
    "people_in_the_air",
    "people_on_the_ground",
    "route_summary",
    "alternative_airports",
];
