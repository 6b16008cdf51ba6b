use serde::Deserialize;
use serde_json::{Map, Value};

pub const COLUMNS: [&str; 8] = [
    "BikeID",
    "Make",
    "Model",
    "Year",
    "Displacement",
    "Price",
    "Terrain",
    "Description",
];

/// Every column except the free-form description can drive the sort.
pub const SORTABLE_COLUMNS: [&str; 7] = [
    "BikeID",
    "Make",
    "Model",
    "Year",
    "Displacement",
    "Price",
    "Terrain",
];

pub const REQUIRED_FIELDS: [&str; 3] = ["BikeID", "Make", "Model"];

/// One catalog record. Fields stay as loose JSON scalars so that an absent
/// field is distinguishable from an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Bike {
    fields: Map<String, Value>,
}

impl Bike {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Text form of a field, or `None` when the record has no such field.
    pub fn text(&self, name: &str) -> Option<String> {
        self.field(name).map(value_text)
    }

    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    pub fn id(&self) -> String {
        self.text_or_default("BikeID")
    }

    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.fields
            .values()
            .any(|value| value_text(value).to_lowercase().contains(&needle))
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
