use serde::{Deserialize, Serialize};

/// One element of the input array, exactly as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    pub data: serde_json::Value,
}

impl RawRecord {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }
}

impl From<serde_json::Value> for RawRecord {
    fn from(data: serde_json::Value) -> Self {
        Self::new(data)
    }
}

/// Name used when a record carries no usable `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// The normalized animal both renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub diet: Option<String>,
    pub location: Option<String>,
    pub animal_type: Option<String>,
}

impl Entity {
    /// Labelled optional fields in display order, skipping absent ones.
    pub fn optional_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Diet", self.diet.as_deref()),
            ("Location", self.location.as_deref()),
            ("Type", self.animal_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: String,
    pub entity_count: usize,
    pub html_bytes: usize,
}
