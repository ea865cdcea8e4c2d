use serde::Deserialize;
use serde_json::{Map, Value};

/// An event as returned by the matcher, whose keys depend on the upstream source
/// (Fatsoma, Eventbrite, Ticketmaster)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawEventRecord {
    fields: Map<String, Value>,
}

impl RawEventRecord {
    /// Text value of a key, if present and not blank
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(value) => {
                let value = value.trim();

                (!value.is_empty()).then(|| value.to_string())
            }
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for RawEventRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for RawEventRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub name: String,
    pub date: String,
    pub location: String,
    pub url: String,
}
