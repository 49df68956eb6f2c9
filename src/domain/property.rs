// src/domain/property.rs

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// One listing as loaded from the data file.
///
/// The typed fields are the ones the filter engine looks at. The full JSON
/// object is kept alongside so that every other field passes through to the
/// response untouched, in its original order and representation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PropertyRecord {
    id: i64,
    price: f64,
    bedrooms: u32,
    kind: String,
    address: Address,
    document: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
}

// The fields we require, pulled out of the raw object.
#[derive(Deserialize)]
struct RecordFields {
    id: i64,
    price: f64,
    bedrooms: u32,
    #[serde(rename = "type")]
    kind: String,
    address: Address,
}

impl TryFrom<Map<String, Value>> for PropertyRecord {
    type Error = serde_json::Error;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: RecordFields = serde_json::from_value(Value::Object(document.clone()))?;

        if fields.price < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "property {} has a negative price",
                fields.id
            )));
        }

        Ok(PropertyRecord {
            id: fields.id,
            price: fields.price,
            bedrooms: fields.bedrooms,
            kind: fields.kind,
            address: fields.address,
            document,
        })
    }
}

impl Serialize for PropertyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl PropertyRecord {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    /// The listing category, e.g. "House" or "Apartment".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn city(&self) -> &str {
        &self.address.city
    }

    pub fn state(&self) -> &str {
        &self.address.state
    }
}
