//! Data models for the object API.
//!
//! These types mirror the JSON shape of the service. They carry no invariants
//! beyond field presence and are constructed fresh per request or response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One object resource in the external store.
///
/// The identifier is assigned by the server. Items built locally for creation
/// have no `id`, and the field is left out of the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    /// Display name
    pub name: String,

    /// Free-form nested metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Attributes>,
}

impl Item {
    /// Create an unsaved item with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            data: None,
        }
    }

    /// Attach nested attributes.
    pub fn with_data(mut self, data: Attributes) -> Self {
        self.data = Some(data);
        self
    }

    /// Get the identifier, if the server has assigned one.
    pub fn id(&self) -> Option<&ItemId> {
        self.id.as_ref()
    }
}

/// Nested metadata of an [`Item`].
///
/// Every field is optional. Keys the model does not know about are ignored
/// when decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(
        rename = "CPU model",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cpu_model: Option<String>,

    #[serde(
        rename = "Hard disk size",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hard_disk_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Attributes {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_cpu_model(mut self, cpu_model: impl Into<String>) -> Self {
        self.cpu_model = Some(cpu_model.into());
        self
    }

    pub fn with_hard_disk_size(mut self, size: impl Into<String>) -> Self {
        self.hard_disk_size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Response body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
