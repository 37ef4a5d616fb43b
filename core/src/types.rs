//! Domain DTOs for the student API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Parsing is
//! lenient per record: fields the server leaves out or sends with the wrong
//! JSON type fall back to defaults, and a record without a usable `id` still
//! parses (the controller filters it out at render time).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a student. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single student record returned by the API.
///
/// Every field parses leniently: a value of the wrong JSON type becomes the
/// field's empty value instead of failing the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<StudentId>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<i64>,
}

impl Student {
    /// Converts one element of a list response. Anything that is not a JSON
    /// object becomes a record without an id.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Request payload for both creating and updating a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Number(serde_json::Number),
    Other(serde::de::IgnoredAny),
}

/// Accepts a string or numeric id. Empty strings, `null` and any other JSON
/// type mean "no id".
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<StudentId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) if !text.is_empty() => Some(StudentId(text)),
        Raw::Number(number) => Some(StudentId(number.to_string())),
        _ => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Other(_) => String::new(),
    })
}

/// Integers pass through, numeric strings are parsed, everything else is absent.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text.trim().parse().ok(),
        Raw::Number(number) => number.as_i64(),
        Raw::Other(_) => None,
    })
}
