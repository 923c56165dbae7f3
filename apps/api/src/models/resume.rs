#![allow(dead_code)]

//! Typed view of a resume document as the editor frontend produces it.
//!
//! Saved documents are stored as opaque JSON; these types describe the shape a
//! well-formed document has and are used to probe conformance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// `id` is supplied by the caller; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
}

/// Sequence order of `experience`, `education` and `skills` is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl Resume {
    /// Attempts to read an opaque document as a typed resume.
    pub fn from_document(document: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(document.clone()))
    }
}
