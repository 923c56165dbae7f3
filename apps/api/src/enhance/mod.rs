//! Section enhancement — deterministic text templating over resume sections.
//!
//! Every rule builds a new value; the caller's content is only borrowed.
//! Enhancement is not idempotent: enhancing an already enhanced summary nests
//! the prefix again.

pub mod handlers;
pub mod rules;
pub mod section;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::enhance::rules::{
    EDUCATION_SUFFIX, ENHANCED_PREFIX, EXPERIENCE_SUFFIX, EXTRA_SKILLS, GENERIC_PREFIX,
    PROFESSIONAL_NAME_SUFFIX, SUMMARY_SUFFIX,
};
use crate::enhance::section::Section;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("{section} entry at index {index} is not an object")]
    EntryNotObject { section: String, index: usize },

    #[error("personalInfo.name must be text, got {0}")]
    NameNotText(String),
}

/// Applies the rule for `section` to `content`.
pub fn enhance(section: &str, content: &Value) -> Result<Value, EnhanceError> {
    let section = Section::parse(section);
    debug!(section = section.name(), "enhancing section");

    match section {
        Section::Summary => Ok(Value::String(format!(
            "{ENHANCED_PREFIX}{}{SUMMARY_SUFFIX}",
            render_text(content)
        ))),
        Section::Experience | Section::Education => match content.as_array() {
            Some(entries) => {
                let suffix = if section == Section::Experience {
                    EXPERIENCE_SUFFIX
                } else {
                    EDUCATION_SUFFIX
                };
                rewrite_descriptions(section.name(), entries, suffix)
            }
            None => Ok(wrap(ENHANCED_PREFIX, content)),
        },
        Section::Skills => match content.as_array() {
            Some(skills) => {
                let mut enhanced = skills.clone();
                enhanced.extend(EXTRA_SKILLS.iter().map(|s| Value::String(s.to_string())));
                Ok(Value::Array(enhanced))
            }
            None => Ok(wrap(ENHANCED_PREFIX, content)),
        },
        Section::PersonalInfo => match content.as_object() {
            Some(info) => professional_name(info).map(Value::Object),
            None => Ok(wrap(ENHANCED_PREFIX, content)),
        },
        Section::Other(_) => Ok(wrap(GENERIC_PREFIX, content)),
    }
}

/// Copies each entry, replacing only its `description`.
fn rewrite_descriptions(
    section: &str,
    entries: &[Value],
    suffix: &str,
) -> Result<Value, EnhanceError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<Value, EnhanceError> {
            let entry = entry.as_object().ok_or_else(|| EnhanceError::EntryNotObject {
                section: section.to_string(),
                index,
            })?;
            let description = entry.get("description").map(render_text).unwrap_or_default();

            let mut enhanced = entry.clone();
            enhanced.insert(
                "description".to_string(),
                Value::String(format!("{ENHANCED_PREFIX}{description}{suffix}")),
            );
            Ok(Value::Object(enhanced))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn professional_name(info: &Map<String, Value>) -> Result<Map<String, Value>, EnhanceError> {
    let name = match info.get("name") {
        None => "",
        Some(Value::String(name)) => name.as_str(),
        Some(other) => return Err(EnhanceError::NameNotText(other.to_string())),
    };

    let mut enhanced = info.clone();
    enhanced.insert(
        "name".to_string(),
        Value::String(format!("{name}{PROFESSIONAL_NAME_SUFFIX}")),
    );
    Ok(enhanced)
}

fn wrap(prefix: &str, content: &Value) -> Value {
    Value::String(format!("{prefix}{}", render_text(content)))
}

/// Strings render as their contents, everything else as compact JSON.
fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
