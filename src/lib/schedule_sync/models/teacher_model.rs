//! Module with teacher model compatible with the teacher directory document store
use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    #[serde(default)]
    pub full_name: String,
}

impl Teacher {
    pub fn new(id: &str, last_name: &str, first_name: &str, middle_name: &str) -> Self {
        Self {
            id: id.to_owned(),
            last_name: last_name.to_owned(),
            first_name: first_name.to_owned(),
            middle_name: middle_name.to_owned(),
            full_name: join_full_name(last_name, first_name, middle_name),
        }
    }
}

/* only the parts that are present, so a nameless record gets an empty full name */
fn join_full_name(last_name: &str, first_name: &str, middle_name: &str) -> String {
    [last_name, first_name, middle_name]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// What the directory answers to a range query.
///
/// The store replies with `null` when nothing matched, with an object keyed by record key
/// in the usual case, and with an array when all the keys look like integers.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(untagged)]
pub enum DirectoryResponse {
    Keyed(BTreeMap<String, Value>),
    Listed(Vec<Value>),
    #[default]
    Empty,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct TeacherRecord {
    id: Option<Value>,
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
}

fn record_id(id: Option<Value>) -> Option<String> {
    match id? {
        Value::String(id) if !id.is_empty() => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn teacher_from_record(key: &str, record: Value) -> Option<Teacher> {
    if record.is_null() {
        return None;
    }
    let record: TeacherRecord = match serde_json::from_value(record) {
        Ok(record) => record,
        Err(err) => {
            warn!("Skipping directory record {}: {}", key, err);
            return None;
        }
    };
    let Some(id) = record_id(record.id) else {
        warn!("Skipping directory record {} without an id", key);
        return None;
    };
    Some(Teacher::new(
        &id,
        record.last_name.as_deref().unwrap_or_default(),
        record.first_name.as_deref().unwrap_or_default(),
        record.middle_name.as_deref().unwrap_or_default(),
    ))
}

/// Turns a directory answer into the list shown to the user: unusable records dropped,
/// full names filled in, ordered by full name.
pub fn collect_teachers(response: DirectoryResponse) -> Vec<Teacher> {
    let mut teachers = match response {
        DirectoryResponse::Keyed(records) => records
            .into_iter()
            .filter_map(|(key, record)| teacher_from_record(&key, record))
            .collect::<Vec<_>>(),
        DirectoryResponse::Listed(records) => records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| teacher_from_record(&index.to_string(), record))
            .collect::<Vec<_>>(),
        DirectoryResponse::Empty => Vec::new(),
    };
    teachers.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    teachers
}
