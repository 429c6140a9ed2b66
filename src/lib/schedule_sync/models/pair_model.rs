//! Module with pair model compatible with the schedule backend's REST API
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Audience {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Discipline {
    pub abbr: String,
    pub act_type: String,
    pub full_name: String,
    pub short_name: String,
}

/// Which weeks of the biweekly cycle a pair takes place on.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Week {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "ch", alias = "numerator", alias = "odd")]
    Numerator,
    #[serde(rename = "zn", alias = "denominator", alias = "even")]
    Denominator,
}

/// A single class occurrence.
///
/// `day` is 1-based: 1 is Monday, 7 is Sunday. Missing strings and lists come in empty and a
/// missing `week` as [`Week::All`]. Fields this model does not know are kept in `extra` and
/// written back as they came.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub day: u8,
    pub time: u32,
    #[serde(default)]
    pub week: Week,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub audiences: Vec<Audience>,
    #[serde(default)]
    pub discipline: Discipline,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ScheduleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub schedule: Vec<Pair>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PairsResponse {
    pub data: ScheduleData,
}
