//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// Cached player salary data. `name` is the sole external identifier and
/// is stored in its original, non-slugified form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub club: String,
    pub league: String,
    pub weekly_salary: f64,
    /// Unix seconds of the last successful refresh.
    pub last_fetched: u64,
}

/// Cached club wage data, keyed by the original club name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRecord {
    pub name: String,
    pub league: String,
    pub total_wages: f64,
    pub player_count: u32,
    pub last_fetched: u64,
}
