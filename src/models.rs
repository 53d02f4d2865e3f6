use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged eco activity. Records are append-only; nothing edits or
/// deletes them after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub title: String,
    pub category: String,
    pub points: u64,
    pub date: NaiveDate,
    pub has_image: bool,
}

/// Everything tracked for a single user. Invariant: `total_points` equals
/// the sum of `points` over `activities`, and `rewards` is the image of
/// `milestones` under the tier-to-reward mapping.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserData {
    pub activities: Vec<ActivityRecord>,
    pub total_points: u64,
    pub milestones: Vec<u64>,
    pub rewards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub users: BTreeMap<String, UserData>,
}

impl AppData {
    /// A user absent from the map is the same as a user with empty state.
    pub fn user(&self, name: &str) -> UserData {
        self.users.get(name).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct AddActivityRequest {
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub has_image: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneEvent {
    pub tier: u64,
    pub reward: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct AddActivityResponse {
    pub points: u64,
    pub total: u64,
    pub next_target: u64,
    pub milestone: Option<MilestoneEvent>,
}

#[derive(Debug, Serialize)]
pub struct RewardView {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: String,
    pub total: u64,
    pub next_target: u64,
    pub recent: Vec<ActivityRecord>,
    pub rewards: Vec<RewardView>,
}
