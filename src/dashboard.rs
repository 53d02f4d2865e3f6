use crate::models::{ActivityRecord, DashboardResponse, RewardView, UserData};
use crate::rewards::Reward;

const RECENT_LIMIT: usize = 5;

/// Next 100-point target. A fresh account aims at 100, and a total sitting
/// exactly on a tier keeps that tier as its target.
pub fn next_target(total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    total.div_ceil(100) * 100
}

/// The most recently added activities, newest first, capped at five.
pub fn recent_activities(user: &UserData) -> Vec<ActivityRecord> {
    user.activities
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .cloned()
        .collect()
}

/// Earned rewards in unlock order, each with its fixed description. An
/// empty result tells the page to render the placeholder message.
pub fn reward_views(user: &UserData) -> Vec<RewardView> {
    user.rewards
        .iter()
        .filter_map(|name| Reward::for_name(name))
        .map(|reward| RewardView {
            name: reward.name().to_string(),
            description: reward.description().to_string(),
        })
        .collect()
}

pub fn build_dashboard(user_name: &str, user: &UserData) -> DashboardResponse {
    DashboardResponse {
        user: user_name.to_string(),
        total: user.total_points,
        next_target: next_target(user.total_points),
        recent: recent_activities(user),
        rewards: reward_views(user),
    }
}
