use crate::models::{MilestoneEvent, UserData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    GreenStarter,
    EcoWarrior,
    PlanetProtector,
    EcoHero,
}

impl Reward {
    /// Fixed tier-to-reward mapping; every other 100-point tier is Eco Hero.
    pub fn for_tier(tier: u64) -> Self {
        match tier {
            100 => Self::GreenStarter,
            500 => Self::EcoWarrior,
            1000 => Self::PlanetProtector,
            _ => Self::EcoHero,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GreenStarter => "Green Starter",
            Self::EcoWarrior => "Eco Warrior",
            Self::PlanetProtector => "Planet Protector",
            Self::EcoHero => "Eco Hero",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GreenStarter => "You unlocked this reward after reaching 100 points!",
            Self::EcoWarrior => "You became an Eco Warrior by scoring 500 points!",
            Self::PlanetProtector => {
                "You reached 1000 points and became a protector of our planet!"
            }
            Self::EcoHero => "You crossed another 100-point milestone! Keep going!",
        }
    }

    pub fn for_name(name: &str) -> Option<Self> {
        [
            Self::GreenStarter,
            Self::EcoWarrior,
            Self::PlanetProtector,
            Self::EcoHero,
        ]
        .into_iter()
        .find(|reward| reward.name() == name)
    }
}

/// Checks whether the user's current total has crossed a not-yet-recorded
/// 100-point tier and, if so, records it and grants its reward. Idempotent
/// per tier. Only the tier implied by the current total is evaluated: an
/// activity that jumps several boundaries at once records only the highest
/// newly-crossed tier.
pub fn evaluate_milestone(user: &mut UserData) -> Option<MilestoneEvent> {
    let tier = user.total_points / 100 * 100;
    if tier < 100 || user.milestones.contains(&tier) {
        return None;
    }

    user.milestones.push(tier);
    let reward = Reward::for_tier(tier);
    if !user.rewards.iter().any(|name| name == reward.name()) {
        user.rewards.push(reward.name().to_string());
    }

    Some(MilestoneEvent {
        tier,
        reward: reward.name().to_string(),
        description: reward.description().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_total(total: u64) -> UserData {
        UserData {
            total_points: total,
            ..UserData::default()
        }
    }

    #[test]
    fn tier_mapping_is_fixed() {
        assert_eq!(Reward::for_tier(100), Reward::GreenStarter);
        assert_eq!(Reward::for_tier(500), Reward::EcoWarrior);
        assert_eq!(Reward::for_tier(1000), Reward::PlanetProtector);
        for tier in [200, 300, 400, 600, 700, 800, 900, 1100] {
            assert_eq!(Reward::for_tier(tier), Reward::EcoHero, "tier {tier}");
        }
    }

    #[test]
    fn below_first_tier_is_a_no_op() {
        let mut user = user_with_total(99);
        assert!(evaluate_milestone(&mut user).is_none());
        assert!(user.milestones.is_empty());
        assert!(user.rewards.is_empty());
    }

    #[test]
    fn crossing_100_grants_green_starter_once() {
        let mut user = user_with_total(150);
        let event = evaluate_milestone(&mut user).expect("milestone");
        assert_eq!(event.tier, 100);
        assert_eq!(event.reward, "Green Starter");

        // Same tier again: idempotent, nothing recorded twice.
        user.total_points = 180;
        assert!(evaluate_milestone(&mut user).is_none());
        assert_eq!(user.milestones, vec![100]);
        assert_eq!(user.rewards, vec!["Green Starter"]);
    }

    #[test]
    fn multi_boundary_jump_records_only_highest_tier() {
        // A single large gain from 0 to 250 skips the 100 and 200 events
        // and records only tier 200; tier 100 is never back-filled.
        let mut user = user_with_total(250);
        let event = evaluate_milestone(&mut user).expect("milestone");
        assert_eq!(event.tier, 200);
        assert_eq!(event.reward, "Eco Hero");
        assert_eq!(user.milestones, vec![200]);
    }

    #[test]
    fn duplicate_reward_names_are_suppressed() {
        let mut user = user_with_total(250);
        evaluate_milestone(&mut user).expect("tier 200");
        user.total_points = 320;
        let event = evaluate_milestone(&mut user).expect("tier 300");
        assert_eq!(event.reward, "Eco Hero");
        assert_eq!(user.milestones, vec![200, 300]);
        assert_eq!(user.rewards, vec!["Eco Hero"]);
    }

    #[test]
    fn reward_lookup_by_name_round_trips() {
        for name in ["Green Starter", "Eco Warrior", "Planet Protector", "Eco Hero"] {
            assert_eq!(Reward::for_name(name).map(Reward::name), Some(name));
        }
        assert!(Reward::for_name("Moss Monarch").is_none());
    }
}
