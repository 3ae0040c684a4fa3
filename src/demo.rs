use crate::aggregate::AggregationStats;
use crate::league::build_leaderboard;
use crate::rank::rank;
use crate::types::config::ScoringPolicy;
use crate::types::leaderboard::Leaderboard;
use crate::types::member::{Attack, Member, RosterEntry};

pub const DEMO_CLAN_TAG: &str = "TEST";
const DEMO_SEASON: &str = "2024-01-TEST";
const DEMO_LEAGUE: &str = "Test League";
const DEMO_TOTAL_WARS: usize = 7;

fn demo_member(
    tag: &str,
    name: &str,
    town_hall_level: u32,
    attacks: Vec<Attack>,
    missed_attacks: u32,
    wars_participated: u32,
) -> Member {
    let mut member = Member::from_roster(&RosterEntry {
        tag: tag.to_string(),
        name: name.to_string(),
        town_hall_level,
    });
    member.attacks = attacks;
    member.missed_attacks = missed_attacks;
    member.wars_participated = wars_participated;
    member
}

/// Pre-aggregated sample clan for trying the ranker without a league export.
pub fn demo_members() -> Vec<Member> {
    vec![
        demo_member(
            "#PLAYER1",
            "Elite Warrior",
            16,
            vec![Attack::new(3, 100.0, 16, 17), Attack::new(2, 85.0, 16, 16)],
            0,
            7,
        ),
        demo_member(
            "#PLAYER2",
            "Strategic Master",
            15,
            vec![Attack::new(2, 95.0, 15, 17), Attack::new(3, 100.0, 15, 16)],
            0,
            6,
        ),
        demo_member(
            "#PLAYER3",
            "Casual Attacker",
            14,
            vec![Attack::new(2, 70.0, 14, 13), Attack::new(1, 60.0, 14, 12)],
            1,
            5,
        ),
        demo_member(
            "#PLAYER4",
            "Perfect Player",
            15,
            vec![Attack::new(3, 100.0, 15, 17), Attack::new(3, 100.0, 15, 16)],
            0,
            7,
        ),
        demo_member(
            "#PLAYER5",
            "Unreliable Member",
            16,
            vec![Attack::new(1, 50.0, 16, 16)],
            3,
            4,
        ),
    ]
}

pub fn demo_leaderboard(policy: &ScoringPolicy, bonus_slots: Option<usize>) -> Leaderboard {
    build_leaderboard(
        DEMO_CLAN_TAG.to_string(),
        Some(DEMO_SEASON.to_string()),
        Some(DEMO_LEAGUE.to_string()),
        DEMO_TOTAL_WARS,
        AggregationStats::default(),
        rank(demo_members(), policy),
        bonus_slots,
    )
}
