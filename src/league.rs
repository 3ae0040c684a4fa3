use crate::aggregate::{aggregate, AggregationStats};
use crate::loader::LeagueData;
use crate::rank::{rank, ScoreTier};
use crate::types::config::ScoringPolicy;
use crate::types::leaderboard::{Leaderboard, RankedMember};
use crate::types::member::Member;
use chrono::Utc;

/// Runs aggregation, scoring and ranking over one loaded league.
pub fn evaluate(
    league: &LeagueData,
    policy: &ScoringPolicy,
    bonus_slots: Option<usize>,
) -> Leaderboard {
    let aggregation = aggregate(&league.roster, &league.rounds, policy);
    let mut stats = aggregation.stats;
    stats.rounds_unmatched = league.unmatched_wars;

    let ranked = rank(aggregation.members, policy);
    build_leaderboard(
        league.clan_tag.clone(),
        league.season.clone(),
        league.league.clone(),
        league.total_wars(),
        stats,
        ranked,
        bonus_slots,
    )
}

pub(crate) fn build_leaderboard(
    clan_tag: String,
    season: Option<String>,
    league: Option<String>,
    total_wars: usize,
    stats: AggregationStats,
    ranked: Vec<Member>,
    bonus_slots: Option<usize>,
) -> Leaderboard {
    let members = ranked
        .into_iter()
        .map(|member| RankedMember {
            tier: ScoreTier::classify(member.score, member.rank),
            bonus: bonus_slots.is_some_and(|slots| member.rank <= slots),
            member,
        })
        .collect();

    Leaderboard {
        clan_tag,
        season,
        league,
        generated_at: Utc::now().to_rfc3339(),
        total_wars,
        stats,
        members,
    }
}
