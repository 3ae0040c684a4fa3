use crate::aggregate::AggregationStats;
use crate::rank::ScoreTier;
use crate::types::member::Member;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMember {
    #[serde(flatten)]
    pub member: Member,
    pub tier: ScoreTier,
    pub bonus: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub clan_tag: String,
    pub season: Option<String>,
    pub league: Option<String>,
    pub generated_at: String,
    pub total_wars: usize,
    pub stats: AggregationStats,
    pub members: Vec<RankedMember>,
}

impl Leaderboard {
    pub fn bonus_recipients(&self) -> impl Iterator<Item = &RankedMember> {
        self.members.iter().filter(|ranked| ranked.bonus)
    }
}
