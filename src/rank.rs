use crate::scoring::member_score;
use crate::types::config::ScoringPolicy;
use crate::types::member::Member;
use serde::Serialize;

/// Display class of a ranked member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Champion,
    Podium,
    Strong,
    Steady,
    Liability,
}

impl ScoreTier {
    pub fn classify(score: f64, rank: usize) -> Self {
        if rank == 1 {
            Self::Champion
        } else if rank <= 3 {
            Self::Podium
        } else if score > 100.0 {
            Self::Strong
        } else if score > 0.0 {
            Self::Steady
        } else {
            Self::Liability
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Champion => "champion",
            Self::Podium => "podium",
            Self::Strong => "strong",
            Self::Steady => "steady",
            Self::Liability => "liability",
        }
    }
}

/// Scores every member, then orders them best first with 1-based ranks.
/// Equal scores keep their input order.
pub fn rank(members: Vec<Member>, policy: &ScoringPolicy) -> Vec<Member> {
    let mut scored: Vec<Member> = members
        .into_iter()
        .map(|mut member| {
            member.score = member_score(&member, policy);
            member
        })
        .collect();

    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    for (index, member) in scored.iter_mut().enumerate() {
        member.rank = index + 1;
    }
    scored
}
