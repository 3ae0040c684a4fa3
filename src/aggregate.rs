use crate::types::config::ScoringPolicy;
use crate::types::member::{Attack, Member, RosterEntry};
use crate::types::war::WarRound;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Data-quality counters gathered while folding rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationStats {
    pub rounds_counted: usize,
    /// Rounds still in preparation or in an unknown state.
    pub rounds_skipped: usize,
    /// Wars missing a side or not involving the clan at all.
    pub rounds_unmatched: usize,
    /// Attacks whose defender was missing from the opponent roster.
    pub dropped_attacks: usize,
    /// Friendly slots held by tags no longer on the clan roster.
    pub unknown_members: usize,
}

impl AggregationStats {
    pub fn has_diagnostics(&self) -> bool {
        self.rounds_unmatched > 0 || self.dropped_attacks > 0
    }
}

#[derive(Debug, Clone)]
pub struct Aggregation {
    /// Members in roster order.
    pub members: Vec<Member>,
    pub stats: AggregationStats,
}

pub struct Aggregator<'a> {
    policy: &'a ScoringPolicy,
    members: Vec<Member>,
    index: HashMap<String, usize>,
    stats: AggregationStats,
}

impl<'a> Aggregator<'a> {
    pub fn new(roster: &[RosterEntry], policy: &'a ScoringPolicy) -> Self {
        let members: Vec<Member> = roster.iter().map(Member::from_roster).collect();
        let index = members
            .iter()
            .enumerate()
            .map(|(position, member)| (member.tag.clone(), position))
            .collect();
        Self {
            policy,
            members,
            index,
            stats: AggregationStats::default(),
        }
    }

    /// Rounds that are not yet past preparation contribute nothing.
    pub fn fold_round(&mut self, round: &WarRound) {
        if !round.state.attacks_possible() {
            debug!(state = ?round.state, "skipping round without attacks");
            self.stats.rounds_skipped += 1;
            return;
        }
        self.stats.rounds_counted += 1;

        let expected = self.policy.expected_attacks(round.attacks_per_member);
        for slot in &round.friendly_roster {
            let Some(&position) = self.index.get(&slot.tag) else {
                debug!(tag = %slot.tag, "slot held by a tag outside the roster");
                self.stats.unknown_members += 1;
                continue;
            };
            let member = &mut self.members[position];
            member.wars_participated += 1;

            let actual = u32::try_from(slot.attacks_made.len()).unwrap_or(u32::MAX);
            member.missed_attacks += expected.saturating_sub(actual);

            for record in &slot.attacks_made {
                match round.opponent_townhall(&record.defender_tag) {
                    Some(defender_th) => member.attacks.push(Attack::new(
                        record.stars,
                        record.destruction_percentage,
                        slot.townhall_level,
                        defender_th,
                    )),
                    None => {
                        warn!(
                            attacker = %slot.tag,
                            defender = %record.defender_tag,
                            "dropping attack on unknown defender"
                        );
                        self.stats.dropped_attacks += 1;
                    }
                }
            }
        }
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            members: self.members,
            stats: self.stats,
        }
    }
}

pub fn aggregate(
    roster: &[RosterEntry],
    rounds: &[WarRound],
    policy: &ScoringPolicy,
) -> Aggregation {
    let mut aggregator = Aggregator::new(roster, policy);
    for round in rounds {
        aggregator.fold_round(round);
    }
    aggregator.finish()
}
