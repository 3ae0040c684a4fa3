use super::attack::attack_score;
use crate::types::config::ScoringPolicy;
use crate::types::member::Member;

/// Score charged for every expected attack a member did not make.
pub const MISSED_ATTACK_PENALTY: f64 = -100.0;

/// Logarithmic loyalty factor; exactly zero when the member never took part.
pub fn participation_multiplier(wars_participated: u32, base: f64) -> f64 {
    if wars_participated == 0 {
        return 0.0;
    }
    (f64::from(wars_participated) + 1.0).ln() / base.ln()
}

pub fn member_score(member: &Member, policy: &ScoringPolicy) -> f64 {
    // Returned directly: a negative average times 0.0 would give -0.0.
    if member.wars_participated == 0 {
        return 0.0;
    }
    let attack_total: f64 = member
        .attacks
        .iter()
        .map(|attack| {
            attack_score(
                attack.stars,
                attack.destruction_percentage,
                attack.attacker_th,
                attack.defender_th,
            )
        })
        .sum();
    let total_score = attack_total + f64::from(member.missed_attacks) * MISSED_ATTACK_PENALTY;

    // Misses count as attack opportunities so they drag the average down.
    let total_possible = member.attacks.len() as u64 + u64::from(member.missed_attacks);
    let average_score = if total_possible > 0 {
        total_score / total_possible as f64
    } else {
        0.0
    };

    average_score * participation_multiplier(member.wars_participated, policy.participation_base)
}
