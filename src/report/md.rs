use crate::scoring::ThBand;
use crate::types::leaderboard::{Leaderboard, RankedMember};

pub fn to_markdown(board: &Leaderboard) -> String {
    let mut output = String::new();
    output.push_str(&format!("# CWL Leaderboard: {}\n\n", board.clan_tag));
    if let Some(season) = &board.season {
        output.push_str(&format!("Season: {season}\n"));
    }
    if let Some(league) = &board.league {
        output.push_str(&format!("League: {league}\n"));
    }
    output.push_str(&format!(
        "Wars: {} ({} counted)\nGenerated: {}\n\n",
        board.total_wars, board.stats.rounds_counted, board.generated_at
    ));

    output.push_str("## Rankings\n\n");
    if board.members.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Rank | Member | TH | Wars | Attacks | Missed | Stars | Score | Tier |\n");
        output.push_str("|---:|---|---:|---:|---:|---:|---:|---:|---|\n");
        for ranked in &board.members {
            let member = &ranked.member;
            output.push_str(&format!(
                "| {}{} | {} ({}) | {} | {} | {} | {} | {} | {:.1} | {} |\n",
                member.rank,
                if ranked.bonus { " *" } else { "" },
                member.name,
                member.tag,
                member.town_hall_level,
                member.wars_participated,
                member.attacks.len(),
                member.missed_attacks,
                member.total_stars(),
                member.score,
                ranked.tier.label()
            ));
        }
        output.push('\n');
        if board.bonus_recipients().next().is_some() {
            output.push_str("`*` bonus recipient\n\n");
        }
    }

    output.push_str("## Attack Breakdown\n\n");
    let attackers: Vec<&RankedMember> = board
        .members
        .iter()
        .filter(|ranked| !ranked.member.attacks.is_empty())
        .collect();
    if attackers.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for ranked in attackers {
            output.push_str(&format!("- {}:", ranked.member.name));
            for attack in &ranked.member.attacks {
                let band = ThBand::from_diff(attack.th_diff());
                output.push_str(&format!(
                    " {}* {:.0}% TH{}->TH{} [{}]",
                    attack.stars,
                    attack.destruction_percentage,
                    attack.attacker_th,
                    attack.defender_th,
                    band.label()
                ));
                output.push(';');
            }
            if let Some(average) = ranked.member.average_destruction() {
                output.push_str(&format!(" avg {average:.1}%"));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str("## Diagnostics\n\n");
    output.push_str(&format!(
        "- rounds skipped (not started): {}\n- wars not matched to clan: {}\n- attacks dropped (unknown defender): {}\n- slots held by non-members: {}\n",
        board.stats.rounds_skipped,
        board.stats.rounds_unmatched,
        board.stats.dropped_attacks,
        board.stats.unknown_members
    ));

    output
}

/// Plain-text rendering of the townhall multiplier table.
pub fn multiplier_table() -> String {
    let mut output = String::new();
    output.push_str("| TH diff | Multiplier | Band | Meaning |\n");
    output.push_str("|---|---:|---|---|\n");
    for band in ThBand::ALL {
        output.push_str(&format!(
            "| {} | {:.2} | {} | {} |\n",
            band.diff_range(),
            band.multiplier(),
            band.label(),
            band.description()
        ));
    }
    output
}
