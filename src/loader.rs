use crate::error::{RankerError, Result};
use crate::types::member::{Roster, RosterEntry};
use crate::types::war::{AttackRecord, OpponentSlot, RosterSlot, WarRound, WarState};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// League export as written by the fetcher: the clan roster plus raw war details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeagueFile {
    clan_tag: String,
    season: Option<String>,
    league: Option<String>,
    member_list: Vec<RosterEntry>,
    #[serde(default)]
    wars: Vec<WarDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarDetails {
    state: WarState,
    attacks_per_member: Option<u32>,
    clan: Option<WarClan>,
    opponent: Option<WarClan>,
}

#[derive(Debug, Clone, Deserialize)]
struct WarClan {
    tag: String,
    #[serde(default)]
    members: Vec<WarClanMember>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarClanMember {
    tag: String,
    townhall_level: u32,
    #[serde(default)]
    attacks: Vec<AttackRecord>,
}

/// Validated input for one ranking run.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub clan_tag: String,
    pub season: Option<String>,
    pub league: Option<String>,
    pub roster: Roster,
    pub rounds: Vec<WarRound>,
    /// Wars with a missing side or no side belonging to the clan.
    pub unmatched_wars: usize,
}

impl LeagueData {
    pub fn total_wars(&self) -> usize {
        self.rounds.len() + self.unmatched_wars
    }
}

pub fn load_league(path: &Path) -> Result<LeagueData> {
    if !path.exists() {
        return Err(RankerError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let league = parse_league(&content)?;
    info!(
        path = %path.display(),
        members = league.roster.len(),
        rounds = league.rounds.len(),
        "loaded league export"
    );
    Ok(league)
}

pub fn parse_league(content: &str) -> Result<LeagueData> {
    let mut file: LeagueFile = serde_json::from_str(content)?;
    for entry in &mut file.member_list {
        entry.tag = normalize_tag(&entry.tag);
    }
    validate_roster(&file.member_list)?;

    let mut rounds = Vec::with_capacity(file.wars.len());
    let mut unmatched_wars = 0;
    for (position, war) in file.wars.into_iter().enumerate() {
        match orient(war, &file.clan_tag) {
            Some(round) => {
                validate_attacks(position, &round)?;
                rounds.push(round);
            }
            None => {
                warn!(war = position, clan = %file.clan_tag, "war does not involve clan; skipping");
                unmatched_wars += 1;
            }
        }
    }

    Ok(LeagueData {
        clan_tag: file.clan_tag,
        season: file.season,
        league: file.league,
        roster: file.member_list,
        rounds,
        unmatched_wars,
    })
}

/// Uppercases and ensures the leading `#` the game uses on every tag.
/// Clan, member and defender tags all go through this before any lookup.
pub fn normalize_tag(tag: &str) -> String {
    let trimmed = tag.trim().trim_start_matches('#').to_uppercase();
    format!("#{trimmed}")
}

fn validate_roster(roster: &[RosterEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in roster {
        if entry.tag.trim_start_matches('#').is_empty() {
            return Err(RankerError::InvalidRoster(format!(
                "member '{}' has an empty tag",
                entry.name
            )));
        }
        if entry.town_hall_level == 0 {
            return Err(RankerError::InvalidRoster(format!(
                "member {} has townhall level 0",
                entry.tag
            )));
        }
        if !seen.insert(entry.tag.as_str()) {
            return Err(RankerError::InvalidRoster(format!(
                "duplicate member tag: {}",
                entry.tag
            )));
        }
    }
    Ok(())
}

/// Only the clan's own attacks are scored, so only those are checked.
fn validate_attacks(position: usize, round: &WarRound) -> Result<()> {
    for slot in &round.friendly_roster {
        for attack in &slot.attacks_made {
            if attack.stars > 3 {
                return Err(RankerError::InvalidWar(format!(
                    "war {position}: {} earned {} stars",
                    slot.tag, attack.stars
                )));
            }
            if !(0.0..=100.0).contains(&attack.destruction_percentage) {
                return Err(RankerError::InvalidWar(format!(
                    "war {position}: {} destruction {} is outside 0-100",
                    slot.tag, attack.destruction_percentage
                )));
            }
        }
    }
    Ok(())
}

fn orient(war: WarDetails, clan_tag: &str) -> Option<WarRound> {
    let (clan, opponent) = match (war.clan, war.opponent) {
        (Some(clan), Some(opponent)) => (clan, opponent),
        _ => {
            debug!("war is missing a side");
            return None;
        }
    };

    let wanted = normalize_tag(clan_tag);
    let (friendly, enemy) = if normalize_tag(&clan.tag) == wanted {
        (clan, opponent)
    } else if normalize_tag(&opponent.tag) == wanted {
        (opponent, clan)
    } else {
        return None;
    };

    Some(WarRound {
        state: war.state,
        attacks_per_member: war.attacks_per_member,
        friendly_roster: friendly
            .members
            .into_iter()
            .map(|member| RosterSlot {
                tag: normalize_tag(&member.tag),
                townhall_level: member.townhall_level,
                attacks_made: member
                    .attacks
                    .into_iter()
                    .map(|attack| AttackRecord {
                        defender_tag: normalize_tag(&attack.defender_tag),
                        ..attack
                    })
                    .collect(),
            })
            .collect(),
        opponent_roster: enemy
            .members
            .into_iter()
            .map(|member| OpponentSlot {
                tag: normalize_tag(&member.tag),
                townhall_level: member.townhall_level,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LEAGUE: &str = r##"
{
  "clanTag": "#CLAN",
  "season": "2024-01",
  "league": "Crystal League I",
  "memberList": [
    {"tag": "#A", "name": "Alpha", "townHallLevel": 16},
    {"tag": "#B", "name": "Bravo", "townHallLevel": 15}
  ],
  "wars": [
    {
      "state": "warEnded",
      "attacksPerMember": 1,
      "clan": {"tag": "#CLAN", "members": [
        {"tag": "#A", "townhallLevel": 16,
         "attacks": [{"defenderTag": "#E1", "stars": 3, "destructionPercentage": 100}]}
      ]},
      "opponent": {"tag": "#ENEMY", "members": [{"tag": "#E1", "townhallLevel": 17}]}
    },
    {
      "state": "inWar",
      "clan": {"tag": "#ENEMY2", "members": [{"tag": "#E9", "townhallLevel": 15}]},
      "opponent": {"tag": "#clan", "members": [{"tag": "#B", "townhallLevel": 15}]}
    },
    {
      "state": "warEnded",
      "clan": {"tag": "#OTHER", "members": []},
      "opponent": {"tag": "#ELSE", "members": []}
    },
    {
      "state": "preparation",
      "clan": {"tag": "#CLAN"}
    }
  ]
}
"##;

    #[test]
    fn parse_league_orients_each_war_to_the_clan() {
        let league = parse_league(LEAGUE).expect("league should parse");
        assert_eq!(league.roster.len(), 2);
        assert_eq!(league.rounds.len(), 2);
        assert_eq!(league.unmatched_wars, 2);
        assert_eq!(league.total_wars(), 4);

        let first = &league.rounds[0];
        assert_eq!(first.state, WarState::WarEnded);
        assert_eq!(first.friendly_roster[0].tag, "#A");
        assert_eq!(first.friendly_roster[0].attacks_made.len(), 1);
        assert_eq!(first.opponent_townhall("#E1"), Some(17));

        let swapped = &league.rounds[1];
        assert_eq!(swapped.friendly_roster[0].tag, "#B");
        assert_eq!(swapped.opponent_roster[0].tag, "#E9");
        assert_eq!(swapped.attacks_per_member, None);
    }

    #[test]
    fn normalize_tag_handles_case_and_missing_hash() {
        assert_eq!(normalize_tag(" #abc123 "), "#ABC123");
        assert_eq!(normalize_tag("abc123"), "#ABC123");
    }

    #[test]
    fn duplicate_roster_tags_are_rejected() {
        let json = r##"{"clanTag": "#C", "memberList": [
            {"tag": "#A", "name": "One", "townHallLevel": 10},
            {"tag": "#A", "name": "Two", "townHallLevel": 11}
        ]}"##;
        let err = parse_league(json).expect_err("duplicates should fail");
        assert!(matches!(err, RankerError::InvalidRoster(_)));
        assert!(err.to_string().contains("duplicate member tag: #A"));
    }

    #[test]
    fn zero_townhall_is_rejected() {
        let json = r##"{"clanTag": "#C", "memberList": [
            {"tag": "#A", "name": "One", "townHallLevel": 0}
        ]}"##;
        assert!(matches!(
            parse_league(json),
            Err(RankerError::InvalidRoster(_))
        ));
    }

    #[test]
    fn out_of_range_stars_are_rejected() {
        let json = r##"{"clanTag": "#C", "memberList": [], "wars": [{
            "state": "warEnded",
            "clan": {"tag": "#C", "members": [{"tag": "#A", "townhallLevel": 10,
                "attacks": [{"defenderTag": "#E", "stars": 4, "destructionPercentage": 100}]}]},
            "opponent": {"tag": "#E", "members": []}
        }]}"##;
        let err = parse_league(json).expect_err("four stars should fail");
        assert!(matches!(err, RankerError::InvalidWar(_)));
    }

    #[test]
    fn out_of_range_destruction_is_rejected() {
        let json = r##"{"clanTag": "#C", "memberList": [], "wars": [{
            "state": "warEnded",
            "clan": {"tag": "#C", "members": [{"tag": "#A", "townhallLevel": 10,
                "attacks": [{"defenderTag": "#E", "stars": 3, "destructionPercentage": 100.5}]}]},
            "opponent": {"tag": "#E", "members": []}
        }]}"##;
        let err = parse_league(json).expect_err("destruction above 100 should fail");
        assert!(matches!(err, RankerError::InvalidWar(_)));
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn bad_attacks_outside_the_clan_do_not_fail_the_load() {
        let json = r##"{"clanTag": "#C", "memberList": [
            {"tag": "#A", "name": "Alpha", "townHallLevel": 10}
        ], "wars": [
            {
                "state": "warEnded",
                "clan": {"tag": "#C", "members": [{"tag": "#A", "townhallLevel": 10,
                    "attacks": [{"defenderTag": "#E", "stars": 2, "destructionPercentage": 60}]}]},
                "opponent": {"tag": "#E", "members": [{"tag": "#E", "townhallLevel": 10,
                    "attacks": [{"defenderTag": "#A", "stars": 5, "destructionPercentage": 300}]}]}
            },
            {
                "state": "warEnded",
                "clan": {"tag": "#X", "members": [{"tag": "#X1", "townhallLevel": 10,
                    "attacks": [{"defenderTag": "#Y1", "stars": 4, "destructionPercentage": 100}]}]},
                "opponent": {"tag": "#Y", "members": [{"tag": "#Y1", "townhallLevel": 10}]}
            }
        ]}"##;
        let league = parse_league(json).expect("unscored data should not be validated");
        assert_eq!(league.rounds.len(), 1);
        assert_eq!(league.unmatched_wars, 1);
    }

    #[test]
    fn member_and_defender_tags_are_normalized() {
        let json = r##"{"clanTag": "#c", "memberList": [
            {"tag": "a", "name": "Alpha", "townHallLevel": 16}
        ], "wars": [{
            "state": "warEnded",
            "clan": {"tag": "C", "members": [{"tag": "#a", "townhallLevel": 16,
                "attacks": [{"defenderTag": "e1", "stars": 3, "destructionPercentage": 100}]}]},
            "opponent": {"tag": "#E", "members": [{"tag": "#E1", "townhallLevel": 17}]}
        }]}"##;
        let league = parse_league(json).expect("league should parse");
        assert_eq!(league.roster[0].tag, "#A");
        let round = &league.rounds[0];
        assert_eq!(round.friendly_roster[0].tag, "#A");
        assert_eq!(round.friendly_roster[0].attacks_made[0].defender_tag, "#E1");
        assert_eq!(round.opponent_townhall("#E1"), Some(17));
    }

    #[test]
    fn tags_differing_only_in_case_are_duplicates() {
        let json = r##"{"clanTag": "#C", "memberList": [
            {"tag": "#ab", "name": "One", "townHallLevel": 10},
            {"tag": "AB", "name": "Two", "townHallLevel": 11}
        ]}"##;
        let err = parse_league(json).expect_err("case variants should collide");
        assert!(err.to_string().contains("duplicate member tag: #AB"));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        assert!(matches!(
            parse_league("{not json"),
            Err(RankerError::Json(_))
        ));
    }

    #[test]
    fn load_league_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_league(&dir.path().join("missing.json")).expect_err("missing file");
        assert!(matches!(err, RankerError::InputNotFound(_)));
    }

    #[test]
    fn load_league_reads_file_from_disk() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("league.json");
        fs::write(&path, LEAGUE).expect("league file should write");
        let league = load_league(&path).expect("league should load");
        assert_eq!(league.clan_tag, "#CLAN");
        assert_eq!(league.season.as_deref(), Some("2024-01"));
    }
}
