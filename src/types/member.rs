use serde::{Deserialize, Serialize};

/// One clan member as listed on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub tag: String,
    pub name: String,
    pub town_hall_level: u32,
}

pub type Roster = Vec<RosterEntry>;

/// A single scored attack. Built by the aggregator and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub stars: u8,
    pub destruction_percentage: f64,
    #[serde(rename = "attackerTH")]
    pub attacker_th: u32,
    #[serde(rename = "defenderTH")]
    pub defender_th: u32,
}

impl Attack {
    pub fn new(stars: u8, destruction_percentage: f64, attacker_th: u32, defender_th: u32) -> Self {
        Self {
            stars,
            destruction_percentage,
            attacker_th,
            defender_th,
        }
    }

    /// Defender townhall minus attacker townhall.
    pub fn th_diff(&self) -> i64 {
        i64::from(self.defender_th) - i64::from(self.attacker_th)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub tag: String,
    pub name: String,
    pub town_hall_level: u32,
    pub attacks: Vec<Attack>,
    pub missed_attacks: u32,
    pub wars_participated: u32,
    pub score: f64,
    pub rank: usize,
}

impl Member {
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            tag: entry.tag.clone(),
            name: entry.name.clone(),
            town_hall_level: entry.town_hall_level,
            attacks: Vec::new(),
            missed_attacks: 0,
            wars_participated: 0,
            score: 0.0,
            rank: 0,
        }
    }

    pub fn total_stars(&self) -> u32 {
        self.attacks.iter().map(|attack| u32::from(attack.stars)).sum()
    }

    pub fn average_destruction(&self) -> Option<f64> {
        if self.attacks.is_empty() {
            return None;
        }
        let total: f64 = self
            .attacks
            .iter()
            .map(|attack| attack.destruction_percentage)
            .sum();
        Some(total / self.attacks.len() as f64)
    }
}
