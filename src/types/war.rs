use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarState {
    Preparation,
    InWar,
    WarEnded,
    #[serde(other)]
    Other,
}

impl WarState {
    /// Attacks can only have been made once a round has left preparation.
    pub fn attacks_possible(self) -> bool {
        matches!(self, Self::InWar | Self::WarEnded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRecord {
    pub defender_tag: String,
    pub stars: u8,
    pub destruction_percentage: f64,
}

/// A member of the requested clan holding a slot in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSlot {
    pub tag: String,
    pub townhall_level: u32,
    #[serde(default)]
    pub attacks_made: Vec<AttackRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentSlot {
    pub tag: String,
    pub townhall_level: u32,
}

/// One league round, already oriented so `friendly_roster` is the requested clan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarRound {
    pub state: WarState,
    pub attacks_per_member: Option<u32>,
    pub friendly_roster: Vec<RosterSlot>,
    pub opponent_roster: Vec<OpponentSlot>,
}

impl WarRound {
    pub fn opponent_townhall(&self, tag: &str) -> Option<u32> {
        self.opponent_roster
            .iter()
            .find(|slot| slot.tag == tag)
            .map(|slot| slot.townhall_level)
    }
}
