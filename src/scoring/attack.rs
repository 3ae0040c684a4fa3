const STAR_WEIGHT: f64 = 0.75;
const DESTRUCTION_WEIGHT: f64 = 0.25;

/// Plateau of the townhall-difference multiplier an attack falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThBand {
    Coward,
    Weak,
    Fair,
    Brave,
    Hero,
}

impl ThBand {
    pub const ALL: [ThBand; 5] = [
        ThBand::Hero,
        ThBand::Brave,
        ThBand::Fair,
        ThBand::Weak,
        ThBand::Coward,
    ];

    /// `diff` is defender townhall minus attacker townhall.
    pub fn from_diff(diff: i64) -> Self {
        match diff {
            d if d >= 2 => Self::Hero,
            1 => Self::Brave,
            0 => Self::Fair,
            -1 => Self::Weak,
            _ => Self::Coward,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Hero => 1.30,
            Self::Brave => 1.15,
            Self::Fair => 1.00,
            Self::Weak => 0.85,
            Self::Coward => 0.70,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Brave => "Brave",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
            Self::Coward => "Coward",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Hero => "attacking two or more townhall levels up",
            Self::Brave => "attacking one townhall level up",
            Self::Fair => "attacking the same townhall level",
            Self::Weak => "attacking one townhall level down",
            Self::Coward => "attacking two or more townhall levels down",
        }
    }

    pub fn diff_range(self) -> &'static str {
        match self {
            Self::Hero => ">= +2",
            Self::Brave => "+1",
            Self::Fair => "0",
            Self::Weak => "-1",
            Self::Coward => "<= -2",
        }
    }
}

pub fn th_multiplier(attacker_th: u32, defender_th: u32) -> f64 {
    let diff = i64::from(defender_th) - i64::from(attacker_th);
    ThBand::from_diff(diff).multiplier()
}

/// Combat score of one attack, in `[100, 230]` for in-range inputs.
pub fn attack_score(
    stars: u8,
    destruction_percentage: f64,
    attacker_th: u32,
    defender_th: u32,
) -> f64 {
    let star_portion = f64::from(stars) / 3.0;
    let destruction_portion = destruction_percentage / 100.0;
    let base_score = star_portion * STAR_WEIGHT + destruction_portion * DESTRUCTION_WEIGHT;
    (base_score * th_multiplier(attacker_th, defender_th) + 1.0) * 100.0
}
