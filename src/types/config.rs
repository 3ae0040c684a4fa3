use crate::error::RankerError;
use serde::Deserialize;

pub const DEFAULT_ATTACKS_PER_MEMBER: u32 = 1;
pub const DEFAULT_PARTICIPATION_BASE: f64 = 7.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankerConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub default_attacks_per_member: Option<u32>,
    pub participation_base: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub bonus_slots: Option<usize>,
}

/// Scoring knobs threaded through the aggregator and scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Used when a round does not state its own attacks per member.
    pub default_attacks_per_member: u32,
    pub participation_base: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            default_attacks_per_member: DEFAULT_ATTACKS_PER_MEMBER,
            participation_base: DEFAULT_PARTICIPATION_BASE,
        }
    }
}

impl ScoringPolicy {
    pub fn expected_attacks(&self, round_attacks_per_member: Option<u32>) -> u32 {
        match round_attacks_per_member {
            Some(attacks) if attacks > 0 => attacks,
            _ => self.default_attacks_per_member,
        }
    }
}

impl RankerConfig {
    pub fn scoring_policy(&self) -> ScoringPolicy {
        let defaults = ScoringPolicy::default();
        match &self.scoring {
            Some(scoring) => ScoringPolicy {
                default_attacks_per_member: scoring
                    .default_attacks_per_member
                    .unwrap_or(defaults.default_attacks_per_member),
                participation_base: scoring
                    .participation_base
                    .unwrap_or(defaults.participation_base),
            },
            None => defaults,
        }
    }

    pub fn bonus_slots(&self) -> Option<usize> {
        self.report.as_ref().and_then(|report| report.bonus_slots)
    }

    pub fn validate(&self) -> Result<(), RankerError> {
        if let Some(scoring) = &self.scoring {
            if scoring.default_attacks_per_member == Some(0) {
                return Err(RankerError::ConfigParse(
                    "scoring.default_attacks_per_member must be greater than 0".to_string(),
                ));
            }
            if let Some(base) = scoring.participation_base {
                if !base.is_finite() || base <= 1.0 {
                    return Err(RankerError::ConfigParse(format!(
                        "scoring.participation_base must be greater than 1.0 (found {base})"
                    )));
                }
            }
        }

        Ok(())
    }
}
