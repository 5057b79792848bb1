//! Weighted death score.
//!
//! `score = alpha·(1 − proximity) + (beta if traded else 0)`
//!
//! Low proximity means no teammate was close, so an isolated death scores
//! high on the first term; a traded death earns the beta bonus on top. With
//! the default coefficients the score lands in [0, 1].

use crate::analysis::death_value::DeathValue;

/// Coefficients for the weighted death score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Importance of isolation (the 1 − proximity term)
    pub alpha: f64,
    /// Bonus granted when the death was traded
    pub beta: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            alpha: 0.7,
            beta: 0.3,
        }
    }
}

/// Final row of the score table, one per aggregated death.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDeath {
    pub tick: u32,
    pub proximity: f64,
    pub was_traded: bool,
    pub weighted_score: f64,
    pub round: u32,
    pub closest_teammate: String,
}

/// Score every aggregated record, preserving aggregation order.
pub fn weigh(values: &[DeathValue], weights: ScoreWeights) -> Vec<WeightedDeath> {
    values
        .iter()
        .map(|value| {
            let trade_bonus = if value.was_traded { weights.beta } else { 0.0 };
            WeightedDeath {
                tick: value.tick,
                proximity: value.proximity,
                was_traded: value.was_traded,
                weighted_score: weights.alpha * (1.0 - value.proximity) + trade_bonus,
                round: value.round,
                closest_teammate: value.closest_teammate.clone(),
            }
        })
        .collect()
}
