//! Teammate proximity at the moment of death.
//!
//! For every death of the subject player, all teammates sampled at that exact
//! tick are ranked by a softmax over their distance from the death position:
//! the closest teammate gets the largest weight, and the weights of one
//! death's teammate group sum to 1.

use std::collections::HashMap;

use tracing::warn;

use crate::replay::{KillEvent, TickRecord};

/// Euclidean distance between two 2D points.
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Softmax over negated scaled distances: each distance is divided by
/// `scale`, negated, exponentiated, and the results are normalised to sum 1.
/// Larger raw distance → smaller weight. Empty input → empty output.
///
/// There is no max-subtraction stability guard; map coordinates stay within a
/// few thousand units, so the scaled exponents are well inside f64 range. If
/// every exponent still underflows to zero (scale far below the distances),
/// the output is empty rather than NaN.
pub fn softmax(distances: &[f64], scale: f64) -> Vec<f64> {
    let exps: Vec<f64> = distances.iter().map(|d| (-d / scale).exp()).collect();
    let sum: f64 = exps.iter().sum();
    if sum <= 0.0 {
        return Vec::new();
    }
    exps.into_iter().map(|e| e / sum).collect()
}

/// One teammate's softmax weight at a death tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TeammateProximity {
    pub tick: u32,
    pub round: u32,
    pub teammate: String,
    pub weight: f64,
}

/// Join each death of `player` against the tick-keyed position table and emit
/// one row per teammate sampled at the death tick. Teammates are same-team
/// rows at that exact tick, excluding the subject.
///
/// A death with no position samples or no teammates at its tick emits no rows
/// and is therefore absent from every later stage; both branches log a warn
/// so the omission is visible in the run output.
pub fn teammate_proximity(
    positions_by_tick: &HashMap<u32, Vec<&TickRecord>>,
    player: &str,
    deaths: &[KillEvent],
    scale: f64,
) -> Vec<TeammateProximity> {
    let mut rows = Vec::new();

    for death in deaths {
        let Some(at_tick) = positions_by_tick.get(&death.tick) else {
            warn!(
                tick = death.tick,
                round = death.round,
                "no position samples at death tick; death omitted from report"
            );
            continue;
        };

        let teammates: Vec<&TickRecord> = at_tick
            .iter()
            .copied()
            .filter(|r| r.team == death.victim_team && r.name != player)
            .collect();

        if teammates.is_empty() {
            warn!(
                tick = death.tick,
                round = death.round,
                "no teammates alive at death tick; death omitted from report"
            );
            continue;
        }

        let distances: Vec<f64> = teammates
            .iter()
            .map(|t| distance(death.victim_x, death.victim_y, t.x, t.y))
            .collect();
        let weights = softmax(&distances, scale);
        if weights.is_empty() {
            warn!(
                tick = death.tick,
                round = death.round,
                "softmax underflowed for every teammate distance; death omitted from report"
            );
            continue;
        }

        for (teammate, weight) in teammates.iter().zip(weights) {
            rows.push(TeammateProximity {
                tick: death.tick,
                round: death.round,
                teammate: teammate.name.clone(),
                weight,
            });
        }
    }

    rows
}
