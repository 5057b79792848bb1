//! Per-tick reduction of teammate proximity rows, plus the trade-flag pass.
//!
//! Aggregation runs first and picks the closest teammate per death tick; the
//! trade pass runs strictly afterwards and only ever flips `was_traded`
//! false→true, so trade status can never influence which teammate wins.

use crate::analysis::proximity::TeammateProximity;
use crate::replay::TradeOutcome;

/// One aggregated record per unique death tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DeathValue {
    pub tick: u32,
    /// Softmax weight of the closest teammate at this tick
    pub proximity: f64,
    pub was_traded: bool,
    pub round: u32,
    pub closest_teammate: String,
}

/// Reduce proximity rows to one record per tick, keeping the maximum-weight
/// teammate. Records keep the order in which death ticks are first
/// encountered. Two deaths sharing a tick collapse into a single record.
pub fn aggregate(rows: &[TeammateProximity]) -> Vec<DeathValue> {
    let mut values: Vec<DeathValue> = Vec::new();

    for row in rows {
        match values.iter_mut().find(|v| v.tick == row.tick) {
            Some(value) => {
                if row.weight > value.proximity {
                    value.proximity = row.weight;
                    value.round = row.round;
                    value.closest_teammate = row.teammate.clone();
                }
            }
            None => values.push(DeathValue {
                tick: row.tick,
                proximity: row.weight,
                was_traded: false,
                round: row.round,
                closest_teammate: row.teammate.clone(),
            }),
        }
    }

    values
}

/// Apply trade outcomes to the aggregated records, keyed by tick + victim
/// name. Only outcomes where `player` died traded flip the flag; existing
/// proximity, round, and closest-teammate fields are never touched.
pub fn apply_trades(values: &mut [DeathValue], trades: &[TradeOutcome], player: &str) {
    for trade in trades {
        if !trade.was_traded || trade.victim_name != player {
            continue;
        }
        if let Some(value) = values.iter_mut().find(|v| v.tick == trade.tick) {
            value.was_traded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(tick: u32, teammate: &str, weight: f64) -> TeammateProximity {
        TeammateProximity {
            tick,
            round: 1,
            teammate: teammate.into(),
            weight,
        }
    }

    fn trade(tick: u32, victim: &str, was_traded: bool) -> TradeOutcome {
        TradeOutcome {
            tick,
            victim_name: victim.into(),
            was_traded,
        }
    }

    #[test]
    fn keeps_the_maximum_weight_teammate_per_tick() {
        let rows = vec![row(100, "a", 0.2), row(100, "b", 0.5), row(100, "c", 0.3)];
        let values = aggregate(&rows);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].closest_teammate, "b");
        assert_relative_eq!(values[0].proximity, 0.5, epsilon = 1e-12);
        assert!(!values[0].was_traded);
    }

    #[test]
    fn aggregation_is_independent_of_input_order() {
        let forward = vec![row(100, "a", 0.2), row(100, "b", 0.5), row(100, "c", 0.3)];
        let mut reversed = forward.clone();
        reversed.reverse();

        let from_forward = aggregate(&forward);
        let from_reversed = aggregate(&reversed);
        assert_eq!(from_forward[0].closest_teammate, from_reversed[0].closest_teammate);
        assert_relative_eq!(
            from_forward[0].proximity,
            from_reversed[0].proximity,
            epsilon = 1e-12
        );
    }

    #[test]
    fn preserves_first_encounter_order_of_ticks() {
        let rows = vec![
            row(300, "a", 0.6),
            row(100, "b", 0.4),
            row(300, "c", 0.4),
            row(200, "d", 1.0),
        ];
        let values = aggregate(&rows);
        let ticks: Vec<u32> = values.iter().map(|v| v.tick).collect();
        assert_eq!(ticks, vec![300, 100, 200]);
    }

    #[test]
    fn trade_flag_flips_false_to_true_and_preserves_fields() {
        let mut values = aggregate(&[row(100, "a", 0.7), row(200, "b", 0.9)]);
        apply_trades(&mut values, &[trade(100, "subject", true)], "subject");

        assert!(values[0].was_traded);
        assert_eq!(values[0].closest_teammate, "a");
        assert_relative_eq!(values[0].proximity, 0.7, epsilon = 1e-12);
        assert!(!values[1].was_traded);
    }

    #[test]
    fn untraded_outcome_never_clears_the_flag() {
        let mut values = aggregate(&[row(100, "a", 0.7)]);
        apply_trades(&mut values, &[trade(100, "subject", true)], "subject");
        apply_trades(&mut values, &[trade(100, "subject", false)], "subject");
        assert!(values[0].was_traded);
    }

    #[test]
    fn trades_of_other_players_are_ignored() {
        let mut values = aggregate(&[row(100, "a", 0.7)]);
        apply_trades(&mut values, &[trade(100, "someone_else", true)], "subject");
        assert!(!values[0].was_traded);
    }

    #[test]
    fn trade_at_an_unaggregated_tick_is_a_no_op() {
        // A zero-teammate death has no aggregated record; its trade outcome
        // must not panic or invent one.
        let mut values = aggregate(&[row(100, "a", 0.7)]);
        apply_trades(&mut values, &[trade(999, "subject", true)], "subject");
        assert_eq!(values.len(), 1);
        assert!(!values[0].was_traded);
    }
}
