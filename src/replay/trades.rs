//! Trade (avenged-death) detection over the kill list.
//!
//! A kill is **traded** when a teammate of the victim kills the original
//! killer within a fixed window after it. The window is measured in ticks;
//! 640 ticks ≈ 10 seconds at a 64-tick rate, the conventional default.

use super::models::KillEvent;

/// Outcome of the trade check for a single kill, keyed downstream by
/// tick + victim name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOutcome {
    pub tick: u32,
    pub victim_name: String,
    pub was_traded: bool,
}

/// Run the trade check over every kill. One outcome row per kill, in input
/// order. Quadratic in the kill count, which tops out in the low hundreds
/// for a full match.
pub fn detect_trades(kills: &[KillEvent], window_ticks: u32) -> Vec<TradeOutcome> {
    kills
        .iter()
        .map(|kill| TradeOutcome {
            tick: kill.tick,
            victim_name: kill.victim_name.clone(),
            was_traded: kills.iter().any(|later| is_trade_of(kill, later, window_ticks)),
        })
        .collect()
}

/// Whether `later` avenges `kill`: the original killer dies to one of the
/// victim's teammates inside the window.
fn is_trade_of(kill: &KillEvent, later: &KillEvent, window_ticks: u32) -> bool {
    later.tick > kill.tick
        && later.tick - kill.tick <= window_ticks
        && later.victim_name == kill.killer_name
        && later.killer_team == kill.victim_team
}
