use serde::Deserialize;
use std::collections::HashMap;

/// Replay header metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayHeader {
    /// e.g. "de_dust2"
    pub map_name: String,
    /// Simulation ticks per second
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
}

fn default_tick_rate() -> u32 {
    64
}

/// One player position sample — one row per player per observed tick.
#[derive(Debug, Clone, Deserialize)]
pub struct TickRecord {
    pub tick: u32,
    pub x: f64,
    pub y: f64,
    /// Team the player was on at this tick, e.g. "CT" or "TERRORIST"
    pub team: String,
    pub name: String,
}

/// One kill event. A player's deaths are the kill rows where they are the
/// victim, so victim position and team ride along with the kill.
#[derive(Debug, Clone, Deserialize)]
pub struct KillEvent {
    pub tick: u32,
    pub round: u32,
    pub killer_name: String,
    pub killer_team: String,
    pub victim_name: String,
    pub victim_team: String,
    pub victim_x: f64,
    pub victim_y: f64,
    pub victim_z: f64,
}

/// A fully parsed replay export: header plus the tick-indexed position table
/// and the kill list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayData {
    pub header: ReplayHeader,
    pub ticks: Vec<TickRecord>,
    pub kills: Vec<KillEvent>,
}

impl ReplayData {
    /// Kill rows where `player` is the victim, in replay order.
    pub fn deaths_of(&self, player: &str) -> Vec<KillEvent> {
        self.kills
            .iter()
            .filter(|k| k.victim_name == player)
            .cloned()
            .collect()
    }

    /// Position samples grouped by tick. Absence of a tick key means no
    /// player was sampled at that tick, which callers must handle explicitly.
    pub fn positions_by_tick(&self) -> HashMap<u32, Vec<&TickRecord>> {
        let mut by_tick: HashMap<u32, Vec<&TickRecord>> = HashMap::new();
        for record in &self.ticks {
            by_tick.entry(record.tick).or_default().push(record);
        }
        by_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(t: u32, name: &str) -> TickRecord {
        TickRecord {
            tick: t,
            x: 0.0,
            y: 0.0,
            team: "CT".into(),
            name: name.into(),
        }
    }

    fn kill(tick: u32, victim: &str) -> KillEvent {
        KillEvent {
            tick,
            round: 1,
            killer_name: "killer".into(),
            killer_team: "TERRORIST".into(),
            victim_name: victim.into(),
            victim_team: "CT".into(),
            victim_x: 0.0,
            victim_y: 0.0,
            victim_z: 0.0,
        }
    }

    fn replay(ticks: Vec<TickRecord>, kills: Vec<KillEvent>) -> ReplayData {
        ReplayData {
            header: ReplayHeader {
                map_name: "de_test".into(),
                tick_rate: 64,
            },
            ticks,
            kills,
        }
    }

    #[test]
    fn deaths_of_filters_by_victim() {
        let data = replay(vec![], vec![kill(10, "a"), kill(20, "b"), kill(30, "a")]);
        let deaths = data.deaths_of("a");
        assert_eq!(deaths.len(), 2);
        assert_eq!(deaths[0].tick, 10);
        assert_eq!(deaths[1].tick, 30);
    }

    #[test]
    fn positions_by_tick_groups_all_samples() {
        let data = replay(vec![tick(10, "a"), tick(10, "b"), tick(20, "a")], vec![]);
        let by_tick = data.positions_by_tick();
        assert_eq!(by_tick[&10].len(), 2);
        assert_eq!(by_tick[&20].len(), 1);
        assert!(!by_tick.contains_key(&30));
    }
}
