//! Report rendering: console table, spreadsheet export, and the optional
//! death-map image.

pub mod map;
pub mod spreadsheet;

pub use map::render_death_map;
pub use spreadsheet::export_spreadsheet;

use crate::analysis::WeightedDeath;

/// Presentation band for a weighted score on the death map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Isolated and/or traded death
    Good,
    /// Middling outcome
    Mixed,
    /// Death close to teammates and unavenged
    Poor,
}

/// Ordered score cutoffs separating the three bands. Presentation policy
/// only; the pipeline never consults these.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBands {
    /// Scores at or above this are Good
    pub good_cutoff: f64,
    /// Scores at or above this (but below `good_cutoff`) are Mixed
    pub mixed_cutoff: f64,
}

impl Default for ScoreBands {
    fn default() -> Self {
        ScoreBands {
            good_cutoff: 0.6,
            mixed_cutoff: 0.38,
        }
    }
}

impl ScoreBands {
    pub fn classify(&self, score: f64) -> ScoreBand {
        if score >= self.good_cutoff {
            ScoreBand::Good
        } else if score >= self.mixed_cutoff {
            ScoreBand::Mixed
        } else {
            ScoreBand::Poor
        }
    }
}

/// Render the score table as fixed-width text for the console. Output is
/// byte-identical for identical input.
pub fn format_table(table: &[WeightedDeath], player: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "================= Deaths Data for {player} =================\n"
    ));
    out.push_str(&format!(
        "{:>8}  {:>9}  {:>10}  {:>14}  {:>5}  {}\n",
        "Tick", "Proximity", "Was Traded", "Weighted Score", "Round", "Closest Teammate"
    ));
    for row in table {
        out.push_str(&format!(
            "{:>8}  {:>9.4}  {:>10}  {:>14.4}  {:>5}  {}\n",
            row.tick, row.proximity, row.was_traded, row.weighted_score, row.round, row.closest_teammate
        ));
    }
    out
}
