//! The death-value pipeline: proximity extraction → per-tick aggregation →
//! trade flags → weighted scoring. Strictly linear and single pass.

pub mod death_value;
pub mod proximity;
pub mod weight;

pub use death_value::{aggregate, apply_trades};
pub use proximity::teammate_proximity;
pub use weight::{weigh, ScoreWeights, WeightedDeath};
