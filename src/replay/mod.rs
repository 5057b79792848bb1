//! Data-access layer for parsed replay exports.
//!
//! Binary demo parsing stays outside this tool; the input is a JSON export of
//! the already-parsed tables: a tick-indexed position table, the kill list,
//! and header metadata. This module loads that export, validates the up-front
//! preconditions, and runs trade detection over the kills.

pub mod loader;
pub mod models;
pub mod trades;

pub use loader::load;
pub use models::{KillEvent, TickRecord};
pub use trades::{detect_trades, TradeOutcome};
