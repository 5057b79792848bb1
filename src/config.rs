use clap::Parser;
use std::path::PathBuf;

/// Death-value analysis for a single player from a parsed match replay
#[derive(Parser, Debug, Clone)]
#[command(name = "death-value", version, about)]
pub struct Config {
    /// Path to the parsed demo export (JSON)
    #[arg(short = 'd', long, env = "DEMO_FILE")]
    pub demo_file: PathBuf,

    /// Name of the player to analyze
    #[arg(short = 'p', long, env = "PLAYER_NAME")]
    pub player_name: String,

    /// Also render a 2D map of the death events
    #[arg(long, default_value = "false")]
    pub map: bool,

    /// Distance divisor applied before the softmax exponential
    #[arg(long, env = "SOFTMAX_SCALE", default_value = "1000.0")]
    pub softmax_scale: f64,

    /// Weight of the isolation term (1 - proximity) in the score
    #[arg(long, env = "SCORE_ALPHA", default_value = "0.7")]
    pub alpha: f64,

    /// Bonus added to the score when the death was traded
    #[arg(long, env = "SCORE_BETA", default_value = "0.3")]
    pub beta: f64,

    /// Window (in ticks) within which a revenge kill counts as a trade
    #[arg(long, env = "TRADE_WINDOW_TICKS", default_value = "640")]
    pub trade_window_ticks: u32,

    /// Weighted-score cutoff for the green band on the death map
    #[arg(long, default_value = "0.6")]
    pub good_cutoff: f64,

    /// Weighted-score cutoff for the yellow band on the death map
    #[arg(long, default_value = "0.38")]
    pub mixed_cutoff: f64,

    /// Directory where the spreadsheet and map image are written
    #[arg(long, env = "OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.player_name.trim().is_empty() {
            anyhow::bail!("player_name must not be empty");
        }
        if self.softmax_scale <= 0.0 {
            anyhow::bail!("softmax_scale must be positive");
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            anyhow::bail!("alpha must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.beta) {
            anyhow::bail!("beta must be between 0.0 and 1.0");
        }
        if self.trade_window_ticks == 0 {
            anyhow::bail!("trade_window_ticks must be positive");
        }
        if self.good_cutoff <= self.mixed_cutoff {
            anyhow::bail!("good_cutoff must be greater than mixed_cutoff");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            demo_file: PathBuf::from("demo.json"),
            player_name: "subject".into(),
            map: false,
            softmax_scale: 1000.0,
            alpha: 0.7,
            beta: 0.3,
            trade_window_ticks: 640,
            good_cutoff: 0.6,
            mixed_cutoff: 0.38,
            out_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn rejects_empty_player_name() {
        let mut config = base();
        config.player_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_softmax_scale() {
        let mut config = base();
        config.softmax_scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_coefficients() {
        let mut config = base();
        config.alpha = 1.2;
        assert!(config.validate().is_err());

        let mut config = base();
        config.beta = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unordered_map_cutoffs() {
        let mut config = base();
        config.good_cutoff = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_trade_window() {
        let mut config = base();
        config.trade_window_ticks = 0;
        assert!(config.validate().is_err());
    }
}
