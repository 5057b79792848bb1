use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

mod analysis;
mod config;
mod replay;
mod report;

use analysis::{aggregate, apply_trades, teammate_proximity, weigh, ScoreWeights};
use config::Config;
use replay::detect_trades;
use report::ScoreBands;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // The three up-front preconditions (file exists, kills present, ticks
    // present) each report a distinct message and exit before any output
    // artifact is written.
    let data = match replay::load(&config.demo_file) {
        Ok(data) => data,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} tick samples and {} kill events from {} (map: {}, {} ticks/s)",
        data.ticks.len(),
        data.kills.len(),
        config.demo_file.display(),
        data.header.map_name,
        data.header.tick_rate
    );

    let deaths = data.deaths_of(&config.player_name);
    info!(
        "Found {} death events for: {}",
        deaths.len(),
        config.player_name
    );
    for death in &deaths {
        debug!(
            tick = death.tick,
            round = death.round,
            x = death.victim_x,
            y = death.victim_y,
            z = death.victim_z,
            killer = %death.killer_name,
            "death event"
        );
    }

    info!("Getting all teammate distances for each death event");
    let positions = data.positions_by_tick();
    let proximity_rows = teammate_proximity(
        &positions,
        &config.player_name,
        &deaths,
        config.softmax_scale,
    );

    info!("Picking closest teammates and checking whether each death was traded");
    let mut death_values = aggregate(&proximity_rows);
    let trades = detect_trades(&data.kills, config.trade_window_ticks);
    apply_trades(&mut death_values, &trades, &config.player_name);

    info!("Weighing death values");
    let weights = ScoreWeights {
        alpha: config.alpha,
        beta: config.beta,
    };
    let score_table = weigh(&death_values, weights);
    println!("{}", report::format_table(&score_table, &config.player_name));

    info!("Exporting xlsx sheet");
    let sheet_path = report::export_spreadsheet(&score_table, &config.player_name, &config.out_dir)?;
    info!("Wrote {}", sheet_path.display());

    if config.map {
        info!("Generating deaths map");
        let bands = ScoreBands {
            good_cutoff: config.good_cutoff,
            mixed_cutoff: config.mixed_cutoff,
        };
        let map_path = report::render_death_map(
            &deaths,
            &score_table,
            &data.header.map_name,
            &bands,
            &config.out_dir,
        )?;
        info!("Wrote {}", map_path.display());
    }

    Ok(())
}
