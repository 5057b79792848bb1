//! Optional 2D map of death locations.
//!
//! Plots each scored death at its in-game X/Y position, colored by score
//! band and labeled with its tick number, into a fixed-named PNG that is
//! overwritten on rerun.
//!
//! TODO: tick labels overlap when deaths cluster; needs a label-offset pass.

use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::prelude::*;
use tracing::debug;

use crate::analysis::WeightedDeath;
use crate::replay::KillEvent;

use super::{ScoreBand, ScoreBands};

pub const DEATH_MAP_FILE: &str = "deathmap.png";

const CANVAS: (u32, u32) = (1024, 1024);
const POINT_SIZE: i32 = 6;

struct MapPoint {
    x: f64,
    y: f64,
    tick: u32,
    score: f64,
}

/// Render the death map to `<out_dir>/deathmap.png` and return the path
/// written. Deaths without a score row (zero-teammate deaths) are skipped.
pub fn render_death_map(
    deaths: &[KillEvent],
    table: &[WeightedDeath],
    map_name: &str,
    bands: &ScoreBands,
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = out_dir.join(DEATH_MAP_FILE);

    let mut points = Vec::new();
    for death in deaths {
        match table.iter().find(|row| row.tick == death.tick) {
            Some(row) => points.push(MapPoint {
                x: death.victim_x,
                y: death.victim_y,
                tick: death.tick,
                score: row.weighted_score,
            }),
            None => debug!(tick = death.tick, "death has no score row; left off the map"),
        }
    }

    let (x_range, y_range) = axis_ranges(&points);

    // The backend borrows the path for the lifetime of the drawing area, so
    // rendering lives in its own scope.
    {
        let root = BitMapBackend::new(&path, CANVAS).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Death locations on {map_name}"), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart.configure_mesh().x_desc("X").y_desc("Y").draw()?;

        chart.draw_series(points.iter().map(|p| {
            let color = band_color(bands.classify(p.score));
            Circle::new((p.x, p.y), POINT_SIZE, color.filled())
        }))?;

        chart.draw_series(points.iter().map(|p| {
            Text::new(p.tick.to_string(), (p.x, p.y), ("sans-serif", 14))
        }))?;

        root.present()?;
    }

    Ok(path)
}

fn band_color(band: ScoreBand) -> RGBColor {
    match band {
        ScoreBand::Good => GREEN,
        ScoreBand::Mixed => YELLOW,
        ScoreBand::Poor => RED,
    }
}

/// Data ranges padded so edge points and their labels stay inside the chart.
fn axis_ranges(points: &[MapPoint]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    if points.is_empty() {
        return (-1000.0..1000.0, -1000.0..1000.0);
    }
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    let x_pad = ((x_max - x_min) * 0.1).max(100.0);
    let y_pad = ((y_max - y_min) * 0.1).max(100.0);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}
