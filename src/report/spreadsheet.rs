//! Spreadsheet export of the score table.
//!
//! Writes `<player>_deaths.xlsx` (overwritten on rerun) with two color-scale
//! conditional formats: a red/yellow/green 3-color scale on Weighted Score
//! and a yellow/red 2-color scale on Proximity.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{
    ConditionalFormat2ColorScale, ConditionalFormat3ColorScale, Format, Workbook,
};

use crate::analysis::WeightedDeath;

pub const COLUMNS: [&str; 6] = [
    "Tick",
    "Proximity",
    "Was Traded",
    "Weighted Score",
    "Round",
    "Closest Teammate",
];

const PROXIMITY_COL: u16 = 1;
const SCORE_COL: u16 = 3;

/// Write the score table to `<out_dir>/<player>_deaths.xlsx` and return the
/// path written.
pub fn export_spreadsheet(
    table: &[WeightedDeath],
    player: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{player}_deaths.xlsx"));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Death Analysis")?;

    let header = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
        worksheet.set_column_width(col as u16, 16)?;
    }

    for (i, row) in table.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_number(r, 0, row.tick as f64)?;
        worksheet.write_number(r, PROXIMITY_COL, row.proximity)?;
        worksheet.write_boolean(r, 2, row.was_traded)?;
        worksheet.write_number(r, SCORE_COL, row.weighted_score)?;
        worksheet.write_number(r, 4, row.round as f64)?;
        worksheet.write_string(r, 5, &row.closest_teammate)?;
    }

    if !table.is_empty() {
        let last_row = table.len() as u32;

        // Low score red, mid yellow, high green.
        let score_scale = ConditionalFormat3ColorScale::new()
            .set_minimum_color("FF0000")
            .set_midpoint_color("FFFF00")
            .set_maximum_color("008000");
        worksheet.add_conditional_format(1, SCORE_COL, last_row, SCORE_COL, &score_scale)?;

        // Low proximity yellow, high proximity red.
        let proximity_scale = ConditionalFormat2ColorScale::new()
            .set_minimum_color("FFEB84")
            .set_maximum_color("F8696B");
        worksheet.add_conditional_format(
            1,
            PROXIMITY_COL,
            last_row,
            PROXIMITY_COL,
            &proximity_scale,
        )?;
    }

    workbook
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
