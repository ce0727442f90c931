use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::models::goals::weight_history;
use crate::projection::{self, export};
use crate::state::CatalogStore;

#[derive(Args)]
pub struct ExportCommand {
    /// Which history view to export
    #[arg(value_enum)]
    target: ExportTarget,

    /// Output file (defaults to the standard artifact name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportTarget {
    /// Workout history rows
    Workouts,
    /// Tracked-weight rows
    Weights,
}

impl ExportCommand {
    pub async fn execute(self) -> Result<()> {
        let (path, rows_written) = match self.target {
            ExportTarget::Workouts => {
                let catalog = CatalogStore::with_builtin();
                let flattened = projection::flatten(catalog.categories());
                let sorted = projection::sort_by_date_desc(&flattened);
                let rows = export::workout_history_rows(&sorted);

                let path = self
                    .output
                    .unwrap_or_else(|| PathBuf::from(export::WORKOUT_HISTORY_FILE));
                export::write_csv(&rows, &path)
                    .with_context(|| format!("Failed to export {}", path.display()))?;
                (path, rows.len())
            }
            ExportTarget::Weights => {
                let entries = weight_history();
                let rows = export::weight_history_rows(&entries);

                let path = self
                    .output
                    .unwrap_or_else(|| PathBuf::from(export::WEIGHT_HISTORY_FILE));
                export::write_csv(&rows, &path)
                    .with_context(|| format!("Failed to export {}", path.display()))?;
                (path, rows.len())
            }
        };

        println!(
            "{} Exported {} rows to {}",
            "✓".green(),
            rows_written,
            path.display()
        );

        Ok(())
    }
}
