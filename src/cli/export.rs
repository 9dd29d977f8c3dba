//! Export command

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::{ExportFormat, Settings};
use crate::error::PocketResult;
use crate::export::{default_filename, export_to_file, ExportOptions};
use crate::storage::Storage;

/// Arguments for `pocket export`; unset flags fall back to settings
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (default: expenses-YYYY-MM-DD.<ext> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the per-category totals sheet
    #[arg(long, conflicts_with = "no_totals")]
    pub totals: bool,

    /// Leave out the per-category totals sheet
    #[arg(long)]
    pub no_totals: bool,

    /// Include a text rendering of the category chart
    #[arg(long)]
    pub chart: bool,
}

impl ExportArgs {
    fn options(&self, settings: &Settings) -> ExportOptions {
        let mut options = ExportOptions::from(&settings.export);
        if let Some(format) = self.format {
            options.format = format;
        }
        if self.totals {
            options.include_totals = true;
        }
        if self.no_totals {
            options.include_totals = false;
        }
        if self.chart {
            options.include_chart = true;
        }
        options
    }
}

pub fn handle_export_command(storage: &Storage, settings: &Settings, args: ExportArgs) -> PocketResult<()> {
    let options = args.options(settings);
    let path = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(default_filename(options.format, Local::now().date_naive()))
    });

    let state = storage.snapshot()?;
    let written = export_to_file(&state, &options, &settings.currency_symbol, &path)?;

    println!(
        "Exported {} expense(s) to {}",
        state.expenses.len(),
        written.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ExportArgs {
        ExportArgs {
            format: None,
            output: None,
            totals: false,
            no_totals: false,
            chart: false,
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings::default();

        let options = args().options(&settings);
        assert_eq!(options, ExportOptions::from(&settings.export));

        let mut overridden = args();
        overridden.format = Some(ExportFormat::Yaml);
        overridden.no_totals = true;
        overridden.chart = true;
        let options = overridden.options(&settings);
        assert_eq!(options.format, ExportFormat::Yaml);
        assert!(!options.include_totals);
        assert!(options.include_chart);
    }
}
