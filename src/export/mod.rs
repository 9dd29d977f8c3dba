//! Export of the expense ledger
//!
//! One logical workbook with up to three sheets (expenses, category totals,
//! chart), written as CSV, JSON or YAML:
//! - CSV: sheets as consecutive sections separated by a blank line
//! - JSON / YAML: one document with a field per sheet
//!
//! No format can embed an image, so the chart sheet holds a text rendering.
//! Exporting with no expenses is refused before any file is created.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::{ExportFormat, ExportSettings};
use crate::display::{chart_data, format_chart_text};
use crate::error::{PocketError, PocketResult};
use crate::models::LedgerState;
use crate::reports::category_totals;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::yaml::write_yaml;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Width of the bars in the text chart sheet
const CHART_WIDTH: usize = 30;

/// What to write and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_totals: bool,
    pub include_chart: bool,
}

impl From<&ExportSettings> for ExportOptions {
    fn from(settings: &ExportSettings) -> Self {
        Self {
            format: settings.format,
            include_totals: settings.include_totals,
            include_chart: settings.include_chart,
        }
    }
}

/// One row of the expense sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub name: String,
    /// Plain decimal, e.g. "4.50"
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
}

/// One row of the totals sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRecord {
    pub category: String,
    pub total_amount: String,
}

/// Everything an export writes, independent of format
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub expenses: Vec<ExpenseRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<TotalRecord>>,
    /// Text rendering standing in for the chart image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
}

impl ExportDocument {
    /// Build the document, refusing when there are no expenses
    pub fn build(state: &LedgerState, options: &ExportOptions, currency_symbol: &str) -> PocketResult<Self> {
        if state.expenses.is_empty() {
            return Err(PocketError::Export("No expenses to export".into()));
        }

        let expenses = state
            .expenses
            .iter()
            .map(|e| ExpenseRecord {
                name: e.name.clone(),
                amount: e.amount.to_decimal_string(),
                category: e.category.clone(),
                date: e.date,
            })
            .collect();

        let totals = options.include_totals.then(|| {
            category_totals(&state.expenses)
                .into_iter()
                .map(|(category, total)| TotalRecord {
                    category,
                    total_amount: total.to_decimal_string(),
                })
                .collect()
        });

        let chart = options.include_chart.then(|| {
            format_chart_text(&chart_data(&state.expenses), currency_symbol, CHART_WIDTH)
        });

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            totals,
            chart,
        })
    }
}

/// Write a document in the given format
pub fn write_document<W: Write>(doc: &ExportDocument, format: ExportFormat, writer: &mut W) -> PocketResult<()> {
    match format {
        ExportFormat::Csv => write_csv(doc, writer),
        ExportFormat::Json => write_json(doc, writer),
        ExportFormat::Yaml => write_yaml(doc, writer),
    }
}

/// `expenses-YYYY-MM-DD.<ext>`
pub fn default_filename(format: ExportFormat, today: NaiveDate) -> String {
    format!("expenses-{}.{}", today.format("%Y-%m-%d"), format.extension())
}

/// Export to `path`; the file is only created once the document is built
pub fn export_to_file(
    state: &LedgerState,
    options: &ExportOptions,
    currency_symbol: &str,
    path: &Path,
) -> PocketResult<PathBuf> {
    let doc = ExportDocument::build(state, options, currency_symbol)?;

    let file = File::create(path)
        .map_err(|e| PocketError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_document(&doc, options.format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| PocketError::Export(e.to_string()))?;

    info!(path = %path.display(), format = ?options.format, rows = doc.expenses.len(), "export written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    fn options(format: ExportFormat) -> ExportOptions {
        ExportOptions {
            format,
            include_totals: true,
            include_chart: true,
        }
    }

    fn state() -> LedgerState {
        let mut state = LedgerState::default();
        state.expenses = vec![
            Expense::new("Coffee", Money::from_cents(450), "Dining"),
            Expense::new("Rent", Money::from_cents(120000), "Rent"),
        ];
        state
    }

    #[test]
    fn test_empty_ledger_is_refused_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let err = export_to_file(
            &LedgerState::default(),
            &options(ExportFormat::Csv),
            "$",
            &path,
        )
        .unwrap_err();

        assert!(matches!(err, PocketError::Export(ref m) if m == "No expenses to export"));
        assert!(!path.exists());
    }

    #[test]
    fn test_build_sheets() {
        let doc = ExportDocument::build(&state(), &options(ExportFormat::Json), "$").unwrap();

        assert_eq!(doc.expenses.len(), 2);
        assert_eq!(doc.expenses[0].amount, "4.50");

        let totals = doc.totals.unwrap();
        assert_eq!(totals[1].category, "Rent");
        assert_eq!(totals[1].total_amount, "1200.00");
        assert!(doc.chart.unwrap().contains("Dining"));
    }

    #[test]
    fn test_optional_sheets_omitted() {
        let opts = ExportOptions {
            format: ExportFormat::Csv,
            include_totals: false,
            include_chart: false,
        };
        let doc = ExportDocument::build(&state(), &opts, "$").unwrap();
        assert!(doc.totals.is_none());
        assert!(doc.chart.is_none());
    }

    #[test]
    fn test_default_filename() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(default_filename(ExportFormat::Csv, day), "expenses-2026-10-18.csv");
        assert_eq!(default_filename(ExportFormat::Yaml, day), "expenses-2026-10-18.yaml");
    }

    #[test]
    fn test_export_to_file_each_format() {
        let temp_dir = TempDir::new().unwrap();
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Yaml] {
            let path = temp_dir.path().join(format!("out.{}", format.extension()));
            export_to_file(&state(), &options(format), "$", &path).unwrap();
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.contains("Coffee"), "{:?}", format);
        }
    }
}
