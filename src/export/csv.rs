//! CSV export
//!
//! Sheets are written as consecutive CSV sections separated by a blank line,
//! each with its own header row.

use std::io::Write;

use ::csv::Writer;

use crate::error::{PocketError, PocketResult};

use super::ExportDocument;

fn export_err(e: impl std::fmt::Display) -> PocketError {
    PocketError::Export(e.to_string())
}

/// Write the document as CSV sections
pub fn write_csv<W: Write>(doc: &ExportDocument, writer: &mut W) -> PocketResult<()> {
    {
        let mut csv = Writer::from_writer(&mut *writer);
        csv.write_record(["Name", "Amount", "Category", "Date"])
            .map_err(export_err)?;
        for record in &doc.expenses {
            let date = record.date.format("%Y-%m-%d").to_string();
            csv.write_record([
                record.name.as_str(),
                record.amount.as_str(),
                record.category.as_str(),
                date.as_str(),
            ])
            .map_err(export_err)?;
        }
        csv.flush().map_err(export_err)?;
    }

    if let Some(totals) = &doc.totals {
        writeln!(writer).map_err(export_err)?;
        let mut csv = Writer::from_writer(&mut *writer);
        csv.write_record(["Category", "Total Amount"])
            .map_err(export_err)?;
        for total in totals {
            csv.write_record([total.category.as_str(), total.total_amount.as_str()])
                .map_err(export_err)?;
        }
        csv.flush().map_err(export_err)?;
    }

    if let Some(chart) = &doc.chart {
        writeln!(writer).map_err(export_err)?;
        let mut csv = Writer::from_writer(&mut *writer);
        csv.write_record(["Chart"]).map_err(export_err)?;
        for line in chart.lines() {
            csv.write_record([line]).map_err(export_err)?;
        }
        csv.flush().map_err(export_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportFormat;
    use crate::export::ExportOptions;
    use crate::models::{Expense, LedgerState, Money};
    use chrono::NaiveDate;

    fn render(include_totals: bool, include_chart: bool) -> String {
        let day = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let mut state = LedgerState::default();
        state.expenses = vec![
            Expense::on("Coffee, large", Money::from_cents(450), "Dining", day),
            Expense::on("Rent", Money::from_cents(120000), "Rent", day),
        ];
        let options = ExportOptions {
            format: ExportFormat::Csv,
            include_totals,
            include_chart,
        };
        let doc = ExportDocument::build(&state, &options, "$").unwrap();

        let mut out = Vec::new();
        write_csv(&doc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_expense_sheet_only() {
        let text = render(false, false);
        assert_eq!(
            text,
            "Name,Amount,Category,Date\n\"Coffee, large\",4.50,Dining,2026-10-01\nRent,1200.00,Rent,2026-10-01\n"
        );
    }

    #[test]
    fn test_totals_section() {
        let text = render(true, false);
        let sections: Vec<_> = text.split("\n\n").collect();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1], "Category,Total Amount\nDining,4.50\nRent,1200.00\n");
    }

    #[test]
    fn test_chart_section_is_text() {
        let text = render(true, true);
        let sections: Vec<_> = text.split("\n\n").collect();

        assert_eq!(sections.len(), 3);
        assert!(sections[2].starts_with("Chart\n"));
        assert!(sections[2].contains("$1200.00"));
    }
}
