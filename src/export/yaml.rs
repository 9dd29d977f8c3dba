//! YAML export

use std::io::Write;

use crate::error::{PocketError, PocketResult};

use super::ExportDocument;

/// Write the document as YAML with a short header comment
pub fn write_yaml<W: Write>(doc: &ExportDocument, writer: &mut W) -> PocketResult<()> {
    let export_err = |e: std::io::Error| PocketError::Export(e.to_string());

    writeln!(writer, "# pocket-budget expense export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", doc.exported_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, doc).map_err(|e| PocketError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportFormat;
    use crate::export::ExportOptions;
    use crate::models::{Expense, LedgerState, Money};

    #[test]
    fn test_yaml_round_trips_as_value() {
        let mut state = LedgerState::default();
        state.expenses = vec![Expense::new("Rent", Money::from_cents(120000), "Rent")];
        let options = ExportOptions {
            format: ExportFormat::Yaml,
            include_totals: false,
            include_chart: true,
        };
        let doc = ExportDocument::build(&state, &options, "$").unwrap();

        let mut out = Vec::new();
        write_yaml(&doc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# pocket-budget expense export"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["expenses"][0]["amount"].as_str(), Some("1200.00"));
        assert!(value["chart"].as_str().unwrap().contains("Rent"));
    }
}
