//! JSON export

use std::io::Write;

use crate::error::{PocketError, PocketResult};

use super::ExportDocument;

/// Write the document as pretty-printed JSON
pub fn write_json<W: Write>(doc: &ExportDocument, writer: &mut W) -> PocketResult<()> {
    serde_json::to_writer_pretty(&mut *writer, doc)
        .map_err(|e| PocketError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PocketError::Export(e.to_string()))?;
    Ok(())
}
