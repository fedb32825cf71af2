//! Console rendering of provider lists, the attribute catalog and query results.
use std::io::Write;

use quote_common::{QuoteAttribute, QuoteRow, Result};

/// Writes the discovered service names, one per indented line.
pub fn write_services<W: Write>(out: &mut W, names: &[&str]) -> Result<()> {
    writeln!(out, "Discovered services:")?;
    for name in names {
        writeln!(out, "  {}", name)?;
    }
    Ok(())
}

/// Writes `attributes`, one per indented line.
pub fn write_attributes<W: Write>(out: &mut W, attributes: &[QuoteAttribute]) -> Result<()> {
    writeln!(out, "Supported query attributes:")?;
    for attribute in attributes {
        writeln!(out, "  {}", attribute)?;
    }
    Ok(())
}

/// Writes each row as a blank line followed by `  ATTRIBUTE = value` lines.
pub fn write_rows<W: Write>(out: &mut W, rows: &[QuoteRow]) -> Result<()> {
    for row in rows {
        writeln!(out)?;
        for (attribute, value) in row.iter() {
            writeln!(out, "  {} = {}", attribute, value)?;
        }
    }
    Ok(())
}

/// Writes all rows as a pretty-printed JSON array.
pub fn write_rows_json<W: Write>(out: &mut W, rows: &[QuoteRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}
