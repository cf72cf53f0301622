//! Catalog CSV writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator};

use crate::core::row::{COLUMNS, OutputRow};
use crate::error::Result;

/// Byte order mark; spreadsheet apps need it to read the file as UTF-8.
pub const BOM: &str = "\u{FEFF}";

/// Writes the catalog to any writer.
///
/// # Format
/// - BOM, then the 39-column header
/// - Delimiter: `,`, line terminator: `\n`
/// - Fields are quoted only when they contain a comma, quote, CR or LF
pub fn write_catalog<W: Write>(rows: &[OutputRow], mut out: W) -> Result<W> {
    out.write_all(BOM.as_bytes())?;

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.record())?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Writes the catalog to `path`, replacing any existing file.
pub fn write_catalog_csv(rows: &[OutputRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = write_catalog(rows, BufWriter::new(file))?;
    out.flush()?;
    Ok(())
}

/// Renders the catalog to a string.
pub fn to_catalog_csv(rows: &[OutputRow]) -> Result<String> {
    let bytes = write_catalog(rows, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn row(index: usize, description: &str) -> OutputRow {
        OutputRow {
            index,
            short_description: description.to_string(),
            sale_price: String::new(),
            regular_price: String::new(),
            categories: "Hermès".to_string(),
            tags: "Brand New, Birkin".to_string(),
            images: format!("https://example.com/2025/08/HermesD{index}.jpg"),
            columns: std::collections::BTreeMap::new(),
        }
    }

    #[test]
    fn test_header_and_bom() {
        let out = to_catalog_csv(&[]).unwrap();
        assert!(out.starts_with("\u{FEFF}ID,Type,SKU,Name,Published,Is featured?,"));
        assert!(out.ends_with("External URL,Button text,Position\n"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_quoting_only_when_needed() {
        let out = to_catalog_csv(&[row(1, "Birkin 30 Gold Epsom")]).unwrap();
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with(",simple,,Hermès,1,0,visible,Birkin 30 Gold Epsom,,"));
        // tags contain a comma
        assert!(line.contains(",\"Brand New, Birkin\","));
        assert!(line.ends_with(",0"));
    }

    #[test]
    fn test_multiline_field_with_quotes() {
        let out = to_catalog_csv(&[row(1, "K25\n<div class=\"oculto\">")]).unwrap();
        assert!(out.contains("\"K25\n<div class=\"\"oculto\"\">\""));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("productos.csv");
        write_catalog_csv(&[row(1, "a"), row(2, "b")], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('\u{FEFF}'));
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("HermesD2.jpg"));
    }
}
