use std::path::Path;

use crate::export::error::ExportError;
use crate::lookup::models::AddressRecord;

pub mod error;
mod xlsx;

#[derive(Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Xlsx
}

impl Format {
    /// Picks the output format from the path extension, case-insensitive.
    pub fn from_path(path: &Path) -> Result<Format, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Format::Csv),
            Some("xlsx") => Ok(Format::Xlsx),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Writes a header row plus one row per record.
pub fn write_records(
    path: &Path,
    records: &[AddressRecord]
) -> Result<(), ExportError> {
    match Format::from_path(path)? {
        Format::Csv => write_csv(path, records),
        Format::Xlsx => xlsx::write_workbook(path, records)
    }
}

fn write_csv(path: &Path, records: &[AddressRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
