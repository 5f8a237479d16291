use crate::error::Result;
use crate::record::{ActionRecord, COLUMNS};
use std::path::Path;

/// Render records as CSV: header row, then one row per record in order.
/// The header is written even when `records` is empty.
pub fn render_csv(records: &[ActionRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Write records to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_records(path: &Path, records: &[ActionRecord]) -> Result<()> {
    let data = render_csv(records)?;
    crate::io::atomic_write(path, &data)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "wrote action records");
    Ok(())
}
