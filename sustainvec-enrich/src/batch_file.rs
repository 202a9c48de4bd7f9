use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::{BatchRequest, EnrichError, EnrichResult};

/// Writes one compact JSON record per line, in input order. Non-ASCII text is
/// written as UTF-8, never `\u` escaped. Returns the number of lines written.
pub fn write_jsonl<W: Write, T: Serialize>(writer: &mut W, records: &[T]) -> std::io::Result<usize> {
    let mut written = 0usize;
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

/// Creates (or truncates) `path` and fills it with `requests`.
///
/// Lines already flushed stay on disk if a later write fails.
pub fn write_batch_file(path: &Path, requests: &[BatchRequest]) -> EnrichResult<usize> {
    let file = File::create(path).map_err(|err| EnrichError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    let written = write_jsonl(&mut writer, requests).map_err(|err| EnrichError::io(path, err))?;
    writer.flush().map_err(|err| EnrichError::io(path, err))?;
    Ok(written)
}
