//! File helpers shared by every stage: element files in, pretty JSON out.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Element, PipelineError};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|err| PipelineError::io(path, err))?;
    serde_json::from_str(&raw).map_err(|err| PipelineError::parse(path, err))
}

/// Reads one document's ordered element array.
pub fn read_elements(path: &Path) -> Result<Vec<Element>, PipelineError> {
    read_json(path)
}

/// Writes `value` as UTF-8 JSON indented by four spaces, non-ASCII left as is.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|err| PipelineError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writer.flush().map_err(|err| PipelineError::io(path, err))
}

/// Resolves an input argument to the element files it names.
///
/// A file is returned as is; a directory yields its `*.json` entries in
/// sorted order. Anything else is a configuration error.
pub fn json_inputs(path: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(PipelineError::InvalidInput(path.to_path_buf()));
    }

    let entries = fs::read_dir(path).map_err(|err| PipelineError::io(path, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| PipelineError::io(path, err))?;
        let candidate = entry.path();
        let is_json = candidate
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "json");
        if candidate.is_file() && is_json {
            files.push(candidate);
        }
    }
    files.sort();
    Ok(files)
}

/// `<output_dir>/<input stem><suffix>`, e.g. `report_markdown_requests.jsonl`.
pub fn derived_output(output_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}{suffix}"))
}

pub fn ensure_dir(path: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(path).map_err(|err| PipelineError::io(path, err))
}
