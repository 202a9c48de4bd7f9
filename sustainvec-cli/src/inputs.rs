use std::path::Path;

use sustainvec_core::io::json_inputs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Runs `stage` on `input`, or on every `*.json` file of `input` when it is a
/// directory (sorted by name).
///
/// A single file's error is returned. In directory mode each failure is
/// logged and the remaining files still run.
pub fn for_each_input<F>(input: &Path, mut stage: F) -> anyhow::Result<InputSummary>
where
    F: FnMut(&Path) -> anyhow::Result<()>,
{
    let files = json_inputs(input)?;
    let mut summary = InputSummary::default();

    if !input.is_dir() {
        for file in &files {
            stage(file)?;
            summary.processed += 1;
        }
        return Ok(summary);
    }

    tracing::info!(path = %input.display(), files = files.len(), "processing directory");
    for file in &files {
        match stage(file) {
            Ok(()) => summary.processed += 1,
            Err(err) => {
                let message = format!("{err:#}");
                tracing::error!(path = %file.display(), error = %message, "failed to process file");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
