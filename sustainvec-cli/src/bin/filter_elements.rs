//! Removes navigation noise from extracted elements: children of table of
//! contents style titles, dotted-leader lines, headers and footers.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sustainvec_cli::{for_each_input, load_dotenv, logging};
use sustainvec_core::filter_elements;
use sustainvec_core::io::{derived_output, ensure_dir, read_elements, write_json_pretty};

#[derive(Parser)]
#[command(name = "filter-elements")]
#[command(about = "Drop navigation, dotted-leader, header and footer elements")]
#[command(version)]
struct Args {
    /// Element JSON file, or a folder of element JSON files
    #[arg(long)]
    input_path: PathBuf,

    /// Folder receiving `<stem>_filtered.json`
    #[arg(long)]
    output_folder: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();

    let summary = for_each_input(&args.input_path, |input| {
        let elements = read_elements(input)?;
        let total = elements.len();
        let (kept, stats) = filter_elements(elements);

        ensure_dir(&args.output_folder)?;
        let output = derived_output(&args.output_folder, input, "_filtered.json");
        write_json_pretty(&output, &kept)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            total,
            kept = kept.len(),
            navigation = stats.navigation_children,
            dotted_leaders = stats.dotted_leaders,
            headers_footers = stats.headers_footers,
            "filtered elements"
        );
        Ok(())
    })?;

    tracing::info!(processed = summary.processed, failed = summary.failed, "done");
    Ok(())
}
