use once_cell::sync::Lazy;
use regex::Regex;
use sustainvec_core::{Element, PipelineError, RecordMetadata, VectorRecord};

static CORPORATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]+)").expect("valid regex"));
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(\d{4})\.pdf$").expect("valid regex"));

/// Report identity derived from a source filename such as `AcmeCorp_2023.pdf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportTags {
    pub corporate: String,
    pub year: u16,
}

/// Leading ASCII letters give the corporate, `_<4 digits>.pdf` at the end
/// gives the year. Returns `None` unless both are present.
pub fn report_tags(filename: &str) -> Option<ReportTags> {
    let corporate = CORPORATE.captures(filename)?.get(1)?.as_str();
    let year = YEAR.captures(filename)?.get(1)?.as_str().parse().ok()?;
    Some(ReportTags {
        corporate: corporate.to_string(),
        year,
    })
}

pub fn element_to_record(element: &Element) -> Result<VectorRecord, PipelineError> {
    let id = element.element_id.as_deref();
    let metadata = element
        .metadata
        .as_ref()
        .ok_or_else(|| PipelineError::missing(id, "metadata"))?;
    let element_id = id.ok_or_else(|| PipelineError::missing(None, "element_id"))?;
    let values: Vec<f32> = element
        .embedding
        .as_deref()
        .ok_or_else(|| PipelineError::missing(id, "embedding"))?
        .iter()
        .map(|&value| value as f32)
        .collect();
    let text = element
        .text
        .clone()
        .ok_or_else(|| PipelineError::missing(id, "text"))?;

    let file_name = metadata.filename.clone().unwrap_or_default();
    let tags = report_tags(&file_name);

    Ok(VectorRecord {
        id: element_id.to_string(),
        values,
        metadata: RecordMetadata {
            text,
            page_number: metadata.page_number.unwrap_or(0),
            corporate: tags.as_ref().map(|tags| tags.corporate.clone()),
            year: tags.map(|tags| tags.year),
            file_name,
        },
    })
}

/// Converts every complete element into a vector record, in input order.
/// Incomplete elements are logged and skipped.
pub fn format_records(elements: &[Element]) -> Vec<VectorRecord> {
    elements
        .iter()
        .filter_map(|element| match element_to_record(element) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "skipping element");
                None
            }
        })
        .collect()
}
