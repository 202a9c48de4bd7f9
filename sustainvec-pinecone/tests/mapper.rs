use serde_json::json;
use sustainvec_core::{Element, ElementMetadata, ElementType, PipelineError};
use sustainvec_pinecone::{element_to_record, format_records, report_tags, ReportTags};

fn embedded(id: &str, filename: Option<&str>, page: Option<u32>) -> Element {
    let mut element = Element::new(ElementType::CompositeElement, id, "Scope 1 emissions fell.")
        .with_metadata(ElementMetadata {
            filename: filename.map(ToOwned::to_owned),
            page_number: page,
            ..ElementMetadata::default()
        });
    element.embedding = Some(vec![0.1, 0.2]);
    element
}

#[test]
fn tags_need_both_corporate_and_year() {
    assert_eq!(
        report_tags("AcmeCorp_2023.pdf"),
        Some(ReportTags {
            corporate: "AcmeCorp".to_string(),
            year: 2023
        })
    );
    assert_eq!(
        report_tags("Globex_annual_report_2021.pdf").map(|tags| tags.corporate),
        Some("Globex".to_string())
    );
    assert_eq!(report_tags("AcmeCorp.pdf"), None);
    assert_eq!(report_tags("2023_report_2023.pdf"), None);
    assert_eq!(report_tags("AcmeCorp_2023.PDF"), None);
    assert_eq!(report_tags(""), None);
}

#[test]
fn record_carries_text_page_and_tags() {
    let record = element_to_record(&embedded("e-1", Some("AcmeCorp_2023.pdf"), Some(12))).unwrap();

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "id": "e-1",
            "values": [0.1f32, 0.2f32],
            "metadata": {
                "file_name": "AcmeCorp_2023.pdf",
                "text": "Scope 1 emissions fell.",
                "page_number": 12,
                "corporate": "AcmeCorp",
                "year": 2023
            }
        })
    );
}

#[test]
fn untagged_filename_omits_corporate_and_year() {
    let record = element_to_record(&embedded("e-2", Some("notes.pdf"), None)).unwrap();
    let metadata = serde_json::to_value(&record.metadata).unwrap();

    assert_eq!(metadata["page_number"], 0);
    assert!(metadata.get("corporate").is_none());
    assert!(metadata.get("year").is_none());

    let unnamed = element_to_record(&embedded("e-3", None, Some(1))).unwrap();
    assert_eq!(unnamed.metadata.file_name, "");
}

#[test]
fn missing_embedding_is_reported_with_id() {
    let mut element = embedded("e-4", Some("AcmeCorp_2023.pdf"), Some(1));
    element.embedding = None;

    let err = element_to_record(&element).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MissingField {
            field: "embedding",
            ..
        }
    ));
    assert!(err.to_string().contains("e-4"));
}

#[test]
fn format_skips_incomplete_elements_and_keeps_order() {
    let mut no_text = embedded("no-text", Some("AcmeCorp_2023.pdf"), Some(2));
    no_text.text = None;
    let no_metadata = Element {
        metadata: None,
        ..embedded("no-metadata", None, None)
    };

    let elements = vec![
        embedded("a", Some("AcmeCorp_2023.pdf"), Some(1)),
        no_text,
        no_metadata,
        Element::new(ElementType::CompositeElement, "no-embedding", "text"),
        embedded("b", Some("AcmeCorp_2023.pdf"), Some(3)),
    ];

    let ids: Vec<_> = format_records(&elements)
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn record_values_are_narrowed_to_f32() {
    let mut element = embedded("e-9", Some("AcmeCorp_2023.pdf"), Some(2));
    element.embedding = Some(vec![0.0123456789012345, 1.0]);

    let record = element_to_record(&element).unwrap();
    assert_eq!(record.values, vec![0.0123456789012345f64 as f32, 1.0]);
}
