use std::fs;

use sustainvec_core::{Element, ElementMetadata, ElementType};
use sustainvec_enrich::request::ChatCompletionBody;
use sustainvec_enrich::{
    build_table_requests, context_window, write_batch_file, BatchRequest, RequestBody,
    TableRequestConfig,
};

#[test]
fn table_between_four_text_chunks_becomes_one_request_line() {
    let elements = vec![
        Element::new(ElementType::CompositeElement, "e0", "Our climate governance."),
        Element::new(ElementType::CompositeElement, "e1", "Emissions overview:"),
        Element::new(ElementType::Table, "e2", "Scope 1 120 Scope 2 80").with_metadata(
            ElementMetadata {
                text_as_html: Some("<table><tr><td>Scope 1</td><td>120</td></tr></table>".into()),
                ..ElementMetadata::default()
            },
        ),
        Element::new(ElementType::CompositeElement, "e3", "Scope 2 is market-based."),
        Element::new(ElementType::CompositeElement, "e4", "Targets follow SBTi."),
    ];

    let context = context_window(&elements, &elements[2]);
    assert_eq!(
        context,
        "Our climate governance.\nEmissions overview:\nScope 2 is market-based.\nTargets follow SBTi."
    );

    let requests = build_table_requests(&elements, &TableRequestConfig::default());
    assert_eq!(requests.len(), 1);
    let RequestBody::ChatCompletion(ChatCompletionBody { messages, .. }) = &requests[0].body else {
        panic!("table request must be a chat completion");
    };
    assert!(messages[1].content.contains(&context));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("e_markdown_requests.jsonl");
    assert_eq!(write_batch_file(&path, &requests).unwrap(), 1);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    let parsed: BatchRequest = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(parsed.custom_id, "e2");
}
