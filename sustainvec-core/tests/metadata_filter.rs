use serde_json::json;
use sustainvec_core::{MetadataFilter, Value};

#[test]
fn metadata_filter_roundtrip() {
    let filter = MetadataFilter::All(vec![
        MetadataFilter::Eq("corporate".to_string(), Value::String("AcmeCorp".to_string())),
        MetadataFilter::Any(vec![
            MetadataFilter::Range {
                key: "page_number".to_string(),
                min: Some(Value::Number(1.into())),
                max: Some(Value::Number(10.into())),
            },
            MetadataFilter::In(
                "file_name".to_string(),
                vec![
                    Value::String("a.pdf".to_string()),
                    Value::String("b.pdf".to_string()),
                ],
            ),
        ]),
    ]);

    let json = serde_json::to_string(&filter).unwrap();
    let parsed: MetadataFilter = serde_json::from_str(&json).unwrap();
    assert_eq!(filter, parsed);
}

#[test]
fn eq_helper_converts_values() {
    assert_eq!(
        MetadataFilter::eq("year", 2023),
        MetadataFilter::Eq("year".to_string(), json!(2023))
    );
}
