use seq_query::demo::{self, AGGREGATION, FILTERING, MANIPULATION, PARTITIONING, PROJECTION, QUANTITY_CHECKS};
use seq_query::report::Transcript;
use seq_query::types::SampleData;
use serde_json::{json, Value};

fn run() -> Transcript {
    demo::run(&SampleData::v0()).unwrap()
}

fn result(transcript: &Transcript, label: &str) -> Value {
    transcript
        .section(label)
        .unwrap_or_else(|| panic!("missing section {label}"))
        .result
        .clone()
}

#[test]
fn golden_section_order_and_groups() {
    let transcript = run();

    let labels: Vec<&str> = transcript.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Where", "OfType",
            "Skip", "Take", "SkipLast", "TakeLast", "SkipWhile", "TakeWhile",
            "Select", "SelectMany", "Cast", "Chunk",
            "Any", "All", "Contains",
            "Append", "Prepend",
            "Count", "TryGetNonEnumeratedCount", "Max", "MaxBy",
        ]
    );

    let groups: Vec<(&str, &str)> = transcript
        .sections
        .iter()
        .filter_map(|s| s.group.as_deref().map(|g| (g, s.label.as_str())))
        .collect();
    assert_eq!(
        groups,
        vec![
            (FILTERING, "Where"),
            (PARTITIONING, "Skip"),
            (PROJECTION, "Select"),
            (QUANTITY_CHECKS, "Any"),
            (MANIPULATION, "Append"),
            (AGGREGATION, "Count"),
        ]
    );
}

#[test]
fn golden_filtering_and_partitioning_results() {
    let t = run();
    assert_eq!(result(&t, "Where"), json!([3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "OfType"), json!(["object"]));
    assert_eq!(result(&t, "Skip"), json!([4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "Take"), json!([1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "SkipLast"), json!([1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(result(&t, "TakeLast"), json!([8, 9]));
    assert_eq!(result(&t, "SkipWhile"), json!([2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "TakeWhile"), json!([1]));
}

#[test]
fn golden_projection_results() {
    let t = run();
    assert_eq!(
        result(&t, "Select"),
        json!(["0,1", "1,2", "2,3", "3,4", "4,5", "5,6", "6,7", "7,8", "8,9"])
    );
    assert_eq!(
        result(&t, "SelectMany"),
        json!(["0: 1", "1: 2", "2: 3", "3: 4", "0: 5", "1: 6", "2: 7", "3: 8"])
    );
    assert_eq!(result(&t, "Cast"), json!([1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "Chunk"), json!([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
}

#[test]
fn golden_checks_manipulation_and_aggregates() {
    let t = run();
    assert_eq!(result(&t, "Any"), json!(true));
    assert_eq!(result(&t, "All"), json!(false));
    assert_eq!(result(&t, "Contains"), json!(true));
    assert_eq!(result(&t, "Append"), json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 2]));
    assert_eq!(result(&t, "Prepend"), json!([3, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(result(&t, "Count"), json!(7));
    assert_eq!(
        result(&t, "TryGetNonEnumeratedCount"),
        json!({ "obtained": true, "count": 9 })
    );
    assert_eq!(result(&t, "Max"), json!(2));
    assert_eq!(result(&t, "MaxBy"), json!({ "name": "Doe", "age": 34 }));
}

#[test]
fn run_does_not_touch_sample_data() {
    let data = SampleData::v0();
    let before = data.clone();
    demo::run(&data).unwrap();
    assert_eq!(data, before);
}

#[test]
fn empty_people_surfaces_query_error() {
    let mut data = SampleData::v0();
    data.people.clear();

    let err = demo::run(&data).unwrap_err();
    assert!(matches!(err, demo::DemoError::Query(_)));
    assert!(err.to_string().contains("max_by"));
}
