use super::*;

#[test]
fn defaults_enable_fallback_passthrough_and_reporting() {
    let o = PipelineOptions::default();
    assert!(!o.development);
    assert!(o.pascal_case_fallback);
    assert!(o.passthrough_attributes);
    assert!(o.report_missing_handlers);
    assert!(PipelineOptions::development().development);
}

#[test]
fn partial_json_keeps_defaults() {
    let o = PipelineOptions::from_reader(r#"{ "development": true }"#.as_bytes()).unwrap();
    assert_eq!(
        o,
        PipelineOptions {
            development: true,
            ..PipelineOptions::default()
        }
    );
}

#[test]
fn unknown_keys_are_config_errors() {
    let err = PipelineOptions::from_reader(r#"{ "devlopment": true }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, SduiError::Config(_)));
    assert!(err.to_string().contains("devlopment"));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = PipelineOptions::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().starts_with("config error: open options"));
}
