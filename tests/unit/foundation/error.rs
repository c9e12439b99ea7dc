use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SduiError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SduiError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(SduiError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SduiError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
