use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PlotError::render("x").to_string().contains("render error:"));
    assert!(
        PlotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(PlotError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
