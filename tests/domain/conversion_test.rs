use contextify::domain::{Conversion, ConversionId, ConversionMode};

#[test]
fn given_default_value_when_parsing_mode_then_returns_default() {
    assert_eq!(
        ConversionMode::from_form_value("default"),
        ConversionMode::Default
    );
}

#[test]
fn given_unknown_value_when_parsing_mode_then_falls_back_to_default() {
    assert_eq!(
        ConversionMode::from_form_value("summarize"),
        ConversionMode::Default
    );
}

#[test]
fn given_padded_mixed_case_value_when_parsing_mode_then_returns_default() {
    assert_eq!(
        ConversionMode::from_form_value("  Default "),
        ConversionMode::Default
    );
}

#[test]
fn given_mode_when_displayed_then_matches_form_value() {
    assert_eq!(ConversionMode::Default.to_string(), "default");
}

#[test]
fn given_two_ids_when_created_then_they_differ() {
    assert_ne!(ConversionId::new(), ConversionId::new());
}

#[test]
fn given_uuid_when_wrapped_then_round_trips() {
    let uuid = uuid::Uuid::new_v4();
    let id = ConversionId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn given_conversion_when_created_then_stores_context_and_estimate() {
    let conversion = Conversion::new("## CONTEXT SUMMARY".to_string(), 42);
    assert_eq!(conversion.context, "## CONTEXT SUMMARY");
    assert_eq!(conversion.token_estimate, 42);
}

#[test]
fn given_two_conversions_when_created_then_ids_are_unique() {
    let first = Conversion::new("same".to_string(), 1);
    let second = Conversion::new("same".to_string(), 1);
    assert_ne!(first.id, second.id);
}
