use contextify::application::services::build_context;
use contextify::domain::MAX_CLEAN_TEXT_CHARS;

const TEMPLATE_HEADER: &str = "## CONTEXT SUMMARY\n- Purpose:\n- Key Concepts:\n- Definitions:\n- Rules & Constraints:\n- Edge Cases:\n\n## CLEAN SOURCE\n";

#[test]
fn given_text_within_budget_when_building_then_output_is_header_plus_text() {
    let input = "Alpha beta gamma";
    let result = build_context(input);
    assert_eq!(result, format!("{TEMPLATE_HEADER}{input}"));
}

#[test]
fn given_multiline_text_when_building_then_embeds_it_verbatim() {
    let input = "first line content\nsecond line content";
    let result = build_context(input);
    assert!(result.ends_with("## CLEAN SOURCE\nfirst line content\nsecond line content"));
}

#[test]
fn given_empty_text_when_building_then_returns_bare_template() {
    let result = build_context("");
    assert!(result.starts_with("## CONTEXT SUMMARY"));
    assert!(result.ends_with("## CLEAN SOURCE"));
}

#[test]
fn given_whitespace_text_when_building_then_returns_bare_template() {
    let result = build_context("  \n\t  ");
    assert!(result.ends_with("## CLEAN SOURCE"));
}

#[test]
fn given_padded_text_when_building_then_trims_before_embedding() {
    let result = build_context("  hello world  ");
    assert!(result.ends_with("## CLEAN SOURCE\nhello world"));
}

#[test]
fn given_oversized_text_when_building_then_truncates_source_to_budget() {
    let input = "x".repeat(MAX_CLEAN_TEXT_CHARS + 5_000);
    let result = build_context(&input);

    let (header, source) = result.split_once("## CLEAN SOURCE\n").unwrap();
    assert!(header.starts_with("## CONTEXT SUMMARY"));
    assert_eq!(source.chars().count(), MAX_CLEAN_TEXT_CHARS);
}

#[test]
fn given_multibyte_text_when_building_then_budget_counts_chars_not_bytes() {
    let input = "é".repeat(MAX_CLEAN_TEXT_CHARS + 10);
    let result = build_context(&input);

    let (_, source) = result.split_once("## CLEAN SOURCE\n").unwrap();
    assert_eq!(source.chars().count(), MAX_CLEAN_TEXT_CHARS);
}

#[test]
fn given_any_text_when_building_then_placeholder_sections_stay_empty() {
    let result = build_context("body text here");
    assert!(result.contains("- Purpose:\n"));
    assert!(result.contains("- Key Concepts:\n"));
    assert!(result.contains("- Definitions:\n"));
    assert!(result.contains("- Rules & Constraints:\n"));
    assert!(result.contains("- Edge Cases:\n"));
}
