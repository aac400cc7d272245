use crate::domain::MAX_CLEAN_TEXT_CHARS;

const CONTEXT_TEMPLATE: &str = "## CONTEXT SUMMARY\n\
                                - Purpose:\n\
                                - Key Concepts:\n\
                                - Definitions:\n\
                                - Rules & Constraints:\n\
                                - Edge Cases:\n\
                                \n\
                                ## CLEAN SOURCE\n";

/// Wrap clean text in the fixed context template. The placeholder sections
/// stay empty for a downstream consumer to fill in; the source text is
/// embedded verbatim, truncated to the character budget. The template itself
/// is never cut.
pub fn build_context(clean_text: &str) -> String {
    let body: String = clean_text.trim().chars().take(MAX_CLEAN_TEXT_CHARS).collect();

    let mut context = String::with_capacity(CONTEXT_TEMPLATE.len() + body.len());
    context.push_str(CONTEXT_TEMPLATE);
    context.push_str(&body);

    context.trim_end().to_string()
}
