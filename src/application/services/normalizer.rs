/// Normalize raw multi-line text into clean text: every line trimmed, lines
/// shorter than three characters dropped, and PDF page-number artifacts
/// (lines starting with "page ", any case) dropped.
///
/// Empty input yields empty output; there are no error conditions.
pub fn normalize_text(raw: &str) -> String {
    let mut kept = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.chars().count() < 3 {
            continue;
        }
        if trimmed.to_lowercase().starts_with("page ") {
            continue;
        }

        kept.push(trimmed);
    }

    kept.join("\n")
}
