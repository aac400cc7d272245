use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::MAX_CLEAN_TEXT_CHARS;

/// Elements whose text must never reach the output. Detached from the tree
/// before extraction so nested content disappears with them.
static NOISE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, noscript, svg, canvas, form, aside, nav, footer, header")
        .expect("noise selector parses")
});

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("main selector parses"));

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector parses"));

static TRAILING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());

static EXTRA_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Lines that exactly match one of these (case-insensitive) are footer junk.
const BOILERPLATE_LINES: [&str; 3] = ["cookie policy", "privacy policy", "terms of service"];

/// Reduce an HTML page to readable text: strip non-content elements, prefer
/// the `<main>` landmark (falling back to `<body>`, then the whole document),
/// filter boilerplate lines, normalize paragraph breaks, and cap the result
/// at the clean-text character budget.
pub fn extract_readable_text(html: &str) -> String {
    let mut doc = Html::parse_document(html);

    let noise_ids: Vec<_> = doc.select(&NOISE_SELECTOR).map(|el| el.id()).collect();
    for id in noise_ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    // Select from the root element, not the document: `Html::select` walks
    // the whole node arena, so a landmark buried in a detached subtree would
    // still match. The root's descendants are only the attached nodes.
    let root = doc.root_element();

    let text = match root.select(&MAIN_SELECTOR).next() {
        Some(main) => element_text(&main),
        None => match root.select(&BODY_SELECTOR).next() {
            Some(body) => element_text(&body),
            None => element_text(&root),
        },
    };

    let mut kept = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.chars().count() < 2 {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if BOILERPLATE_LINES.contains(&lowered.as_str()) {
            continue;
        }

        kept.push(trimmed);
    }

    let joined = kept.join("\n");
    let collapsed = TRAILING_WS.replace_all(&joined, "\n");
    let collapsed = EXTRA_NEWLINES.replace_all(&collapsed, "\n\n");

    collapsed.trim().chars().take(MAX_CLEAN_TEXT_CHARS).collect()
}

/// Text nodes joined with newlines, so block-level elements never run
/// together on one line.
fn element_text(el: &ElementRef) -> String {
    el.text().collect::<Vec<_>>().join("\n")
}
