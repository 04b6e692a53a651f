use once_cell::sync::Lazy;
use regex::Regex;

// The list grammar is deliberately narrow: one or more digits, a period, a
// space, at the very start of the trimmed text. Anything else is prose.

static LEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

// `(?m)^` matches at the start of the text and after every line break, which
// is how we split segments without lookahead support.
static LINE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s").unwrap());

/// How a bot response should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// An ordered list; items have their numeric markers stripped.
    List(Vec<String>),
    /// Verbatim text, internal line breaks preserved.
    Prose(String),
}

/// Classify a bot response as an enumerated list or plain prose.
///
/// A response is a list when its trimmed text begins with a
/// `digits-period-space` marker. Segments are split wherever that marker
/// follows a line break; each item is the segment with the marker and
/// surrounding whitespace stripped, empty segments dropped, order preserved.
///
/// Pure and deterministic; applied at render time to bot messages only.
pub fn classify(text: &str) -> Classified {
    let trimmed = text.trim();
    if !LEADING_MARKER.is_match(trimmed) {
        return Classified::Prose(text.to_string());
    }

    let starts: Vec<usize> = LINE_MARKER.find_iter(trimmed).map(|m| m.start()).collect();

    let mut items = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(trimmed.len());
        let segment = &trimmed[start..end];
        let item = LEADING_MARKER.replace(segment, "").trim().to_string();
        if !item.is_empty() {
            items.push(item);
        }
    }

    Classified::List(items)
}
