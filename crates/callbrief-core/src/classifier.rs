//! Heuristic gate deciding whether a document is worth sending to the
//! (costly) inference API.

/// Phrases that reliably show up in earnings-call transcripts.
const TRANSCRIPT_KEYWORDS: &[&str] = &[
    "earnings call",
    "conference call",
    "operator",
    "q&a",
    "question and answer",
    "management discussion",
    "analyst",
];

/// Returns true if `text` contains any transcript keyword, case-insensitive.
///
/// Deterministic and side-effect-free; the input is lowercased once and each
/// keyword is tested as a plain substring.
pub fn looks_like_transcript(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRANSCRIPT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
