/// Default cap on transcript length passed to the inference API, in
/// characters. Bounds request size and downstream token cost.
pub const MAX_TRANSCRIPT_CHARS: usize = 15_000;

/// Truncate extracted text to its first `max_chars` characters.
///
/// The cut is made on a char boundary so multi-byte text survives; shorter
/// input is returned unchanged. The result is always a prefix of the input.
pub fn truncate_transcript(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
