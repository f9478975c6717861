/// Literal sentence boundary. Abbreviations such as "e.g. " split too.
pub const SENTENCE_BOUNDARY: &str = ". ";

/// Split after every boundary, leaving the boundary on the preceding piece.
///
/// Content without a boundary comes back as a single sentence; empty content
/// yields no sentences.
pub fn split_sentences(content: &str) -> Vec<&str> {
    content.split_inclusive(SENTENCE_BOUNDARY).collect()
}
