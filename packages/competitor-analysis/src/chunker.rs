//! Fixed-size text splitting with overlap.

/// Target chunk length in characters.
pub const CHUNK_SIZE: usize = 1000;

/// Overlap between consecutive chunks in characters. Overlap exists so that
/// answer-relevant text spanning a chunk boundary is not lost.
pub const CHUNK_OVERLAP: usize = 200;

/// Split text into chunks of at most `size` characters, with consecutive
/// chunks overlapping by `overlap` characters.
///
/// Lengths are counted in characters, so multi-byte text never splits
/// inside a code point. Empty input yields no chunks.
pub fn split_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    debug_assert!(overlap < size, "overlap must be smaller than chunk size");

    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let stride = size - overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += stride;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_a_single_chunk() {
        let chunks = split_text("short text", CHUNK_SIZE, CHUNK_OVERLAP);
        assert_eq!(chunks, vec!["short text"]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_text("", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
    }

    #[test]
    fn test_chunks_respect_size_and_overlap() {
        let text: String = std::iter::repeat("abcdefghij").take(200).collect(); // 2000 chars
        let chunks = split_text(&text, CHUNK_SIZE, CHUNK_OVERLAP);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= CHUNK_SIZE);
        }

        // Each chunk's trailing overlap reappears at the head of the next.
        for pair in chunks.windows(2) {
            let tail: String = pair[0]
                .chars()
                .skip(CHUNK_SIZE - CHUNK_OVERLAP)
                .collect();
            let head: String = pair[1].chars().take(CHUNK_OVERLAP).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_chunk_count_is_non_decreasing_in_input_size() {
        let mut previous = 0;
        for length in [0, 500, 1000, 1500, 3000, 10_000] {
            let text = "x".repeat(length);
            let count = split_text(&text, CHUNK_SIZE, CHUNK_OVERLAP).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_multibyte_text_never_splits_code_points() {
        let text = "é".repeat(1500);
        let chunks = split_text(&text, CHUNK_SIZE, CHUNK_OVERLAP);
        assert_eq!(chunks[0].chars().count(), CHUNK_SIZE);
        assert!(chunks.concat().chars().all(|c| c == 'é'));
    }
}
