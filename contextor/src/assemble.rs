//! Corpus → context string.
//!
//! Blocks are joined with `\n`, cut into consecutive `chunk_size`-character
//! slices and rejoined with [`CHUNK_DELIMITER`]. The whole corpus is always
//! included; nothing is ranked or dropped.

/// Separator inserted between consecutive chunks.
pub const CHUNK_DELIMITER: &str = "\n---\n";

/// Splits `text` into consecutive, non-overlapping slices of `chunk_size`
/// characters (the last one may be shorter). Boundaries fall on `char`
/// boundaries, so multi-byte text is never cut mid-character.
///
/// A `chunk_size` of 0 is treated as 1. Empty input yields no chunks.
///
/// # Example
/// ```
/// # use contextor::assemble::split_chunks;
/// assert_eq!(split_chunks("abcde", 2), vec!["ab", "cd", "e"]);
/// ```
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<&str> {
    let size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(text.len() / size + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Builds the context string sent to the provider. Deterministic for the
/// same blocks and chunk size; an empty corpus gives an empty string.
pub fn assemble<S: AsRef<str>>(blocks: &[S], chunk_size: usize) -> String {
    let joined = blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    split_chunks(&joined, chunk_size).join(CHUNK_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_rejoin_to_original() {
        let text = "Prostate cancer\nStage 1: confined to the prostate.\nPSA test";
        for k in [1, 2, 3, 7, 16, text.len(), text.len() + 10] {
            let chunks = split_chunks(text, k);
            assert_eq!(chunks.concat(), text, "k = {k}");
            assert!(chunks.iter().all(|c| c.chars().count() <= k));
            assert!(chunks[..chunks.len() - 1].iter().all(|c| c.chars().count() == k));
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(split_chunks("māori ōra", 3), vec!["māo", "ri ", "ōra"]);
        assert_eq!(split_chunks("āēīōū", 2), vec!["āē", "īō", "ū"]);
    }

    #[test]
    fn assembles_blocks_with_delimiters() {
        let ctx = assemble(&["ab", "c"], 2);
        assert_eq!(ctx, "ab\n---\n\nc");
        assert_eq!(assemble(&["hello"], 2000), "hello");
    }

    #[test]
    fn empty_corpus_gives_empty_context() {
        let none: [&str; 0] = [];
        assert_eq!(assemble(&none, 2000), "");
        assert!(split_chunks("", 5).is_empty());
    }

    #[test]
    fn zero_chunk_size_behaves_like_one() {
        assert_eq!(assemble(&["abc"], 0), "a\n---\nb\n---\nc");
    }
}
