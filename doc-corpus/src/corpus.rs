use std::sync::Arc;

/// Extracted text of every successfully loaded source, in load order.
///
/// Built once at startup and never mutated; clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    blocks: Arc<[String]>,
}

impl Corpus {
    pub fn new(blocks: Vec<String>) -> Self {
        Self {
            blocks: blocks.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total size in characters (not bytes) across all blocks.
    pub fn total_chars(&self) -> usize {
        self.blocks.iter().map(|b| b.chars().count()).sum()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_blocks() {
        let c = Corpus::new(vec!["Prostate".into(), "café".into()]);
        let d = c.clone();
        assert!(std::ptr::eq(c.blocks().as_ptr(), d.blocks().as_ptr()));
        assert_eq!(d.len(), 2);
        assert_eq!(d.total_chars(), 12);
        assert!(Corpus::default().is_empty());
    }
}
