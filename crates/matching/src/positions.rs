//! Positional reconciliation: where does each matching block start in a
//! document's rendered text?
//!
//! Two strategies exist (see [`LocateStrategy`]). Both obey the same
//! collision rule: when two blocks claim the same start offset, the longer
//! text wins, and on equal length the block that claimed it first stays.

use std::collections::BTreeMap;

use canonical::RenderedText;
use serde::Serialize;

use crate::blocks::MatchingBlock;
use crate::config::LocateStrategy;

/// Which side of a pair a document is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn start(&self, block: &MatchingBlock) -> usize {
        match self {
            Side::Left => block.start_in_a,
            Side::Right => block.start_in_b,
        }
    }
}

/// A block occurrence in rendered text: `text[offset..offset + len]`.
///
/// Offsets and lengths are byte offsets into the rendered string.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PositionedBlock {
    pub offset: usize,
    pub len: usize,
    pub block_id: usize,
}

impl PositionedBlock {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Rendered text of every block, taken from the left document.
///
/// Blocks are equal token runs, so this is also their text in the right
/// document.
pub fn block_texts(left: &RenderedText, blocks: &[MatchingBlock]) -> Vec<String> {
    blocks
        .iter()
        .map(|block| {
            left.join_range(block.start_in_a, block.length)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Every start offset of `needle` in `haystack`, overlapping matches included.
pub fn find_all(haystack: &str, needle: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    if needle.is_empty() {
        return offsets;
    }
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let offset = from + found;
        offsets.push(offset);
        // Step one character forward so overlapping occurrences are found.
        let step = haystack[offset..].chars().next().map_or(1, char::len_utf8);
        from = offset + step;
    }
    offsets
}

#[derive(Default)]
struct Claims {
    by_offset: BTreeMap<usize, (usize, usize)>,
}

impl Claims {
    fn claim(&mut self, offset: usize, len: usize, block_id: usize) {
        match self.by_offset.get_mut(&offset) {
            Some(existing) if existing.0 >= len => {}
            Some(existing) => *existing = (len, block_id),
            None => {
                self.by_offset.insert(offset, (len, block_id));
            }
        }
    }

    fn into_sorted(self) -> Vec<PositionedBlock> {
        self.by_offset
            .into_iter()
            .map(|(offset, (len, block_id))| PositionedBlock {
                offset,
                len,
                block_id,
            })
            .collect()
    }
}

/// Every literal occurrence of every block text in `text`, sorted by offset.
pub fn locate_literal(text: &str, texts: &[String]) -> Vec<PositionedBlock> {
    let mut claims = Claims::default();
    for (block_id, needle) in texts.iter().enumerate() {
        for offset in find_all(text, needle) {
            claims.claim(offset, needle.len(), block_id);
        }
    }
    claims.into_sorted()
}

/// One position per block, computed from its first token on `side`.
pub fn locate_token_aligned(
    rendered: &RenderedText,
    blocks: &[MatchingBlock],
    side: Side,
) -> Vec<PositionedBlock> {
    let mut claims = Claims::default();
    for (block_id, block) in blocks.iter().enumerate() {
        if let Some((start, end)) = rendered.range_offsets(side.start(block), block.length) {
            claims.claim(start, end - start, block_id);
        }
    }
    claims.into_sorted()
}

/// Position `blocks` in one document of the pair.
///
/// `texts` must come from [`block_texts`] for the same blocks.
pub fn locate_blocks(
    rendered: &RenderedText,
    blocks: &[MatchingBlock],
    texts: &[String],
    side: Side,
    strategy: LocateStrategy,
) -> Vec<PositionedBlock> {
    match strategy {
        LocateStrategy::Literal => locate_literal(rendered.as_str(), texts),
        LocateStrategy::TokenAligned => locate_token_aligned(rendered, blocks, side),
    }
}
