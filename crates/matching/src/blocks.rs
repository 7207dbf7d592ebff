//! Matching-block extraction.
//!
//! [`SequenceMatcher`] finds the greedy set of maximal common runs between two
//! token sequences: take the longest common contiguous run, then recurse on
//! the parts to its left and to its right. Ties between runs of equal length
//! go to the one starting earliest in A, then earliest in B, so the same
//! inputs always yield the same blocks.

use std::hash::Hash;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sequences at least this long in B are subject to the autojunk heuristic.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// `a[start_in_a..start_in_a + length] == b[start_in_b..start_in_b + length]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchingBlock {
    pub start_in_a: usize,
    pub start_in_b: usize,
    pub length: usize,
}

impl MatchingBlock {
    pub fn new(start_in_a: usize, start_in_b: usize, length: usize) -> Self {
        Self {
            start_in_a,
            start_in_b,
            length,
        }
    }

    pub fn end_in_a(&self) -> usize {
        self.start_in_a + self.length
    }

    pub fn end_in_b(&self) -> usize {
        self.start_in_b + self.length
    }
}

/// Longest-matching-block aligner over two sequences.
///
/// Construction indexes B once; every query afterwards reuses that index.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    b2j: FxHashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    /// Build a matcher, optionally dropping "popular" elements of B from the
    /// seeding index.
    ///
    /// With `autojunk` set and `b.len() >= 200`, every element occurring more
    /// than `b.len() / 100 + 1` times in B is never used to start a match. It
    /// can still extend a match found through its neighbours.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: FxHashMap<&'a T, Vec<usize>> = FxHashMap::default();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-length block at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best_i = alo;
        let mut best_j = blo;
        let mut best_len = 0;

        // j2len[j] = length of the match ending at a[i - 1], b[j].
        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        let mut next_j2len: FxHashMap<usize, usize> = FxHashMap::default();

        for i in alo..ahi {
            next_j2len.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next_j2len);
        }

        // Elements removed by autojunk can still glue onto a run.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < ahi
            && best_j + best_len < bhi
            && self.a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        MatchingBlock::new(best_i, best_j, best_len)
    }

    /// All matching blocks, ordered by `start_in_a`, adjacent runs merged.
    ///
    /// Unlike the classic API no zero-length terminator is appended.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.length == 0 {
                continue;
            }
            if alo < block.start_in_a && blo < block.start_in_b {
                queue.push((alo, block.start_in_a, blo, block.start_in_b));
            }
            if block.end_in_a() < ahi && block.end_in_b() < bhi {
                queue.push((block.end_in_a(), ahi, block.end_in_b(), bhi));
            }
            found.push(block);
        }
        found.sort_unstable();

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(found.len());
        for block in found {
            match merged.last_mut() {
                Some(last)
                    if last.end_in_a() == block.start_in_a && last.end_in_b() == block.start_in_b =>
                {
                    last.length += block.length;
                }
                _ => merged.push(block),
            }
        }
        merged
    }

    /// Total number of matched elements across all blocks.
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.length).sum()
    }

    /// `2 * M / T` in `[0, 1]`, where `M` is the matched length and `T` the
    /// combined length. Two empty sequences are identical (1.0).
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}

/// Matching blocks of at least `min_size` tokens (never shorter than one).
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T], min_size: usize) -> Vec<MatchingBlock> {
    matching_blocks_with(a, b, min_size, false)
}

/// [`matching_blocks`] with explicit control over the autojunk heuristic.
pub fn matching_blocks_with<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    min_size: usize,
    autojunk: bool,
) -> Vec<MatchingBlock> {
    let min_size = min_size.max(1);
    let mut blocks = SequenceMatcher::with_autojunk(a, b, autojunk).matching_blocks();
    blocks.retain(|block| block.length >= min_size);
    blocks
}
