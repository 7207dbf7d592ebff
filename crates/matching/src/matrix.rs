//! The N×N comparison matrix.

use serde::Serialize;

use crate::pair::PairComparison;

/// Score stored on the diagonal. Never produced by a scorer.
pub const SELF_SENTINEL: f64 = -1.0;

/// Scores of every ordered document pair; `get(i, j)` is document `i`
/// compared against document `j`.
///
/// Storage does not assume symmetry: only the ratio scorer is symmetric.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonMatrix {
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// A matrix holding only the diagonal sentinels; off-diagonal cells
    /// start at 0.
    pub fn new(names: Vec<String>) -> Self {
        let n = names.len();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { SELF_SENTINEL } else { 0.0 })
                    .collect()
            })
            .collect();
        Self { names, rows }
    }

    pub fn is_sentinel(value: f64) -> bool {
        value == SELF_SENTINEL
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Row-major index of off-diagonal cell `(i, j)`, the diagonal skipped.
    pub fn pair_index(&self, i: usize, j: usize) -> Option<usize> {
        pair_index(self.len(), i, j)
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, score: f64) {
        if i != j {
            if let Some(cell) = self.rows.get_mut(i).and_then(|row| row.get_mut(j)) {
                *cell = score;
            }
        }
    }
}

/// Row-major index of off-diagonal cell `(i, j)` in an `n`×`n` matrix.
pub fn pair_index(n: usize, i: usize, j: usize) -> Option<usize> {
    if i >= n || j >= n || i == j {
        return None;
    }
    let col = if j < i { j } else { j - 1 };
    Some(i * (n - 1) + col)
}

/// Every off-diagonal `(index, i, j)`, `i` outer and `j` inner.
pub fn ordered_pairs(n: usize) -> Vec<(usize, usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                pairs.push((pairs.len(), i, j));
            }
        }
    }
    pairs
}

/// The result of comparing a set of documents.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonReport {
    /// Name of the scorer that filled the matrix.
    pub scorer: String,
    pub min_block_size: usize,
    pub matrix: ComparisonMatrix,
    /// One entry per ordered pair, sorted by `index`.
    pub pairs: Vec<PairComparison>,
}

impl ComparisonReport {
    pub fn pair(&self, i: usize, j: usize) -> Option<&PairComparison> {
        self.matrix
            .pair_index(i, j)
            .and_then(|index| self.pairs.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("doc{i}")).collect()
    }

    #[test]
    fn diagonal_is_sentinel() {
        let m = ComparisonMatrix::new(names(3));
        for i in 0..3 {
            assert_eq!(m.get(i, i), Some(SELF_SENTINEL));
            assert!(ComparisonMatrix::is_sentinel(m.get(i, i).unwrap()));
        }
        assert_eq!(m.get(0, 1), Some(0.0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn set_never_touches_diagonal() {
        let mut m = ComparisonMatrix::new(names(2));
        m.set(0, 0, 42.0);
        m.set(0, 1, 12.5);
        assert_eq!(m.get(0, 0), Some(SELF_SENTINEL));
        assert_eq!(m.get(0, 1), Some(12.5));
        assert_eq!(m.get(1, 0), Some(0.0));
    }

    #[test]
    fn pair_index_is_row_major_without_diagonal() {
        let pairs = ordered_pairs(3);
        assert_eq!(
            pairs,
            vec![(0, 0, 1), (1, 0, 2), (2, 1, 0), (3, 1, 2), (4, 2, 0), (5, 2, 1)]
        );
        for (index, i, j) in pairs {
            assert_eq!(pair_index(3, i, j), Some(index));
        }
        assert_eq!(pair_index(3, 1, 1), None);
        assert_eq!(pair_index(3, 0, 3), None);
    }

    #[test]
    fn no_pairs_for_small_inputs() {
        assert!(ordered_pairs(0).is_empty());
        assert!(ordered_pairs(1).is_empty());
    }

    #[test]
    fn serializes_names_and_rows() {
        let m = ComparisonMatrix::new(names(2));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["names"][1], "doc1");
        assert_eq!(json["rows"][0][0], -1.0);
    }
}
