//! Deterministic block colors.

use std::fmt;

use serde::{Serialize, Serializer};

/// A 24-bit RGB color rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockColor([u8; 3]);

impl BlockColor {
    /// Color for block `block_id` under `seed`.
    ///
    /// A pure function of its inputs, so both documents of a pair (and any
    /// worker thread) agree on the color of a block.
    pub fn for_block(seed: u64, block_id: usize) -> Self {
        let h = splitmix64(seed ^ block_id as u64);
        let [r, g, b, ..] = h.to_le_bytes();
        Self([r, g, b])
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for BlockColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One color per block id in `0..count`.
pub fn block_colors(seed: u64, count: usize) -> Vec<BlockColor> {
    (0..count).map(|id| BlockColor::for_block(seed, id)).collect()
}

#[inline]
pub(crate) fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_hex() {
        assert_eq!(BlockColor([0, 0x7f, 0xff]).to_string(), "#007fff");
        assert_eq!(
            serde_json::to_string(&BlockColor([1, 2, 3])).unwrap(),
            "\"#010203\""
        );
    }

    #[test]
    fn colors_are_stable_per_seed() {
        assert_eq!(block_colors(7, 16), block_colors(7, 16));
        assert_ne!(block_colors(7, 16), block_colors(8, 16));

        let colors = block_colors(0, 4);
        assert_eq!(colors[2], BlockColor::for_block(0, 2));
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn splitmix_known_value() {
        assert_eq!(splitmix64(0), 0xE220A8397B1DCDAF);
    }
}
