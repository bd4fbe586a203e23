// This program is free software; you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation; either version 2 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program; if not, write to the Free Software
// Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston, MA
// 02110-1301, USA.

//! Seeded string folding hash

use super::hashing::HashFunction;

const CHUNK: usize = 4;

/// Folds a string four bytes at a time.  Within each chunk the bytes
/// are weighted by successive powers of the seed (`1, seed, seed^2,
/// seed^3`) and the weighted bytes of every chunk are summed.
///
/// A trailing chunk of fewer than four bytes is ignored, so every
/// string shorter than four bytes hashes to the same base value.
/// Bytes are read unsigned and all arithmetic wraps.
///
/// # Example
///
/// ```rust
/// use sfbloom::{HashFunction, SFoldHasher};
///
/// let h = SFoldHasher::new(2, false);
/// assert_eq!(h.hash("abc"), 0);
/// assert_eq!(h.hash("abcd"), 97 + 98 * 2 + 99 * 4 + 100 * 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SFoldHasher {
    seed: u64,
    add_one: bool,
}

impl SFoldHasher {
    /// Create a hasher with the given seed.  With `add_one` set every
    /// hash is offset by one, so short strings hash to 1 rather than 0.
    pub fn new(seed: u64, add_one: bool) -> SFoldHasher {
        SFoldHasher {
            seed: seed,
            add_one: add_one,
        }
    }
}

impl HashFunction for SFoldHasher {
    #[inline]
    fn hash(&self, item: &str) -> u64 {
        let mut sum = 0u64;
        for chunk in item.as_bytes().chunks_exact(CHUNK) {
            let mut mult = 1u64;
            for &b in chunk {
                sum = sum.wrapping_add((b as u64).wrapping_mul(mult));
                mult = mult.wrapping_mul(self.seed);
            }
        }
        if self.add_one {
            sum.wrapping_add(1)
        } else {
            sum
        }
    }
}
