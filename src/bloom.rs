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

use bit_vec::BitVec;
use tracing::{debug, trace};

use super::error::{Error, Result};
use super::hashing::HashFamily;

/// A standard BloomFilter over strings.  If an item is inserted then
/// `test_membership` is guaranteed to return `true` for that item
/// until the filter is reset.  For items not inserted it will
/// probably return false.
///
/// The filter has a fixed number of bits and a fixed family of hash
/// functions.  Each item sets the bit `h(item) % num_bits` for every
/// function `h` in the family.  The false positive rate depends on the
/// number of bits, the number of hash functions and how many items
/// have been inserted; the filter does not track or bound it.
///
/// # Example Usage
///
/// ```rust
/// use sfbloom::{BloomFilter, HashFamily, HasherKind};
///
/// let family = HashFamily::from_seeds(HasherKind::Sfold, &[2, 3, 5, 7], false);
/// let mut filter = BloomFilter::new(1000, family).unwrap();
/// filter.insert("hello");
/// assert!(filter.test_membership("hello"));
/// assert!(!filter.test_membership("goodbye"));
/// filter.reset();
/// assert!(!filter.test_membership("hello"));
/// ```
#[derive(Debug)]
pub struct BloomFilter {
    bits: BitVec,
    hashers: HashFamily,
}

impl BloomFilter {
    /// Create a new BloomFilter with `num_bits` bits, all unset, that
    /// hashes items with `hashers`.
    ///
    /// Fails with `InvalidArgument` if `num_bits` is zero or the family
    /// is empty.
    pub fn new(num_bits: usize, hashers: HashFamily) -> Result<BloomFilter> {
        if num_bits == 0 {
            return Err(Error::invalid("bloom filter size must be at least 1 bit"));
        }
        if hashers.is_empty() {
            return Err(Error::invalid("bloom filter needs at least one hash function"));
        }
        debug!(num_bits, num_hashes = hashers.len(), "created bloom filter");
        Ok(BloomFilter {
            bits: BitVec::from_elem(num_bits, false),
            hashers: hashers,
        })
    }

    /// Get the number of bits this BloomFilter is using
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash functions this BloomFilter is using
    pub fn num_hashes(&self) -> usize {
        self.hashers.len()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|b| *b).count()
    }

    /// True if no bit is set, i.e. nothing has been inserted since
    /// construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// The bit indices `item` maps to, one per hash function, in
    /// family order.
    pub fn indices(&self, item: &str) -> Vec<usize> {
        self.index_iter(item).collect()
    }

    fn index_iter<'a>(&'a self, item: &'a str) -> impl Iterator<Item = usize> + 'a {
        let len = self.bits.len() as u64;
        self.hashers.hashes(item).map(move |h| (h % len) as usize)
    }

    /// Insert item into this BloomFilter.  Setting a bit that is
    /// already set is a no-op, so inserting the same item twice leaves
    /// the filter unchanged.
    pub fn insert(&mut self, item: &str) {
        let len = self.bits.len() as u64;
        for h in self.hashers.hashes(item) {
            let idx = (h % len) as usize;
            self.bits.set(idx, true);
        }
        trace!(item, "inserted");
    }

    /// Check if the item has been inserted into this bloom filter.
    /// This function can return false positives, but not false
    /// negatives.  Stops at the first unset bit.
    pub fn test_membership(&self, item: &str) -> bool {
        for idx in self.index_iter(item) {
            if !self.bits[idx] {
                trace!(item, idx, "not a member");
                return false;
            }
        }
        true
    }

    /// Remove all values from this BloomFilter.  The size and hash
    /// functions are kept.
    pub fn reset(&mut self) {
        self.bits.clear();
        trace!("reset");
    }
}
