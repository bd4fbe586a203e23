//! Basic djb2 hashing, with the starting value used as a seed
use super::hashing::HashFunction;

const DJB2_START: u64 = 5381;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Djb2Hasher {
    start: u64,
}

impl Djb2Hasher {
    pub fn new(seed: u64) -> Djb2Hasher {
        Djb2Hasher { start: seed }
    }
}

impl Default for Djb2Hasher {
    fn default() -> Djb2Hasher {
        Djb2Hasher::new(DJB2_START)
    }
}

impl HashFunction for Djb2Hasher {
    #[inline]
    fn hash(&self, item: &str) -> u64 {
        let mut hash = self.start;
        for &b in item.as_bytes() {
            hash = (hash << 5).wrapping_add(hash).wrapping_add(b as u64); /* hash * 33 + c */
        }
        hash
    }
}
