//! Pluggable string hashing and hash family generation.

use std::fmt;
use std::slice;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::HasherKind;
use crate::error::{Error, Result};
use crate::sfold::SFoldHasher;

/// A hash function over strings.  Implementations return the raw
/// hash value; reducing it to a bit index is the filter's job.
///
/// Implementations must be deterministic and must not change after
/// construction, otherwise items inserted into a filter can no longer
/// be found.
pub trait HashFunction {
    fn hash(&self, item: &str) -> u64;
}

impl<F> HashFunction for F
    where F: Fn(&str) -> u64
{
    fn hash(&self, item: &str) -> u64 {
        self(item)
    }
}

/// An ordered set of hash functions used together by one filter.  The
/// family owns its functions; two filters never share one.
pub struct HashFamily {
    hashers: Vec<Box<dyn HashFunction>>,
}

impl HashFamily {
    pub fn new(hashers: Vec<Box<dyn HashFunction>>) -> HashFamily {
        HashFamily { hashers: hashers }
    }

    /// Build a family of `kind` hashers using exactly the given seeds,
    /// in order.  `add_one` only affects sfold hashers.
    pub fn from_seeds(kind: HasherKind, seeds: &[u64], add_one: bool) -> HashFamily {
        HashFamily::new(seeds.iter().map(|&s| kind.build(s, add_one)).collect())
    }

    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    /// Iterate the hash values of `item`, one per function, in family
    /// order.  Values are computed lazily so callers can stop early.
    pub fn hashes<'a>(&'a self, item: &'a str) -> HashIter<'a> {
        HashIter {
            hashers: self.hashers.iter(),
            item: item,
        }
    }
}

impl fmt::Debug for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashFamily").field("len", &self.hashers.len()).finish()
    }
}

pub struct HashIter<'a> {
    hashers: slice::Iter<'a, Box<dyn HashFunction>>,
    item: &'a str,
}

impl<'a> Iterator for HashIter<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.hashers.next().map(|h| h.hash(self.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hashers.size_hint()
    }
}

/// Choose `k` distinct seeds out of `pool` without replacement.
///
/// The pool is shuffled with `rng` and the first `k` entries are taken,
/// in shuffled order.  Fails if `k` is zero or larger than the pool.
pub fn sample_seeds<R>(k: usize, pool: &[u64], rng: &mut R) -> Result<Vec<u64>>
    where R: Rng + ?Sized
{
    if k == 0 {
        return Err(Error::invalid("number of hash functions must be at least 1"));
    }
    if k > pool.len() {
        return Err(Error::invalid(format!(
            "requested {} hash functions but the seed pool only has {} entries",
            k, pool.len())));
    }
    let mut seeds = pool.to_vec();
    seeds.shuffle(rng);
    seeds.truncate(k);
    Ok(seeds)
}

/// Generate a family of `k` hash functions, building each one from a
/// distinct seed of `pool` with `build`.
pub fn generate_family_with<R, F>(k: usize, pool: &[u64], rng: &mut R, mut build: F) -> Result<HashFamily>
    where R: Rng + ?Sized,
          F: FnMut(u64) -> Box<dyn HashFunction>
{
    let seeds = sample_seeds(k, pool, rng)?;
    debug!(?seeds, "generated hash family seeds");
    Ok(HashFamily::new(seeds.into_iter().map(|s| build(s)).collect()))
}

/// Generate a family of `k` sfold hash functions with distinct seeds
/// drawn from `pool`.
pub fn generate_family<R>(k: usize, pool: &[u64], add_one: bool, rng: &mut R) -> Result<HashFamily>
    where R: Rng + ?Sized
{
    generate_family_with(k, pool, rng, |seed| {
        Box::new(SFoldHasher::new(seed, add_one)) as Box<dyn HashFunction>
    })
}
