//! Construction-time parameters for a filter.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::bloom::BloomFilter;
use crate::djb2::Djb2Hasher;
use crate::error::{Error, Result};
use crate::hashing::{generate_family_with, HashFunction};
use crate::primes::{gen_primes, DEFAULT_PRIME_LIMIT, MAX_PRIME_LIMIT};
use crate::sfold::SFoldHasher;

/// Which hash function variant to build the family from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HasherKind {
    /// Seeded four-byte folding hash.
    #[default]
    Sfold,
    /// djb2 with the seed as its starting value.
    Djb2,
}

impl HasherKind {
    /// Construct a single hasher of this kind.  `add_one` only affects
    /// sfold hashers.
    pub fn build(self, seed: u64, add_one: bool) -> Box<dyn HashFunction> {
        match self {
            HasherKind::Sfold => Box::new(SFoldHasher::new(seed, add_one)),
            HasherKind::Djb2 => Box::new(Djb2Hasher::new(seed)),
        }
    }
}

impl FromStr for HasherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<HasherKind> {
        match s {
            "sfold" => Ok(HasherKind::Sfold),
            "djb2" => Ok(HasherKind::Djb2),
            other => Err(Error::invalid(format!(
                "unknown hasher '{}', expected 'sfold' or 'djb2'", other))),
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HasherKind::Sfold => f.write_str("sfold"),
            HasherKind::Djb2 => f.write_str("djb2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Number of bits in the filter.
    pub size: usize,
    /// Number of hash functions.
    pub num_hashers: usize,
    pub hasher: HasherKind,
    /// Offset every sfold hash by one.
    pub add_one: bool,
    /// Seeds are drawn from the primes below this bound, which may be
    /// at most `MAX_PRIME_LIMIT`.
    pub prime_limit: u64,
    /// Seed for the random source that picks hash seeds.  `None` draws
    /// from OS entropy.
    pub rng_seed: Option<u64>,
}

impl FilterConfig {
    pub fn new(size: usize, num_hashers: usize) -> FilterConfig {
        FilterConfig {
            size: size,
            num_hashers: num_hashers,
            hasher: HasherKind::default(),
            add_one: false,
            prime_limit: DEFAULT_PRIME_LIMIT,
            rng_seed: None,
        }
    }

    pub fn with_hasher(mut self, hasher: HasherKind) -> FilterConfig {
        self.hasher = hasher;
        self
    }

    pub fn with_add_one(mut self, add_one: bool) -> FilterConfig {
        self.add_one = add_one;
        self
    }

    pub fn with_prime_limit(mut self, prime_limit: u64) -> FilterConfig {
        self.prime_limit = prime_limit;
        self
    }

    pub fn with_rng_seed(mut self, rng_seed: Option<u64>) -> FilterConfig {
        self.rng_seed = rng_seed;
        self
    }

    /// Check the parameters without building anything.
    pub fn validate(&self) -> Result<()> {
        self.seed_pool().map(|_| ())
    }

    fn seed_pool(&self) -> Result<Vec<u64>> {
        if self.size == 0 {
            return Err(Error::invalid("size must be a positive number of bits"));
        }
        if self.num_hashers == 0 {
            return Err(Error::invalid("number of hashers must be at least 1"));
        }
        if self.prime_limit > MAX_PRIME_LIMIT {
            return Err(Error::invalid(format!(
                "prime limit {} is above the maximum of {}",
                self.prime_limit, MAX_PRIME_LIMIT)));
        }
        let pool = gen_primes(self.prime_limit);
        if self.num_hashers > pool.len() {
            return Err(Error::invalid(format!(
                "{} hashers requested but there are only {} primes below {}",
                self.num_hashers, pool.len(), self.prime_limit)));
        }
        Ok(pool)
    }

    /// Build an empty filter with a freshly generated hash family.
    pub fn build_filter(&self) -> Result<BloomFilter> {
        let pool = self.seed_pool()?;
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(pool = pool.len(), hasher = %self.hasher, "generating hash family");
        let (kind, add_one) = (self.hasher, self.add_one);
        let family = generate_family_with(self.num_hashers, &pool, &mut rng,
                                          |seed| kind.build(seed, add_one))?;
        info!(size = self.size, num_hashers = self.num_hashers, "filter ready");
        BloomFilter::new(self.size, family)
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterConfig, HasherKind};
    use crate::error::Error;
    use crate::hashing::HashFunction;
    use crate::primes::MAX_PRIME_LIMIT;

    fn assert_invalid(config: FilterConfig) {
        match config.validate() {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(config.build_filter().is_err());
    }

    #[test]
    fn defaults() {
        let c = FilterConfig::new(100, 3);
        assert_eq!(c.hasher, HasherKind::Sfold);
        assert!(!c.add_one);
        assert_eq!(c.prime_limit, 10_000);
        assert_eq!(c.rng_seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn invalid_parameters() {
        assert_invalid(FilterConfig::new(0, 3));
        assert_invalid(FilterConfig::new(100, 0));
        // only 2, 3, 5, 7 below 10
        assert_invalid(FilterConfig::new(100, 5).with_prime_limit(10));
        assert!(FilterConfig::new(100, 4).with_prime_limit(10).validate().is_ok());
    }

    #[test]
    fn oversized_prime_limit_is_rejected() {
        assert_invalid(FilterConfig::new(100, 3).with_prime_limit(u64::max_value()));
        assert_invalid(FilterConfig::new(100, 3).with_prime_limit(MAX_PRIME_LIMIT + 1));
        assert!(FilterConfig::new(100, 3).with_prime_limit(MAX_PRIME_LIMIT).validate().is_ok());
    }

    #[test]
    fn build_hasher_of_each_kind() {
        assert_eq!(HasherKind::Sfold.build(2, false).hash("hell"), 1602);
        assert_eq!(HasherKind::Sfold.build(2, true).hash("hell"), 1603);
        // add_one does not apply to djb2
        assert_eq!(HasherKind::Djb2.build(5381, true).hash(""), 5381);
    }

    #[test]
    fn seeded_builds_agree() {
        let c = FilterConfig::new(512, 4).with_rng_seed(Some(99));
        let a = c.build_filter().unwrap();
        let b = c.build_filter().unwrap();
        for s in &["alpha", "bravo", "charlie-delta", ""] {
            assert_eq!(a.indices(s), b.indices(s));
        }
    }

    #[test]
    fn builds_requested_shape() {
        let f = FilterConfig::new(300, 6)
            .with_hasher(HasherKind::Djb2)
            .with_rng_seed(Some(1))
            .build_filter()
            .unwrap();
        assert_eq!(f.num_bits(), 300);
        assert_eq!(f.num_hashes(), 6);
        assert!(f.is_empty());
    }

    #[test]
    fn parse_kind() {
        assert_eq!("sfold".parse::<HasherKind>().unwrap(), HasherKind::Sfold);
        assert_eq!("djb2".parse::<HasherKind>().unwrap(), HasherKind::Djb2);
        assert!("md5".parse::<HasherKind>().is_err());
        assert_eq!(HasherKind::Djb2.to_string(), "djb2");
    }
}
