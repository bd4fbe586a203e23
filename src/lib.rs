//! Implementation of a bloom filter over strings, hashed by a family
//! of seeded hash functions.
//!
//! # Basic Usage
//! ```toml
//! [dependencies]
//! sfbloom = "0.1.0"
//! ```
//!
//! A family of `k` hash functions is generated from distinct seeds
//! drawn out of a pool of primes, then handed to a filter of `n` bits:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sfbloom::{gen_primes, generate_family, BloomFilter};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let family = generate_family(4, &gen_primes(10_000), false, &mut rng).unwrap();
//! let mut filter = BloomFilter::new(1000, family).unwrap();
//! filter.insert("some words");
//! assert!(filter.test_membership("some words"));
//! ```
//!
//! Any type implementing [`HashFunction`], including plain closures, can
//! be placed in a [`HashFamily`].

#![cfg_attr(feature = "do-bench", feature(test))]

pub mod bloom;
pub mod command;
pub mod config;
pub mod djb2;
pub mod error;
pub mod hashing;
pub mod primes;
pub mod sfold;

pub use bloom::BloomFilter;
pub use command::{run_commands, run_file, run_interactive, Command, Mode};
pub use config::{FilterConfig, HasherKind};
pub use djb2::Djb2Hasher;
pub use error::{Error, Result};
pub use hashing::{generate_family, generate_family_with, sample_seeds, HashFamily, HashFunction};
pub use primes::{gen_primes, DEFAULT_PRIME_LIMIT, MAX_PRIME_LIMIT};
pub use sfold::SFoldHasher;
