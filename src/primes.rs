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

/// Default upper bound for the seed pool.  Yields 1229 primes, far
/// more than any sensible number of hash functions.
pub const DEFAULT_PRIME_LIMIT: u64 = 10_000;

/// Largest seed pool bound accepted by `FilterConfig`.  The sieve needs
/// one bit per candidate, so this caps it at 2 MiB.
pub const MAX_PRIME_LIMIT: u64 = 1 << 24;

/// Return every prime `p` with `2 <= p < limit`, in ascending order,
/// using the Sieve of Eratosthenes.  Allocates one bit per number below
/// `limit`.
pub fn gen_primes(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }
    let n = limit as usize;
    let mut composite = BitVec::from_elem(n, false);
    let mut i = 2;
    while i * i < n {
        if !composite[i] {
            let mut j = i * i;
            while j < n {
                composite.set(j, true);
                j += i;
            }
        }
        i += 1;
    }
    (2..n).filter(|&p| !composite[p]).map(|p| p as u64).collect()
}

#[cfg(test)]
mod tests {
    use super::{gen_primes, DEFAULT_PRIME_LIMIT};

    #[test]
    fn small() {
        assert_eq!(gen_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(gen_primes(29), vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
        assert_eq!(gen_primes(3), vec![2]);
    }

    #[test]
    fn degenerate_limits() {
        assert!(gen_primes(0).is_empty());
        assert!(gen_primes(1).is_empty());
        assert!(gen_primes(2).is_empty());
    }

    #[test]
    fn includes_primes_above_sqrt() {
        let p = gen_primes(DEFAULT_PRIME_LIMIT);
        assert_eq!(p.len(), 1229);
        assert_eq!(p.last(), Some(&9973));
        assert!(p.windows(2).all(|w| w[0] < w[1]));
    }
}
