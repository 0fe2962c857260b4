// This file is part of Passwright.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

const SEED_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. A `bound` of 0 or 1 yields 0.
    fn next_uniform(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self, bound: usize) -> usize {
        (**self).next_uniform(bound)
    }
}

/// ChaCha20 keystream sampled with unbiased rejection.
///
/// Seeded from the operating system for real use, or from a fixed seed
/// when a reproducible stream is needed.
pub struct KeystreamSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamSource {
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let cipher = ChaCha20::new(seed.into(), &[0u8; 12].into());
        let mut source = Self {
            cipher,
            buffer: Zeroizing::new(vec![0u8; BUFFER_LEN]),
            pos: 0,
        };
        source.refill();
        source
    }

    pub fn from_os_entropy() -> Result<Self, rand_core::Error> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        OsRng.try_fill_bytes(&mut seed[..])?;
        Ok(Self::from_seed(&seed))
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > self.buffer.len() {
            self.refill();
        }

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }
}

impl RandomSource for KeystreamSource {
    fn next_uniform(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let bound = bound as u64;
        let rejection_threshold = u64::MAX - (u64::MAX % bound);

        loop {
            let random_u64 = self.next_u64();
            if random_u64 < rejection_threshold {
                return (random_u64 % bound) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_stream_deterministic() {
        let mut a = KeystreamSource::from_seed(&[42u8; 32]);
        let mut b = KeystreamSource::from_seed(&[42u8; 32]);

        let first: Vec<usize> = (0..64).map(|_| a.next_uniform(1000)).collect();
        let second: Vec<usize> = (0..64).map(|_| b.next_uniform(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = KeystreamSource::from_seed(&[1u8; 32]);
        let mut b = KeystreamSource::from_seed(&[2u8; 32]);

        let first: Vec<usize> = (0..32).map(|_| a.next_uniform(1 << 20)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.next_uniform(1 << 20)).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_values_within_bound() {
        let mut source = KeystreamSource::from_seed(&[7u8; 32]);

        for bound in [2usize, 3, 10, 20, 26, 95, 7776, 100_003] {
            for _ in 0..500 {
                let value = source.next_uniform(bound);
                assert!(value < bound, "{} out of range for bound {}", value, bound);
            }
        }
    }

    #[test]
    fn test_all_values_reachable() {
        let mut source = KeystreamSource::from_seed(&[42u8; 32]);
        let seen: HashSet<usize> = (0..2000).map(|_| source.next_uniform(10)).collect();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut source = KeystreamSource::from_seed(&[42u8; 32]);
        assert_eq!(source.next_uniform(0), 0);
        assert_eq!(source.next_uniform(1), 0);
    }

    #[test]
    fn test_stream_survives_refill() {
        let mut source = KeystreamSource::from_seed(&[9u8; 32]);
        let draws = BUFFER_LEN / 8 * 3;

        for _ in 0..draws {
            assert!(source.next_uniform(62) < 62);
        }
    }

    #[test]
    fn test_rejection_threshold_is_multiple_of_bound() {
        for bound in [3u64, 10, 20, 95, 7776] {
            let threshold = u64::MAX - (u64::MAX % bound);
            assert_eq!(threshold % bound, 0);
        }
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn draw<R: RandomSource>(mut source: R) -> usize {
            source.next_uniform(500)
        }

        let mut owned = KeystreamSource::from_seed(&[42u8; 32]);
        let mut borrowed = KeystreamSource::from_seed(&[42u8; 32]);

        let expected = owned.next_uniform(500);
        assert_eq!(draw(&mut borrowed), expected);
        assert_eq!(draw(&mut borrowed), owned.next_uniform(500));
    }

    #[test]
    fn test_os_entropy_seeding() {
        let mut source = KeystreamSource::from_os_entropy().unwrap();
        assert!(source.next_uniform(100) < 100);
    }
}
