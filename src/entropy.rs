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

use std::fmt;

use crate::charset::{DIGITS, SPECIALS};
use crate::generator::WordPolicy;

pub const VERY_WEAK_BELOW: u32 = 28;
pub const WEAK_BELOW: u32 = 36;
pub const REASONABLE_BELOW: u32 = 60;
pub const STRONG_BELOW: u32 = 128;

/// How a word password's strength is estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropyModel {
    /// `log2((corpus * 10^n * |specials|^n)^n)` for `n` words. The per-word
    /// suffix factors scale with the word count and the product is raised
    /// to the word count again, so this overstates strength. Kept so
    /// reported figures stay comparable with earlier releases.
    #[default]
    Legacy,
    /// `n * log2(corpus * 10 * |specials|)`, with each enabled suffix counted
    /// once per word.
    PerWord,
}

impl EntropyModel {
    pub fn estimate(&self, policy: &WordPolicy, corpus_size: usize) -> u32 {
        match self {
            EntropyModel::Legacy => calculate_word_entropy(policy, corpus_size),
            EntropyModel::PerWord => per_word_entropy(policy, corpus_size),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntropyModel::Legacy => "legacy",
            EntropyModel::PerWord => "per-word",
        }
    }
}

/// Legacy word-password estimate, evaluated in log space so large word
/// counts cannot overflow. `camel_case` does not contribute.
pub fn calculate_word_entropy(policy: &WordPolicy, corpus_size: usize) -> u32 {
    if corpus_size == 0 || policy.word_count == 0 {
        return 0;
    }

    let words = policy.word_count as f64;
    let mut log_permutations = (corpus_size as f64).log2();

    if policy.append_digit {
        log_permutations += words * (DIGITS.len() as f64).log2();
    }
    if policy.append_special {
        log_permutations += words * (SPECIALS.len() as f64).log2();
    }

    round_bits(words * log_permutations)
}

pub fn per_word_entropy(policy: &WordPolicy, corpus_size: usize) -> u32 {
    if corpus_size == 0 || policy.word_count == 0 {
        return 0;
    }

    let mut per_word = (corpus_size as f64).log2();

    if policy.append_digit {
        per_word += (DIGITS.len() as f64).log2();
    }
    if policy.append_special {
        per_word += (SPECIALS.len() as f64).log2();
    }

    round_bits(policy.word_count as f64 * per_word)
}

pub fn character_entropy(length: usize, alphabet_size: usize) -> u32 {
    if length == 0 || alphabet_size == 0 {
        return 0;
    }

    round_bits(length as f64 * (alphabet_size as f64).log2())
}

// Float-to-int casts saturate, which is what we want for absurd inputs.
fn round_bits(bits: f64) -> u32 {
    bits.round() as u32
}

/// Qualitative label for an entropy figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_entropy(bits: u32) -> Self {
        if bits < VERY_WEAK_BELOW {
            Strength::VeryWeak
        } else if bits < WEAK_BELOW {
            Strength::Weak
        } else if bits < REASONABLE_BELOW {
            Strength::Reasonable
        } else if bits < STRONG_BELOW {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Reasonable => "Reasonable",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    pub fn is_weak(&self) -> bool {
        *self <= Strength::Weak
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(word_count: usize, digits: bool, specials: bool) -> WordPolicy {
        WordPolicy {
            word_count,
            camel_case: false,
            append_digit: digits,
            append_special: specials,
        }
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(calculate_word_entropy(&policy(2, false, false), 1000), 20);
        assert_eq!(calculate_word_entropy(&policy(4, false, false), 7776), 52);
    }

    #[test]
    fn test_legacy_digit_scaling() {
        // log2((1000 * 10^2)^2) = 33.2
        assert_eq!(calculate_word_entropy(&policy(2, true, false), 1000), 33);
    }

    #[test]
    fn test_legacy_digits_and_specials() {
        // log2((7776 * 10^3 * 20^3)^3) = 107.6
        assert_eq!(calculate_word_entropy(&policy(3, true, true), 7776), 108);
        assert_eq!(calculate_word_entropy(&policy(3, false, true), 2), 42);
    }

    #[test]
    fn test_camel_case_ignored() {
        let plain = policy(3, true, false);
        let camel = WordPolicy {
            camel_case: true,
            ..plain
        };
        assert_eq!(
            calculate_word_entropy(&plain, 5000),
            calculate_word_entropy(&camel, 5000)
        );
        assert_eq!(per_word_entropy(&plain, 5000), per_word_entropy(&camel, 5000));
    }

    #[test]
    fn test_per_word_model() {
        assert_eq!(per_word_entropy(&policy(2, true, false), 1000), 27);
        assert_eq!(per_word_entropy(&policy(3, true, true), 7776), 62);
        assert_eq!(per_word_entropy(&policy(3, false, true), 2), 16);
    }

    #[test]
    fn test_models_agree_without_suffixes() {
        let plain = policy(4, false, false);
        assert_eq!(
            EntropyModel::Legacy.estimate(&plain, 7776),
            EntropyModel::PerWord.estimate(&plain, 7776)
        );
        assert_eq!(EntropyModel::default(), EntropyModel::Legacy);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(calculate_word_entropy(&policy(3, true, true), 0), 0);
        assert_eq!(calculate_word_entropy(&policy(0, true, true), 1000), 0);
        assert_eq!(calculate_word_entropy(&policy(5, false, false), 1), 0);
        assert_eq!(per_word_entropy(&policy(0, false, false), 1000), 0);
    }

    #[test]
    fn test_legacy_saturates() {
        let huge = policy(1_000_000, true, true);
        assert_eq!(calculate_word_entropy(&huge, 100_000), u32::MAX);
    }

    #[test]
    fn test_character_entropy() {
        assert_eq!(character_entropy(20, 62), 119);
        assert_eq!(character_entropy(16, 95), 105);
        assert_eq!(character_entropy(1, 2), 1);
        assert_eq!(character_entropy(0, 62), 0);
        assert_eq!(character_entropy(10, 0), 0);
        assert_eq!(character_entropy(10, 1), 0);
    }

    #[test]
    fn test_strength_bands() {
        assert_eq!(Strength::from_entropy(0), Strength::VeryWeak);
        assert_eq!(Strength::from_entropy(27), Strength::VeryWeak);
        assert_eq!(Strength::from_entropy(28), Strength::Weak);
        assert_eq!(Strength::from_entropy(35), Strength::Weak);
        assert_eq!(Strength::from_entropy(36), Strength::Reasonable);
        assert_eq!(Strength::from_entropy(59), Strength::Reasonable);
        assert_eq!(Strength::from_entropy(60), Strength::Strong);
        assert_eq!(Strength::from_entropy(127), Strength::Strong);
        assert_eq!(Strength::from_entropy(128), Strength::VeryStrong);
        assert_eq!(Strength::from_entropy(u32::MAX), Strength::VeryStrong);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(Strength::from_entropy(27).label(), "Very Weak");
        assert_eq!(Strength::from_entropy(28).label(), "Weak");
        assert_eq!(Strength::from_entropy(59).label(), "Reasonable");
        assert_eq!(Strength::from_entropy(127).label(), "Strong");
        assert_eq!(Strength::from_entropy(128).to_string(), "Very Strong");
    }

    #[test]
    fn test_is_weak() {
        assert!(Strength::VeryWeak.is_weak());
        assert!(Strength::Weak.is_weak());
        assert!(!Strength::Reasonable.is_weak());
        assert!(!Strength::VeryStrong.is_weak());
    }
}
