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

use zeroize::Zeroizing;

use crate::charset::{CharacterClassPolicy, DIGITS, SPECIALS, build_alphabet};
use crate::entropy::{EntropyModel, calculate_word_entropy};
use crate::error::{GeneratorError, GeneratorResult};
use crate::random::RandomSource;
use crate::wordlist::WordCorpus;

/// Composition rules for a word password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPolicy {
    pub word_count: usize,
    pub camel_case: bool,
    pub append_digit: bool,
    pub append_special: bool,
}

impl Default for WordPolicy {
    fn default() -> Self {
        Self {
            word_count: 4,
            camel_case: false,
            append_digit: false,
            append_special: false,
        }
    }
}

pub struct CharacterSetPasswordGenerator<R> {
    rng: R,
}

impl<R: RandomSource> CharacterSetPasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(
        &mut self,
        length: usize,
        policy: &CharacterClassPolicy,
    ) -> GeneratorResult<Zeroizing<String>> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength);
        }
        if policy.is_empty() {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        let alphabet = build_alphabet(policy);
        let alphabet = alphabet.as_bytes();

        let mut password = Zeroizing::new(String::with_capacity(length));
        for _ in 0..length {
            let index = self.rng.next_uniform(alphabet.len());
            password.push(char::from(alphabet[index]));
        }

        Ok(password)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Concatenates randomly drawn corpus words with no separator. Case changes
/// and per-word digit/symbol suffixes are the only visual word boundaries.
pub struct WordPasswordGenerator<R> {
    rng: R,
}

impl<R: RandomSource> WordPasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(
        &mut self,
        policy: &WordPolicy,
        corpus: &WordCorpus,
    ) -> GeneratorResult<Zeroizing<String>> {
        if policy.word_count == 0 {
            return Err(GeneratorError::InvalidWordCount);
        }
        if corpus.is_empty() {
            return Err(GeneratorError::EmptyCorpus);
        }

        let mut password = Zeroizing::new(String::with_capacity(word_capacity(policy, corpus)));

        for _ in 0..policy.word_count {
            let index = self.rng.next_uniform(corpus.len());
            let word = &corpus[index];

            if policy.camel_case {
                push_capitalized(&mut password, word);
            } else {
                password.push_str(word);
            }

            if policy.append_digit {
                password.push(self.pick(DIGITS));
            }
            if policy.append_special {
                password.push(self.pick(SPECIALS));
            }
        }

        Ok(password)
    }

    /// Legacy estimate for `policy` against `corpus`.
    pub fn entropy(&self, policy: &WordPolicy, corpus: &WordCorpus) -> u32 {
        calculate_word_entropy(policy, corpus.len())
    }

    pub fn entropy_with(
        &self,
        model: EntropyModel,
        policy: &WordPolicy,
        corpus: &WordCorpus,
    ) -> u32 {
        model.estimate(policy, corpus.len())
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    fn pick(&mut self, set: &str) -> char {
        let set = set.as_bytes();
        char::from(set[self.rng.next_uniform(set.len())])
    }
}

// Upper bound on output bytes, so the buffer never reallocates and leaves
// an unzeroed copy behind. Uppercasing the first char can add up to 4 bytes.
fn word_capacity(policy: &WordPolicy, corpus: &WordCorpus) -> usize {
    let per_word = corpus.max_word_len()
        + if policy.camel_case { 4 } else { 0 }
        + usize::from(policy.append_digit)
        + usize::from(policy.append_special);
    policy.word_count.saturating_mul(per_word)
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
