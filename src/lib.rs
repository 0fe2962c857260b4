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

pub mod charset;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod random;
pub mod wordlist;

pub use charset::{CharacterClassPolicy, build_alphabet};
pub use entropy::{
    EntropyModel, Strength, calculate_word_entropy, character_entropy, per_word_entropy,
};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{CharacterSetPasswordGenerator, WordPasswordGenerator, WordPolicy};
pub use random::{KeystreamSource, RandomSource};
pub use wordlist::{LengthRange, WordCorpus};

use zeroize::Zeroizing;

/// Generates a character-class password from a freshly seeded OS source.
pub fn generate_character_password(
    length: usize,
    policy: &CharacterClassPolicy,
) -> GeneratorResult<Zeroizing<String>> {
    let rng = KeystreamSource::from_os_entropy()?;
    CharacterSetPasswordGenerator::new(rng).generate(length, policy)
}

/// Generates a word password from a freshly seeded OS source.
pub fn generate_word_password(
    policy: &WordPolicy,
    corpus: &WordCorpus,
) -> GeneratorResult<Zeroizing<String>> {
    let rng = KeystreamSource::from_os_entropy()?;
    WordPasswordGenerator::new(rng).generate(policy, corpus)
}

pub fn estimate_word_entropy(policy: &WordPolicy, corpus_size: usize) -> u32 {
    calculate_word_entropy(policy, corpus_size)
}

pub fn estimate_character_entropy(length: usize, alphabet_size: usize) -> u32 {
    character_entropy(length, alphabet_size)
}
