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

use thiserror::Error;

pub type GeneratorResult<T, E = GeneratorError> = Result<T, E>;

/// Reasons a generation request is refused.
///
/// Every validation variant is raised before the random source is touched,
/// so a failed call never consumes randomness or yields partial output.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be greater than zero")]
    InvalidLength,

    #[error("Word count must be greater than zero")]
    InvalidWordCount,

    #[error("At least one character class must be selected")]
    NoCharacterClassSelected,

    #[error("Word list is empty")]
    EmptyCorpus,

    #[error("Failed to seed random source: {0}")]
    Entropy(#[from] rand_core::Error),
}
