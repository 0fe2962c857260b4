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

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const MINUS: &str = "-";
pub const UNDERLINE: &str = "_";
pub const SPACE: &str = " ";
pub const SPECIALS: &str = "!\"#$%&'*+,./:;=?@\\^`";
pub const BRACKETS: &str = "[]{}()<>";

/// Character classes to draw from. Subsets are disjoint, so the alphabet
/// never contains duplicates regardless of which flags are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClassPolicy {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub minus: bool,
    pub underline: bool,
    pub space: bool,
    pub specials: bool,
    pub brackets: bool,
}

impl CharacterClassPolicy {
    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            minus: false,
            underline: false,
            space: false,
            specials: false,
            brackets: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            minus: true,
            underline: true,
            space: true,
            specials: true,
            brackets: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase
            || self.lowercase
            || self.digits
            || self.minus
            || self.underline
            || self.space
            || self.specials
            || self.brackets)
    }

    pub fn alphabet(&self) -> String {
        build_alphabet(self)
    }

    fn selected(&self) -> [(bool, &'static str); 8] {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.minus, MINUS),
            (self.underline, UNDERLINE),
            (self.space, SPACE),
            (self.specials, SPECIALS),
            (self.brackets, BRACKETS),
        ]
    }
}

/// Concatenates the selected subsets in declaration order.
pub fn build_alphabet(policy: &CharacterClassPolicy) -> String {
    policy
        .selected()
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, subset)| subset)
        .collect()
}
