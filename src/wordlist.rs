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

use std::collections::HashSet;
use std::ops::Index;

use unicode_normalization::UnicodeNormalization;

/// Inclusive bounds on word length, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const DEFAULT: Self = Self { min: 4, max: 8 };

    pub fn contains(&self, word: &str) -> bool {
        let count = word.chars().count();
        count >= self.min && count <= self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Read-only list of candidate words.
///
/// Built once by the caller and lent to generators by reference; nothing
/// in the generator path mutates or caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Wraps words exactly as given. Callers are expected to have already
    /// filtered and deduplicated them; use [`WordCorpus::parse`] otherwise.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a corpus from word-list text.
    ///
    /// Accepts one word per line, either bare or prefixed with a Diceware
    /// index (`11111\tabacus`). Words are trimmed and NFC-normalized, kept
    /// only when their length falls in `range`, and deduplicated keeping the
    /// first occurrence.
    pub fn parse(text: &str, range: LengthRange) -> Self {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut out_of_range = 0usize;
        let mut duplicates = 0usize;

        for (line_no, line) in text.lines().enumerate() {
            let Some(word) = extract_word(line) else {
                if !line.trim().is_empty() {
                    log::trace!("Skipping malformed word list line {}", line_no + 1);
                }
                continue;
            };

            let word: String = word.nfc().collect();

            if !range.contains(&word) {
                out_of_range += 1;
                continue;
            }

            if !seen.insert(word.clone()) {
                duplicates += 1;
                continue;
            }

            words.push(word);
        }

        log::debug!(
            "Parsed word list: {} kept, {} outside {}..={} chars, {} duplicates",
            words.len(),
            out_of_range,
            range.min,
            range.max,
            duplicates
        );

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Length in bytes of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

impl Index<usize> for WordCorpus {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

fn extract_word(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let word = match line.split_once('\t').or_else(|| line.split_once(' ')) {
        Some((index, word)) if index.chars().all(|c| c.is_ascii_digit()) => word.trim(),
        Some(_) => return None,
        // A lone Diceware index with its word missing.
        None if line.chars().all(|c| c.is_ascii_digit()) => return None,
        None => line,
    };

    if word.is_empty() || word.chars().any(char::is_whitespace) {
        None
    } else {
        Some(word)
    }
}
