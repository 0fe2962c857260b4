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

use std::time::{Duration, Instant};

use anyhow::Result;
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use passwright::{CharacterClassPolicy, EntropyModel, LengthRange, Strength, WordPolicy};
use zeroize::Zeroizing;

pub const MIN_SAFE_WORD_COUNT: usize = 4;
pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

pub enum OutputConfig {
    Characters {
        length: usize,
        policy: CharacterClassPolicy,
        charset_size: usize,
    },
    Words {
        policy: WordPolicy,
        wordlist_size: usize,
        length_range: LengthRange,
        model: EntropyModel,
        load_time: Duration,
    },
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn strength_style(strength: Strength, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }

    match strength {
        Strength::VeryWeak | Strength::Weak => Style::new().red(),
        Strength::Reasonable => Style::new().yellow(),
        Strength::Strong | Strength::VeryStrong => Style::new().green(),
    }
}

fn class_names(policy: &CharacterClassPolicy) -> String {
    let names: Vec<&str> = [
        (policy.uppercase, "upper"),
        (policy.lowercase, "lower"),
        (policy.digits, "digits"),
        (policy.minus, "minus"),
        (policy.underline, "underline"),
        (policy.space, "space"),
        (policy.specials, "specials"),
        (policy.brackets, "brackets"),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, name)| name)
    .collect();

    names.join(", ")
}

fn suffix_names(policy: &WordPolicy) -> String {
    match (policy.append_digit, policy.append_special) {
        (true, true) => "digit, special".to_string(),
        (true, false) => "digit".to_string(),
        (false, true) => "special".to_string(),
        (false, false) => "none".to_string(),
    }
}

pub fn show_progress<F, T>(
    unicode_support: bool,
    message: &'static str,
    f: F,
) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stderr();
    term.hide_cursor().ok();

    let pb = ProgressBar::new_spinner();

    if unicode_support {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠋"]),
        );
    } else {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("-\\|/-"),
        );
    }

    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

pub fn display_output(
    output: &Zeroizing<String>,
    config: &OutputConfig,
    entropy: u32,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("Out[0]:\n{}", &**output);
    } else {
        println!("Out[0]:\n{}\n", &**output);

        display_settings(config);
        display_stats(entropy, output.chars().count(), config, options);
    }
}

fn display_settings(config: &OutputConfig) {
    println!("Settings:");
    println!("  ├─ Keystream  ChaCha20 (256-bit, OS seeded)");
    println!("  ├─ Sampling   Unbiased rejection");

    match config {
        OutputConfig::Characters {
            length,
            policy,
            charset_size,
        } => {
            println!("  ├─ Classes    {}", class_names(policy));
            println!("  ├─ Charset    {} chars", charset_size);
            println!(
                "  └─ Output     {} {}",
                length,
                plural(*length, "char", "chars")
            );
        }
        OutputConfig::Words {
            policy,
            wordlist_size,
            length_range,
            model,
            ..
        } => {
            println!(
                "  ├─ Wordlist   {} {} ({}-{} chars)",
                wordlist_size,
                plural(*wordlist_size, "word", "words"),
                length_range.min,
                length_range.max
            );
            println!(
                "  ├─ Case       {}",
                if policy.camel_case { "capitalized" } else { "as listed" }
            );
            println!("  ├─ Suffixes   {}", suffix_names(policy));
            println!("  ├─ Estimate   {}", model.name());
            println!(
                "  └─ Output     {} {}",
                policy.word_count,
                plural(policy.word_count, "word", "words")
            );
        }
    }

    println!();
}

fn display_stats(entropy: u32, length: usize, config: &OutputConfig, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let strength = Strength::from_entropy(entropy);
    let entropy_style = strength_style(strength, options.color_support);
    let status_icon = if strength.is_weak() { check_warn } else { check_ok };

    let length_secure = match config {
        OutputConfig::Characters { length, .. } => *length >= MIN_SAFE_PASSWORD_LENGTH,
        OutputConfig::Words { policy, .. } => policy.word_count >= MIN_SAFE_WORD_COUNT,
    };

    let length_style = if options.color_support {
        if length_secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };

    let length_status = if length_secure { check_ok } else { check_warn };

    println!("Stats:");

    println!(
        "  ├─ Entropy    {} {} bits ({})",
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(entropy),
        entropy_style.apply_to(strength)
    );

    match config {
        OutputConfig::Characters { .. } => {
            println!(
                "  └─ Length     {} {} {}",
                length_style.apply_to(format!("[{}]", length_status)),
                length_style.apply_to(length),
                plural(length, "char", "chars")
            );
        }
        OutputConfig::Words {
            policy, load_time, ..
        } => {
            println!("  ├─ Length     {} {}", length, plural(length, "char", "chars"));
            println!(
                "  ├─ Words      {} {} {}",
                length_style.apply_to(format!("[{}]", length_status)),
                length_style.apply_to(policy.word_count),
                plural(policy.word_count, "word", "words")
            );
            println!("  └─ Load       {:.1}s", load_time.as_secs_f64());
        }
    }

    println!(
        "\n{} Strength: {}",
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(strength)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_class_names() {
        let policy = CharacterClassPolicy {
            uppercase: true,
            digits: true,
            brackets: true,
            ..CharacterClassPolicy::none()
        };
        assert_eq!(class_names(&policy), "upper, digits, brackets");
        assert_eq!(class_names(&CharacterClassPolicy::none()), "");
    }

    #[test]
    fn test_suffix_names() {
        let mut policy = WordPolicy::default();
        assert_eq!(suffix_names(&policy), "none");

        policy.append_digit = true;
        assert_eq!(suffix_names(&policy), "digit");

        policy.append_special = true;
        assert_eq!(suffix_names(&policy), "digit, special");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(7, "char", "chars"), "chars");
    }

    #[test]
    fn test_show_progress_passes_result_through() {
        let (value, _) = show_progress(false, "Working...", || Ok(42)).unwrap();
        assert_eq!(value, 42);

        let failed = show_progress(false, "Working...", || -> Result<u8> {
            anyhow::bail!("boom")
        });
        assert!(failed.is_err());
    }
}
