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

mod ui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use passwright::{
    CharacterClassPolicy, EntropyModel, KeystreamSource, LengthRange, Strength, WordCorpus,
    WordPasswordGenerator, WordPolicy, estimate_character_entropy, generate_character_password,
};

#[derive(Parser)]
#[command(
    name = "passwright",
    version,
    author,
    about = "Random password and passphrase generator with entropy estimates"
)]
struct Cli {
    /// Print the generated password without the settings and stats report
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw characters from the selected classes
    Chars(CharsArgs),
    /// Concatenate words drawn from a word list
    Words(WordsArgs),
}

#[derive(Args)]
struct CharsArgs {
    #[arg(short = 'n', long, default_value_t = 20)]
    length: usize,

    /// A-Z
    #[arg(short, long)]
    uppercase: bool,

    /// a-z
    #[arg(short, long)]
    lowercase: bool,

    /// 0-9
    #[arg(short, long)]
    digits: bool,

    #[arg(long)]
    minus: bool,

    #[arg(long)]
    underline: bool,

    #[arg(long)]
    space: bool,

    /// !"#$%&'*+,./:;=?@\^`
    #[arg(short, long)]
    specials: bool,

    /// []{}()<>
    #[arg(short, long)]
    brackets: bool,
}

impl CharsArgs {
    fn policy(&self) -> CharacterClassPolicy {
        CharacterClassPolicy {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            minus: self.minus,
            underline: self.underline,
            space: self.space,
            specials: self.specials,
            brackets: self.brackets,
        }
    }
}

#[derive(Args)]
struct WordsArgs {
    #[arg(short = 'n', long = "words", default_value_t = 4)]
    word_count: usize,

    /// Capitalize the first letter of every word
    #[arg(short, long)]
    camel_case: bool,

    /// Append a random digit to every word
    #[arg(short, long)]
    digits: bool,

    /// Append a random special character to every word
    #[arg(short, long)]
    specials: bool,

    /// Word list, one word per line (Diceware index prefixes allowed)
    #[arg(short, long, env = "PASSWRIGHT_WORDLIST")]
    wordlist: PathBuf,

    #[arg(long, default_value_t = LengthRange::DEFAULT.min)]
    min_len: usize,

    #[arg(long, default_value_t = LengthRange::DEFAULT.max)]
    max_len: usize,

    #[arg(short, long, value_enum, default_value = "legacy")]
    entropy_model: ModelArg,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    Legacy,
    PerWord,
}

impl From<ModelArg> for EntropyModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Legacy => EntropyModel::Legacy,
            ModelArg::PerWord => EntropyModel::PerWord,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    match cli.command {
        Command::Chars(args) => run_chars(&args, &options),
        Command::Words(args) => run_words(&args, &options),
    }
}

fn run_chars(args: &CharsArgs, options: &ui::DisplayOptions) -> Result<()> {
    let policy = args.policy();
    log::debug!("Character policy: {:?}, length {}", policy, args.length);

    let password =
        generate_character_password(args.length, &policy).context("Failed to generate password")?;

    let charset_size = policy.alphabet().len();
    let entropy = estimate_character_entropy(args.length, charset_size);
    warn_if_weak(entropy);

    let config = ui::OutputConfig::Characters {
        length: args.length,
        policy,
        charset_size,
    };
    ui::display_output(&password, &config, entropy, options);

    Ok(())
}

fn run_words(args: &WordsArgs, options: &ui::DisplayOptions) -> Result<()> {
    if args.min_len > args.max_len {
        anyhow::bail!(
            "Minimum word length ({}) exceeds maximum ({})",
            args.min_len,
            args.max_len
        );
    }

    let range = LengthRange {
        min: args.min_len,
        max: args.max_len,
    };

    let (corpus, load_time) =
        ui::show_progress(options.unicode_support, "Loading word list...", || {
            let text = fs::read_to_string(&args.wordlist).with_context(|| {
                format!("Failed to read word list {}", args.wordlist.display())
            })?;
            Ok(WordCorpus::parse(&text, range))
        })?;
    log::debug!(
        "Loaded {} words from {} in {:.2?}",
        corpus.len(),
        args.wordlist.display(),
        load_time
    );

    let policy = WordPolicy {
        word_count: args.word_count,
        camel_case: args.camel_case,
        append_digit: args.digits,
        append_special: args.specials,
    };
    let model = EntropyModel::from(args.entropy_model);
    log::debug!("Word policy: {:?}, {} estimate", policy, model.name());

    let rng = KeystreamSource::from_os_entropy().context("Failed to seed random source")?;
    let mut generator = WordPasswordGenerator::new(rng);
    let password = generator
        .generate(&policy, &corpus)
        .context("Failed to generate password")?;

    let entropy = generator.entropy_with(model, &policy, &corpus);
    warn_if_weak(entropy);

    let config = ui::OutputConfig::Words {
        policy,
        wordlist_size: corpus.len(),
        length_range: range,
        model,
        load_time,
    };
    ui::display_output(&password, &config, entropy, options);

    Ok(())
}

fn warn_if_weak(entropy: u32) {
    let strength = Strength::from_entropy(entropy);
    if strength.is_weak() {
        log::warn!("Generated password is {} ({} bits)", strength, entropy);
    }
}
