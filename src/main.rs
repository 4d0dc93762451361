//! Pass-Gen CLI
//!
//! Command-line interface for generating passwords and passphrases.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use pass_gen::{
    entropy, passphrase, FileConfig, GeneratorConfig, MemorableOptions, PasswordEngine,
    PronounceableOptions, Strength,
};

#[derive(Parser)]
#[command(name = "passgen", version, about = "Secure password and passphrase generator")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random character passwords.
    Random {
        /// Password length in characters.
        #[arg(long)]
        length: Option<usize>,
        /// Disable uppercase letters.
        #[arg(long)]
        no_uppercase: bool,
        /// Disable lowercase letters.
        #[arg(long)]
        no_lowercase: bool,
        /// Disable digits.
        #[arg(long)]
        no_digits: bool,
        /// Disable special characters.
        #[arg(long)]
        no_special: bool,
        /// Additional characters to include in the pool.
        #[arg(long)]
        custom: Option<String>,
        /// Characters to exclude from the pool.
        #[arg(long)]
        exclude: Option<String>,
        /// Number of passwords to generate.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Generate a memorable word-based passphrase.
    Memorable {
        /// Number of words.
        #[arg(long)]
        words: Option<usize>,
        /// Separator between segments.
        #[arg(long)]
        separator: Option<String>,
        /// Do not capitalize words.
        #[arg(long)]
        no_capitalize: bool,
        /// Do not append two-digit numbers.
        #[arg(long)]
        no_numbers: bool,
    },
    /// Generate a pronounceable syllable password.
    Pronounceable {
        /// Number of syllables.
        #[arg(long, default_value_t = 3)]
        syllables: usize,
        /// Consonant/vowel pattern per syllable.
        #[arg(long, default_value = "cvcv")]
        pattern: String,
        /// Separator between syllables.
        #[arg(long, default_value = "-")]
        separator: String,
        /// Capitalize each syllable.
        #[arg(long)]
        capitalize: bool,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let command = cli.command.unwrap_or(Command::Random {
        length: None,
        no_uppercase: false,
        no_lowercase: false,
        no_digits: false,
        no_special: false,
        custom: None,
        exclude: None,
        count: 1,
    });

    match command {
        Command::Random {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_special,
            custom,
            exclude,
            count,
        } => {
            let mut config: GeneratorConfig = file.generator;
            if let Some(length) = length {
                config.length = length;
            }
            config.include_uppercase &= !no_uppercase;
            config.include_lowercase &= !no_lowercase;
            config.include_digits &= !no_digits;
            config.include_special &= !no_special;
            if custom.is_some() {
                config.custom_chars = custom;
            }
            if exclude.is_some() {
                config.exclude_chars = exclude;
            }

            let engine = PasswordEngine::new(config)?;
            report_strength(engine.entropy_report().bits);

            for password in engine.generate_batch(count)? {
                println!("{password}");
            }
        }
        Command::Memorable {
            words,
            separator,
            no_capitalize,
            no_numbers,
        } => {
            let mut options: MemorableOptions = file.memorable;
            if let Some(words) = words {
                options.word_count = words;
            }
            if let Some(separator) = separator {
                options.separator = separator;
            }
            options.capitalize_words &= !no_capitalize;
            options.add_numbers &= !no_numbers;

            report_strength(entropy::estimate_passphrase(options.word_count)?);

            let mut sampler = pass_gen::Sampler::new();
            println!("{}", passphrase::generate_memorable(&mut sampler, &options)?);
        }
        Command::Pronounceable {
            syllables,
            pattern,
            separator,
            capitalize,
        } => {
            let options = PronounceableOptions {
                syllable_count: syllables,
                pattern,
                separator,
                capitalize,
            };
            report_strength(syllables as f64 * passphrase::pattern_bits(&options.pattern));

            let mut sampler = pass_gen::Sampler::new();
            println!(
                "{}",
                passphrase::generate_pronounceable(&mut sampler, &options)?
            );
        }
    }

    Ok(())
}

fn report_strength(bits: f64) {
    let strength = Strength::classify(bits);
    info!(bits = format!("{bits:.1}"), %strength, "estimated entropy");
    if strength == Strength::Minimum {
        eprintln!("warning: estimated entropy {bits:.1} bits is below the 64-bit floor");
    }
}
