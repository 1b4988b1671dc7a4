//! CLI tool for card brand identification.
//!
//! # Usage
//!
//! ```bash
//! # Brand, checksum and formatting in one go
//! cardid info 4532015112830366
//!
//! # One number per line on stdin, JSON out
//! cat numbers.txt | cardid info --output json
//!
//! # Brand only
//! cardid identify "3782 822463 10005"
//!
//! # Luhn check (exit status 1 on failure)
//! cardid luhn 4532015112830366
//!
//! # Print the pattern table
//! cardid patterns
//!
//! # Generate test card numbers
//! cardid generate --brand elo --count 5
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=card_identifier=trace`).

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use card_identifier::stream::CardInfoExt;
use card_identifier::{
    card_patterns, format, generate, identify_card, other_card_pattern, sanitize, validate_card,
    CardBrand, CardInfo,
};

#[derive(Parser)]
#[command(name = "cardid")]
#[command(author, version, about = "Card brand identification and Luhn validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify, validate and format card numbers
    Info {
        /// Card numbers (spaces and dashes allowed); reads stdin lines if omitted
        card_numbers: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// Reject input containing anything but digits, spaces and dashes
        #[arg(long)]
        strict: bool,
    },

    /// Identify the brand of a card number
    Identify {
        /// Card number (spaces and dashes allowed)
        card_number: String,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Format a card number in blocks of four
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Print the brand pattern table in matching order
    Patterns,

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand key to generate
        #[arg(short, long, default_value = "visa")]
        brand: CardBrand,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output formatted (with spaces)
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            card_numbers,
            output,
            strict,
        } => cmd_info(card_numbers, output, strict),
        Commands::Identify { card_number } => Ok(cmd_identify(&card_number)),
        Commands::Luhn { card_number } => Ok(cmd_luhn(&card_number)),
        Commands::Format {
            card_number,
            separator,
        } => {
            let clean = sanitize::sanitize(&card_number);
            println!("{}", format::format_with_separator(&clean, &separator));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Patterns => {
            cmd_patterns();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            brand,
            count,
            formatted,
        } => {
            for card in generate::generate_cards(brand, count) {
                if formatted {
                    println!("{}", format::format_card_number(&card));
                } else {
                    println!("{}", card);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_info(card_numbers: Vec<String>, output: OutputFormat, strict: bool) -> Result<ExitCode> {
    let inputs = if card_numbers.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read card numbers from stdin")?
    } else {
        card_numbers
    };

    if strict {
        for (line, input) in inputs.iter().enumerate() {
            sanitize::require_numeric(input)
                .with_context(|| format!("input {} rejected", line + 1))?;
        }
    }

    let mut all_valid = true;
    for info in inputs.iter().card_info() {
        all_valid &= info.is_valid();
        print_info(&info, output)?;
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_info(info: &CardInfo, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            println!("Number: {}", info.card_number());
            println!("Brand: {}", info.brand());
            println!("Valid: {}", if info.is_valid() { "yes" } else { "no" });
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(info)?);
        }
    }
    Ok(())
}

fn cmd_identify(card_number: &str) -> ExitCode {
    match identify_card(card_number) {
        Some(brand) => {
            println!("Detected Brand: {}", brand);
            ExitCode::SUCCESS
        }
        None => {
            println!("Detected Brand: Unknown");
            ExitCode::FAILURE
        }
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if validate_card(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_patterns() {
    for (i, pattern) in card_patterns().iter().enumerate() {
        println!("{:>2}. {:<10} {}", i + 1, pattern.brand(), pattern.as_str());
    }
    println!("    {:<10} {}", "Other", other_card_pattern().as_str());
}
