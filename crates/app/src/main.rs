//! asciibin: command line front end for the 7-bit text <-> binary codec.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use asciibin_core::{
    binary_to_text, is_valid_binary_string, text_to_binary, LookupTable, CODE_WIDTH,
};
use clap::Parser;

mod config;
mod demo;
mod input_gen;

use config::{Cli, Command, Config, InputArgs};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();

    if config.print_config {
        config.print();
    }

    log::debug!("resolved configuration: {config:?}");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            demo::run();
            Ok(ExitCode::SUCCESS)
        }
        Command::Encode { input, .. } => encode(&input, config.group),
        Command::Decode { input, length } => decode(&input, length),
        Command::Validate { binary, length } => {
            validate(&binary, length);
            Ok(ExitCode::SUCCESS)
        }
        Command::Table => {
            print_table();
            Ok(ExitCode::SUCCESS)
        }
        Command::Sample { .. } => Ok(sample(&config)),
    }
}

/// Resolve inline or file input to a string.
fn read_input(input: &InputArgs) -> Result<String> {
    match (&input.value, &input.file) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(path)) => {
            log::info!("reading input from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, None) => anyhow::bail!("no input given"),
    }
}

/// One-line description of a codec error: ordinal, flat message, detail.
fn failure_line(err: &asciibin_core::Error) -> String {
    format!("error [{}]: {} ({err})", err.code(), err.kind().message())
}

/// Print a codec error with its flat kind and return a failing exit code.
fn report(err: &asciibin_core::Error) -> ExitCode {
    log::warn!("conversion failed: {err:?}");
    eprintln!("{}", failure_line(err));
    ExitCode::FAILURE
}

/// Separate each code of an encoded string with a single space.
fn group_codes(binary: &str) -> String {
    binary
        .as_bytes()
        .chunks(CODE_WIDTH)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop all whitespace, so grouped or wrapped input decodes as one string.
fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn encode(input: &InputArgs, group: bool) -> Result<ExitCode> {
    let text = read_input(input)?;

    let binary = match text_to_binary(&text) {
        Ok(binary) => binary,
        Err(e) => return Ok(report(&e)),
    };
    log::info!("encoded {} characters", text.len());

    if group {
        println!("{}", group_codes(&binary));
    } else {
        println!("{binary}");
    }

    Ok(ExitCode::SUCCESS)
}

fn decode(input: &InputArgs, length: Option<usize>) -> Result<ExitCode> {
    let raw = read_input(input)?;
    let binary = strip_whitespace(&raw);
    let length = length.unwrap_or(binary.len());

    match binary_to_text(&binary, length) {
        Ok(text) => {
            log::info!("decoded {} characters", text.len());
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report(&e)),
    }
}

fn validate(binary: &str, length: Option<usize>) {
    let length = length.unwrap_or(binary.len());
    let valid = is_valid_binary_string(binary, length);
    let aligned = length % CODE_WIDTH == 0;

    println!("'{binary}' (first {length} symbols)");
    println!("Binary symbols only: {}", if valid { "yes" } else { "no" });
    println!(
        "Multiple of {CODE_WIDTH}: {}",
        if aligned { "yes" } else { "no" }
    );
    println!(
        "Decodable shape: {}",
        if valid && aligned { "yes" } else { "no" }
    );
}

fn print_table() {
    let table = LookupTable::standard();
    println!("=== Lookup Table ({} entries) ===", table.size());

    for entry in table {
        println!("{:>6}  {}", display_character(entry.character), entry.code);
    }
}

/// Printable form of a table character.
fn display_character(character: u8) -> String {
    match character {
        b'\t' => "'\\t'".to_string(),
        b'\n' => "'\\n'".to_string(),
        b'\r' => "'\\r'".to_string(),
        _ => format!("'{}'", char::from(character)),
    }
}

fn sample(config: &Config) -> ExitCode {
    let text = input_gen::generate_sample_text(config.seed, config.sample_len);
    println!("Seed: {}", config.seed);
    println!("Original: {text:?}");

    let binary = match text_to_binary(&text) {
        Ok(binary) => binary,
        Err(e) => return report(&e),
    };
    println!("Binary:   {binary}");

    match binary_to_text(&binary, binary.len()) {
        Ok(decoded) if decoded == text => {
            println!("Round-trip: ✓ ({} characters, {} symbols)", text.len(), binary.len());
            ExitCode::SUCCESS
        }
        Ok(decoded) => {
            log::error!("round-trip mismatch for seed {}", config.seed);
            println!("Round-trip: mismatch, got {decoded:?}");
            ExitCode::FAILURE
        }
        Err(e) => report(&e),
    }
}
