use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use caesar_toolkit::samples::{CLASSIFIER_SAMPLE, CRYPTOGRAM, ENCRYPTED_SNIPPET};
use caesar_toolkit::{
    brute_force, classify_sample, decode, derive_key, encode, CipherKey, MIN_SAMPLE_LEN,
};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Caesar shift cipher toolkit")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the derived key
    Key,
    /// Shift every letter forward by the key
    Encode {
        #[command(flatten)]
        input: InputArgs,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Shift (defaults to the derived key)"
        )]
        key: Option<CipherKey>,
    },
    /// Shift every letter backward by the key
    Decode {
        #[command(flatten)]
        input: InputArgs,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Shift (defaults to the derived key)"
        )]
        key: Option<CipherKey>,
    },
    /// Decode under every key from 1 to 25
    BruteForce {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Split a string into digits, letters, even digits and uppercase letters
    Classify {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value_t = MIN_SAMPLE_LEN, help = "Minimum input length")]
        min_len: usize,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(help = "Input text (reads stdin when no source is given)")]
    text: Option<String>,
    #[arg(long, conflicts_with = "text", help = "Read input from a file")]
    file: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with_all = ["text", "file"],
        help = "Use the built-in sample input"
    )]
    sample: bool,
}

impl InputArgs {
    fn resolve(&self, sample: &str) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            debug!("reading input from {}", path.display());
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
        if self.sample {
            info!("using built-in sample input");
            return Ok(sample.to_owned());
        }
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    }
}

#[derive(Serialize)]
struct ShiftOut<'a> {
    key: CipherKey,
    text: &'a str,
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_shift(json: bool, key: CipherKey, text: &str) -> Result<()> {
    if json {
        print_json(&ShiftOut { key, text })
    } else {
        println!("{}", text);
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Key => {
            let key = derive_key();
            if cli.json {
                print_json(&serde_json::json!({ "key": key }))?;
            } else {
                println!("{}", key);
            }
        }
        Commands::Encode { input, key } => {
            let key = key.unwrap_or_else(CipherKey::derived);
            let plain_sample = decode(ENCRYPTED_SNIPPET, CipherKey::derived());
            let text = input.resolve(&plain_sample)?;
            print_shift(cli.json, key, &encode(&text, key))?;
        }
        Commands::Decode { input, key } => {
            let key = key.unwrap_or_else(CipherKey::derived);
            let text = input.resolve(ENCRYPTED_SNIPPET)?;
            print_shift(cli.json, key, &decode(&text, key))?;
        }
        Commands::BruteForce { input } => {
            let text = input.resolve(CRYPTOGRAM)?;
            let result = brute_force(&text);
            if cli.json {
                print_json(&result)?;
            } else {
                print!("{}", result);
            }
        }
        Commands::Classify { input, min_len } => {
            let text = input.resolve(CLASSIFIER_SAMPLE)?;
            let result = classify_sample(&text, min_len)?;
            if cli.json {
                print_json(&result)?;
            } else {
                print!("{}", result);
            }
        }
    }
    Ok(())
}
