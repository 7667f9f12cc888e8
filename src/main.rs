//! Spelling Bee word list toolkit - CLI
//!
//! Cleans raw dictionaries, filters them by puzzle constraints, exports
//! compact JSON, compresses for web delivery, and hosts an interactive
//! puzzle tester.

use anyhow::Result;
use clap::{Parser, Subcommand};
use spellbee::{
    commands::{
        CleanConfig, CompressConfig, FilterConfig, run_clean, run_compress, run_filter, run_query,
    },
    output::{print_clean_report, print_compress_report, print_filter_report},
    wordlists::load_from_file,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spellbee",
    about = "Spelling Bee word list toolkit: clean, filter, export and compress puzzle dictionaries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Minimum word length kept by cleaning and filtering
    #[arg(short = 'm', long, global = true, default_value = "4")]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw word list and export the compact dictionary
    Clean {
        /// Raw word list (JSON array of strings)
        #[arg(short, long, default_value = "raw_wordlist.json")]
        input: PathBuf,

        /// Cleaned dictionary to write
        #[arg(short, long, default_value = "mk_words.json")]
        output: PathBuf,
    },

    /// Filter the dictionary by puzzle constraints
    Filter {
        /// The required (central) letter
        required: String,

        /// The optional letters, spaced or together (e.g. "bxnoj")
        optional: String,

        /// Dictionary to filter
        #[arg(short, long, default_value = "mk_words.json")]
        input: PathBuf,

        /// Write the filtered list here (skipped when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Produce compressed siblings of an exported dictionary
    Compress {
        /// File to compress
        #[arg(default_value = "mk_words.json")]
        input: PathBuf,

        /// Skip the brotli artifact, produce gzip only
        #[arg(long)]
        no_brotli: bool,
    },

    /// Interactive puzzle tester (default)
    Query {
        /// Dictionary to query
        #[arg(short, long, default_value = "mk_words.json")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to the interactive tester if no command given
    let command = cli.command.unwrap_or(Commands::Query {
        input: PathBuf::from("mk_words.json"),
    });

    match command {
        Commands::Clean { input, output } => run_clean_command(input, output, cli.min_length),
        Commands::Filter {
            required,
            optional,
            input,
            output,
        } => run_filter_command(required, &optional, input, output, cli.min_length),
        Commands::Compress { input, no_brotli } => run_compress_command(input, !no_brotli),
        Commands::Query { input } => run_query_command(&input, cli.min_length),
    }
}

fn run_clean_command(input: PathBuf, output: PathBuf, min_length: usize) -> Result<()> {
    let config = CleanConfig {
        input,
        output,
        min_length,
    };
    let report = run_clean(&config)?;
    print_clean_report(&report);
    Ok(())
}

fn run_filter_command(
    required: String,
    optional: &str,
    input: PathBuf,
    output: Option<PathBuf>,
    min_length: usize,
) -> Result<()> {
    let config = FilterConfig {
        required,
        optional: optional.chars().filter(|c| c.is_alphabetic()).collect(),
        input,
        output,
        min_length,
    };
    let report = run_filter(&config)?;
    print_filter_report(&report);
    Ok(())
}

fn run_compress_command(input: PathBuf, brotli: bool) -> Result<()> {
    let config = CompressConfig { input, brotli };
    let report = run_compress(&config)?;
    print_compress_report(&report);
    Ok(())
}

fn run_query_command(input: &Path, min_length: usize) -> Result<()> {
    println!("📖 Loading dictionary...");
    let words = load_from_file(input)?;

    run_query(&words, min_length).map_err(|e| anyhow::anyhow!(e))
}
