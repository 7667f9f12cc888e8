//! Interactive puzzle tester
//!
//! Text-based prompt loop for trying puzzles against a loaded dictionary.
//! One bad query never ends the session: malformed input and per-query
//! errors are reported and the loop re-prompts.

use crate::core::Puzzle;
use crate::output::formatters::group_by_length;
use crate::pipeline::select;
use colored::Colorize;
use std::io::{self, Write};

/// How many letters surround the central one in a standard puzzle
const OPTIONAL_LETTER_COUNT: usize = 6;

/// Words printed per row in the grouped result listing
const ROW_WIDTH: usize = 5;

/// Run the interactive puzzle tester
///
/// # Errors
///
/// Returns an error only if reading user input fails outright; every
/// query-level failure is handled inside the loop.
pub fn run_query(words: &[String], min_length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee Puzzle Tester                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Dictionary: {} words loaded.", words.len());

    loop {
        let central = get_user_input("\nEnter central letter (or 'q' to quit)")?
            .to_lowercase();
        if central == "q" {
            println!("\n👋 Bye!\n");
            return Ok(());
        }

        if central.chars().count() != 1 {
            println!("{}", "Error: please enter exactly one central letter.".red());
            continue;
        }

        let others_input =
            get_user_input("Enter the other 6 letters (spaced or together)")?.to_lowercase();
        let others: Vec<char> = others_input.chars().filter(|c| c.is_alphabetic()).collect();

        if others.len() != OPTIONAL_LETTER_COUNT {
            println!(
                "{}",
                format!(
                    "Error: you entered {} letters, but {OPTIONAL_LETTER_COUNT} are required.",
                    others.len()
                )
                .red()
            );
            continue;
        }

        let puzzle = match Puzzle::new(&central, &others) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                println!("{}", format!("Error: {e}").red());
                continue;
            }
        };

        // Loop boundary: a failing query is reported, never fatal
        if let Err(e) = answer_query(&puzzle, words, min_length) {
            println!("{}", format!("An error occurred: {e}").red());
        }
    }
}

/// Run one puzzle against the dictionary and print the grouped results
fn answer_query(puzzle: &Puzzle, words: &[String], min_length: usize) -> Result<(), String> {
    println!("\nSearching for words using {puzzle}...");

    let mut valid_words = select(puzzle, words, min_length);
    valid_words.sort_by(|a, b| (a.chars().count(), a).cmp(&(b.chars().count(), b)));

    if valid_words.is_empty() {
        println!("{}", "No words found!".yellow());
        return Ok(());
    }

    println!(
        "\nFound {} words:",
        valid_words.len().to_string().bright_cyan().bold()
    );

    for (length, group) in group_by_length(&valid_words) {
        println!(
            "\n{} letters ({} words):",
            length.to_string().bright_white().bold(),
            group.len()
        );
        for row in group.chunks(ROW_WIDTH) {
            println!("  {}", row.join(", "));
        }
    }

    let pangrams: Vec<&String> = valid_words
        .iter()
        .filter(|word| puzzle.is_pangram(word))
        .collect();
    if !pangrams.is_empty() {
        println!(
            "\n🌟 {} ({}):",
            "Pangrams found".bright_yellow().bold(),
            pangrams.len()
        );
        for pangram in pangrams {
            println!("   {}", pangram.to_uppercase().bright_yellow());
        }
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
