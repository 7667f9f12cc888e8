//! Spelling Bee word list toolkit
//!
//! Prepares puzzle dictionaries for a Spelling Bee-style word game: cleaning
//! a raw word list, filtering it by letter constraints, exporting it as
//! compact JSON, and compressing it for web delivery.
//!
//! # Quick Start
//!
//! ```rust
//! use spellbee::core::Puzzle;
//! use spellbee::pipeline::{CleanOptions, clean, select};
//!
//! let raw = ["Apple", "apple", "a-b", "eats", "seat"].map(String::from);
//! let (words, _stats) = clean(&raw, &CleanOptions::default());
//!
//! let puzzle = Puzzle::new("e", &['a', 't', 's']).unwrap();
//! let game_words = select(&puzzle, &words, 4);
//! assert_eq!(game_words, vec!["eats", "seat"]);
//! ```

// Core domain types
pub mod core;

// Word list pipeline stages
pub mod pipeline;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
