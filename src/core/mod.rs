//! Core domain types for Spelling Bee puzzles
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod puzzle;

pub use puzzle::{Puzzle, PuzzleError};
