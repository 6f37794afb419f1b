//! Climate Wordle
//!
//! A daily word game over a fixed list of climate terms. Every calendar day
//! selects one target from the rotation; the player has six attempts and
//! each guess is scored letter by letter with duplicate-aware verdicts.
//!
//! # Quick Start
//!
//! ```rust
//! use climate_wordle::core::{Guess, LetterVerdict, WordEntry, evaluate};
//!
//! let target = WordEntry::new("heat dome").unwrap();
//! let guess = Guess::new("heatwave").unwrap();
//!
//! let feedback = evaluate(&target, &guess).unwrap();
//! assert_eq!(feedback.verdicts()[0], LetterVerdict::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game session and scoring
pub mod game;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
