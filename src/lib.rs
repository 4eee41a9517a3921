//! Punjabi Wordle
//!
//! A Wordle-style word game for Gurmukhi-script Punjabi. Words are compared
//! letter by letter, where a letter is a base consonant or vowel together
//! with its conjunct partners and matras.
//!
//! # Quick Start
//!
//! ```rust
//! use punjabi_wordle::core::{Feedback, MatchMode, Word};
//!
//! let target = Word::new("ਨਮਸਕਾਰ").unwrap();
//! let guess = Word::new("ਚਮਤਕਾਰ").unwrap();
//!
//! let feedback = Feedback::calculate(&target, &guess, MatchMode::Relaxed);
//! println!("{} {}", guess, feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Daily word storage
pub mod store;

// Word-of-the-day resolution
pub mod daily;

// Admin gate and operations
pub mod admin;

// Guess validation report
pub mod validation;

// Runtime settings
pub mod config;

// Opening-guess analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
