//! coinrow Engine - Core solver types and logic
//!
//! This crate contains the take-from-either-end game types and the
//! dynamic-programming solver that computes the optimal score differential
//! for every contiguous subrange of the row.
//!
//! The engine is platform-agnostic and has zero UI dependencies.

pub mod game;
pub mod solver;

pub use game::{End, Game, Outcome, Player};
pub use solver::{build_table, solve, DiffTable, Solution};
