//! Core types for the take-from-either-end game
//!
//! This module defines the game state (an immutable row of integer values)
//! and the small vocabulary types shared by the solver: players, row ends,
//! and final outcomes. All types are immutable and separate from solver
//! state (the differential table).

use std::fmt;

/// One of the two alternating players. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent of this player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays (player one = 0, player two = 1)
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Which end of the remaining row a mover takes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    Left,
    Right,
}

/// Final classification of a fully solved game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl Outcome {
    /// Classify the root differential (first mover's total minus the
    /// opponent's total under optimal play by both sides).
    pub fn from_differential(differential: i64) -> Outcome {
        if differential > 0 {
            Outcome::PlayerOneWins
        } else if differential < 0 {
            Outcome::PlayerTwoWins
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Exact report strings, including the draw line's missing apostrophe.
        let s = match self {
            Outcome::PlayerOneWins => "Player 1 wins",
            Outcome::PlayerTwoWins => "Player 2 wins",
            Outcome::Draw => "Its a draw",
        };
        f.write_str(s)
    }
}

/// An instance of the game: the ordered row of values, immutable once built.
///
/// Values may be positive, negative, or zero. A lone negative value means the
/// forced first move loses the game for player one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    values: Vec<i32>,
}

impl Game {
    /// Create a game from the row of values
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "game requires at least one value");
        Game { values }
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A non-empty row is a constructor invariant, so this is always false;
    /// provided for completeness alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at index `i`
    pub fn value(&self, i: usize) -> i32 {
        self.values[i]
    }

    /// The full row of values
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Sum of the whole row, widened so it cannot overflow
    pub fn total(&self) -> i64 {
        self.values.iter().map(|&v| v as i64).sum()
    }
}
