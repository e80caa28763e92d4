//! Differential table builder: subrange DP fill and optimal-line replay
//!
//! `table[i][j]` holds the best score differential (current mover's total
//! minus the opponent's total) the mover can guarantee when only the
//! subrange [i, j] of the row remains. Taking an end flips perspective: the
//! mover gains that value and becomes the opponent in the shrunken subrange,
//! so the recurrence subtracts the child entry.
//!
//! The table is filled in increasing subrange length. Cells of one length
//! band never depend on each other, only on the band below, so each band is
//! computed with a Rayon parallel iterator against a shared reference to the
//! table and the results are written back sequentially afterwards. No locks
//! are needed.

use crate::game::{End, Game, Outcome, Player};
use rayon::prelude::*;

/// n×n differential table, flattened row-major.
///
/// Only entries with row ≤ column are meaningful (subrange [row, column]);
/// the strictly-lower triangle stays zero and is never read.
#[derive(Debug, Clone)]
pub struct DiffTable {
    n: usize,
    cells: Vec<i64>,
}

impl DiffTable {
    fn new(n: usize) -> Self {
        DiffTable {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Side length of the table (the row length it was built for)
    pub fn n(&self) -> usize {
        self.n
    }

    /// Differential for subrange [i, j]. Requires i ≤ j < n.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i <= j && j < self.n, "subrange [{}, {}] out of bounds", i, j);
        self.cells[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, value: i64) {
        self.cells[i * self.n + j] = value;
    }

    /// Differential of the full row, i.e. entry [0, n-1]
    pub fn root(&self) -> i64 {
        self.get(0, self.n - 1)
    }
}

/// Fill the differential table for `game`, one length band at a time.
///
/// Base band: `table[i][i] = values[i]` (the sole mover takes the value
/// outright). Inductive band: `table[i][j] = max(values[i] - table[i+1][j],
/// values[j] - table[i][j-1])`. By the time a band is computed, both entries
/// it reads are final. Values widen to i64 so no sum of i32 inputs can
/// overflow.
pub fn build_table(game: &Game) -> DiffTable {
    let n = game.len();
    let mut table = DiffTable::new(n);

    for i in 0..n {
        table.set(i, i, game.value(i) as i64);
    }

    for len in 1..n {
        // Compute the whole band against &table, then apply the writes.
        let band: Vec<i64> = (0..n - len)
            .into_par_iter()
            .map(|i| {
                let j = i + len;
                let take_left = game.value(i) as i64 - table.get(i + 1, j);
                let take_right = game.value(j) as i64 - table.get(i, j - 1);
                take_left.max(take_right)
            })
            .collect();
        for (i, value) in band.into_iter().enumerate() {
            table.set(i, i + len, value);
        }
    }

    table
}

/// A fully solved game: root differential, its classification, and one
/// optimal line of play with both players' totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// table[0][n-1]: player one's total minus player two's under optimal play
    pub differential: i64,
    /// Sign classification of `differential`
    pub outcome: Outcome,
    /// Which end each successive mover takes, root subrange first
    pub line: Vec<End>,
    /// Final totals, indexed by `Player::index`
    pub totals: [i64; 2],
}

/// Solve `game`: build the table, classify the root entry, and replay the
/// table to extract one optimal line of play.
pub fn solve(game: &Game) -> Solution {
    let table = build_table(game);
    let differential = table.root();
    let outcome = Outcome::from_differential(differential);
    let (line, totals) = extract_line(game, &table);
    Solution {
        differential,
        outcome,
        line,
        totals,
    }
}

/// Replay the finished table from the root subrange, re-deriving each
/// mover's choice. Ties between ends resolve to the left end; the guaranteed
/// differential is the same either way.
fn extract_line(game: &Game, table: &DiffTable) -> (Vec<End>, [i64; 2]) {
    let mut i = 0;
    let mut j = game.len() - 1;
    let mut mover = Player::One;
    let mut line = Vec::with_capacity(game.len());
    let mut totals = [0i64; 2];

    while i < j {
        let take_left = game.value(i) as i64 - table.get(i + 1, j);
        if take_left == table.get(i, j) {
            totals[mover.index()] += game.value(i) as i64;
            line.push(End::Left);
            i += 1;
        } else {
            totals[mover.index()] += game.value(j) as i64;
            line.push(End::Right);
            j -= 1;
        }
        mover = mover.opponent();
    }

    // One value left; both ends coincide, report it as Left.
    totals[mover.index()] += game.value(i) as i64;
    line.push(End::Left);

    (line, totals)
}
