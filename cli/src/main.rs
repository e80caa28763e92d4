//! coinrow CLI - Command-line interface for the coinrow solver
//!
//! Reads a row description from standard input (first token: count n, then
//! n whitespace-separated integer values) and prints which player wins
//! under optimal play. The `trace` argument additionally reports one
//! optimal line of play and both players' totals.

use anyhow::{bail, Context, Result};
use coinrow_engine::game::{End, Game};
use coinrow_engine::solver::solve;
use std::io::Read;

/// Parse "n v0 v1 ... v{n-1}" from whitespace-separated tokens.
fn parse_row(input: &str) -> Result<Game> {
    let mut tokens = input.split_whitespace();

    let n: usize = tokens
        .next()
        .context("missing row length")?
        .parse()
        .context("row length is not a non-negative integer")?;
    if n == 0 {
        bail!("row length must be at least 1");
    }

    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        let token = tokens
            .next()
            .with_context(|| format!("expected {} values, got {}", n, i))?;
        let value: i32 = token
            .parse()
            .with_context(|| format!("value {} ({:?}) is not an integer", i, token))?;
        values.push(value);
    }

    Ok(Game::new(values))
}

fn run(trace: bool) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

    let game = parse_row(&input)?;
    let solution = solve(&game);

    println!("{}", solution.outcome);

    if trace {
        let picks: String = solution
            .line
            .iter()
            .map(|end| match end {
                End::Left => 'L',
                End::Right => 'R',
            })
            .collect();
        println!("Differential: {}", solution.differential);
        println!("Line: {}", picks);
        println!("Player 1 total: {}", solution.totals[0]);
        println!("Player 2 total: {}", solution.totals[1]);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run(false),
        Some("trace") => run(true),
        Some(_) => {
            println!("coinrow Solver CLI v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Reads a row from stdin: first the count n, then n integers.");
            println!();
            println!("Usage:");
            println!("  coinrow        # print the optimal-play outcome");
            println!("  coinrow trace  # also print one optimal line and totals");
            println!();
            println!("Examples:");
            println!("  echo '4 8 15 3 7' | coinrow");
            println!("  echo '3 1 2 100' | coinrow trace");
            Ok(())
        }
    }
}
