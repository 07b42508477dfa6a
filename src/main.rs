use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use aoc2025::{execute_day, format_duration, load_input, Phase, ALL_SOLUTIONS};

#[derive(Parser)]
struct Args {
    /// Input source to solve against
    #[arg(short, long, value_enum, default_value_t = Phase::Puzzle)]
    phase: Phase,
    /// Run a single day instead of all of them
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    day: Option<u8>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Phase: {}", args.phase);
    println!("---------------------");

    let mut total = Duration::default();
    for (i, solution) in ALL_SOLUTIONS.iter().enumerate() {
        let n = i + 1;
        if args.day.is_some_and(|day| day as usize != n) {
            continue;
        }
        // A failing day (typically a missing input file) is reported but must
        // not keep the remaining days from running.
        match load_input(n, args.phase).and_then(|input| execute_day(n, solution, &input)) {
            Ok(elapsed) => total += elapsed,
            Err(err) => println!("Day {n} failed: {err:#}"),
        }
        println!("---------------------");
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}
