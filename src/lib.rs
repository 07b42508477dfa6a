pub mod grid;
pub mod solutions;

use std::{
    fs,
    time::{Duration, Instant},
};

use anyhow::{ensure, Context, Result};
use clap::ValueEnum;

pub use solutions::{Answer, Solution, ALL_SOLUTIONS};

/// Input source for a day's solvers.
///
/// `Example` uses the inline example data compiled into each day module (the
/// same data as the test files), `Test` and `Puzzle` read the corresponding
/// file from `inputs/`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Phase {
    Example,
    Test,
    Puzzle,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Example => "EXAMPLE",
            Phase::Test => "TEST",
            Phase::Puzzle => "PUZZLE",
        })
    }
}

/// Returns the conventional input file name for a day, e.g.
/// `inputs/day03.input.test.txt`.
pub fn input_file_name(day: usize, phase: Phase) -> String {
    let kind = match phase {
        Phase::Example => "example",
        Phase::Test => "test",
        Phase::Puzzle => "puzzle",
    };
    format!("inputs/day{day:02}.input.{kind}.txt")
}

/// Produces the raw input text for a day in the given phase.
pub fn load_input(day: usize, phase: Phase) -> Result<String> {
    ensure!(
        (1..=ALL_SOLUTIONS.len()).contains(&day),
        "no solver for day {day}"
    );
    match phase {
        Phase::Example => Ok(ALL_SOLUTIONS[day - 1].example.to_string()),
        Phase::Test | Phase::Puzzle => {
            let name = input_file_name(day, phase);
            fs::read_to_string(&name).with_context(|| format!("failed to read {name}"))
        }
    }
}

pub fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

/// Runs both parts of a day against the given input, printing each answer with
/// the wall-clock time its solver took.
pub fn execute_day(n: usize, solution: &Solution, input: &str) -> Result<Duration> {
    println!("Day {}:", n);

    let start = Instant::now();
    let part1 = (solution.part1)(input)?;
    let elapsed1 = start.elapsed();
    println!("  Part 1: {} ({})", part1, format_duration(elapsed1));

    let start = Instant::now();
    let part2 = (solution.part2)(input)?;
    let elapsed2 = start.elapsed();
    println!("  Part 2: {} ({})", part2, format_duration(elapsed2));

    Ok(elapsed1 + elapsed2)
}

/// Splits `line` on the first `delim` and parses both sides as integers.
/// Surrounding whitespace on either side is tolerated.
pub fn parse_int_pair(line: &str, delim: char) -> Option<(i64, i64)> {
    let (left, right) = line.split_once(delim)?;
    Some((left.trim().parse().ok()?, right.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_pair() {
        assert_eq!(parse_int_pair("3-5", '-'), Some((3, 5)));
        assert_eq!(parse_int_pair(" 12 , -7 ", ','), Some((12, -7)));
        assert_eq!(parse_int_pair("12", ','), None);
        assert_eq!(parse_int_pair("a,b", ','), None);
    }

    #[test]
    fn test_load_input_rejects_out_of_range_days() {
        assert!(load_input(0, Phase::Example).is_err());
        assert!(load_input(13, Phase::Test).is_err());
        assert!(load_input(1, Phase::Example).is_ok());
    }

    #[test]
    fn test_input_file_name() {
        assert_eq!(input_file_name(3, Phase::Test), "inputs/day03.input.test.txt");
        assert_eq!(
            input_file_name(11, Phase::Puzzle),
            "inputs/day11.input.puzzle.txt"
        );
    }

    #[test]
    fn example_and_test_inputs_agree() -> Result<()> {
        // The test files carry the same records as the inline example data, so
        // both phases must produce identical answers.
        for (i, solution) in ALL_SOLUTIONS.iter().enumerate() {
            let example = load_input(i + 1, Phase::Example)?;
            let test = load_input(i + 1, Phase::Test)?;
            assert_eq!(
                (solution.part1)(&example)?,
                (solution.part1)(&test)?,
                "day {} part 1 differs between example and test input",
                i + 1
            );
        }
        Ok(())
    }
}
