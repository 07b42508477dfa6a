pub mod day1;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod day7;
pub mod day8;
pub mod day9;

use anyhow::Result;

pub type Answer = i64;
pub type SolveFn = fn(&str) -> Result<Answer>;

/// One day's pair of solvers plus its inline example input.
pub struct Solution {
    pub part1: SolveFn,
    pub part2: SolveFn,
    pub example: &'static str,
}

macro_rules! solution {
    ($day:ident) => {
        Solution {
            part1: $day::part1,
            part2: $day::part2,
            example: $day::EXAMPLE,
        }
    };
}

pub const ALL_SOLUTIONS: [Solution; 12] = [
    solution!(day1),
    solution!(day2),
    solution!(day3),
    solution!(day4),
    solution!(day5),
    solution!(day6),
    solution!(day7),
    solution!(day8),
    solution!(day9),
    solution!(day10),
    solution!(day11),
    solution!(day12),
];
