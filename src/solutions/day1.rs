//! Day 1: a safe dial with positions 0..=99 is turned left and right; count
//! how often it points at zero.

use anyhow::Result;
use indoc::indoc;
use num::Integer;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    L68
    L30
    R48
    L5
    R60
    L55
    L1
    L99
    R14
    L82
"};

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

/// One rotation per line: `L` turns toward lower numbers (negative), `R`
/// toward higher ones (positive).
fn parse(input: &str) -> Vec<i64> {
    let mut rotations = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let signed = if let Some(distance) = line.strip_prefix('L') {
            distance.parse::<i64>().map(|distance| -distance)
        } else if let Some(distance) = line.strip_prefix('R') {
            distance.parse::<i64>()
        } else {
            eprintln!("day1: unrecognized rotation prefix in line {line:?}");
            continue;
        };
        match signed {
            Ok(rotation) => rotations.push(rotation),
            Err(_) => eprintln!("day1: malformed rotation distance in line {line:?}"),
        }
    }
    rotations
}

/// Counts the rotations that leave the dial pointing at zero.
fn count_zero_stops(rotations: &[i64]) -> Answer {
    let mut dial = DIAL_START;
    let mut zeros = 0;
    for &rotation in rotations {
        dial = (dial + rotation).mod_floor(&DIAL_SIZE);
        if dial == 0 {
            zeros += 1;
        }
    }
    zeros
}

/// Counts every click that makes the dial point at zero, whether mid-rotation
/// or at the end of one.
fn count_zero_clicks(rotations: &[i64]) -> Answer {
    let mut dial = DIAL_START;
    let mut zeros = 0;
    for &rotation in rotations {
        let next = (dial + rotation).mod_floor(&DIAL_SIZE);
        // Every full turn of the dial passes zero exactly once.
        zeros += rotation.abs() / DIAL_SIZE;
        // The partial turn passes zero iff it wraps around; landing exactly on
        // zero is counted separately below.
        if rotation < 0 {
            if next > dial && dial > 0 {
                zeros += 1;
            }
        } else if next < dial && next != 0 {
            zeros += 1;
        }
        // A whole-hundreds rotation starting on zero lands back on zero, but
        // that landing is already part of the full-turn count above.
        if next == 0 && (dial != 0 || rotation % DIAL_SIZE != 0) {
            zeros += 1;
        }
        dial = next;
    }
    zeros
}

pub fn part1(input: &str) -> Result<Answer> {
    Ok(count_zero_stops(&parse(input)))
}

pub fn part2(input: &str) -> Result<Answer> {
    Ok(count_zero_clicks(&parse(input)))
}
