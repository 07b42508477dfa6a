//! Day 2: invalid product ids inside id ranges. An id is invalid when its
//! decimal representation is a smaller digit pattern repeated back to back.

use anyhow::Result;
use rayon::prelude::*;

use crate::{parse_int_pair, Answer};

pub const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,1698522-1698528,446443-446449,38593856-38593862,565653-565659,824824821-824824827,2121212118-2121212124\n";

/// The input is a single line of comma-separated `lo-hi` ranges.
fn parse(input: &str) -> Vec<(i64, i64)> {
    let mut ranges = Vec::new();
    for token in input.trim().split(',').filter(|token| !token.is_empty()) {
        match parse_int_pair(token, '-') {
            Some(range) => ranges.push(range),
            None => eprintln!("day2: malformed range {token:?}"),
        }
    }
    ranges
}

/// True iff the id reads as the same digit pattern twice.
fn repeats_halved(id: i64) -> bool {
    let digits = id.to_string();
    let bytes = digits.as_bytes();
    bytes.len() % 2 == 0 && bytes[..bytes.len() / 2] == bytes[bytes.len() / 2..]
}

/// True iff the id is any pattern repeated two or more times.
fn repeats_any(id: i64) -> bool {
    let digits = id.to_string();
    let bytes = digits.as_bytes();
    for size in 1..=bytes.len() / 2 {
        if bytes.len() % size == 0 && bytes.chunks(size).all(|chunk| chunk == &bytes[..size]) {
            return true;
        }
    }
    false
}

fn sum_invalid(ranges: &[(i64, i64)], invalid: fn(i64) -> bool) -> Answer {
    ranges
        .par_iter()
        .map(|&(lo, hi)| (lo..=hi).filter(|&id| invalid(id)).sum::<i64>())
        .sum()
}

pub fn part1(input: &str) -> Result<Answer> {
    Ok(sum_invalid(&parse(input), repeats_halved))
}

pub fn part2(input: &str) -> Result<Answer> {
    Ok(sum_invalid(&parse(input), repeats_any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 1227775554);
        assert_eq!(part2(EXAMPLE).unwrap(), 4174379265);
    }

    #[test]
    fn test_repeats() {
        assert!(repeats_halved(1212));
        assert!(!repeats_halved(1221));
        assert!(!repeats_halved(121212));
        // Odd-length ids can never split into two equal halves.
        assert!(!repeats_halved(777));
        assert!(repeats_any(121212));
        assert!(repeats_any(777));
        assert!(!repeats_any(7));
        assert!(!repeats_any(1213));
        // Any halved repeat is also a general repeat.
        for id in [11, 2222, 446446, 1188511885] {
            assert!(repeats_halved(id) && repeats_any(id));
        }
    }

    #[test]
    fn test_malformed_ranges_are_skipped() {
        assert_eq!(parse("11-22,bogus,95-115\n"), vec![(11, 22), (95, 115)]);
    }
}
