//! Day 5: fresh ingredient id ranges followed by a list of ids. Part 1 checks
//! the listed ids, part 2 measures the merged ranges themselves.

use anyhow::{bail, Result};
use indoc::indoc;

use crate::{parse_int_pair, Answer};

pub const EXAMPLE: &str = indoc! {"
    3-5
    10-14
    16-20
    12-18

    1
    5
    8
    11
    17
    32
"};

/// Ranges come first, one `lo-hi` per line; an empty line separates them from
/// the ids.
fn parse(input: &str) -> Result<(Vec<(i64, i64)>, Vec<i64>)> {
    let Some((range_block, id_block)) = input.split_once("\n\n") else {
        bail!("missing blank line between ranges and ids");
    };
    let mut ranges = Vec::new();
    for line in range_block.lines() {
        match parse_int_pair(line, '-') {
            Some(range) => ranges.push(range),
            None => eprintln!("day5: malformed range {line:?}"),
        }
    }
    let mut ids = Vec::new();
    for line in id_block.lines().filter(|line| !line.is_empty()) {
        match line.parse() {
            Ok(id) => ids.push(id),
            Err(_) => eprintln!("day5: malformed id {line:?}"),
        }
    }
    Ok((ranges, ids))
}

/// Collapses overlapping ranges into disjoint ones, sorted. Bounds are
/// inclusive; ranges that merely touch stay separate.
fn merge_ranges(mut ranges: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some((_, last_hi)) if lo <= *last_hi => *last_hi = (*last_hi).max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

pub fn part1(input: &str) -> Result<Answer> {
    let (ranges, ids) = parse(input)?;
    let merged = merge_ranges(ranges);
    Ok(ids
        .iter()
        .filter(|&&id| merged.iter().any(|&(lo, hi)| lo <= id && id <= hi))
        .count() as Answer)
}

pub fn part2(input: &str) -> Result<Answer> {
    let (ranges, _) = parse(input)?;
    Ok(merge_ranges(ranges)
        .iter()
        .map(|&(lo, hi)| hi - lo + 1)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 3);
        assert_eq!(part2(EXAMPLE).unwrap(), 14);
    }

    #[test]
    fn test_merge_ranges() {
        assert_eq!(
            merge_ranges(vec![(16, 20), (3, 5), (12, 18), (10, 14)]),
            vec![(3, 5), (10, 20)]
        );
        // Touching is not overlapping.
        assert_eq!(merge_ranges(vec![(1, 3), (4, 6)]), vec![(1, 3), (4, 6)]);
        assert_eq!(merge_ranges(vec![(1, 4), (4, 6)]), vec![(1, 6)]);
        // Merging is idempotent.
        let merged = merge_ranges(vec![(16, 20), (3, 5), (12, 18), (10, 14)]);
        assert_eq!(merge_ranges(merged.clone()), merged);
    }

    #[test]
    fn test_missing_separator_is_an_error() {
        assert!(part1("3-5\n10-14\n").is_err());
    }
}
