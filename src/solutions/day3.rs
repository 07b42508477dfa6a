//! Day 3: from each battery bank, pick a fixed number of digits (keeping
//! their order) so the number they spell is as large as possible.

use anyhow::Result;
use indoc::indoc;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    987654321111111
    811111111111119
    234234234234278
    818181911112111
"};

fn parse(input: &str) -> Vec<&str> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let ok = line.bytes().all(|b| b.is_ascii_digit());
            if !ok {
                eprintln!("day3: non-digit character in bank {line:?}");
            }
            ok
        })
        .collect()
}

/// Greedily selects `picks` digits from the bank: each pick takes the first
/// occurrence of the largest digit that still leaves enough digits behind it.
fn max_joltage(bank: &str, picks: usize) -> i64 {
    let digits = bank.as_bytes();
    let mut value = 0;
    let mut start = 0;
    for remaining in (0..picks).rev() {
        let mut best = start;
        for i in start..digits.len() - remaining {
            if digits[i] > digits[best] {
                best = i;
            }
        }
        value = value * 10 + i64::from(digits[best] - b'0');
        start = best + 1;
    }
    value
}

fn total_joltage(input: &str, picks: usize) -> Answer {
    parse(input)
        .iter()
        .filter(|bank| {
            let ok = bank.len() >= picks;
            if !ok {
                eprintln!("day3: bank {bank:?} is shorter than {picks} digits");
            }
            ok
        })
        .map(|bank| max_joltage(bank, picks))
        .sum()
}

pub fn part1(input: &str) -> Result<Answer> {
    Ok(total_joltage(input, 2))
}

pub fn part2(input: &str) -> Result<Answer> {
    Ok(total_joltage(input, 12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 357);
        assert_eq!(part2(EXAMPLE).unwrap(), 3121910778619);
    }

    #[test]
    fn test_single_banks() {
        assert_eq!(max_joltage("987654321111111", 2), 98);
        assert_eq!(max_joltage("811111111111119", 2), 89);
        assert_eq!(max_joltage("234234234234278", 12), 434234234278);
        // Picking every digit reproduces the bank itself.
        assert_eq!(max_joltage("818181911112111", 15), 818181911112111);
    }

    #[test]
    fn test_malformed_banks_are_skipped() {
        assert_eq!(parse("123\n1a3\n456\n"), vec!["123", "456"]);
    }
}
