//! Day 6: a cephalopod math worksheet. Numbers are laid out in fixed-width
//! columns with an operator row at the bottom marking where each problem
//! starts.

use anyhow::{bail, Result};
use indoc::indoc;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    123 328  51 64
     45 64  387 23
      6 98  215 314
    *   +   *   +
"};

struct Worksheet {
    rows: Vec<Vec<u8>>,
    operators: Vec<u8>,
}

/// One problem: its operator and the column span it occupies.
struct Problem {
    operator: u8,
    start: usize,
    end: usize,
}

impl Worksheet {
    /// The last line holds the operators; everything above it is operand rows.
    /// All lines are padded to equal width so column access stays in bounds.
    fn parse(input: &str) -> Result<Worksheet> {
        let mut lines: Vec<Vec<u8>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect();
        if lines.len() < 2 {
            bail!("worksheet needs at least one operand row and an operator row");
        }
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        for line in &mut lines {
            line.resize(width, b' ');
        }
        let operators = lines.pop().unwrap();
        Ok(Worksheet {
            rows: lines,
            operators,
        })
    }

    /// Each non-space character in the operator row starts a problem; a
    /// problem extends up to the next one (the last runs to the edge).
    fn problems(&self) -> Vec<Problem> {
        let starts: Vec<usize> = (0..self.operators.len())
            .filter(|&i| self.operators[i] != b' ')
            .collect();
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Problem {
                operator: self.operators[start],
                start,
                end: starts.get(i + 1).copied().unwrap_or(self.operators.len()),
            })
            .collect()
    }
}

/// An unrecognized operator invalidates its problem only; `None` lets the
/// caller skip it.
fn apply(operator: u8, values: impl Iterator<Item = i64>) -> Option<i64> {
    match operator {
        b'+' => Some(values.sum()),
        b'*' => Some(values.product()),
        _ => {
            eprintln!("day6: unidentified operator {:?}", operator as char);
            None
        }
    }
}

/// Reads each problem row-wise: one operand per row within the column span.
pub fn part1(input: &str) -> Result<Answer> {
    let sheet = Worksheet::parse(input)?;
    let mut total = 0;
    for problem in sheet.problems() {
        let operands: Result<Vec<i64>, _> = sheet
            .rows
            .iter()
            .map(|row| {
                std::str::from_utf8(&row[problem.start..problem.end])
                    .unwrap_or("")
                    .trim()
                    .parse::<i64>()
            })
            .collect();
        match operands {
            Ok(operands) => {
                if let Some(value) = apply(problem.operator, operands.into_iter()) {
                    total += value;
                }
            }
            Err(_) => eprintln!(
                "day6: non-numeric operand in columns {}..{}",
                problem.start, problem.end
            ),
        }
    }
    Ok(total)
}

/// Reads each problem column-wise, right to left: every column spells one
/// operand top to bottom. An all-space column contributes the operator's
/// identity value.
pub fn part2(input: &str) -> Result<Answer> {
    let sheet = Worksheet::parse(input)?;
    let mut total = 0;
    for problem in sheet.problems() {
        let operands = (problem.start..problem.end).rev().map(|col| {
            let digits: String = sheet
                .rows
                .iter()
                .map(|row| row[col] as char)
                .filter(|c| *c != ' ')
                .collect();
            if digits.is_empty() {
                match problem.operator {
                    b'+' => 0,
                    _ => 1,
                }
            } else {
                digits.parse().unwrap_or_else(|_| {
                    eprintln!("day6: non-numeric column {col}");
                    match problem.operator {
                        b'+' => 0,
                        _ => 1,
                    }
                })
            }
        });
        if let Some(value) = apply(problem.operator, operands) {
            total += value;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 4277556);
        assert_eq!(part2(EXAMPLE).unwrap(), 3263827);
    }

    #[test]
    fn test_problem_spans() {
        let sheet = Worksheet::parse(EXAMPLE).unwrap();
        let problems = sheet.problems();
        assert_eq!(problems.len(), 4);
        assert_eq!((problems[0].start, problems[0].end), (0, 4));
        assert_eq!(problems[3].end, sheet.operators.len());
    }

    #[test]
    fn test_unknown_operator_skips_its_problem() {
        // The `-` problem is reported and dropped; the `+` one still counts.
        assert_eq!(part1("1 2\n3 4\n- +\n").unwrap(), 6);
        assert_eq!(part2("1 2\n3 4\n- +\n").unwrap(), 24);
    }

    #[test]
    fn test_operator_row_required() {
        assert!(Worksheet::parse("123\n").is_err());
    }
}
