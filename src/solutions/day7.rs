//! Day 7: a tachyon beam falls from `S` through a manifold of splitters
//! (`^`). Part 1 counts the splitters that actually get hit; part 2 counts
//! the timelines reaching the bottom edge of the manifold.

use anyhow::Result;
use indoc::indoc;

use crate::{grid::Grid, Answer};

pub const EXAMPLE: &str = indoc! {"
    .......S.......
    ...............
    .......^.......
    ...............
    ......^.^......
    ...............
    .....^.^.^.....
    ...............
    ....^.^...^....
    ...............
    ...^.^...^.^...
    ...............
    ..^...^.....^..
    ...............
    .^.^.^.^.^...^.
    ...............
"};

const START: u8 = b'S';
const SPLITTER: u8 = b'^';
const BEAM: u8 = b'|';
const EMPTY: u8 = b'.';

/// Propagates the beam downward until the map stops changing. A beam segment
/// above a splitter spawns segments diagonally below, to either side of it.
fn propagate(grid: &mut Grid) {
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                match grid.get(x, y) {
                    Some(START) => {
                        if grid.get(x, y + 1) == Some(EMPTY) {
                            grid.set(x, y + 1, BEAM);
                            changed = true;
                        }
                    }
                    Some(BEAM) => match grid.get(x, y + 1) {
                        Some(EMPTY) => {
                            grid.set(x, y + 1, BEAM);
                            changed = true;
                        }
                        Some(SPLITTER) => {
                            for side in [x - 1, x + 1] {
                                if grid.get(side, y + 1) == Some(EMPTY) {
                                    grid.set(side, y + 1, BEAM);
                                    changed = true;
                                }
                            }
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
    }
}

/// Splitters with a beam segment directly above them are the ones splitting.
fn count_active_splitters(grid: &Grid) -> Answer {
    grid.positions(SPLITTER)
        .into_iter()
        .filter(|&(x, y)| grid.get(x, y - 1) == Some(BEAM))
        .count() as Answer
}

/// Timeline count per beam cell, filled in row-major order so every
/// predecessor (the row above) is resolved before its successors.
fn timelines(grid: &Grid) -> Vec<Vec<Option<i64>>> {
    let width = grid.width() as usize;
    let mut counts: Vec<Vec<Option<i64>>> = vec![vec![None; width]; grid.height() as usize];
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            match grid.get(x, y) {
                Some(START) => {
                    counts[y as usize][x as usize] = Some(1);
                    if y + 1 < grid.height() {
                        counts[y as usize + 1][x as usize] = Some(1);
                    }
                }
                Some(BEAM) => {
                    if counts[y as usize][x as usize].is_some() {
                        continue;
                    }
                    let mut total = 0;
                    // A beam cell merges up to three predecessors: a split
                    // from the left or right neighbor splitter, and a beam
                    // falling straight down.
                    let left_split = grid.get(x - 1, y) == Some(SPLITTER)
                        && grid.get(x - 1, y - 1) == Some(BEAM);
                    let right_split = grid.get(x + 1, y) == Some(SPLITTER)
                        && grid.get(x + 1, y - 1) == Some(BEAM);
                    if left_split {
                        total += counts[y as usize - 1][x as usize - 1].unwrap_or(0);
                    }
                    if right_split {
                        total += counts[y as usize - 1][x as usize + 1].unwrap_or(0);
                    }
                    if grid.get(x, y - 1) == Some(BEAM) {
                        total += counts[y as usize - 1][x as usize].unwrap_or(0);
                    }
                    counts[y as usize][x as usize] = Some(total);
                }
                _ => {}
            }
        }
    }
    counts
}

pub fn part1(input: &str) -> Result<Answer> {
    let mut grid = Grid::parse(input, EMPTY);
    propagate(&mut grid);
    Ok(count_active_splitters(&grid))
}

/// Unlike the other days, part 2 builds on part 1's fully propagated map
/// rather than starting from the raw input again.
pub fn part2(input: &str) -> Result<Answer> {
    let mut grid = Grid::parse(input, EMPTY);
    propagate(&mut grid);
    let counts = timelines(&grid);
    let bottom = grid.height() - 1;
    Ok((0..grid.width())
        .filter_map(|x| counts[bottom as usize][x as usize])
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 21);
        assert_eq!(part2(EXAMPLE).unwrap(), 40);
    }

    #[test]
    fn test_single_splitter_doubles_timelines() {
        let input = indoc! {"
            .S.
            ...
            .^.
            ...
        "};
        assert_eq!(part1(input).unwrap(), 1);
        assert_eq!(part2(input).unwrap(), 2);
    }

    #[test]
    fn test_unreached_splitter_does_not_split() {
        let input = indoc! {"
            .S..
            ...^
            ....
        "};
        assert_eq!(part1(input).unwrap(), 0);
        assert_eq!(part2(input).unwrap(), 1);
    }
}
