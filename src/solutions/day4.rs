//! Day 4: paper rolls (`@`) on a warehouse floor. A roll can be grabbed by a
//! forklift when fewer than 4 of its 8 neighbors are also rolls.

use anyhow::Result;
use indoc::indoc;

use crate::{grid::Grid, Answer};

pub const EXAMPLE: &str = indoc! {"
    ..@@.@@@@.
    @@@.@.@.@@
    @@@@@.@.@@
    @.@@@@..@.
    @@.@@@@.@@
    .@@@@@@@.@
    .@.@.@.@@@
    @.@@@.@@@@
    .@@@@@@@@.
    @.@.@@@.@.
"};

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';

fn workable_rolls(grid: &Grid) -> Vec<(i64, i64)> {
    grid.positions(ROLL)
        .into_iter()
        .filter(|&(x, y)| grid.count_neighbors8(x, y, ROLL) < 4)
        .collect()
}

pub fn part1(input: &str) -> Result<Answer> {
    let grid = Grid::parse(input, EMPTY);
    Ok(workable_rolls(&grid).len() as Answer)
}

/// Repeatedly removes every currently workable roll until the floor is stuck.
pub fn part2(input: &str) -> Result<Answer> {
    let mut grid = Grid::parse(input, EMPTY);
    let mut removed = 0;
    loop {
        let workable = workable_rolls(&grid);
        if workable.is_empty() {
            break;
        }
        removed += workable.len() as Answer;
        for (x, y) in workable {
            grid.set(x, y, EMPTY);
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 13);
        assert_eq!(part2(EXAMPLE).unwrap(), 43);
    }

    #[test]
    fn test_lone_roll_is_workable() {
        assert_eq!(part1("@\n").unwrap(), 1);
        assert_eq!(part2("@\n").unwrap(), 1);
    }

    #[test]
    fn test_dense_block_interior() {
        // Corner rolls have 3 roll neighbors, edges 5, center 8; only the four
        // corners are workable at first, but peeling continues to the end.
        let block = "@@@\n@@@\n@@@\n";
        assert_eq!(part1(block).unwrap(), 4);
        assert_eq!(part2(block).unwrap(), 9);
    }
}
