//! Day 9: red tiles on a huge movie theater floor, listed as the corners of a
//! rectilinear loop. Part 1 wants the biggest rectangle spanned by any two
//! corners; part 2 additionally requires the rectangle to stay inside the
//! loop.
//!
//! The floor coordinates are far too large to rasterize, so part 2 works on a
//! compressed grid: every distinct corner coordinate gets a slot and so does
//! each open gap between two adjacent coordinates. Marking outside cells once
//! and building prefix sums over them makes each candidate rectangle an O(1)
//! lookup.

use anyhow::{ensure, Result};
use indoc::indoc;

use crate::{parse_int_pair, Answer};

pub const EXAMPLE: &str = indoc! {"
    7,1
    11,1
    11,7
    9,7
    9,5
    2,5
    2,3
    7,3
"};

fn parse(input: &str) -> Vec<(i64, i64)> {
    let mut points = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        match parse_int_pair(line, ',') {
            Some(point) => points.push(point),
            None => eprintln!("day9: malformed corner {line:?}"),
        }
    }
    points
}

/// Tile count of the rectangle with corners `a` and `b`, both included.
fn rect_area(a: (i64, i64), b: (i64, i64)) -> i64 {
    ((a.0 - b.0).abs() + 1) * ((a.1 - b.1).abs() + 1)
}

/// All corner pairs with their rectangle areas, largest first.
fn candidates(points: &[(i64, i64)]) -> Vec<(i64, (i64, i64), (i64, i64))> {
    let mut pairs = Vec::with_capacity(points.len() * (points.len() - 1) / 2);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            pairs.push((rect_area(a, b), a, b));
        }
    }
    pairs.sort_by_key(|&(area, _, _)| std::cmp::Reverse(area));
    pairs
}

pub fn part1(input: &str) -> Result<Answer> {
    let points = parse(input);
    ensure!(points.len() >= 2, "need at least two corners");
    Ok(candidates(&points)[0].0)
}

/// One compressed axis: the sorted distinct coordinates. Slot `2i` stands for
/// coordinate `coords[i]` itself, slot `2i + 1` for the open gap up to the
/// next coordinate.
struct Axis {
    coords: Vec<i64>,
}

impl Axis {
    fn new(mut coords: Vec<i64>) -> Axis {
        coords.sort_unstable();
        coords.dedup();
        Axis { coords }
    }

    fn slots(&self) -> usize {
        2 * self.coords.len() - 1
    }

    /// Slot index of an exact corner coordinate.
    fn slot_of(&self, coord: i64) -> usize {
        2 * self.coords.binary_search(&coord).unwrap_or(0)
    }

    /// A concrete coordinate inside the slot, plus whether the slot holds any
    /// integer tile at all (an empty gap between adjacent coordinates holds
    /// none).
    fn representative(&self, slot: usize) -> (i64, bool) {
        if slot % 2 == 0 {
            (self.coords[slot / 2], true)
        } else {
            let lo = self.coords[slot / 2];
            (lo + 1, lo + 1 < self.coords[slot / 2 + 1])
        }
    }
}

/// Cells of the compressed grid that lie outside the loop yet contain at
/// least one real tile, as a 2D prefix sum table.
struct OutsideTable {
    sums: Vec<Vec<i64>>,
}

impl OutsideTable {
    fn build(points: &[(i64, i64)], xs: &Axis, ys: &Axis) -> OutsideTable {
        // The loop closes back to the first corner.
        let edges: Vec<((i64, i64), (i64, i64))> = (0..points.len())
            .map(|i| (points[i], points[(i + 1) % points.len()]))
            .collect();

        let width = xs.slots();
        let height = ys.slots();
        let mut on_loop = vec![vec![false; width]; height];
        for &((x1, y1), (x2, y2)) in &edges {
            if y1 == y2 {
                let (a, b) = (xs.slot_of(x1.min(x2)), xs.slot_of(x1.max(x2)));
                for cell in &mut on_loop[ys.slot_of(y1)][a..=b] {
                    *cell = true;
                }
            } else {
                let (a, b) = (ys.slot_of(y1.min(y2)), ys.slot_of(y1.max(y2)));
                for row in &mut on_loop[a..=b] {
                    row[xs.slot_of(x1)] = true;
                }
            }
        }

        let verticals: Vec<(i64, i64, i64)> = edges
            .iter()
            .filter(|((x1, _), (x2, _))| x1 == x2)
            .map(|&((x, y1), (_, y2))| (x, y1.min(y2), y1.max(y2)))
            .collect();
        // Ray cast to the right; the half-open rule on y keeps shared edge
        // endpoints from being counted twice.
        let inside = |px: i64, py: i64| {
            verticals
                .iter()
                .filter(|&&(x, y_lo, y_hi)| x > px && y_lo <= py && py < y_hi)
                .count()
                % 2
                == 1
        };

        let mut sums = vec![vec![0; width + 1]; height + 1];
        for sy in 0..height {
            let (py, y_has_tile) = ys.representative(sy);
            for sx in 0..width {
                let (px, x_has_tile) = xs.representative(sx);
                let bad = !on_loop[sy][sx] && x_has_tile && y_has_tile && !inside(px, py);
                sums[sy + 1][sx + 1] =
                    i64::from(bad) + sums[sy][sx + 1] + sums[sy + 1][sx] - sums[sy][sx];
            }
        }
        OutsideTable { sums }
    }

    /// Number of outside cells in the inclusive slot rectangle.
    fn outside_cells(&self, sx: (usize, usize), sy: (usize, usize)) -> i64 {
        self.sums[sy.1 + 1][sx.1 + 1] - self.sums[sy.0][sx.1 + 1] - self.sums[sy.1 + 1][sx.0]
            + self.sums[sy.0][sx.0]
    }
}

pub fn part2(input: &str) -> Result<Answer> {
    let points = parse(input);
    ensure!(points.len() >= 2, "need at least two corners");

    let xs = Axis::new(points.iter().map(|p| p.0).collect());
    let ys = Axis::new(points.iter().map(|p| p.1).collect());
    let table = OutsideTable::build(&points, &xs, &ys);

    for (area, a, b) in candidates(&points) {
        let sx = (xs.slot_of(a.0.min(b.0)), xs.slot_of(a.0.max(b.0)));
        let sy = (ys.slot_of(a.1.min(b.1)), ys.slot_of(a.1.max(b.1)));
        if table.outside_cells(sx, sy) == 0 {
            return Ok(area);
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 50);
        assert_eq!(part2(EXAMPLE).unwrap(), 24);
    }

    #[test]
    fn test_axis_slots() {
        let axis = Axis::new(vec![7, 2, 11, 9, 2]);
        // Distinct coordinates 2, 7, 9, 11 plus the three gaps between them.
        assert_eq!(axis.slots(), 7);
        assert_eq!(axis.slot_of(9), 4);
        assert_eq!(axis.representative(1), (3, true));
        // The gap between 7 and 9 holds exactly the tile at 8.
        assert_eq!(axis.representative(3), (8, true));
        // No integer fits between 9 and... a dense pair has an empty gap.
        let dense = Axis::new(vec![4, 5]);
        assert_eq!(dense.representative(1), (5, false));
    }

    #[test]
    fn test_plain_rectangle_loop() {
        // A 4x3 rectangular loop: the whole spanned rectangle is inside.
        let input = "0,0\n3,0\n3,2\n0,2\n";
        assert_eq!(part1(input).unwrap(), 12);
        assert_eq!(part2(input).unwrap(), 12);
    }

    #[test]
    fn test_giant_coordinates() {
        // Compressed slots keep this tractable despite the billion-scale span.
        let input = "0,0\n1000000000,0\n1000000000,1000000000\n0,1000000000\n";
        assert_eq!(part2(input).unwrap(), 1000000001 * 1000000001);
    }
}
