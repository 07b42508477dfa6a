//! Day 8: junction boxes floating in 3D space get wired together shortest
//! pair first. Part 1 sizes up the circuits after a fixed number of
//! connections; part 2 keeps wiring until everything is one circuit.

use anyhow::{ensure, Result};
use indoc::indoc;
use nalgebra::Point3;
use petgraph::unionfind::UnionFind;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    162,817,812
    57,618,57
    906,360,560
    592,479,940
    352,342,300
    466,668,158
    542,29,236
    431,825,988
    739,650,466
    52,470,668
    216,146,977
    819,987,18
    117,168,530
    805,96,715
    346,949,466
    970,615,88
    941,993,340
    862,61,35
    984,92,344
    425,690,689
"};

/// Junction pairs eligible for part 1, in distance order.
const CONNECTIONS: usize = 1000;

fn parse(input: &str) -> Vec<Point3<i64>> {
    let mut junctions = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let coords: Vec<i64> = line
            .split(',')
            .filter_map(|token| token.trim().parse().ok())
            .collect();
        match coords[..] {
            [x, y, z] => junctions.push(Point3::new(x, y, z)),
            _ => eprintln!("day8: malformed junction {line:?}"),
        }
    }
    junctions
}

/// All junction pairs sorted by distance. Squared distances keep the ordering
/// exact in integer arithmetic.
fn sorted_pairs(junctions: &[Point3<i64>]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(junctions.len() * junctions.len().saturating_sub(1) / 2);
    for i in 0..junctions.len() {
        for j in i + 1..junctions.len() {
            pairs.push((i, j));
        }
    }
    pairs.sort_by_key(|&(i, j)| {
        let delta = junctions[i] - junctions[j];
        delta.dot(&delta)
    });
    pairs
}

/// Wires up the `connections` closest pairs and returns the product of the
/// three largest circuit sizes. Junctions left on their own do not form a
/// circuit.
fn strongest_circuits(junctions: &[Point3<i64>], connections: usize) -> Answer {
    let mut circuits = UnionFind::<usize>::new(junctions.len());
    for &(i, j) in sorted_pairs(junctions).iter().take(connections) {
        circuits.union(i, j);
    }

    let labels = circuits.into_labeling();
    let mut sizes = vec![0i64; junctions.len()];
    for &label in &labels {
        sizes[label] += 1;
    }
    let mut sizes: Vec<i64> = sizes.into_iter().filter(|&size| size >= 2).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}

pub fn part1(input: &str) -> Result<Answer> {
    Ok(strongest_circuits(&parse(input), CONNECTIONS))
}

/// Keeps connecting closest pairs until a single circuit remains; the answer
/// is the product of the x coordinates of the final pair.
pub fn part2(input: &str) -> Result<Answer> {
    let junctions = parse(input);
    ensure!(junctions.len() >= 2, "need at least two junctions");

    let mut circuits = UnionFind::<usize>::new(junctions.len());
    let mut components = junctions.len();
    for (i, j) in sorted_pairs(&junctions) {
        if circuits.union(i, j) {
            components -= 1;
        }
        if components == 1 {
            return Ok(junctions[i].x * junctions[j].x);
        }
    }
    unreachable!("every junction pair was tried without forming one circuit")
}
