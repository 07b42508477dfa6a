//! Day 11: counting distinct signal paths through a directed device graph.
//! Part 1 counts every path from `you` to `out`; part 2 counts the paths
//! from `svr` to `out` that pass through both `dac` and `fft`.

use anyhow::Result;
use indexmap::IndexMap;
use indoc::indoc;
use rustc_hash::FxHashMap;

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    aaa: you hhh
    you: bbb ccc
    bbb: ddd eee
    ccc: ddd eee fff
    ddd: ggg
    eee: out
    fff: out
    ggg: out
    hhh: ccc fff iii
    iii: out
    svr: qqq rrr
    qqq: dac
    rrr: dac fft
    dac: fft out
    fft: out
"};

type Graph<'a> = IndexMap<&'a str, Vec<&'a str>>;

/// One device per line: `name: output output ...`. Insertion order is kept so
/// traversal over the graph is deterministic.
fn parse(input: &str) -> Graph<'_> {
    let mut graph = Graph::default();
    for line in input.lines().filter(|line| !line.is_empty()) {
        match line.split_once(": ") {
            Some((device, outputs)) => {
                graph.insert(device, outputs.split_whitespace().collect());
            }
            None => eprintln!("day11: malformed device {line:?}"),
        }
    }
    graph
}

/// Memoized DFS counting the paths from `node` to `goal`. Devices that are
/// referenced but never defined (other than the goal) are dead ends.
fn count_paths<'a>(
    graph: &Graph<'a>,
    node: &'a str,
    goal: &str,
    memo: &mut FxHashMap<&'a str, i64>,
) -> i64 {
    if node == goal {
        return 1;
    }
    if let Some(&known) = memo.get(node) {
        return known;
    }
    let count = match graph.get(node) {
        Some(outputs) => outputs
            .iter()
            .map(|&next| count_paths(graph, next, goal, memo))
            .sum(),
        None => 0,
    };
    memo.insert(node, count);
    count
}

/// Like [`count_paths`] but only counting paths that visit both `dac` and
/// `fft`. The memo is keyed on the visited flags as well since the remaining
/// path count depends on them.
fn count_paths_via<'a>(
    graph: &Graph<'a>,
    node: &'a str,
    goal: &str,
    seen_dac: bool,
    seen_fft: bool,
    memo: &mut FxHashMap<(&'a str, bool, bool), i64>,
) -> i64 {
    if node == goal {
        return i64::from(seen_dac && seen_fft);
    }
    let seen_dac = seen_dac || node == "dac";
    let seen_fft = seen_fft || node == "fft";
    if let Some(&known) = memo.get(&(node, seen_dac, seen_fft)) {
        return known;
    }
    let count = match graph.get(node) {
        Some(outputs) => outputs
            .iter()
            .map(|&next| count_paths_via(graph, next, goal, seen_dac, seen_fft, memo))
            .sum(),
        None => 0,
    };
    memo.insert((node, seen_dac, seen_fft), count);
    count
}

pub fn part1(input: &str) -> Result<Answer> {
    let graph = parse(input);
    Ok(count_paths(&graph, "you", "out", &mut FxHashMap::default()))
}

pub fn part2(input: &str) -> Result<Answer> {
    let graph = parse(input);
    Ok(count_paths_via(
        &graph,
        "svr",
        "out",
        false,
        false,
        &mut FxHashMap::default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain exponential DFS, as a cross-check for the memoized versions.
    fn naive_count(graph: &Graph, node: &str, goal: &str, dac: bool, fft: bool) -> i64 {
        if node == goal {
            return i64::from(dac && fft);
        }
        let dac = dac || node == "dac";
        let fft = fft || node == "fft";
        match graph.get(node) {
            Some(outputs) => outputs
                .iter()
                .map(|&next| naive_count(graph, next, goal, dac, fft))
                .sum(),
            None => 0,
        }
    }

    #[test]
    fn test_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 5);
        assert_eq!(part2(EXAMPLE).unwrap(), 2);
    }

    #[test]
    fn test_memo_matches_naive() {
        let graph = parse(EXAMPLE);
        for start in ["you", "svr", "hhh"] {
            assert_eq!(
                count_paths_via(&graph, start, "out", false, false, &mut FxHashMap::default()),
                naive_count(&graph, start, "out", false, false),
                "memoized and naive counts differ from {start}"
            );
        }
    }

    #[test]
    fn test_undefined_device_is_a_dead_end() {
        // `bbb` is referenced but never defined, so only the `ccc` arm counts.
        let graph = parse("you: bbb ccc\nccc: out\n");
        assert_eq!(
            count_paths(&graph, "you", "out", &mut FxHashMap::default()),
            1
        );
    }

    #[test]
    fn test_diamond_counts_both_arms() {
        let input = "svr: dac\ndac: fft\nfft: aaa bbb\naaa: out\nbbb: out\n";
        assert_eq!(part2(input).unwrap(), 2);
        assert_eq!(part1(input).unwrap(), 0);
    }
}
