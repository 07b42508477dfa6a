//! Day 10: factory machines with toggle buttons. Part 1 finds the fewest
//! presses lighting up the indicator pattern; part 2 charges joltage counters
//! where each press decrements the wired counters.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use indoc::indoc;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Answer;

pub const EXAMPLE: &str = indoc! {"
    [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
    [...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
    [.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
"};

struct Machine {
    /// Target indicator pattern as a bitmask, bit i = light i lit.
    lights: u32,
    /// Per button, the lights/counters it is wired to, as a bitmask.
    buttons: Vec<u32>,
    /// Per button, the wired indices themselves.
    wirings: Vec<Vec<usize>>,
    joltage: Vec<i64>,
}

/// Lines look like `[.##.] (3) (1,3) (0,1) {3,5,4,7}`.
fn parse(input: &str) -> Result<Vec<Machine>> {
    let line_re = Regex::new(r"^\[([.#]+)\]((?: \(\d+(?:,\d+)*\))+) \{(\d+(?:,\d+)*)\}$")?;
    let scheme_re = Regex::new(r"\(([\d,]+)\)")?;

    let mut machines = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let Some(caps) = line_re.captures(line) else {
            eprintln!("day10: malformed machine {line:?}");
            continue;
        };
        let lights = caps[1]
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'#')
            .fold(0u32, |acc, (i, _)| acc | 1 << i);
        let mut buttons = Vec::new();
        let mut wirings = Vec::new();
        for scheme in scheme_re.captures_iter(&caps[2]) {
            let wiring: Vec<usize> = scheme[1]
                .split(',')
                .map(|n| n.parse())
                .collect::<Result<_, _>>()?;
            buttons.push(wiring.iter().fold(0u32, |acc, &i| acc | 1 << i));
            wirings.push(wiring);
        }
        let joltage = caps[3]
            .split(',')
            .map(|n| n.parse())
            .collect::<Result<_, _>>()?;
        machines.push(Machine {
            lights,
            buttons,
            wirings,
            joltage,
        });
    }
    Ok(machines)
}

/// BFS over light states; every button press toggles its wired lights.
fn fewest_presses(machine: &Machine) -> Result<i64> {
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::new();
    seen.insert(0u32);
    queue.push_back((0u32, 0i64));
    while let Some((state, presses)) = queue.pop_front() {
        if state == machine.lights {
            return Ok(presses);
        }
        for &button in &machine.buttons {
            let next = state ^ button;
            if seen.insert(next) {
                queue.push_back((next, presses + 1));
            }
        }
    }
    Err(anyhow!("indicator pattern {:#b} is unreachable", machine.lights))
}

/// Minimum presses to drain the joltage counters to zero.
///
/// Pressing a button subtracts 1 from each wired counter, so the set of
/// buttons pressed an odd number of times must match the counters' parity
/// pattern. For each button subset with that parity the remainder is even and
/// the problem recurses on the halved counters, each deeper press counting
/// double. States repeat across branches, hence the memo keyed on the counter
/// vector.
fn drain_counters(
    machine: &Machine,
    joltage: Vec<i64>,
    memo: &mut FxHashMap<Vec<i64>, Option<i64>>,
) -> Option<i64> {
    if joltage.iter().all(|&v| v == 0) {
        return Some(0);
    }
    if let Some(&known) = memo.get(&joltage) {
        return known;
    }

    let parity = joltage
        .iter()
        .enumerate()
        .filter(|&(_, v)| v % 2 == 1)
        .fold(0u32, |acc, (i, _)| acc | 1 << i);

    let mut best: Option<i64> = None;
    if parity == 0 {
        let halved = joltage.iter().map(|&v| v / 2).collect();
        best = drain_counters(machine, halved, memo).map(|sub| 2 * sub);
    } else {
        for subset in 0u32..1 << machine.buttons.len() {
            let toggled = machine
                .buttons
                .iter()
                .enumerate()
                .filter(|&(b, _)| subset >> b & 1 == 1)
                .fold(0u32, |acc, (_, &mask)| acc ^ mask);
            if toggled != parity {
                continue;
            }
            let mut remaining = joltage.clone();
            let mut presses = 0;
            for (b, wiring) in machine.wirings.iter().enumerate() {
                if subset >> b & 1 == 1 {
                    presses += 1;
                    for &i in wiring {
                        remaining[i] -= 1;
                    }
                }
            }
            // Overdrawn counters can never recover.
            if remaining.iter().any(|&v| v < 0) {
                continue;
            }
            let halved = remaining.iter().map(|&v| v / 2).collect();
            if let Some(sub) = drain_counters(machine, halved, memo) {
                let total = presses + 2 * sub;
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
    }

    memo.insert(joltage, best);
    best
}

pub fn part1(input: &str) -> Result<Answer> {
    parse(input)?.iter().map(fewest_presses).sum()
}

pub fn part2(input: &str) -> Result<Answer> {
    let mut total = 0;
    for machine in parse(input)? {
        let joltage = machine.joltage.clone();
        total = drain_counters(&machine, joltage, &mut FxHashMap::default())
            .map(|presses| total + presses)
            .ok_or_else(|| anyhow!("joltage counters cannot be drained"))?;
    }
    Ok(total)
}
