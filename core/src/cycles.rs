//! Cycle decomposition of the box permutation.
//!
//! A cycle is a maximal closed chain x -> boxes[x] -> boxes[boxes[x]]
//! -> ... -> x. The cycles partition {1..N} exactly; the longest one
//! decides the game (every prisoner wins iff the longest cycle fits
//! inside the try limit).

use crate::permutation::Permutation;
use crate::types::Num;
use serde::{Deserialize, Serialize};

/// One closed chain of box numbers. Starts with the number of the box
/// where the ascending scan entered the chain, so output order is
/// stable for a given permutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle(pub Vec<Num>);

impl Cycle {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn numbers(&self) -> &[Num] {
        &self.0
    }
}

/// Decompose the permutation into its disjoint cycles.
///
/// Scans box numbers in ascending order; an explicit visited marker
/// keeps the permutation itself untouched. O(N) total: every box is
/// visited exactly once across all chains.
pub fn decompose(perm: &Permutation) -> Vec<Cycle> {
    let n = perm.len();
    let mut visited = vec![false; n];
    let mut cycles = Vec::new();

    for start in 1..=n as Num {
        if visited[(start - 1) as usize] {
            continue;
        }
        let mut chain = Vec::new();
        let mut current = start;
        while !visited[(current - 1) as usize] {
            visited[(current - 1) as usize] = true;
            chain.push(current);
            current = perm.get(current);
        }
        cycles.push(Cycle(chain));
    }

    cycles
}

/// Length of the longest cycle. 0 only for an empty permutation.
pub fn longest(cycles: &[Cycle]) -> usize {
    cycles.iter().map(Cycle::len).max().unwrap_or(0)
}
