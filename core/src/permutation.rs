//! The boxes: a uniformly random bijection of {1..N} onto itself.
//!
//! Box `b` (1-based) hides the number `get(b)`. Every value 1..=N
//! appears exactly once; the rest of the simulation relies on that
//! invariant and never re-checks it.

use crate::error::{SimError, SimResult};
use crate::rng::StreamRng;
use crate::types::Num;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    values: Vec<Num>,
}

impl Permutation {
    /// Sample a uniform permutation of 1..=n.
    pub fn sample(n: Num, rng: &mut StreamRng) -> Self {
        let mut values: Vec<Num> = (1..=n).collect();
        rng.shuffle(&mut values);
        Self { values }
    }

    /// Build from explicit box contents, verifying the bijection
    /// invariant. Intended for tests and external callers; `sample`
    /// upholds the invariant by construction.
    pub fn from_values(values: Vec<Num>) -> SimResult<Self> {
        let n = values.len() as Num;
        let mut seen = vec![false; values.len()];
        for &v in &values {
            if v == 0 || v > n {
                return Err(SimError::InvalidPermutation {
                    reason: format!("value {v} out of range 1..={n}"),
                });
            }
            if seen[(v - 1) as usize] {
                return Err(SimError::InvalidPermutation {
                    reason: format!("value {v} appears more than once"),
                });
            }
            seen[(v - 1) as usize] = true;
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number hidden in box `box_number` (1-based).
    /// Panics on an out-of-range box number; callers stay within 1..=N.
    pub fn get(&self, box_number: Num) -> Num {
        self.values[(box_number - 1) as usize]
    }

    /// Box contents in box order, 0-based slice.
    pub fn values(&self) -> &[Num] {
        &self.values
    }
}
