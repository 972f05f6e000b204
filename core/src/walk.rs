//! A single prisoner's bounded walk through the box room.
//!
//! The cycle-following strategy: start at your own box number, open it,
//! and keep chasing the number you find until you either see your own
//! number or run out of tries.

use crate::permutation::Permutation;
use crate::types::Num;
use serde::{Deserialize, Serialize};

/// What happened to one prisoner. `path` lists every box content read,
/// in order; on success the prisoner's own number is the last entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrisonerOutcome {
    pub prisoner: Num,
    pub succeeded: bool,
    pub path: Vec<Num>,
}

/// Walk the chain for one prisoner.
///
/// Each box opened counts as one try; the walk succeeds the instant an
/// opened box contains the prisoner's own number, and fails once
/// `max_tries` opens are exhausted. The first open always happens,
/// even when `max_tries` is 0 (floor(N/2) with N=1), so a fixed point
/// at the prisoner's own box is always found on try 1.
pub fn walk(prisoner: Num, perm: &Permutation, max_tries: usize) -> PrisonerOutcome {
    let mut path = Vec::new();
    let mut current = prisoner;

    loop {
        let found = perm.get(current);
        path.push(found);

        if found == prisoner {
            log::debug!(
                "prisoner {prisoner} found own number after {} tries",
                path.len()
            );
            return PrisonerOutcome {
                prisoner,
                succeeded: true,
                path,
            };
        }
        if path.len() >= max_tries {
            log::debug!("prisoner {prisoner} failed after {} tries", path.len());
            return PrisonerOutcome {
                prisoner,
                succeeded: false,
                path,
            };
        }
        current = found;
    }
}
