//! Round results and the running win/loss tally.

use crate::cycles::Cycle;
use crate::permutation::Permutation;
use crate::types::{Num, RoundIndex};
use crate::walk::PrisonerOutcome;
use serde::{Deserialize, Serialize};

/// Everything that happened in one round, in the shape a renderer
/// consumes. Outcomes are indexed by prisoner number (outcomes[k-1] is
/// prisoner k) regardless of the order prisoners entered the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: RoundIndex,
    pub permutation: Permutation,
    pub cycles: Vec<Cycle>,
    pub outcomes: Vec<PrisonerOutcome>,
    pub all_succeeded: bool,
    /// Fraction of prisoners who failed, in [0.0, 1.0].
    pub failure_ratio: f64,
}

impl RoundReport {
    pub fn outcome_for(&self, prisoner: Num) -> &PrisonerOutcome {
        &self.outcomes[(prisoner - 1) as usize]
    }
}

/// Cumulative win/loss counters across rounds. Owned by the engine and
/// updated once per round; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub rounds: u64,
}

impl Tally {
    pub fn record(&mut self, all_succeeded: bool) {
        self.rounds += 1;
        if all_succeeded {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn win_ratio(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }

    pub fn loss_ratio(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.losses as f64 / self.rounds as f64
        }
    }
}
