//! The simulation engine.
//!
//! RULES:
//!   - One engine owns one master seed; all randomness flows through
//!     its RngBank (boxes stream, prisoner-order stream).
//!   - Each round is independent: fresh permutation, fresh visiting
//!     order, nothing carried over except the tally.
//!   - Core functions return structured reports; the engine never
//!     prints. Rendering is the runner's job.

use crate::{
    config::SimConfig,
    cycles,
    error::SimResult,
    permutation::Permutation,
    rng::{RngBank, StreamSlot},
    round::{RoundReport, Tally},
    types::{Num, RoundIndex},
    walk::{walk, PrisonerOutcome},
};

pub struct SimEngine {
    pub config: SimConfig,
    pub tally: Tally,
    rng_bank: RngBank,
    next_round: RoundIndex,
}

impl SimEngine {
    /// Build an engine for a validated configuration.
    pub fn new(config: SimConfig, master_seed: u64) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tally: Tally::default(),
            rng_bank: RngBank::new(master_seed),
            next_round: 1,
        })
    }

    /// Rounds completed so far.
    pub fn rounds_played(&self) -> RoundIndex {
        self.next_round - 1
    }

    /// Play one full round: shuffle the boxes, send every prisoner in,
    /// decompose the cycles for diagnostics, update the tally.
    pub fn run_round(&mut self) -> SimResult<RoundReport> {
        let round = self.next_round;
        self.next_round += 1;

        let n = self.config.num_prisoners;
        let max_tries = self.config.max_tries();

        let mut boxes_rng = self.rng_bank.for_round(StreamSlot::Boxes, round);
        let permutation = Permutation::sample(n, &mut boxes_rng);

        // The order prisoners enter the room. Individual outcomes do
        // not depend on it: each walk sees only the permutation.
        let mut order: Vec<Num> = (1..=n).collect();
        let mut order_rng = self.rng_bank.for_round(StreamSlot::PrisonerOrder, round);
        order_rng.shuffle(&mut order);

        let mut outcomes: Vec<PrisonerOutcome> = order
            .iter()
            .map(|&prisoner| walk(prisoner, &permutation, max_tries))
            .collect();
        // Reports index outcomes by prisoner number, not entry order.
        outcomes.sort_by_key(|o| o.prisoner);

        let failed = outcomes.iter().filter(|o| !o.succeeded).count();
        let all_succeeded = failed == 0;
        let failure_ratio = failed as f64 / n as f64;

        let cycles = cycles::decompose(&permutation);
        self.tally.record(all_succeeded);

        log::info!(
            "round {round}: n={n} max_tries={max_tries} longest_cycle={} {} (failed {failed}/{n})",
            cycles::longest(&cycles),
            if all_succeeded { "WIN" } else { "LOSS" },
        );

        Ok(RoundReport {
            round,
            permutation,
            cycles,
            outcomes,
            all_succeeded,
            failure_ratio,
        })
    }
}
