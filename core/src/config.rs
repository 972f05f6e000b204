//! Simulation configuration.
//!
//! Everything the runner can set from the command line lives here, so
//! core functions never look at argv or the environment themselves.

use crate::error::{SimError, SimResult};
use crate::types::Num;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// N: number of boxes and of prisoners.
    pub num_prisoners: Num,
    /// Per-prisoner try limit policy: ceil(N/2) when set, floor(N/2)
    /// otherwise. A policy knob, not a derived constant.
    pub round_up_max_tries: bool,
    /// How many independent rounds to simulate.
    pub num_rounds: u64,
    /// Emit per-step diagnostics for each prisoner's walk.
    pub verbose_details: bool,
    /// Emit the per-prisoner success/failure grid after each round.
    pub print_winloss_grid: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_prisoners: 100,
            round_up_max_tries: false,
            num_rounds: 1,
            verbose_details: false,
            print_winloss_grid: false,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> SimResult<()> {
        if self.num_prisoners == 0 {
            return Err(SimError::InvalidConfig {
                field: "num_prisoners",
                value: 0,
            });
        }
        if self.num_rounds == 0 {
            return Err(SimError::InvalidConfig {
                field: "num_rounds",
                value: 0,
            });
        }
        Ok(())
    }

    /// The per-prisoner box-open limit for this configuration.
    ///
    /// Note floor(1/2) == 0: the walk still performs its first open,
    /// so N=1 remains winnable (see walk::walk).
    pub fn max_tries(&self) -> usize {
        let n = self.num_prisoners as usize;
        if self.round_up_max_tries {
            n.div_ceil(2)
        } else {
            n / 2
        }
    }
}
