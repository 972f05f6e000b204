//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through StreamRng instances derived from the
//! single master seed held by the engine.
//!
//! Each random concern (box shuffle, prisoner visiting order) gets its
//! own RNG stream, seeded deterministically from
//! (master_seed, stream_index, round). This means:
//!   - Adding a new stream never changes existing streams.
//!   - Every round draws from fresh, reproducible streams.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single random concern.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from the master seed, a stable stream index
    /// and a round number. The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64, round: u64) -> Self {
        let derived_seed = master_seed
            ^ stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ round.wrapping_mul(0xd1b5_4a32_d192_ed03);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Fisher-Yates shuffle of a slice.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }
}

/// All stream RNGs for a single run, derived on demand.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_round(&self, slot: StreamSlot, round: u64) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64, round).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Boxes = 0,
    PrisonerOrder = 1,
    // Add new streams here, append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boxes => "boxes",
            Self::PrisonerOrder => "prisoner_order",
        }
    }
}
