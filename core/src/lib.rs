//! prisoners-core: deterministic simulation of the 100 prisoners problem.
//!
//! A permutation of N numbered boxes is shuffled each round; every
//! prisoner follows the cycle-following strategy (open your own box,
//! chase the number inside) with a bounded number of opens. The round
//! is won iff every prisoner finds their own number, which happens iff
//! the permutation's longest cycle fits inside the try limit.
//!
//! Core returns structured data only; all text rendering lives in the
//! sim-runner binary.

pub mod config;
pub mod cycles;
pub mod engine;
pub mod error;
pub mod permutation;
pub mod rng;
pub mod round;
pub mod types;
pub mod walk;
