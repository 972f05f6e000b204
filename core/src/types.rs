//! Shared primitive types used across the entire simulation.

/// A box label / prisoner number. Boxes and prisoners share the same
/// label space 1..=N; 0 is never a valid number.
pub type Num = u32;

/// A round counter. One round = one fresh permutation played out by
/// every prisoner.
pub type RoundIndex = u64;
