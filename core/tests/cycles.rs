//! Cycle decomposition invariants.
//!
//! The decomposition must partition {1..N} exactly, for every valid
//! permutation. Any missing or duplicated number is a blocker.

use prisoners_core::{
    cycles::{decompose, longest},
    permutation::Permutation,
    rng::{RngBank, StreamSlot},
};

fn random_permutation(n: u32, seed: u64, round: u64) -> Permutation {
    let bank = RngBank::new(seed);
    let mut rng = bank.for_round(StreamSlot::Boxes, round);
    Permutation::sample(n, &mut rng)
}

#[test]
fn cycles_partition_every_number_exactly_once() {
    for &n in &[1u32, 2, 7, 100, 501] {
        for seed in 0..5u64 {
            let perm = random_permutation(n, seed, 1);
            let cycles = decompose(&perm);

            let mut all: Vec<u32> = cycles
                .iter()
                .flat_map(|c| c.numbers().iter().copied())
                .collect();
            all.sort_unstable();

            let expected: Vec<u32> = (1..=n).collect();
            assert_eq!(
                all, expected,
                "n={n} seed={seed}: cycles do not partition 1..={n}"
            );
        }
    }
}

#[test]
fn cycle_lengths_sum_to_n() {
    for &n in &[1u32, 4, 33, 100] {
        let perm = random_permutation(n, 0xA5A5, 1);
        let cycles = decompose(&perm);
        let total: usize = cycles.iter().map(|c| c.len()).sum();
        assert_eq!(total, n as usize, "n={n}: cycle lengths must sum to n");
    }
}

#[test]
fn decomposition_is_idempotent() {
    let perm = random_permutation(50, 7, 3);
    let first = decompose(&perm);
    let second = decompose(&perm);
    assert_eq!(first, second, "same permutation must decompose identically");
}

#[test]
fn identity_permutation_is_all_fixed_points() {
    let perm = Permutation::from_values((1..=10).collect()).unwrap();
    let cycles = decompose(&perm);
    assert_eq!(cycles.len(), 10);
    assert!(cycles.iter().all(|c| c.len() == 1));
    assert_eq!(longest(&cycles), 1);
}

#[test]
fn two_swaps_give_two_cycles_of_length_two() {
    // box1->2, box2->1, box3->4, box4->3
    let perm = Permutation::from_values(vec![2, 1, 4, 3]).unwrap();
    let cycles = decompose(&perm);

    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0].numbers(), &[1, 2]);
    assert_eq!(cycles[1].numbers(), &[3, 4]);
}

#[test]
fn full_rotation_is_one_cycle_starting_at_scan_entry() {
    let perm = Permutation::from_values(vec![2, 3, 4, 1]).unwrap();
    let cycles = decompose(&perm);

    assert_eq!(cycles.len(), 1);
    // The chain starts at box 1, where the ascending scan entered it.
    assert_eq!(cycles[0].numbers(), &[1, 2, 3, 4]);
    assert_eq!(longest(&cycles), 4);
}

#[test]
fn decompose_leaves_the_permutation_untouched() {
    let perm = random_permutation(64, 99, 2);
    let before = perm.clone();
    let _ = decompose(&perm);
    assert_eq!(perm, before, "decompose must not mutate box contents");
}

#[test]
fn malformed_permutations_are_rejected() {
    assert!(Permutation::from_values(vec![1, 1, 3]).is_err(), "duplicate");
    assert!(Permutation::from_values(vec![0, 2, 3]).is_err(), "zero");
    assert!(Permutation::from_values(vec![1, 2, 5]).is_err(), "out of range");
    assert!(Permutation::from_values(vec![3, 1, 2]).is_ok());
}
