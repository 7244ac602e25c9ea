//! Seeded random operation sequences, replayed against a `BTreeSet` oracle.

use std::collections::BTreeSet;

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use thiserror::Error;

use crate::error::InvariantViolation;
use crate::set::RbSet;

/// A single set operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Delete(i64),
    Lookup(i64),
}

#[derive(Debug, Error)]
pub enum FuzzFailure {
    #[error("step {step}: {op:?} returned {actual}, oracle returned {expected}")]
    Diverged {
        step: usize,
        op: Op,
        expected: bool,
        actual: bool,
    },
    #[error("step {step}: {op:?} left an invalid tree: {source}")]
    Invalid {
        step: usize,
        op: Op,
        #[source]
        source: InvariantViolation,
    },
}

/// Random generator for set workloads.
///
/// Uses the xoshiro256** PRNG so a failing run can be reproduced from its
/// seed.
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Creates a fuzzer, drawing a seed from `OsRng` when none is given.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn shuffled(&mut self, mut keys: Vec<i64>) -> Vec<i64> {
        keys.shuffle(&mut self.rng);
        keys
    }

    /// `count` operations over keys in `[0, max_key]`, weighted towards
    /// inserts so the tree grows while deletes still hit present keys.
    pub fn ops(&mut self, count: usize, max_key: i64) -> Vec<Op> {
        (0..count)
            .map(|_| {
                let key = self.random_int(0, max_key);
                match self.random_int(0, 9) {
                    0..=4 => Op::Insert(key),
                    5..=7 => Op::Delete(key),
                    _ => Op::Lookup(key),
                }
            })
            .collect()
    }
}

/// Applies `ops` to an [`RbSet`] and a `BTreeSet`, checking that every
/// result agrees and that the tree is valid after each mutation.
pub fn replay(ops: &[Op]) -> Result<RbSet<i64>, FuzzFailure> {
    debug!("replay: {} ops", ops.len());
    let mut set = RbSet::new();
    let mut oracle = BTreeSet::new();

    for (step, &op) in ops.iter().enumerate() {
        let (actual, expected) = match op {
            Op::Insert(k) => (set.insert(k), oracle.insert(k)),
            Op::Delete(k) => (set.delete(&k), oracle.remove(&k)),
            Op::Lookup(k) => (set.lookup(&k), oracle.contains(&k)),
        };
        if actual != expected {
            warn!("replay: diverged at step {step} on {op:?}");
            return Err(FuzzFailure::Diverged {
                step,
                op,
                expected,
                actual,
            });
        }
        if !matches!(op, Op::Lookup(_)) {
            set.validate()
                .map_err(|source| FuzzFailure::Invalid { step, op, source })?;
        }
    }

    debug!("replay: done, {} keys", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_ops() {
        let a = Fuzzer::from_u64(42).ops(100, 50);
        let b = Fuzzer::from_u64(42).ops(100, 50);
        assert_eq!(a, b);
    }

    #[test]
    fn random_int_in_range() {
        let mut fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(5, 15);
            assert!((5..=15).contains(&n));
        }
    }

    #[test]
    fn shuffled_is_permutation() {
        let mut fuzzer = Fuzzer::from_u64(7);
        let mut keys = fuzzer.shuffled((0..64).collect());
        keys.sort_unstable();
        assert_eq!(keys, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn replay_matches_oracle() {
        let ops = Fuzzer::from_u64(1).ops(2_000, 200);
        let set = replay(&ops).unwrap();
        set.validate().unwrap();
    }

    #[test]
    fn replay_error_mentions_step() {
        let err = FuzzFailure::Diverged {
            step: 3,
            op: Op::Insert(1),
            expected: true,
            actual: false,
        };
        assert_eq!(
            err.to_string(),
            "step 3: Insert(1) returned false, oracle returned true"
        );
    }
}
