#![cfg(feature = "fuzzer")]

use rb_set::fuzzer::{replay, Fuzzer, Op};
use rb_set::RbSet;

fn seeds() -> [u64; 8] {
    [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
        0x1111_2222_3333_4444_u64,
        0xfedc_ba98_7654_3210_u64,
        0x1357_9bdf_2468_ace0_u64,
        0xa5a5_5a5a_dead_beef_u64,
    ]
}

#[test]
fn fuzz_small_key_space_seeded() {
    for seed in seeds() {
        let ops = Fuzzer::from_u64(seed).ops(3_000, 64);
        if let Err(err) = replay(&ops) {
            panic!("seed={seed:#x}: {err}");
        }
    }
}

#[test]
fn fuzz_wide_key_space_seeded() {
    for seed in seeds() {
        let ops = Fuzzer::from_u64(seed).ops(3_000, 1_000_000);
        if let Err(err) = replay(&ops) {
            panic!("seed={seed:#x}: {err}");
        }
    }
}

#[test]
fn fuzz_shuffled_fill_then_drain_seeded() {
    for seed in seeds() {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let keys = fuzzer.shuffled((0..512).collect());
        let drain = fuzzer.shuffled(keys.clone());

        let mut ops: Vec<Op> = keys.into_iter().map(Op::Insert).collect();
        ops.extend(drain.into_iter().map(Op::Delete));

        let set: RbSet<i64> = match replay(&ops) {
            Ok(set) => set,
            Err(err) => panic!("seed={seed:#x}: {err}"),
        };
        assert!(set.is_empty());
    }
}

#[test]
fn fuzz_random_membership_churn_seeded() {
    for seed in seeds() {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let mut ops = Vec::new();
        for _ in 0..2_000 {
            let key = fuzzer.random_int(-50, 50);
            ops.push(if fuzzer.random_bool(0.5) {
                Op::Insert(key)
            } else {
                Op::Delete(key)
            });
        }
        if let Err(err) = replay(&ops) {
            panic!("seed={seed:#x}: {err}");
        }
    }
}
