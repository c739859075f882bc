// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Deterministic series generators shared by the benchmarks.

fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Random walk with unit-ish steps and a fixed seed.
pub fn random_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut level = 100.0_f64;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        let step = ((lcg_next(&mut state) >> 11) as f64 / (1u64 << 53) as f64) - 0.5;
        level += step;
        values.push(level);
    }
    values
}

/// Random walk with every `every`-th value replaced by NaN.
pub fn random_walk_with_gaps(n: usize, seed: u64, every: usize) -> Vec<f64> {
    let mut values = random_walk(n, seed);
    if every > 0 {
        for value in values.iter_mut().step_by(every) {
            *value = f64::NAN;
        }
    }
    values
}
