//! Shared fixtures for histogram integration tests

#![allow(dead_code)]

use ndhist_core::ListSample;
use ndhist_histogram::Bounds;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lower grid edges of the reference lattice
pub const LATTICE_MIN: [f32; 3] = [-17.5, -19.5, -24.5];

/// Upper grid edges of the reference lattice
pub const LATTICE_MAX: [f32; 3] = [17.5, 19.5, 24.5];

/// Bins per dimension of the reference lattice
pub const LATTICE_SIZE: [usize; 3] = [35, 39, 49];

/// One point at the center of every unit cell of a 35 x 39 x 49 grid
pub fn center_lattice() -> ListSample<f32> {
    let total = LATTICE_SIZE.iter().product();
    let mut sample = ListSample::with_capacity(3, total);
    for i in 0..LATTICE_SIZE[0] {
        let x = LATTICE_MIN[0] + 0.5 + i as f32;
        for j in 0..LATTICE_SIZE[1] {
            let y = LATTICE_MIN[1] + 0.5 + j as f32;
            for k in 0..LATTICE_SIZE[2] {
                let z = LATTICE_MIN[2] + 0.5 + k as f32;
                sample.push_back(&[x, y, z]).expect("lattice vectors have three components");
            }
        }
    }
    sample
}

/// Grid edges of the reference lattice as histogram bounds
pub fn lattice_bounds() -> Vec<Bounds> {
    LATTICE_MIN
        .iter()
        .zip(LATTICE_MAX.iter())
        .map(|(&min, &max)| Bounds::new(min as f64, max as f64).unwrap())
        .collect()
}

/// Seeded uniform points in `[lo, hi)^dimension`
pub fn uniform_points(seed: u64, n: usize, dimension: usize, lo: f64, hi: f64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dimension).map(|_| rng.gen_range(lo..hi)).collect())
        .collect()
}
