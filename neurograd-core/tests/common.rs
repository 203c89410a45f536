use neurograd_core::train::Example;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Installs a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Two Gaussian-free blobs: label 1 around (2, 2), label 0 around (-2, -2).
#[allow(dead_code)]
pub fn separable_blobs(n_per_class: usize, rng: &mut StdRng) -> Vec<Example> {
    let mut data = Vec::with_capacity(2 * n_per_class);
    for _ in 0..n_per_class {
        let jitter = |rng: &mut StdRng| rng.gen_range(-1.0..1.0);
        data.push(Example::new(
            vec![2.0 + jitter(rng), 2.0 + jitter(rng)],
            1.0,
        ));
        data.push(Example::new(
            vec![-2.0 + jitter(rng), -2.0 + jitter(rng)],
            0.0,
        ));
    }
    data
}
