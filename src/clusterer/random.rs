use crate::clusterer::types::Cluster;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` empty clusters with centers drawn uniformly from [-1, 1)^2
pub fn random_clusters(count: usize, seed: u64) -> Vec<Cluster> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let x: f64 = rng.gen_range(-1.0..1.0);
            let y: f64 = rng.gen_range(-1.0..1.0);
            Cluster::empty_at(x, y)
        })
        .collect()
}
