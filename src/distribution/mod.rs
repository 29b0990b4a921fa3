//! A tool to generate noise from an explicit random source.

use rand::Rng;
use rand_distr::{Normal, Distribution};


/// Samples the normal distribution at the given mean and standard deviation using
/// the supplied generator, if standard deviation is `0.` the mean is always returned
pub fn gaussian_sample<R: Rng>(mean: f32, std: f32, rng: &mut R) -> f32 {
    if std == 0.0 {
        return mean;
    }

    let normal = Normal::new(mean, std).unwrap();

    normal.sample(rng)
}
