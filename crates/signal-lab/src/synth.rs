//! Synthetic signal generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Standard deviation of the additive Gaussian noise
pub const NOISE_SCALE: f64 = 0.05;

/// Generate `n` samples of a 5 Hz sine plus a 50 Hz square wave plus noise,
/// over one second (`t` evenly spaced from 0 to 1 inclusive).
pub fn generate_synthetic(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    (0..n)
        .map(|i| {
            let t = i as f64 * step;
            let sine = (2.0 * PI * 5.0 * t).sin();
            let square = sign((2.0 * PI * 50.0 * t).sin());
            0.6 * sine + 0.3 * square + NOISE_SCALE * standard_normal(&mut rng)
        })
        .collect()
}

/// -1, 0 or 1
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Box-Muller transform
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Keep u1 away from zero so ln stays finite
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_determinism() {
        let a = generate_synthetic(500, 7);
        let b = generate_synthetic(500, 7);
        let c = generate_synthetic(500, 8);

        assert_eq!(a.len(), 500);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_amplitude_bounded() {
        // 0.6 + 0.3 plus a generous noise margin
        let signal = generate_synthetic(5000, 0);
        assert!(signal.iter().all(|v| v.is_finite() && v.abs() < 1.5));
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_synthetic(0, 1).is_empty());
        let one = generate_synthetic(1, 1);
        // t = 0: both waves are zero, only noise remains
        assert!(one[0].abs() < 0.5);
    }

    #[test]
    fn test_noise_statistics() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<f64> = (0..20_000).map(|_| standard_normal(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.05);
        assert!((var - 1.0).abs() < 0.1);
    }
}
