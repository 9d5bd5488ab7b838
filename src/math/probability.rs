//! Random draws shared by the scheduler and the stochastic patterns

use rand::Rng;

/// Weighted random selection over non-negative weights
///
/// Returns an index into `weights` using the cumulative distribution. A zero
/// total selects index 0.
pub fn weighted_choice<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut rand_val = rng.random::<f64>() * total;
    for (i, &weight) in weights.iter().enumerate() {
        // Zero weights are never selected, even by a zero draw
        if weight <= 0.0 {
            continue;
        }
        rand_val -= weight;
        if rand_val <= 0.0 {
            return i;
        }
    }
    weights
        .iter()
        .rposition(|&weight| weight > 0.0)
        .unwrap_or_default()
}

/// Uniform point inside the unit disc by rejection sampling
pub fn sample_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let x = rng.random_range(-1.0..=1.0);
        let y = rng.random_range(-1.0..=1.0);
        if x * x + y * y <= 1.0 {
            return (x, y);
        }
    }
}
