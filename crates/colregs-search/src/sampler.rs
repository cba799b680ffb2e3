//! Candidate generation within scenario bounds.

use rand::Rng;

/// Uniform sample inside `[lower, upper]`, component-wise.
pub fn uniform<R: Rng>(rng: &mut R, lower: &[f64], upper: &[f64]) -> Vec<f64> {
    lower
        .iter()
        .zip(upper)
        .map(|(lo, hi)| rng.gen_range(*lo..=*hi))
        .collect()
}

/// Perturb `center` by up to `step` of each bound's width, clamped to the bounds.
pub fn perturb<R: Rng>(
    rng: &mut R,
    center: &[f64],
    lower: &[f64],
    upper: &[f64],
    step: f64,
) -> Vec<f64> {
    center
        .iter()
        .zip(lower.iter().zip(upper))
        .map(|(c, (lo, hi))| {
            let width = hi - lo;
            if width <= 0.0 {
                return *lo;
            }
            let offset = rng.gen_range(-1.0f64..=1.0) * step * width;
            (c + offset).clamp(*lo, *hi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_uniform_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let lower = [0.0, -5.0, 3.0];
        let upper = [1.0, 5.0, 3.0];
        for _ in 0..1000 {
            let v = uniform(&mut rng, &lower, &upper);
            assert!((0.0..=1.0).contains(&v[0]));
            assert!((-5.0..=5.0).contains(&v[1]));
            assert_eq!(v[2], 3.0);
        }
    }

    #[test]
    fn test_perturb_stays_near_and_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let lower = [0.0, 0.0];
        let upper = [10.0, 10.0];
        for _ in 0..1000 {
            let v = perturb(&mut rng, &[9.9, 5.0], &lower, &upper, 0.05);
            assert!(v[0] <= 10.0 && v[0] >= 9.4);
            assert!((v[1] - 5.0).abs() <= 0.5);
        }
    }
}
