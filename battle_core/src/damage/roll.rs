//! RollSource - Where the damage formula gets its randomness

use rand::Rng;

/// Source of the two uniform draws made per attack
///
/// Every `rand::Rng` is a `RollSource`. Use [`FixedRolls`] to script exact
/// draws when a deterministic result is needed.
pub trait RollSource {
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform value between `low` and `high` (inclusive)
    fn between(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RollSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn between(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            high
        } else {
            self.gen_range(low..=high)
        }
    }
}

/// Scripted roll source that always returns the same draws
///
/// `unit` is the crit roll; `fraction` positions the variance roll inside
/// `[low, high]` (0.0 = low, 1.0 = high).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRolls {
    pub unit: f64,
    pub fraction: f64,
}

impl FixedRolls {
    pub fn new(unit: f64, fraction: f64) -> Self {
        FixedRolls { unit, fraction }
    }

    /// Never crits, always rolls the top of the variance range
    pub fn max_no_crit() -> Self {
        FixedRolls::new(0.999, 1.0)
    }

    /// Always crits (for any positive crit chance), top of the variance range
    pub fn max_crit() -> Self {
        FixedRolls::new(0.0, 1.0)
    }
}

impl RollSource for FixedRolls {
    fn unit(&mut self) -> f64 {
        self.unit
    }

    fn between(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
        for _ in 0..1000 {
            let u = RollSource::unit(&mut rng);
            assert!((0.0..1.0).contains(&u));

            let v = rng.between(0.85, 1.0);
            assert!((0.85..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_degenerate_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert!((rng.between(1.0, 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fixed_rolls() {
        let mut rolls = FixedRolls::new(0.5, 0.0);
        assert!((rolls.unit() - 0.5).abs() < f64::EPSILON);
        assert!((rolls.between(0.85, 1.0) - 0.85).abs() < f64::EPSILON);

        let mut top = FixedRolls::max_no_crit();
        assert!((top.between(0.85, 1.0) - 1.0).abs() < f64::EPSILON);
    }
}
