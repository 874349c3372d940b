//! RNG module - small deterministic generator for spawn timing and obstacle kinds
//!
//! A seeded LCG keeps sessions reproducible in tests and benchmarks while the
//! binary seeds it from the wall clock.

use crate::types::ObstacleKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of a power-of-two LCG cycle with short periods (bit 0
    /// alternates), so the value is taken from the high half.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Uniform choice between the two obstacle variants.
    pub fn next_obstacle_kind(&mut self) -> ObstacleKind {
        ObstacleKind::from_index(self.next_range(2))
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(40) < 40);
        }
    }

    #[test]
    fn test_obstacle_kinds_both_appear_without_strict_alternation() {
        let mut rng = SimpleRng::new(99);
        let kinds: Vec<ObstacleKind> = (0..200).map(|_| rng.next_obstacle_kind()).collect();

        let cactus = kinds.iter().filter(|k| **k == ObstacleKind::Cactus).count();
        assert!(cactus > 50 && cactus < 150, "cactus count {}", cactus);

        // A plain `% 2` on the LCG output would alternate every draw.
        let alternates = kinds.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternates);
    }
}
