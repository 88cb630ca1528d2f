//! RNG module - seedable randomness for shuffles and new chips
//!
//! Every random decision in the engine goes through [`RandomSource`], so a
//! fixed seed replays a level exactly. [`SimpleRng`] is the default source;
//! [`ChipPicker`] turns it into chip colors drawn from the level palette.

use crate::types::ChipType;

/// Uniform integer source injected into shuffles and chip generation.
pub trait RandomSource {
    /// Next raw value from the source.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    ///
    /// Draws below `2^32 mod max` are rejected so every residue is equally
    /// likely.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max = 0");
        let threshold = max.wrapping_neg() % max;
        loop {
            let v = self.next_u32();
            if v >= threshold {
                return v % max;
            }
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a fixed point of the generator.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    fn step(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 16
    }

    /// Current internal state; feeding it back to [`SimpleRng::new`]
    /// continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    /// Two steps, high halves concatenated.
    fn next_u32(&mut self) -> u32 {
        let hi = self.step();
        let lo = self.step();
        (hi << 16) | lo
    }
}

/// Draws chip colors uniformly from a level's enabled palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPicker {
    palette: Vec<ChipType>,
}

impl ChipPicker {
    /// `palette` must hold at least one colored chip; `Empty` entries are
    /// dropped.
    pub fn new(palette: &[ChipType]) -> Self {
        let palette: Vec<ChipType> = palette.iter().copied().filter(|c| !c.is_empty()).collect();
        assert!(!palette.is_empty(), "chip palette has no colored chips");
        Self { palette }
    }

    pub fn palette(&self) -> &[ChipType] {
        &self.palette
    }

    pub fn pick(&self, rng: &mut dyn RandomSource) -> ChipType {
        let i = rng.next_range(self.palette.len() as u32) as usize;
        self.palette[i]
    }
}

impl Default for ChipPicker {
    fn default() -> Self {
        Self::new(&ChipType::COLORS)
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
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rng_state_resumes_sequence() {
        let mut rng = SimpleRng::new(7);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_next_u32_uses_full_width() {
        let mut rng = SimpleRng::new(12345);
        assert!((0..1000).any(|_| rng.next_u32() > u32::from(u16::MAX)));
    }

    #[test]
    fn test_next_range_reaches_large_values() {
        let mut rng = SimpleRng::new(12345);
        let max = (0..100_000).map(|_| rng.next_range(200_000)).max().unwrap();
        assert!(max >= 65_536, "largest draw was {}", max);
        assert!(max < 200_000);
    }

    #[test]
    fn test_next_range_is_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 3];
        for _ in 0..30_000 {
            counts[rng.next_range(3) as usize] += 1;
        }
        for c in counts {
            assert!((9_000..11_000).contains(&c), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_picker_covers_palette() {
        let picker = ChipPicker::default();
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let chip = picker.pick(&mut rng);
            let i = ChipType::COLORS.iter().position(|c| *c == chip).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s), "every color should be drawn: {:?}", seen);
    }

    #[test]
    fn test_picker_drops_empty_and_respects_subset() {
        let picker = ChipPicker::new(&[ChipType::Empty, ChipType::Red, ChipType::Blue]);
        assert_eq!(picker.palette(), &[ChipType::Red, ChipType::Blue]);

        let mut rng = SimpleRng::new(11);
        for _ in 0..50 {
            let chip = picker.pick(&mut rng);
            assert!(chip == ChipType::Red || chip == ChipType::Blue);
        }
    }
}
