use macroquad::rand;

use crate::coefficients::{CoefficientVector, COEFFICIENT_COUNT};

/// Anything able to hand out a fresh coefficient vector on reset.
pub trait CoefficientSource {
    fn generate(&mut self) -> CoefficientVector;
}

/// Uniform random coefficients drawn from macroquad's global generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaosGenerator;

impl CoefficientSource for ChaosGenerator {
    fn generate(&mut self) -> CoefficientVector {
        random_coefficients()
    }
}

/// Each slot is independently -1, 0 or 1 with probability 1/3.
pub fn random_coefficients() -> CoefficientVector {
    let mut values = [0i8; COEFFICIENT_COUNT];
    for slot in values.iter_mut() {
        *slot = rand::gen_range(0u32, 3) as i8 - 1;
    }
    CoefficientVector::new(values)
}

/// Seeds the global generator from wall clock time and returns the seed used.
pub fn seed_rng() -> u64 {
    let mut seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;

    // Murmur style finalizer so neighbouring launch times diverge quickly.
    seed = seed.wrapping_mul(0x5bd1e995);
    seed = seed.wrapping_add(0x5bd1e995);
    seed ^= seed >> 15;
    seed = seed.wrapping_mul(0x5bd1e995);

    rand::srand(seed);
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_ternary() {
        for _ in 0..200 {
            let c = random_coefficients();
            assert!(c.values().iter().all(|v| (-1..=1).contains(v)));
        }
    }

    #[test]
    fn every_slot_is_roughly_uniform() {
        // 5% of the expected count is about six standard deviations, so the
        // check holds for whatever state the shared generator is in.
        const SAMPLES: usize = 30_000;
        let mut counts = [[0usize; 3]; COEFFICIENT_COUNT];
        let mut source = ChaosGenerator;
        for _ in 0..SAMPLES {
            let c = source.generate();
            for (slot, &v) in c.values().iter().enumerate() {
                counts[slot][(v + 1) as usize] += 1;
            }
        }
        let expected = SAMPLES as f64 / 3.0;
        for slot in counts.iter() {
            for &count in slot.iter() {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "slot counts {:?} too skewed", slot);
            }
        }
    }
}
