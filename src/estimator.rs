//! Adaptive time step.
//!
//! Each frame the trajectory seeded at `(t, t)` is walked on the CPU. The
//! first sample that lands on screen is compared with the sample at the same
//! iteration index from the previous frame: the further it moved, the smaller
//! the next step. When nothing is visible time is pushed forward at the
//! maximum rate.

use crate::coefficients::CoefficientVector;
use crate::viewport::Viewport;

pub const COORDINATE_LIMIT: f64 = 10_000.0; // clamp applied after every map step

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepBounds {
    pub step: f64,    // baseline the rolling delta relaxes towards
    pub min: f64,
    pub max: f64,     // used while the whole trajectory is off screen
    pub epsilon: f64, // added to the squared distance
}

impl Default for StepBounds {
    fn default() -> Self {
        Self {
            step: 1e-5,
            min: 1e-7,
            max: 1e-3,
            epsilon: 1e-5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StepEstimator {
    bounds: StepBounds,
    iters: usize,
    rolling_delta: f64,
    history: Vec<(f64, f64)>,
}

impl StepEstimator {
    pub fn new(bounds: StepBounds, iters: usize) -> Self {
        Self {
            bounds,
            iters,
            rolling_delta: bounds.step,
            history: vec![(0.0, 0.0); iters],
        }
    }

    pub fn rolling_delta(&self) -> f64 {
        self.rolling_delta
    }

    /// Sample cached for `index` by the most recent frame that reached it.
    pub fn previous_sample(&self, index: usize) -> Option<(f64, f64)> {
        self.history.get(index).copied()
    }

    /// Computes the time increment for the frame at time `t`.
    pub fn estimate(&mut self, coefficients: &CoefficientVector, t: f64, viewport: &Viewport) -> f64 {
        let b = self.bounds;
        self.rolling_delta = self.rolling_delta * 0.99 + b.step * 0.01;

        let mut found = false;
        let (mut x, mut y) = (t, t);
        for i in 0..self.iters {
            let (nx, ny) = coefficients.apply(x, y, t);
            x = clamp_coordinate(nx);
            y = clamp_coordinate(ny);

            let visible = viewport.contains(x, y);
            if visible {
                let (px, py) = self.history[i];
                let dist_sq = (x - px) * (x - px) + (y - py) * (y - py);
                let candidate = (b.step / (dist_sq + b.epsilon)).max(b.min);
                self.rolling_delta = self.rolling_delta.min(candidate);
            }
            self.history[i] = (x, y);

            if visible {
                found = true;
                break;
            }
        }

        // `min` drops NaN candidates, so a NaN here comes from the bounds or
        // from the rolling delta itself.
        if self.rolling_delta.is_nan() {
            self.rolling_delta = b.step;
        }

        if found {
            self.rolling_delta.clamp(b.min, b.max)
        } else {
            b.max
        }
    }
}

fn clamp_coordinate(v: f64) -> f64 {
    v.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::COEFFICIENT_COUNT;
    use approx::assert_relative_eq;

    fn coefficients(values: [i8; COEFFICIENT_COUNT]) -> CoefficientVector {
        CoefficientVector::new(values)
    }

    #[test]
    fn off_screen_trajectory_takes_max_step() {
        // x' = x² + t², y' = y² + t²: escapes to the clamp immediately.
        let mut values = [0; COEFFICIENT_COUNT];
        values[0] = 1;
        values[2] = 1;
        values[10] = 1;
        values[11] = 1;
        let c = coefficients(values);
        let mut estimator = StepEstimator::new(StepBounds::default(), 64);
        let dt = estimator.estimate(&c, 3.0, &Viewport::new(5.0, 5.0));
        assert_eq!(dt, StepBounds::default().max);
    }

    #[test]
    fn diverging_samples_are_clamped() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[0] = 1;
        values[2] = 1;
        values[10] = 1;
        values[11] = 1;
        let c = coefficients(values);
        let mut estimator = StepEstimator::new(StepBounds::default(), 8);
        estimator.estimate(&c, 3.0, &Viewport::new(5.0, 5.0));
        // 18, 333, then past the limit on the third application.
        assert_eq!(estimator.previous_sample(0), Some((18.0, 18.0)));
        assert_eq!(estimator.previous_sample(1), Some((333.0, 333.0)));
        assert_eq!(
            estimator.previous_sample(7),
            Some((COORDINATE_LIMIT, COORDINATE_LIMIT))
        );
    }

    #[test]
    fn nan_time_falls_back_to_max_step() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[17] = 1;
        let c = coefficients(values);
        let bounds = StepBounds::default();
        let mut estimator = StepEstimator::new(bounds, 4);
        let vp = Viewport::new(5.0, 5.0);
        assert_eq!(estimator.estimate(&c, f64::NAN, &vp), bounds.max);
        assert!(estimator.rolling_delta().is_finite());

        // A finite time afterwards is estimated normally again.
        let dt = estimator.estimate(&c, 0.5, &vp);
        assert!(dt >= bounds.min && dt <= bounds.max);
    }

    #[test]
    fn stationary_point_keeps_baseline() {
        // x' = t, y' = t: the first sample is (t, t) and never moves.
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[17] = 1;
        let c = coefficients(values);
        let bounds = StepBounds::default();
        let mut estimator = StepEstimator::new(bounds, 16);
        let vp = Viewport::new(5.0, 5.0);
        estimator.estimate(&c, 0.5, &vp);
        let dt = estimator.estimate(&c, 0.5, &vp);
        assert_relative_eq!(dt, bounds.step, max_relative = 1e-9);
        assert_eq!(estimator.previous_sample(0), Some((0.5, 0.5)));
    }

    #[test]
    fn large_motion_shrinks_the_step() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[17] = -1;
        let c = coefficients(values);
        let bounds = StepBounds::default();
        let mut estimator = StepEstimator::new(bounds, 8);
        let vp = Viewport::new(5.0, 5.0);
        estimator.estimate(&c, -2.0, &vp);
        // The first visible sample jumps from (-2, 2) to (2, -2).
        let dt = estimator.estimate(&c, 2.0, &vp);
        assert!(dt < bounds.step);
        assert!(dt >= bounds.min);
    }

    #[test]
    fn search_stops_at_first_visible_sample() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[17] = 1;
        let c = coefficients(values);
        let mut estimator = StepEstimator::new(StepBounds::default(), 4);
        estimator.estimate(&c, 1.0, &Viewport::new(5.0, 5.0));
        assert_eq!(estimator.previous_sample(0), Some((1.0, 1.0)));
        assert_eq!(estimator.previous_sample(1), Some((0.0, 0.0)));
    }

    #[test]
    fn rolling_delta_relaxes_towards_baseline() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[8] = 1;
        values[17] = 1;
        let c = coefficients(values);
        let bounds = StepBounds::default();
        let mut estimator = StepEstimator::new(bounds, 4);
        let vp = Viewport::new(5.0, 5.0);
        estimator.estimate(&c, -4.0, &vp);
        estimator.estimate(&c, 4.0, &vp);
        let shrunk = estimator.rolling_delta();
        assert!(shrunk < bounds.step);
        estimator.estimate(&c, 4.0, &vp);
        assert!(estimator.rolling_delta() > shrunk);
    }
}
