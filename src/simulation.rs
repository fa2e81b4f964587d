use log::info;

use crate::codec;
use crate::coefficients::CoefficientVector;
use crate::estimator::{StepBounds, StepEstimator};
use crate::generator::CoefficientSource;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    pub t: f64,
    pub t_start: f64,
    pub t_end: f64,
}

impl SimulationClock {
    pub fn new(t_start: f64, t_end: f64) -> Self {
        Self { t: t_start, t_start, t_end }
    }

    /// Moves time forward; returns true when the window is exhausted, in
    /// which case `t` is already back at the start bound.
    pub fn advance(&mut self, amount: f64) -> bool {
        self.t += amount;
        if self.t > self.t_end {
            self.t = self.t_start;
            true
        } else {
            false
        }
    }

    /// Fraction of the window already covered, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        ((self.t - self.t_start) / (self.t_end - self.t_start)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub dt: f64,
}

/// Fired when the time window runs out and a new attractor is picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Reset {
    pub coefficients: CoefficientVector,
    pub code: String,
}

/// Everything the per-frame tick mutates. Only the tick writes to it.
#[derive(Clone, Debug)]
pub struct SimulationState {
    coefficients: CoefficientVector,
    clock: SimulationClock,
    estimator: StepEstimator,
    steps: usize,
    resets: u64,
}

impl SimulationState {
    pub fn new(
        coefficients: CoefficientVector,
        clock: SimulationClock,
        bounds: StepBounds,
        iters: usize,
        steps: usize,
    ) -> Self {
        Self {
            coefficients,
            clock,
            estimator: StepEstimator::new(bounds, iters),
            steps,
            resets: 0,
        }
    }

    pub fn coefficients(&self) -> &CoefficientVector {
        &self.coefficients
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn estimator(&self) -> &StepEstimator {
        &self.estimator
    }

    pub fn code(&self) -> String {
        codec::encode(&self.coefficients)
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Runs the step estimator for the current time. Must complete before
    /// the frame is handed to the renderer.
    pub fn begin_frame(&mut self, viewport: &Viewport) -> Frame {
        let dt = self.estimator.estimate(&self.coefficients, self.clock.t, viewport);
        Frame { t: self.clock.t, dt }
    }

    /// Advances time past the rendered frame and swaps in fresh
    /// coefficients when the window is exhausted.
    pub fn end_frame(&mut self, frame: &Frame, source: &mut dyn CoefficientSource) -> Option<Reset> {
        if !self.clock.advance(frame.dt * self.steps as f64) {
            return None;
        }
        self.coefficients = source.generate();
        self.resets += 1;
        let code = self.code();
        info!("Reset #{}: {} ({})", self.resets, code, self.coefficients);
        Some(Reset {
            coefficients: self.coefficients,
            code,
        })
    }
}
