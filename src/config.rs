use clap::Parser;
use log::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::estimator::StepBounds;
use crate::render::MAX_GPU_ITERATIONS;

/// Largest grid axis; both axes become texture dimensions.
pub const MAX_GRID_AXIS: usize = u16::MAX as usize;

/// Animated quadratic chaos maps
///
/// Renders the point cloud of an 18-coefficient quadratic map as it sweeps
/// through time. Pass a six letter code (optionally as `#CODE` or a full
/// share link) to start from a known attractor.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Share code to start from, e.g. `#MJQXAM`
    pub code: Option<String>,

    /// Map iterations per rendered column
    #[arg(long, default_value_t = Settings::default().iters)]
    pub iters: usize,

    /// Time offsets per frame (columns of the point grid)
    #[arg(long, default_value_t = Settings::default().steps)]
    pub steps: usize,

    /// First time value of the sweep
    #[arg(long, default_value_t = Settings::default().t_start, allow_negative_numbers = true)]
    pub t_start: f64,

    /// Time value past which a new attractor is picked
    #[arg(long, default_value_t = Settings::default().t_end, allow_negative_numbers = true)]
    pub t_end: f64,

    /// Point size in logical pixels, multiplied by the display scale
    #[arg(long, default_value_t = Settings::default().point_size)]
    pub point_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub iters: usize,
    pub steps: usize,
    pub t_start: f64,
    pub t_end: f64,
    pub bounds: StepBounds,
    pub point_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iters: 400,
            steps: 250,
            t_start: -3.0,
            t_end: 3.0,
            bounds: StepBounds::default(),
            point_size: 1.5,
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> ConfigResult<Self> {
        let settings = Self {
            iters: cli.iters,
            steps: cli.steps,
            t_start: cli.t_start,
            t_end: cli.t_end,
            point_size: cli.point_size,
            ..Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [("iters", self.iters), ("steps", self.steps)] {
            if value == 0 {
                return Err(ConfigError::ZeroCount { name });
            }
            if value > MAX_GRID_AXIS {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    limit: MAX_GRID_AXIS,
                });
            }
        }
        for (name, value) in [("t_start", self.t_start), ("t_end", self.t_end)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if !(self.t_start < self.t_end) {
            return Err(ConfigError::EmptyWindow {
                t_start: self.t_start,
                t_end: self.t_end,
            });
        }
        let b = &self.bounds;
        if !(0.0 < b.min && b.min <= b.step && b.step <= b.max) {
            return Err(ConfigError::StepBounds {
                min: b.min,
                step: b.step,
                max: b.max,
            });
        }
        if !self.point_size.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "point_size",
                value: self.point_size as f64,
            });
        }
        if !(self.point_size > 0.0) {
            return Err(ConfigError::PointSize(self.point_size));
        }
        if self.iters > MAX_GPU_ITERATIONS {
            warn!(
                "iters = {} is past the GPU cap of {}; deeper rows repeat the capped position",
                self.iters, MAX_GPU_ITERATIONS
            );
        }
        Ok(())
    }
}
