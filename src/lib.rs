//! Animated chaos equations: quadratic maps of `(x, y, t)` rendered as a
//! point cloud that sweeps through time.

pub mod codec;
pub mod coefficients;
pub mod config;
pub mod driver;
pub mod error;
pub mod estimator;
pub mod fragment;
pub mod generator;
pub mod hud;
pub mod render;
pub mod simulation;
pub mod viewport;

pub use coefficients::{Axis, CoefficientVector};
pub use config::{Cli, Settings};
pub use driver::AnimationDriver;
pub use error::{ConfigError, RenderError};
pub use estimator::{StepBounds, StepEstimator};
pub use fragment::{FragmentStore, LaunchFragment};
pub use generator::{ChaosGenerator, CoefficientSource};
pub use simulation::{Frame, Reset, SimulationClock, SimulationState};
pub use viewport::{Viewport, ViewportManager};
