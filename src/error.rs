use thiserror::Error;

/// Rejected settings, reported before the window loop starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },
    #[error("{name} = {value} exceeds the texture limit of {limit}")]
    TooLarge {
        name: &'static str,
        value: usize,
        limit: usize,
    },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("time window is empty: t_start = {t_start}, t_end = {t_end}")]
    EmptyWindow { t_start: f64, t_end: f64 },
    #[error("step bounds must satisfy 0 < min <= step <= max, got min = {min}, step = {step}, max = {max}")]
    StepBounds { min: f64, step: f64, max: f64 },
    #[error("point size must be positive, got {0}")]
    PointSize(f32),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("point material failed to compile: {0}")]
    Material(#[from] macroquad::Error),
    #[error("palette of {width}x{height} texels does not fit a texture")]
    Palette { width: usize, height: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RenderResult<T> = Result<T, RenderError>;
