use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::util::available_threads::available_threads;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

pub const DEFAULT_SIZE: u32 = 800;
pub const MAX_SIZE: u32 = 16_384;
pub const DEFAULT_ZOOM_SCALE: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    InvalidSize { size: u32 },
    InvalidZoomScale { scale: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "frame size must be between 1 and {}: {}", MAX_SIZE, size)
            }
            Self::InvalidZoomScale { scale } => {
                write!(f, "zoom scale must be finite and positive: {}", scale)
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings fixed for the lifetime of a render session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    /// Width and height of the square render surface in pixels.
    pub size: u32,
    /// Factor applied to the viewport on every zoom click.
    pub zoom_scale: f64,
    /// Worker threads computing rows.
    pub threads: NonZeroUsize,
    /// Fractal shown when the session starts.
    pub fractal: FractalKinds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            threads: available_threads(),
            fractal: FractalKinds::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::InvalidSize { size: self.size });
        }

        if !self.zoom_scale.is_finite() || self.zoom_scale <= 0.0 {
            return Err(ConfigError::InvalidZoomScale {
                scale: self.zoom_scale,
            });
        }

        Ok(())
    }
}
