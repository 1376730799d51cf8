use crate::controllers::session::config::ConfigError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::fractal_kinds::UnknownFractalError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

/// Reasons the session refused a request. None of these change session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Busy,
    Config(ConfigError),
    PixelOutsideFrame(PixelToComplexCoordsError),
    Viewport(ViewportError),
    UnknownFractal(UnknownFractalError),
    ThreadPool(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a frame is still rendering"),
            Self::Config(err) => write!(f, "invalid session config: {}", err),
            Self::PixelOutsideFrame(err) => write!(f, "zoom target rejected: {}", err),
            Self::Viewport(err) => write!(f, "viewport change rejected: {}", err),
            Self::UnknownFractal(err) => write!(f, "{}", err),
            Self::ThreadPool(message) => {
                write!(f, "could not start render thread pool: {}", message)
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::PixelOutsideFrame(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::UnknownFractal(err) => Some(err),
            Self::Busy | Self::ThreadPool(_) => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PixelToComplexCoordsError> for SessionError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::PixelOutsideFrame(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<UnknownFractalError> for SessionError {
    fn from(err: UnknownFractalError) -> Self {
        Self::UnknownFractal(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for SessionError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}
