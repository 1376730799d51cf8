use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
    NotSquare { width: f64, height: f64 },
    NonFinite,
    InvalidScale { scale: f64 },
    ZoomLimitReached { width: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NotSquare { width, height } => {
                write!(f, "viewport must be square: {}x{}", width, height)
            }
            Self::NonFinite => write!(f, "viewport coordinates must be finite"),
            Self::InvalidScale { scale } => {
                write!(f, "zoom scale must be finite and positive: {}", scale)
            }
            Self::ZoomLimitReached { width } => {
                write!(
                    f,
                    "zoom limit reached: width {} can no longer resolve adjacent pixels",
                    width
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Square region of the complex plane mapped onto the pixel grid.
///
/// `origin` is the corner with the smallest real and imaginary parts, which is
/// the corner pixel `(0, 0)` maps to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    extent: f64,
}

impl Viewport {
    pub fn new(origin: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !origin.is_finite() || !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::NonFinite);
        }

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if width != height {
            return Err(ViewportError::NotSquare { width, height });
        }

        Ok(Self {
            origin,
            extent: width,
        })
    }

    pub fn square(origin: Complex, size: f64) -> Result<Self, ViewportError> {
        Self::new(origin, size, size)
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn far_corner(&self) -> Complex {
        Complex {
            real: self.origin.real + self.extent,
            imag: self.origin.imag + self.extent,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.origin.real + self.extent / 2.0,
            imag: self.origin.imag + self.extent / 2.0,
        }
    }

    /// Moves the centre to `target` and multiplies both sides by `scale`.
    pub fn recenter_and_zoom(&self, target: Complex, scale: f64) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        let new_width = self.width() * scale;
        let new_height = self.height() * scale;
        let origin = Complex {
            real: target.real - new_width / 2.0,
            imag: target.imag - new_height / 2.0,
        };

        Self::new(origin, new_width, new_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let origin = Complex::new(-2.0, -1.5);
        let viewport = Viewport::new(origin, 3.0, 3.0).unwrap();

        assert_eq!(viewport.origin(), origin);
        assert_eq!(viewport.width(), 3.0);
        assert_eq!(viewport.height(), 3.0);
        assert_eq!(viewport.far_corner(), Complex::new(1.0, 1.5));
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        let origin = Complex::default();

        assert_eq!(
            Viewport::new(origin, 0.0, 0.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 0.0
            })
        );
        assert_eq!(
            Viewport::new(origin, -4.0, -4.0),
            Err(ViewportError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
        assert_eq!(
            Viewport::new(origin, 1.0, -1.0),
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_must_be_square() {
        assert_eq!(
            Viewport::new(Complex::default(), 3.5, 2.0),
            Err(ViewportError::NotSquare {
                width: 3.5,
                height: 2.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_values() {
        assert_eq!(
            Viewport::square(Complex::new(f64::NAN, 0.0), 1.0),
            Err(ViewportError::NonFinite)
        );
        assert_eq!(
            Viewport::square(Complex::default(), f64::INFINITY),
            Err(ViewportError::NonFinite)
        );
    }

    #[test]
    fn test_viewport_center() {
        let viewport = Viewport::square(Complex::new(-2.0, -2.5), 4.0).unwrap();

        assert_eq!(viewport.center(), Complex::new(0.0, -0.5));
    }

    #[test]
    fn test_recenter_and_zoom_formula() {
        let viewport = Viewport::square(Complex::new(-2.0, -1.5), 3.0).unwrap();
        let zoomed = viewport
            .recenter_and_zoom(Complex::new(-0.5, 0.0), 0.5)
            .unwrap();

        assert_eq!(zoomed.width(), 1.5);
        assert_eq!(zoomed.height(), 1.5);
        assert_eq!(zoomed.origin(), Complex::new(-1.25, -0.75));
        assert_eq!(zoomed.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_recenter_and_zoom_twice_on_center_quarters_width() {
        let viewport = Viewport::square(Complex::new(-2.0, -2.0), 4.0).unwrap();
        let center = viewport.center();

        let once = viewport.recenter_and_zoom(center, 0.5).unwrap();
        let twice = once.recenter_and_zoom(center, 0.5).unwrap();

        assert_eq!(twice.width(), 1.0);
        assert_eq!(twice.center(), center);
    }

    #[test]
    fn test_recenter_and_zoom_out() {
        let viewport = Viewport::square(Complex::new(0.0, 0.0), 1.0).unwrap();
        let zoomed = viewport
            .recenter_and_zoom(Complex::new(0.5, 0.5), 2.0)
            .unwrap();

        assert_eq!(zoomed.origin(), Complex::new(-0.5, -0.5));
        assert_eq!(zoomed.width(), 2.0);
    }

    #[test]
    fn test_recenter_and_zoom_rejects_bad_scale() {
        let viewport = Viewport::square(Complex::default(), 1.0).unwrap();

        assert_eq!(
            viewport.recenter_and_zoom(Complex::default(), 0.0),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            viewport.recenter_and_zoom(Complex::default(), -0.5),
            Err(ViewportError::InvalidScale { scale: -0.5 })
        );
        assert!(matches!(
            viewport.recenter_and_zoom(Complex::default(), f64::NAN),
            Err(ViewportError::InvalidScale { .. })
        ));
    }

    #[test]
    fn test_recenter_and_zoom_rejects_non_finite_target() {
        let viewport = Viewport::square(Complex::default(), 1.0).unwrap();

        assert_eq!(
            viewport.recenter_and_zoom(Complex::new(f64::INFINITY, 0.0), 0.5),
            Err(ViewportError::NonFinite)
        );
    }
}
