use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, size: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x, point.y, size, size
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linearly maps a pixel index on one axis onto `[lo, hi)`.
#[must_use]
pub fn pixel_to_complex(lo: f64, hi: f64, pixel_size: u32, pixel_index: u32) -> f64 {
    lo + (f64::from(pixel_index) / f64::from(pixel_size)) * (hi - lo)
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    size: u32,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_position.is_within_square(size) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            size,
        });
    }

    let origin = viewport.origin();
    let far = viewport.far_corner();

    Ok(Complex {
        real: pixel_to_complex(origin.real, far.real, size, pixel_position.x as u32),
        imag: pixel_to_complex(origin.imag, far.imag, size, pixel_position.y as u32),
    })
}
