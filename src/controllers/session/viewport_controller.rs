use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Owns the viewport of a render session and applies navigation to it.
///
/// Every mutation is all-or-nothing: a rejected zoom leaves the viewport as
/// it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    size: u32,
}

impl ViewportController {
    #[must_use]
    pub fn new(viewport: Viewport, size: u32) -> Self {
        Self { viewport, size }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn reset(&mut self, algorithm: &dyn FractalAlgorithm) {
        self.viewport = algorithm.initial_viewport();
    }

    pub fn pixel_to_complex(&self, pixel: Point) -> Result<Complex, PixelToComplexCoordsError> {
        pixel_to_complex_coords(pixel, self.size, &self.viewport)
    }

    pub fn recenter_and_zoom(&mut self, target: Complex, scale: f64) -> Result<(), ViewportError> {
        let zoomed = self.viewport.recenter_and_zoom(target, scale)?;

        if !resolves_adjacent_pixels(&zoomed, self.size) {
            return Err(ViewportError::ZoomLimitReached {
                width: zoomed.width(),
            });
        }

        self.viewport = zoomed;
        Ok(())
    }
}

/// f64 can only tell neighbouring pixels apart while the pixel step is
/// larger than the rounding error at the largest coordinate in view.
fn resolves_adjacent_pixels(viewport: &Viewport, size: u32) -> bool {
    let origin = viewport.origin();
    let far = viewport.far_corner();
    let magnitude = origin
        .real
        .abs()
        .max(origin.imag.abs())
        .max(far.real.abs())
        .max(far.imag.abs())
        .max(f64::MIN_POSITIVE);
    let step = viewport.width() / f64::from(size.max(1));

    step.is_finite() && step > magnitude * f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    fn controller(kind: FractalKinds, size: u32) -> ViewportController {
        ViewportController::new(kind.algorithm().initial_viewport(), size)
    }

    #[test]
    fn test_reset_restores_initial_viewport() {
        let mut controller = controller(FractalKinds::Mandelbrot, 100);
        controller
            .recenter_and_zoom(Complex::new(-0.5, 0.0), 0.5)
            .unwrap();

        controller.reset(&FractalKinds::Mandelbrot);
        assert_eq!(controller.viewport(), FractalKinds::Mandelbrot.initial_viewport());

        controller.reset(&FractalKinds::BurningShip);
        assert_eq!(controller.viewport(), FractalKinds::BurningShip.initial_viewport());
    }

    #[test]
    fn test_zoom_click_on_center_pixel() {
        let mut controller = controller(FractalKinds::Mandelbrot, 100);
        let target = controller.pixel_to_complex(Point::new(50, 50)).unwrap();

        assert_eq!(target, Complex::new(-0.5, 0.0));

        controller.recenter_and_zoom(target, 0.5).unwrap();

        assert_eq!(controller.viewport().width(), 1.5);
        assert_eq!(controller.viewport().center(), target);
    }

    #[test]
    fn test_two_zooms_on_same_center_quarter_the_width() {
        let mut controller = controller(FractalKinds::Tricorn, 64);
        let center = controller.viewport().center();

        controller.recenter_and_zoom(center, 0.5).unwrap();
        controller.recenter_and_zoom(center, 0.5).unwrap();

        assert_eq!(controller.viewport().width(), 1.0);
        assert_eq!(controller.viewport().center(), center);
    }

    #[test]
    fn test_pixel_outside_frame_is_rejected() {
        let controller = controller(FractalKinds::Mandelbrot, 100);

        assert!(controller.pixel_to_complex(Point::new(100, 3)).is_err());
        assert!(controller.pixel_to_complex(Point::new(3, -1)).is_err());
    }

    #[test]
    fn test_bad_scale_leaves_viewport_unchanged() {
        let mut controller = controller(FractalKinds::Mandelbrot, 100);
        let before = controller.viewport();

        assert_eq!(
            controller.recenter_and_zoom(Complex::default(), 0.0),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(controller.viewport(), before);
    }

    #[test]
    fn test_deep_zoom_stops_at_precision_limit() {
        let mut controller = controller(FractalKinds::Mandelbrot, 100);
        let target = Complex::new(-0.743_643_887, 0.131_825_904);
        let mut accepted = 0;

        let rejection = loop {
            let before = controller.viewport();

            match controller.recenter_and_zoom(target, 0.5) {
                Ok(()) => accepted += 1,
                Err(err) => {
                    assert_eq!(controller.viewport(), before);
                    break err;
                }
            }

            assert!(accepted < 1100, "zoom never hit the precision limit");
        };

        assert!(matches!(rejection, ViewportError::ZoomLimitReached { .. }));
        assert!(accepted > 30);

        let viewport = controller.viewport();
        let first = controller.pixel_to_complex(Point::new(0, 0)).unwrap();
        let second = controller.pixel_to_complex(Point::new(1, 1)).unwrap();
        assert!(viewport.origin().is_finite());
        assert_ne!(first, second);
    }
}
