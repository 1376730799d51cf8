use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::{escape_time, square_viewport};

/// `z -> z² + c`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MandelbrotAlgorithm;

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn initial_viewport(&self) -> Viewport {
        square_viewport(-2.0, -1.5, 3.0)
    }

    fn num_iterations(&self, c: Complex) -> IterationResult {
        escape_time(c, |z, c| z * z + c)
    }

    fn display_name(&self) -> &'static str {
        "Mandelbrot"
    }
}
