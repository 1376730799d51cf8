use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::{escape_time, square_viewport};

/// `z -> conj(z)² + c`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TricornAlgorithm;

impl FractalAlgorithm for TricornAlgorithm {
    fn initial_viewport(&self) -> Viewport {
        square_viewport(-2.0, -2.0, 4.0)
    }

    fn num_iterations(&self, c: Complex) -> IterationResult {
        escape_time(c, |z, c| {
            let z = z.conjugate();
            z * z + c
        })
    }

    fn display_name(&self) -> &'static str {
        "Tricorn"
    }
}
