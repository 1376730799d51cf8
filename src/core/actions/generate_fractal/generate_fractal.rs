use crate::core::actions::generate_fractal::generate_row::generate_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;

/// Sequentially computes a whole `size × size` frame in row-major order.
pub fn generate_fractal(
    algorithm: &dyn FractalAlgorithm,
    viewport: &Viewport,
    size: u32,
) -> Vec<IterationResult> {
    (0..size)
        .flat_map(|y| generate_row(algorithm, viewport, size, y))
        .collect()
}
