use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

/// Computes the escape-time results for every pixel of row `y`.
///
/// `y` must lie in `[0, size)`; the imaginary coordinate is shared by the
/// whole row so it is mapped once.
pub fn generate_row(
    algorithm: &dyn FractalAlgorithm,
    viewport: &Viewport,
    size: u32,
    y: u32,
) -> Vec<IterationResult> {
    debug_assert!(y < size, "row {} outside {}-row frame", y, size);

    let origin = viewport.origin();
    let far = viewport.far_corner();
    let imag = pixel_to_complex(origin.imag, far.imag, size, y);

    (0..size)
        .map(|x| {
            let real = pixel_to_complex(origin.real, far.real, size, x);
            algorithm.num_iterations(Complex { real, imag })
        })
        .collect()
}
