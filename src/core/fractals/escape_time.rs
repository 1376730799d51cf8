use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;

pub const MAX_ITERATIONS: u32 = 2000;
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `step` from `z = 0` until the orbit leaves the escape radius or
/// the budget runs out.
#[inline]
pub fn escape_time<F>(c: Complex, step: F) -> IterationResult
where
    F: Fn(Complex, Complex) -> Complex,
{
    let mut z = Complex::default();

    for iteration in 0..MAX_ITERATIONS {
        // written this way round so a NaN orbit counts as escaped
        if !(z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED) {
            return IterationResult::Escaped(iteration);
        }
        z = step(z, c);
    }

    IterationResult::Bounded
}

pub(crate) fn square_viewport(real: f64, imag: f64, extent: f64) -> Viewport {
    Viewport::square(Complex { real, imag }, extent).expect("built-in viewport is valid")
}
