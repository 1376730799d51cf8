use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;

/// An escape-time fractal: a pure per-point recurrence plus its home viewport.
///
/// Implementations hold no mutable state, so one instance may be shared by
/// every row task of a frame.
pub trait FractalAlgorithm: Send + Sync {
    fn initial_viewport(&self) -> Viewport;

    fn num_iterations(&self, c: Complex) -> IterationResult;

    fn display_name(&self) -> &'static str;
}
