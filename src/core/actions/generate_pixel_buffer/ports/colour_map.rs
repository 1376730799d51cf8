use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

/// Turns an escape-time result into a display colour. Must be pure.
pub trait ColourMap: Send + Sync {
    fn map(&self, result: IterationResult) -> Colour;

    fn display_name(&self) -> &str;
}
