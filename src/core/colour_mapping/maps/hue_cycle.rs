use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::hsb::hsb_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

const BASE_HUE: f64 = 0.7;
const ITERATIONS_PER_HUE_CYCLE: f64 = 200.0;

/// Fully saturated hue wheel starting at violet, one turn every 200
/// iterations. Bounded points are black.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HueCycleColourMap;

impl ColourMap for HueCycleColourMap {
    fn map(&self, result: IterationResult) -> Colour {
        match result {
            IterationResult::Bounded => Colour::BLACK,
            IterationResult::Escaped(iterations) => {
                let hue = BASE_HUE + f64::from(iterations) / ITERATIONS_PER_HUE_CYCLE;
                hsb_to_rgb(hue, 1.0, 1.0)
            }
        }
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}
