pub mod available_threads;
pub mod pixel_to_complex_coords;
