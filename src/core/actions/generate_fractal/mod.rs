pub mod generate_fractal;
pub mod generate_row;
pub mod ports;
