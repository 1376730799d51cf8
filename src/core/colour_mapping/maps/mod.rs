pub mod hue_cycle;
