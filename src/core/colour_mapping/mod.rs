pub mod hsb;
pub mod maps;
