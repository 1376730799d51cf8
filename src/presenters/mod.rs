pub mod file;
pub mod frame_buffer;
pub mod logging;
