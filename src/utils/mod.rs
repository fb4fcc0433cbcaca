pub mod line_buffer;
pub mod paths;
pub mod unicode;
