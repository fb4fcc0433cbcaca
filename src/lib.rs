pub mod config;
pub mod keybindings;
pub mod storage;
pub mod todo;
pub mod utils;
