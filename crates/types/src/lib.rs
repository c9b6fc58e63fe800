pub mod board;
pub mod catalog;
pub mod thread;
pub mod utils;
