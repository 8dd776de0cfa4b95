//! External process I/O

pub mod runner;
pub mod tools;

pub use runner::{CommandOutput, CommandRunner};
pub use tools::Tools;
