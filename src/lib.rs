pub mod cli;
pub mod error;
pub mod scanner;
pub mod utils;
