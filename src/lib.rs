pub mod config;
pub mod manifest;
pub mod parser;
pub mod release;
pub mod scanner;
pub mod source;
pub mod sync;
