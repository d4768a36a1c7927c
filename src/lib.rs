pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod utils;

pub use crate::core::{
    error::{Result, SizeError},
    size::{ByteLength, Magnitude, SizeValue},
    unit::Unit,
};
