pub mod error;
pub mod parse;
pub mod size;
pub mod unit;
