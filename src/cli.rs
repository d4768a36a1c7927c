use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::Unit;

#[derive(Parser, Debug)]
#[command(name = "byteunit")]
#[command(about = "Normalize, convert, compare and parse data sizes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Convert every result into this unit
    #[arg(short = 'u', long = "unit", value_enum, ignore_case = true, global = true)]
    pub unit: Option<UnitArg>,

    /// Render results as a rate (e.g. 5 MB/s)
    #[arg(short = 'r', long = "rate", global = true)]
    pub rate: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Parse size strings such as "10 GB/s" or "5MB"
    Parse {
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },

    /// Pick the most readable unit for raw byte counts
    Normalize {
        #[arg(value_name = "BYTES", required = true, allow_negative_numbers = true)]
        bytes: Vec<f64>,
    },

    /// Show the size of files
    File {
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Compare two size strings
    Compare {
        #[arg(value_name = "LEFT")]
        left: String,
        #[arg(value_name = "RIGHT")]
        right: String,
    },
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum UnitArg {
    B,
    Kb,
    Mb,
    Gb,
    Tb,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::B => Unit::Byte,
            UnitArg::Kb => Unit::Kilobyte,
            UnitArg::Mb => Unit::Megabyte,
            UnitArg::Gb => Unit::Gigabyte,
            UnitArg::Tb => Unit::Terabyte,
        }
    }
}
