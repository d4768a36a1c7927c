use std::{fmt, str::FromStr};

use crate::core::error::SizeError;

/// One step of the base-1024 byte scale.
///
/// The discriminant is the exponent of 1024 plus one, so `Byte = 1` is 1024^0
/// bytes and `Terabyte = 5` is 1024^4 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Unit {
    Byte = 1,
    Kilobyte = 2,
    Megabyte = 3,
    Gigabyte = 4,
    Terabyte = 5,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 5] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
    ];

    /// Symbolic names in the order the parser must probe them.
    /// "B" is a substring of every other name, so it has to come last.
    pub const BY_NAME_LONGEST_FIRST: [(Unit, &'static str); 5] = [
        (Unit::Terabyte, "TB"),
        (Unit::Gigabyte, "GB"),
        (Unit::Megabyte, "MB"),
        (Unit::Kilobyte, "KB"),
        (Unit::Byte, "B"),
    ];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn from_index(index: i32) -> Option<Unit> {
        match index {
            1 => Some(Unit::Byte),
            2 => Some(Unit::Kilobyte),
            3 => Some(Unit::Megabyte),
            4 => Some(Unit::Gigabyte),
            5 => Some(Unit::Terabyte),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Byte => "B",
            Unit::Kilobyte => "KB",
            Unit::Megabyte => "MB",
            Unit::Gigabyte => "GB",
            Unit::Terabyte => "TB",
        }
    }

    /// Number of bytes in one of this unit.
    pub fn bytes_per_unit(self) -> f64 {
        1024f64.powi(self.index() - 1)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SizeError::Parse(format!("Unknown unit: {s}")))
    }
}
