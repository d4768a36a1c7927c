use std::{
    cmp::Ordering,
    fmt, fs,
    hash::{Hash, Hasher},
    io,
    path::Path,
};

use crate::{
    core::{
        error::{Result, SizeError},
        unit::Unit,
    },
    utils::round_half_even,
};

const SCALE: f64 = 1024.0;
const DECIMALS: i32 = 2;

/// Numeric types a [`SizeValue`] can be built from.
pub trait Magnitude {
    fn into_magnitude(self) -> f64;
}

macro_rules! impl_magnitude {
    ($($t: ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn into_magnitude(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_magnitude!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Anything that can report a length in bytes, typically file metadata.
pub trait ByteLength {
    fn byte_length(&self) -> io::Result<u64>;
}

impl ByteLength for u64 {
    fn byte_length(&self) -> io::Result<u64> {
        Ok(*self)
    }
}

impl ByteLength for fs::Metadata {
    fn byte_length(&self) -> io::Result<u64> {
        Ok(self.len())
    }
}

impl ByteLength for fs::File {
    fn byte_length(&self) -> io::Result<u64> {
        self.metadata().map(|m| m.len())
    }
}

impl ByteLength for Path {
    fn byte_length(&self) -> io::Result<u64> {
        fs::metadata(self).map(|m| m.len())
    }
}

/// A data size expressed in one [`Unit`], e.g. 5 MB.
///
/// Values are immutable; every transformation returns a new value.
/// Equality, ordering and hashing compare the quantity of bytes, not the
/// stored representation, so `5 MB == 5120 KB`.
#[derive(Clone, Copy, Debug)]
pub struct SizeValue {
    magnitude: f64,
    unit: Unit,
}

impl SizeValue {
    /// Fails with [`SizeError::InvalidArgument`] for negative or non-finite magnitudes.
    pub fn new(magnitude: impl Magnitude, unit: Unit) -> Result<Self> {
        let magnitude = magnitude.into_magnitude();
        check_magnitude(magnitude)?;
        Ok(Self { magnitude, unit })
    }

    pub fn from_bytes(n: impl Magnitude) -> Result<Self> {
        Self::new(n, Unit::Byte)
    }

    pub fn from_kilobytes(n: impl Magnitude) -> Result<Self> {
        Self::new(n, Unit::Kilobyte)
    }

    pub fn from_megabytes(n: impl Magnitude) -> Result<Self> {
        Self::new(n, Unit::Megabyte)
    }

    pub fn from_gigabytes(n: impl Magnitude) -> Result<Self> {
        Self::new(n, Unit::Gigabyte)
    }

    pub fn from_terabytes(n: impl Magnitude) -> Result<Self> {
        Self::new(n, Unit::Terabyte)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Exact number of bytes this value stands for.
    pub fn as_bytes(&self) -> f64 {
        self.magnitude * self.unit.bytes_per_unit()
    }

    /// Picks the most readable unit for a raw byte count.
    ///
    /// Divides by 1024 while the running value is strictly greater than 1024,
    /// so exactly 1024 bytes stays `1024 B` and 1025 bytes becomes `1 KB`.
    /// The magnitude is rounded to two decimals, ties to even.
    pub fn find_unit(value: f64) -> Result<Self> {
        check_magnitude(value)?;

        let mut index = Unit::Byte.index();
        let mut n = value;
        while n > SCALE {
            n /= SCALE;
            index += 1;
        }

        let unit = Unit::from_index(index).ok_or(SizeError::UnsupportedUnit { value })?;
        log::trace!("Normalized {value} bytes to {n} {unit}");

        Ok(Self {
            magnitude: round_half_even(n, DECIMALS),
            unit,
        })
    }

    /// Converts into `target`, rounding the magnitude to two decimals.
    ///
    /// Rounding also happens when `target` is the current unit.
    pub fn convert(&self, target: Unit) -> SizeValue {
        let difference = self.unit.index() - target.index();
        let factor = SCALE.powi(difference.abs());
        let magnitude = if difference < 0 {
            self.magnitude / factor
        } else {
            self.magnitude * factor
        };

        SizeValue {
            magnitude: round_half_even(magnitude, DECIMALS),
            unit: target,
        }
    }

    /// Normalized size reported by a byte-length provider.
    ///
    /// An absent provider is an [`SizeError::InvalidArgument`].
    pub fn from_file_size<P>(provider: Option<&P>) -> Result<Self>
    where
        P: ByteLength + ?Sized,
    {
        let provider = provider.ok_or_else(|| {
            SizeError::InvalidArgument("byte length provider is absent".to_string())
        })?;

        let length = provider.byte_length()?;
        log::debug!("Probed byte length: {length}");
        Self::find_unit(length as f64)
    }

    /// Normalized size of the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading metadata for {}", path.display());
        Self::from_file_size(Some(path))
    }

    /// Renders as a throughput, e.g. `5 MB/s`.
    pub fn to_rate_string(&self) -> String {
        format!("{self}/s")
    }

    // Scales the coarser operand into the finer unit. Multiplying by a power
    // of 1024 is exact in binary floating point, so nothing is rounded here.
    fn compare(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = match self.unit.cmp(&other.unit) {
            Ordering::Equal => (self.magnitude, other.magnitude),
            Ordering::Greater => (
                self.magnitude * scale_between(self.unit, other.unit),
                other.magnitude,
            ),
            Ordering::Less => (
                self.magnitude,
                other.magnitude * scale_between(other.unit, self.unit),
            ),
        };
        lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
    }
}

fn scale_between(coarse: Unit, fine: Unit) -> f64 {
    SCALE.powi(coarse.index() - fine.index())
}

fn check_magnitude(magnitude: f64) -> Result<()> {
    if !magnitude.is_finite() {
        return Err(SizeError::InvalidArgument(format!(
            "magnitude must be finite, got {magnitude}"
        )));
    }
    if magnitude < 0.0 {
        return Err(SizeError::InvalidArgument(format!(
            "magnitude must not be negative, got {magnitude}"
        )));
    }
    Ok(())
}

impl PartialEq for SizeValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for SizeValue {}

impl PartialOrd for SizeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SizeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for SizeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // + 0.0 folds -0.0 into 0.0
        (self.as_bytes() + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
