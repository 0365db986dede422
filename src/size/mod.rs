//! Byte-count values that back each [`DataUnit`]'s magnitude.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::unit::DataUnit;

const BYTES_PER_KB: u64 = 1024;
const BYTES_PER_MB: u64 = BYTES_PER_KB * 1024;
const BYTES_PER_GB: u64 = BYTES_PER_MB * 1024;
const BYTES_PER_TB: u64 = BYTES_PER_GB * 1024;

/// An amount of data expressed in bytes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataSize {
    bytes: u64,
}

impl DataSize {
    /// A single byte.
    pub const ONE_BYTE: Self = Self::of_bytes(1);
    /// A single kilobyte (1024 bytes).
    pub const ONE_KILOBYTE: Self = Self::of_bytes(BYTES_PER_KB);
    /// A single megabyte (1024 kilobytes).
    pub const ONE_MEGABYTE: Self = Self::of_bytes(BYTES_PER_MB);
    /// A single gigabyte (1024 megabytes).
    pub const ONE_GIGABYTE: Self = Self::of_bytes(BYTES_PER_GB);
    /// A single terabyte (1024 gigabytes).
    pub const ONE_TERABYTE: Self = Self::of_bytes(BYTES_PER_TB);

    /// Creates a size from a raw byte count.
    #[must_use]
    pub const fn of_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    /// Creates a size of `amount` units of `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`DataSizeError::Overflow`] when the byte count does not fit
    /// in a `u64`.
    pub fn of(amount: u64, unit: DataUnit) -> Result<Self, DataSizeError> {
        amount
            .checked_mul(unit.magnitude())
            .map(Self::of_bytes)
            .ok_or_else(|| {
                debug!(amount, %unit, "data size exceeds u64 byte count");
                DataSizeError::Overflow { amount, unit }
            })
    }

    /// Creates a size of `amount` kilobytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataSizeError::Overflow`] when the byte count does not fit
    /// in a `u64`.
    pub fn of_kilobytes(amount: u64) -> Result<Self, DataSizeError> {
        Self::of(amount, DataUnit::Kilobytes)
    }

    /// Creates a size of `amount` megabytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataSizeError::Overflow`] when the byte count does not fit
    /// in a `u64`.
    pub fn of_megabytes(amount: u64) -> Result<Self, DataSizeError> {
        Self::of(amount, DataUnit::Megabytes)
    }

    /// Creates a size of `amount` gigabytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataSizeError::Overflow`] when the byte count does not fit
    /// in a `u64`.
    pub fn of_gigabytes(amount: u64) -> Result<Self, DataSizeError> {
        Self::of(amount, DataUnit::Gigabytes)
    }

    /// Creates a size of `amount` terabytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataSizeError::Overflow`] when the byte count does not fit
    /// in a `u64`.
    pub fn of_terabytes(amount: u64) -> Result<Self, DataSizeError> {
        Self::of(amount, DataUnit::Terabytes)
    }

    /// Raw byte count.
    #[must_use]
    pub const fn to_bytes(self) -> u64 {
        self.bytes
    }

    /// Whole number of `unit`s contained in this size, rounding down.
    #[must_use]
    pub const fn to_unit(self, unit: DataUnit) -> u64 {
        match self.bytes.checked_div(unit.magnitude()) {
            Some(whole) => whole,
            None => 0,
        }
    }
}

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.bytes)
    }
}

/// Errors raised while building a [`DataSize`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DataSizeError {
    /// Raised when the requested size does not fit in a `u64` byte count.
    #[error("{amount}{unit} exceeds the largest representable data size")]
    Overflow {
        /// Amount requested by the caller.
        amount: u64,
        /// Unit the amount was expressed in.
        unit: DataUnit,
    },
}
