//! The closed set of data-size units and suffix lookup.
//!
//! Each [`DataUnit`] pairs a short suffix with the [`DataSize`] that
//! represents one unit of its kind. The table is fixed at compile time, so
//! lookups need no synchronisation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::size::DataSize;

/// A standard data-size unit using IEC binary scaling.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataUnit {
    /// Bytes (`B`).
    Bytes,
    /// Kilobytes (`KB`), 1024 bytes.
    Kilobytes,
    /// Megabytes (`MB`), 1024 kilobytes.
    Megabytes,
    /// Gigabytes (`GB`), 1024 megabytes.
    Gigabytes,
    /// Terabytes (`TB`), 1024 gigabytes.
    Terabytes,
}

impl DataUnit {
    const ALL: &'static [Self] = &[
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
    ];

    /// Returns every unit in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        Self::ALL
    }

    /// Iterates over every unit in declaration order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied()
    }

    /// Short textual label for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
        }
    }

    /// One unit of this kind as a [`DataSize`].
    #[must_use]
    pub const fn size(self) -> DataSize {
        match self {
            Self::Bytes => DataSize::ONE_BYTE,
            Self::Kilobytes => DataSize::ONE_KILOBYTE,
            Self::Megabytes => DataSize::ONE_MEGABYTE,
            Self::Gigabytes => DataSize::ONE_GIGABYTE,
            Self::Terabytes => DataSize::ONE_TERABYTE,
        }
    }

    /// Number of bytes in one unit of this kind.
    #[must_use]
    pub const fn magnitude(self) -> u64 {
        self.size().to_bytes()
    }

    /// Resolves the unit whose suffix equals `suffix` exactly.
    ///
    /// Matching is case-sensitive and the input is neither trimmed nor
    /// normalised, so `"kb"` and `" KB"` are both rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DataUnitError::UnknownSuffix`] when no unit uses the
    /// supplied suffix.
    pub fn from_suffix(suffix: &str) -> Result<Self, DataUnitError> {
        Self::iter()
            .find(|candidate| candidate.suffix() == suffix)
            .ok_or_else(|| {
                debug!(suffix, "rejected unknown data unit suffix");
                DataUnitError::UnknownSuffix {
                    suffix: suffix.to_owned(),
                }
            })
    }
}

impl fmt::Display for DataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for DataUnit {
    type Err = DataUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_suffix(s)
    }
}

/// Errors raised while resolving a data unit.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DataUnitError {
    /// Raised when a suffix does not match any known unit.
    #[error("unknown data unit suffix '{suffix}'")]
    UnknownSuffix {
        /// Suffix passed by the caller.
        suffix: String,
    },
}
