//! Standard data-size units for the `dataunit` crate.
//!
//! The crate exposes a closed set of units (bytes through terabytes) that
//! scale by 1024 between neighbours, a reverse lookup from textual suffix
//! (`"KB"`, `"MB"`, ...) back to the unit, and the small [`DataSize`] value
//! type that supplies each unit's canonical magnitude.

pub mod size;
pub mod unit;

pub use size::{DataSize, DataSizeError};
pub use unit::{DataUnit, DataUnitError};
