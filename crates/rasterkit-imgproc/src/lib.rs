#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// marker-driven frame rendering module.
pub mod draw;

/// Error types for the filter modules.
pub mod error;

/// the filter pass contract.
pub mod filter;

/// median smoothing module.
pub mod median;

/// stamp-mask edge outlining module.
pub mod morphology;

/// canvas border padding module.
pub mod padding;

pub use crate::error::FilterError;
pub use crate::filter::ImageFilter;
