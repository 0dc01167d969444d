//! ChromoX Core Library
//!
//! Data model, coordinate mapping and summary statistics for chromosome ideograms.

pub mod types;
pub mod coords;
pub mod error;
pub mod stats;

// Re-export commonly used types and functions
pub use types::{
    AlleleState, ChromosomeAnnotation, GenomicPos, GenomicRegion, RegionType, RenderOptions,
    VariantMarker, VariantStatus,
};
pub use coords::{CoordinateMapper, MAX_CHROMOSOME_LENGTH};
pub use error::{IdeogramError, IdeogramResult};
pub use stats::{summarize, StatsSummary};

/// Version information for the ChromoX core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
