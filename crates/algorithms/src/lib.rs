//! # specindex Algorithms
//!
//! Spectral index algorithms for specindex.
//!
//! ## Available Algorithm Categories
//!
//! - **imagery**: NDVI, EVI, NDWI, SAVI, MSI, CIgreen, NDBI over a
//!   [`SpectralCube`](specindex_core::SpectralCube)
//!
//! Rows are evaluated on the rayon pool when the `parallel` feature
//! (enabled by default) is on.

pub mod imagery;
mod parallel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{EviParams, IndexCalculator, SaviParams, SpectralIndex};
    pub use specindex_core::prelude::*;
}
