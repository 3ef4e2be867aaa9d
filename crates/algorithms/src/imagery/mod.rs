//! Imagery analysis algorithms
//!
//! Spectral indices computed from a multispectral cube:
//! - Vegetation: NDVI, EVI, SAVI, CIgreen
//! - Water: NDWI
//! - Soil: MSI
//! - Built-up: NDBI
//! - Normalized difference: generic two-band index

mod catalog;
mod indices;

pub use catalog::SpectralIndex;
pub use indices::{EviParams, IndexCalculator, SaviParams};
