//! # specindex Core
//!
//! Core types for the specindex spectral index library.
//!
//! This crate provides:
//! - `SpectralCube<T>`: borrowed (row, col, band) view over multispectral imagery
//! - `Band` / `BandMap`: named bands and their position on the band axis
//! - `CubeElement`: element types accepted in a cube
//! - `Error` / `Result`: error handling shared by all specindex crates

pub mod cube;
pub mod error;

pub use cube::{Band, BandMap, CubeElement, SpectralCube};
pub use error::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cube::{Band, BandMap, CubeElement, SpectralCube};
    pub use crate::error::{Error, Result};
}
