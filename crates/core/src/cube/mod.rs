//! Spectral cube data structures and band addressing

mod bands;
mod element;
mod spectral;

pub use bands::{Band, BandMap};
pub use element::CubeElement;
pub use spectral::SpectralCube;
