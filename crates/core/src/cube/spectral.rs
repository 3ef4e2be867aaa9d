//! Read-only view over a multi-band image

use crate::cube::{Band, BandMap, CubeElement};
use crate::error::{Error, Result};
use ndarray::{Array3, ArrayView2, ArrayView3, Axis};

/// A borrowed 3-D spectral cube with axes (row, col, band).
///
/// The cube never owns or mutates pixel data; it is a thin wrapper over an
/// [`ArrayView3`] so callers keep control of loading and storage.
///
/// # Example
///
/// ```
/// use ndarray::Array3;
/// use specindex_core::cube::SpectralCube;
///
/// let data: Array3<f32> = Array3::zeros((4, 6, 12));
/// let cube = SpectralCube::from_array(&data);
/// assert_eq!(cube.shape(), (4, 6));
/// assert_eq!(cube.bands(), 12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpectralCube<'a, T: CubeElement> {
    data: ArrayView3<'a, T>,
}

impl<'a, T: CubeElement> SpectralCube<'a, T> {
    /// Wrap an existing view. No shape checks are made.
    pub fn new(data: ArrayView3<'a, T>) -> Self {
        Self { data }
    }

    /// Borrow an owned array
    pub fn from_array(data: &'a Array3<T>) -> Self {
        Self { data: data.view() }
    }

    /// Borrow a flat row-major buffer laid out as (row, col, band)
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize, bands: usize) -> Result<Self> {
        let view = ArrayView3::from_shape((rows, cols, bands), data).map_err(|_| {
            Error::InvalidDimensions { rows, cols, bands }
        })?;
        Ok(Self { data: view })
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// Length of the band axis
    pub fn bands(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Spatial dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    // Data access

    /// Band plane at a raw index, or `None` past the end of the band axis
    pub fn plane(&self, index: usize) -> Option<ArrayView2<'a, T>> {
        if index >= self.bands() {
            return None;
        }
        Some(self.data.index_axis_move(Axis(2), index))
    }

    /// Band plane for a named band under `map`
    pub fn band_plane(&self, band: Band, map: &BandMap) -> Result<ArrayView2<'a, T>> {
        let index = map.index(band);
        self.plane(index).ok_or(Error::MissingBand {
            band,
            index,
            bands: self.bands(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded(rows: usize, cols: usize, bands: usize) -> Array3<u16> {
        Array3::from_shape_fn((rows, cols, bands), |(_, _, b)| b as u16 * 100)
    }

    #[test]
    fn test_cube_dimensions() {
        let data = banded(3, 5, 12);
        let cube = SpectralCube::from_array(&data);
        assert_eq!(cube.rows(), 3);
        assert_eq!(cube.cols(), 5);
        assert_eq!(cube.bands(), 12);
        assert_eq!(cube.shape(), (3, 5));
    }

    #[test]
    fn test_plane_selects_band() {
        let data = banded(2, 2, 12);
        let cube = SpectralCube::from_array(&data);
        let nir = cube.band_plane(Band::Nir, &BandMap::default()).unwrap();
        assert_eq!(nir.dim(), (2, 2));
        assert!(nir.iter().all(|&v| v == 700));
    }

    #[test]
    fn test_plane_out_of_range() {
        let data = banded(2, 2, 5);
        let cube = SpectralCube::from_array(&data);
        assert!(cube.plane(4).is_some());
        assert!(cube.plane(5).is_none());

        match cube.band_plane(Band::Swir, &BandMap::default()) {
            Err(Error::MissingBand { band, index, bands }) => {
                assert_eq!(band, Band::Swir);
                assert_eq!(index, 11);
                assert_eq!(bands, 5);
            }
            other => panic!("Expected MissingBand, got {:?}", other),
        }
    }

    #[test]
    fn test_from_slice() {
        let flat: Vec<f32> = (0..2 * 3 * 4).map(|v| v as f32).collect();
        let cube = SpectralCube::from_slice(&flat, 2, 3, 4).unwrap();
        assert_eq!(cube.bands(), 4);
        // (row 1, col 2, band 3) => 1*12 + 2*4 + 3
        assert_eq!(cube.plane(3).unwrap()[[1, 2]], 23.0);

        assert!(matches!(
            SpectralCube::from_slice(&flat, 2, 3, 5),
            Err(Error::InvalidDimensions { rows: 2, cols: 3, bands: 5 })
        ));
    }
}
