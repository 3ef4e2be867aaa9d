//! Spectral vegetation, water, soil and built-up indices
//!
//! Every index is an elementwise formula over band planes of a single
//! [`SpectralCube`]. Arithmetic is plain IEEE-754 `f64`: zero denominators
//! produce NaN or ±Inf and are left for the caller to handle.

use ndarray::{Array2, ArrayView2};
use crate::parallel;
use specindex_core::cube::{Band, BandMap, CubeElement, SpectralCube};
use specindex_core::{Error, Result};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Parameters for SAVI
#[derive(Debug, Clone, Copy)]
pub struct SaviParams {
    /// Soil brightness correction factor (0 = high vegetation, 1 = low vegetation)
    /// Default: 0.5. Any value is accepted, including ones that zero the denominator.
    pub l_factor: f64,
}

impl Default for SaviParams {
    fn default() -> Self {
        Self { l_factor: 0.5 }
    }
}

/// Parameters for EVI
#[derive(Debug, Clone, Copy)]
pub struct EviParams {
    /// Gain factor (default: 2.5)
    pub g: f64,
    /// Aerosol coefficient for red band (default: 6.0)
    pub c1: f64,
    /// Aerosol coefficient for blue band (default: 7.5)
    pub c2: f64,
    /// Canopy background adjustment (default: 1.0)
    pub l: f64,
}

impl Default for EviParams {
    fn default() -> Self {
        Self {
            g: 2.5,
            c1: 6.0,
            c2: 7.5,
            l: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Computes spectral indices over a borrowed cube.
///
/// The calculator holds no state besides the cube view and its [`BandMap`];
/// each operation allocates a fresh `(rows, cols)` raster and can be called
/// any number of times with identical results.
///
/// # Example
///
/// ```
/// use ndarray::Array3;
/// use specindex_algorithms::imagery::IndexCalculator;
/// use specindex_core::SpectralCube;
///
/// let data = Array3::from_shape_fn((2, 2, 12), |(_, _, b)| match b {
///     3 => 0.2,
///     7 => 0.8,
///     _ => 0.1,
/// });
/// let calc = IndexCalculator::new(SpectralCube::from_array(&data));
/// let ndvi = calc.ndvi().unwrap();
/// assert!((ndvi[[0, 0]] - 0.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexCalculator<'a, T: CubeElement> {
    cube: SpectralCube<'a, T>,
    bands: BandMap,
}

impl<'a, T: CubeElement> IndexCalculator<'a, T> {
    /// Calculator using the default band layout. The cube is not validated;
    /// a formula that reads a missing band fails when it is called.
    pub fn new(cube: SpectralCube<'a, T>) -> Self {
        Self::with_band_map(cube, BandMap::default())
    }

    /// Calculator using a custom band layout, without validation
    pub fn with_band_map(cube: SpectralCube<'a, T>, bands: BandMap) -> Self {
        Self { cube, bands }
    }

    /// Calculator that checks up front that every mapped band exists
    pub fn try_new(cube: SpectralCube<'a, T>, bands: BandMap) -> Result<Self> {
        bands.validate(cube.bands())?;
        Ok(Self::with_band_map(cube, bands))
    }

    pub fn cube(&self) -> &SpectralCube<'a, T> {
        &self.cube
    }

    pub fn band_map(&self) -> &BandMap {
        &self.bands
    }

    // -----------------------------------------------------------------------
    // Normalized difference
    // -----------------------------------------------------------------------

    /// Normalized difference between two bands:
    ///
    /// `(A - B) / (A + B)`
    ///
    /// Bounded to [-1, 1] when both bands are non-negative and the sum is non-zero.
    pub fn normalized_difference(&self, a: Band, b: Band) -> Result<Array2<f64>> {
        self.evaluate("ND", [a, b], |[a, b]| (a - b) / (a + b))
    }

    // -----------------------------------------------------------------------
    // NDVI
    // -----------------------------------------------------------------------

    /// Normalized Difference Vegetation Index
    ///
    /// `NDVI = (NIR - Red) / (NIR + Red)`
    ///
    /// Values range from -1 to 1:
    /// - Dense vegetation: 0.6 to 0.9
    /// - Sparse vegetation: 0.2 to 0.5
    /// - Water/clouds: -1.0 to 0.0
    pub fn ndvi(&self) -> Result<Array2<f64>> {
        self.evaluate("NDVI", [Band::Nir, Band::Red], |[n, r]| (n - r) / (n + r))
    }

    // -----------------------------------------------------------------------
    // EVI
    // -----------------------------------------------------------------------

    /// Enhanced Vegetation Index (Huete et al., 2002)
    ///
    /// `EVI = 2.5 * (NIR - Red) / (NIR + 6 * Red - 7.5 * Blue + 1)`
    pub fn evi(&self) -> Result<Array2<f64>> {
        self.evi_with(EviParams::default())
    }

    /// EVI with explicit coefficients:
    ///
    /// `EVI = G * (NIR - Red) / (NIR + C1 * Red - C2 * Blue + L)`
    pub fn evi_with(&self, params: EviParams) -> Result<Array2<f64>> {
        let EviParams { g, c1, c2, l } = params;
        self.evaluate("EVI", [Band::Nir, Band::Red, Band::Blue], move |[n, r, b]| {
            g * ((n - r) / (n + c1 * r - c2 * b + l))
        })
    }

    // -----------------------------------------------------------------------
    // NDWI
    // -----------------------------------------------------------------------

    /// Normalized Difference Water Index (McFeeters, 1996)
    ///
    /// `NDWI = (Green - NIR) / (Green + NIR)`
    ///
    /// Positive values indicate open water.
    pub fn ndwi(&self) -> Result<Array2<f64>> {
        self.evaluate("NDWI", [Band::Green, Band::Nir], |[g, n]| (g - n) / (g + n))
    }

    // -----------------------------------------------------------------------
    // SAVI
    // -----------------------------------------------------------------------

    /// Soil Adjusted Vegetation Index (Huete, 1988)
    ///
    /// `SAVI = ((NIR - Red) / (NIR + Red + L)) * (1 + L)`
    ///
    /// With `L = 0` this is exactly NDVI.
    pub fn savi(&self, params: SaviParams) -> Result<Array2<f64>> {
        let l = params.l_factor;
        self.evaluate("SAVI", [Band::Nir, Band::Red], move |[n, r]| {
            ((n - r) / (n + r + l)) * (1.0 + l)
        })
    }

    // -----------------------------------------------------------------------
    // MSI
    // -----------------------------------------------------------------------

    /// "MSI" as defined by this library:
    ///
    /// `MSI = (NIR - Green) / (Red + Green)`
    ///
    /// This is not the Moisture Stress Index (SWIR / NIR) found in the
    /// literature. The formula is kept as-is for compatibility with existing
    /// results.
    pub fn msi(&self) -> Result<Array2<f64>> {
        self.evaluate("MSI", [Band::Nir, Band::Green, Band::Red], |[n, g, r]| {
            (n - g) / (r + g)
        })
    }

    // -----------------------------------------------------------------------
    // CIgreen
    // -----------------------------------------------------------------------

    /// Green chromatic ratio
    ///
    /// `CIgreen = Green / Red`
    ///
    /// A plain ratio, not bounded to [-1, 1].
    pub fn ci_green(&self) -> Result<Array2<f64>> {
        self.evaluate("CIgreen", [Band::Green, Band::Red], |[g, r]| g / r)
    }

    // -----------------------------------------------------------------------
    // NDBI
    // -----------------------------------------------------------------------

    /// Normalized Difference Built-up Index (Zha et al., 2003)
    ///
    /// `NDBI = (SWIR - NIR) / (SWIR + NIR)`
    ///
    /// Positive values indicate built-up surfaces.
    pub fn ndbi(&self) -> Result<Array2<f64>> {
        self.evaluate("NDBI", [Band::Swir, Band::Nir], |[s, n]| (s - n) / (s + n))
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn planes(&self, bands: &[Band]) -> Result<Vec<ArrayView2<'a, T>>> {
        bands
            .iter()
            .map(|&band| self.cube.band_plane(band, &self.bands))
            .collect()
    }

    fn evaluate<const N: usize, F>(
        &self,
        name: &'static str,
        bands: [Band; N],
        formula: F,
    ) -> Result<Array2<f64>>
    where
        F: Fn([f64; N]) -> f64 + Sync + Send,
    {
        let planes = self.planes(&bands)?;
        let (rows, cols) = self.cube.shape();
        tracing::debug!(index = name, rows, cols, "computing spectral index");

        let data = parallel::collect_rows(rows, |row| {
            let mut row_data = vec![0.0; cols];
            for col in 0..cols {
                let values = std::array::from_fn(|i| planes[i][[row, col]].to_f64());
                row_data[col] = formula(values);
            }
            row_data
        });

        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
