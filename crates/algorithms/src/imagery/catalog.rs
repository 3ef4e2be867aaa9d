//! Catalog of the supported spectral indices
//!
//! Lets callers pick indices by name (e.g. from a config file) and compute
//! several of them over the same cube in one call.

use ndarray::Array2;
use std::fmt;
use std::str::FromStr;
use crate::imagery::indices::{IndexCalculator, SaviParams};
use crate::parallel;
use specindex_core::cube::{Band, CubeElement};
use specindex_core::{Error, Result};

/// Enumeration of supported spectral indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralIndex {
    /// Normalized Difference Vegetation Index
    NDVI,
    /// Enhanced Vegetation Index
    EVI,
    /// Normalized Difference Water Index (McFeeters)
    NDWI,
    /// Soil Adjusted Vegetation Index
    SAVI,
    /// (NIR - Green) / (Red + Green); not the Moisture Stress Index
    MSI,
    /// Green / Red ratio
    CIgreen,
    /// Normalized Difference Built-up Index
    NDBI,
}

impl SpectralIndex {
    pub const ALL: [SpectralIndex; 7] = [
        SpectralIndex::NDVI,
        SpectralIndex::EVI,
        SpectralIndex::NDWI,
        SpectralIndex::SAVI,
        SpectralIndex::MSI,
        SpectralIndex::CIgreen,
        SpectralIndex::NDBI,
    ];

    /// Short name, as used in remote sensing literature
    pub fn name(&self) -> &'static str {
        match self {
            SpectralIndex::NDVI => "NDVI",
            SpectralIndex::EVI => "EVI",
            SpectralIndex::NDWI => "NDWI",
            SpectralIndex::SAVI => "SAVI",
            SpectralIndex::MSI => "MSI",
            SpectralIndex::CIgreen => "CIgreen",
            SpectralIndex::NDBI => "NDBI",
        }
    }

    /// Formula in terms of named bands
    pub fn description(&self) -> &'static str {
        match self {
            SpectralIndex::NDVI => "(NIR - Red) / (NIR + Red)",
            SpectralIndex::EVI => "2.5 * (NIR - Red) / (NIR + 6 * Red - 7.5 * Blue + 1)",
            SpectralIndex::NDWI => "(Green - NIR) / (Green + NIR)",
            SpectralIndex::SAVI => "((NIR - Red) / (NIR + Red + L)) * (1 + L), L = 0.5",
            SpectralIndex::MSI => "(NIR - Green) / (Red + Green)",
            SpectralIndex::CIgreen => "Green / Red",
            SpectralIndex::NDBI => "(SWIR - NIR) / (SWIR + NIR)",
        }
    }

    /// Bands read by this index
    pub fn required_bands(&self) -> &'static [Band] {
        match self {
            SpectralIndex::NDVI | SpectralIndex::SAVI => &[Band::Nir, Band::Red],
            SpectralIndex::EVI => &[Band::Nir, Band::Red, Band::Blue],
            SpectralIndex::NDWI => &[Band::Green, Band::Nir],
            SpectralIndex::MSI => &[Band::Nir, Band::Green, Band::Red],
            SpectralIndex::CIgreen => &[Band::Green, Band::Red],
            SpectralIndex::NDBI => &[Band::Swir, Band::Nir],
        }
    }
}

impl fmt::Display for SpectralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpectralIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().replace(['_', '-'], "");
        SpectralIndex::ALL
            .into_iter()
            .find(|idx| idx.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| Error::InvalidParameter {
                name: "index",
                value: s.to_string(),
                reason: "expected one of NDVI, EVI, NDWI, SAVI, MSI, CIgreen, NDBI".into(),
            })
    }
}

impl<T: CubeElement> IndexCalculator<'_, T> {
    /// Compute one index with its default parameters
    pub fn compute(&self, index: SpectralIndex) -> Result<Array2<f64>> {
        match index {
            SpectralIndex::NDVI => self.ndvi(),
            SpectralIndex::EVI => self.evi(),
            SpectralIndex::NDWI => self.ndwi(),
            SpectralIndex::SAVI => self.savi(SaviParams::default()),
            SpectralIndex::MSI => self.msi(),
            SpectralIndex::CIgreen => self.ci_green(),
            SpectralIndex::NDBI => self.ndbi(),
        }
    }

    /// Compute every index independently.
    ///
    /// A missing band only fails the indices that need it; the rest are
    /// still returned. Order follows [`SpectralIndex::ALL`].
    pub fn compute_all(&self) -> Vec<(SpectralIndex, Result<Array2<f64>>)> {
        parallel::map_each(&SpectralIndex::ALL, |&index| (index, self.compute(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;
    use specindex_core::cube::{BandMap, SpectralCube};

    #[test]
    fn test_from_str() {
        assert_eq!("ndvi".parse::<SpectralIndex>().unwrap(), SpectralIndex::NDVI);
        assert_eq!("CIgreen".parse::<SpectralIndex>().unwrap(), SpectralIndex::CIgreen);
        assert_eq!("ci_green".parse::<SpectralIndex>().unwrap(), SpectralIndex::CIgreen);
        assert_eq!(" NDBI ".parse::<SpectralIndex>().unwrap(), SpectralIndex::NDBI);
        assert!(matches!(
            "mndwi".parse::<SpectralIndex>(),
            Err(Error::InvalidParameter { name: "index", .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for index in SpectralIndex::ALL {
            assert_eq!(index.to_string().parse::<SpectralIndex>().unwrap(), index);
        }
    }

    #[test]
    fn test_required_bands_match_band_map() {
        let map = BandMap::default();
        assert_eq!(map.required_bands(SpectralIndex::NDVI.required_bands()), 8);
        assert_eq!(map.required_bands(SpectralIndex::MSI.required_bands()), 8);
        assert_eq!(map.required_bands(SpectralIndex::NDBI.required_bands()), 12);
    }

    #[test]
    fn test_compute_dispatch() {
        let data = Array3::from_shape_fn((3, 4, 12), |(r, c, b)| {
            0.05 + 0.01 * (r + c) as f64 + 0.06 * b as f64
        });
        let calc = IndexCalculator::new(SpectralCube::from_array(&data));

        assert_eq!(calc.compute(SpectralIndex::NDVI).unwrap(), calc.ndvi().unwrap());
        assert_eq!(calc.compute(SpectralIndex::CIgreen).unwrap(), calc.ci_green().unwrap());
        assert_eq!(
            calc.compute(SpectralIndex::SAVI).unwrap(),
            calc.savi(SaviParams::default()).unwrap()
        );
    }

    #[test]
    fn test_compute_all_partial_failure() {
        let data = Array3::from_elem((2, 2, 8), 0.3f32);
        let calc = IndexCalculator::new(SpectralCube::from_array(&data));
        let results = calc.compute_all();

        assert_eq!(results.len(), SpectralIndex::ALL.len());
        for (index, result) in results {
            if index == SpectralIndex::NDBI {
                assert!(result.is_err(), "NDBI should need band 11");
            } else {
                assert_eq!(result.unwrap().dim(), (2, 2), "{} failed", index);
            }
        }
    }
}
