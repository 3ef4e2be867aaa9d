//! Named spectral bands and their position in the cube

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spectral channel referenced by the index formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Blue,
    Green,
    Red,
    /// Near-infrared
    Nir,
    /// Shortwave infrared
    Swir,
}

impl Band {
    /// Every band, in ascending wavelength order
    pub const ALL: [Band; 5] = [Band::Blue, Band::Green, Band::Red, Band::Nir, Band::Swir];

    pub fn name(&self) -> &'static str {
        match self {
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Red => "red",
            Band::Nir => "nir",
            Band::Swir => "swir",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Band {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Band::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter {
                name: "band",
                value: s.to_string(),
                reason: "expected one of blue, green, red, nir, swir".into(),
            })
    }
}

/// Mapping from named band to its 0-based position on the cube's band axis.
///
/// The default is the layout the index formulas were written against:
/// blue=1, green=2, red=3, NIR=7, SWIR=11.
///
/// # Example
///
/// ```
/// use specindex_core::cube::{Band, BandMap};
///
/// let map = BandMap::from_json(r#"{ "nir": 4, "swir": 5 }"#).unwrap();
/// assert_eq!(map.index(Band::Nir), 4);
/// assert_eq!(map.index(Band::Red), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandMap {
    pub blue: usize,
    pub green: usize,
    pub red: usize,
    pub nir: usize,
    pub swir: usize,
}

impl Default for BandMap {
    fn default() -> Self {
        Self {
            blue: 1,
            green: 2,
            red: 3,
            nir: 7,
            swir: 11,
        }
    }
}

impl BandMap {
    /// Parse a band map from JSON. Missing bands keep their default index.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this band map to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Cube band index for `band`
    pub fn index(&self, band: Band) -> usize {
        match band {
            Band::Blue => self.blue,
            Band::Green => self.green,
            Band::Red => self.red,
            Band::Nir => self.nir,
            Band::Swir => self.swir,
        }
    }

    /// Minimum band-axis length needed to read every band in `bands`.
    ///
    /// Saturates at `usize::MAX` for an index of `usize::MAX`.
    pub fn required_bands(&self, bands: &[Band]) -> usize {
        bands
            .iter()
            .map(|&b| self.index(b).saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Check that every mapped band fits in a cube with `available` bands
    pub fn validate(&self, available: usize) -> Result<()> {
        let required = self.required_bands(&Band::ALL);
        if required > available {
            tracing::warn!(required, available, "cube is too short for band map");
            return Err(Error::InsufficientBands {
                required,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention() {
        let map = BandMap::default();
        assert_eq!(map.index(Band::Blue), 1);
        assert_eq!(map.index(Band::Green), 2);
        assert_eq!(map.index(Band::Red), 3);
        assert_eq!(map.index(Band::Nir), 7);
        assert_eq!(map.index(Band::Swir), 11);
    }

    #[test]
    fn test_required_bands() {
        let map = BandMap::default();
        assert_eq!(map.required_bands(&Band::ALL), 12);
        assert_eq!(map.required_bands(&[Band::Red, Band::Nir]), 8);
        assert_eq!(map.required_bands(&[]), 0);
    }

    #[test]
    fn test_validate() {
        let map = BandMap::default();
        assert!(map.validate(12).is_ok());
        match map.validate(5) {
            Err(Error::InsufficientBands {
                required,
                available,
            }) => {
                assert_eq!(required, 12);
                assert_eq!(available, 5);
            }
            other => panic!("Expected InsufficientBands, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_huge_index() {
        let map = BandMap::from_json(r#"{ "swir": 18446744073709551615 }"#).unwrap();
        assert_eq!(map.swir, usize::MAX);
        assert_eq!(map.required_bands(&[Band::Swir]), usize::MAX);

        match map.validate(12) {
            Err(Error::InsufficientBands {
                required,
                available,
            }) => {
                assert_eq!(required, usize::MAX);
                assert_eq!(available, 12);
            }
            other => panic!("Expected InsufficientBands, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_partial() {
        let map = BandMap::from_json(r#"{ "red": 2, "green": 1, "blue": 0 }"#).unwrap();
        assert_eq!(map.red, 2);
        assert_eq!(map.green, 1);
        assert_eq!(map.blue, 0);
        assert_eq!(map.nir, 7);
        assert_eq!(map.swir, 11);
    }

    #[test]
    fn test_from_json_rejects_unknown_band() {
        let err = BandMap::from_json(r#"{ "red_edge": 5 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_json_roundtrip() {
        let map = BandMap {
            blue: 0,
            green: 1,
            red: 2,
            nir: 3,
            swir: 4,
        };
        assert_eq!(BandMap::from_json(&map.to_json().unwrap()).unwrap(), map);
    }

    #[test]
    fn test_band_from_str() {
        assert_eq!("NIR".parse::<Band>().unwrap(), Band::Nir);
        assert_eq!(" swir ".parse::<Band>().unwrap(), Band::Swir);
        assert!("thermal".parse::<Band>().is_err());
    }
}
