//! Typed wavelength and wavenumber quantities.
//!
//! The free functions work on bare `f64` and leave units to convention. These types
//! carry the unit (Angstrom or cm⁻¹) and, for wavelengths, the medium, so an air
//! wavelength cannot be fed where a vacuum one is expected.
//!
//! ```
//! use celestial_spectral::{Medium, Wavelength};
//!
//! let h_alpha = Wavelength::air(6562.80);
//! let vac = h_alpha.to_vacuum();
//! assert_eq!(vac.medium(), Medium::Vacuum);
//! assert!((vac.angstrom() - 6564.61).abs() < 0.01);
//!
//! let nu = h_alpha.to_wavenumber();
//! assert_eq!(nu.to_air_wavelength().medium(), Medium::Air);
//! ```

use std::fmt;

use crate::airvacuum::{morton_vacuum_to_air, piskunov_air_to_vacuum};
use crate::constants::{ANGSTROM_PER_MICRON, ANGSTROM_PER_NM};
use crate::wavenumber::{vacuum_wavelength_to_wavenumber, wavenumber_to_vacuum_wavelength};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Medium a wavelength is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Medium {
    Air,
    Vacuum,
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medium::Air => write!(f, "air"),
            Medium::Vacuum => write!(f, "vacuum"),
        }
    }
}

/// A wavelength in Angstrom, tagged with its medium.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wavelength {
    angstrom: f64,
    medium: Medium,
}

impl Wavelength {
    /// Wraps a wavelength in Angstrom. No validation is done.
    pub const fn new(angstrom: f64, medium: Medium) -> Self {
        Self { angstrom, medium }
    }

    /// Air wavelength in Angstrom.
    pub const fn air(angstrom: f64) -> Self {
        Self::new(angstrom, Medium::Air)
    }

    /// Vacuum wavelength in Angstrom.
    pub const fn vacuum(angstrom: f64) -> Self {
        Self::new(angstrom, Medium::Vacuum)
    }

    /// From nanometres (1 nm = 10 Å).
    pub fn from_nanometers(nm: f64, medium: Medium) -> Self {
        Self::new(nm * ANGSTROM_PER_NM, medium)
    }

    /// From micrometres (1 µm = 10⁴ Å).
    pub fn from_microns(um: f64, medium: Medium) -> Self {
        Self::new(um * ANGSTROM_PER_MICRON, medium)
    }

    /// Value in Angstrom, as stored.
    pub fn angstrom(&self) -> f64 {
        self.angstrom
    }

    /// Value in nanometres.
    pub fn nanometers(&self) -> f64 {
        self.angstrom / ANGSTROM_PER_NM
    }

    /// Value in micrometres.
    pub fn microns(&self) -> f64 {
        self.angstrom / ANGSTROM_PER_MICRON
    }

    /// Medium the value is expressed in.
    pub fn medium(&self) -> Medium {
        self.medium
    }

    /// Same wavelength expressed in air. No-op if already in air.
    pub fn to_air(self) -> Self {
        match self.medium {
            Medium::Air => self,
            Medium::Vacuum => Self::air(morton_vacuum_to_air(self.angstrom)),
        }
    }

    /// Same wavelength expressed in vacuum. No-op if already in vacuum.
    pub fn to_vacuum(self) -> Self {
        match self.medium {
            Medium::Vacuum => self,
            Medium::Air => Self::vacuum(piskunov_air_to_vacuum(self.angstrom)),
        }
    }

    /// Converts to `medium`, using whichever formula the direction needs.
    pub fn to_medium(self, medium: Medium) -> Self {
        match medium {
            Medium::Air => self.to_air(),
            Medium::Vacuum => self.to_vacuum(),
        }
    }

    /// Vacuum wavenumber. Air wavelengths go through the air → vacuum fit first.
    pub fn to_wavenumber(self) -> Wavenumber {
        Wavenumber::new(vacuum_wavelength_to_wavenumber(self.to_vacuum().angstrom))
    }
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Å ({})", self.angstrom, self.medium)
    }
}

/// A vacuum wavenumber in cm⁻¹.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Wavenumber(f64);

impl Wavenumber {
    /// Wraps a vacuum wavenumber in cm⁻¹. No validation is done.
    pub const fn new(per_cm: f64) -> Self {
        Self(per_cm)
    }

    /// Value in cm⁻¹.
    pub fn per_cm(&self) -> f64 {
        self.0
    }

    /// Vacuum wavelength `10⁸ / ν` in Angstrom.
    pub fn to_vacuum_wavelength(self) -> Wavelength {
        Wavelength::vacuum(wavenumber_to_vacuum_wavelength(self.0))
    }

    /// Air wavelength via the Morton formula, as in [`nu2lambda`](crate::nu2lambda).
    pub fn to_air_wavelength(self) -> Wavelength {
        self.to_vacuum_wavelength().to_air()
    }
}

impl fmt::Display for Wavenumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cm⁻¹", self.0)
    }
}

impl From<Wavelength> for Wavenumber {
    fn from(lambda: Wavelength) -> Self {
        lambda.to_wavenumber()
    }
}
