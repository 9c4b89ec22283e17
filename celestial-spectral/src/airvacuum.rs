//! Air ↔ vacuum wavelength conversion.
//!
//! Two independent empirical fits are used, one per direction:
//!
//! | Function | Direction | Formula |
//! |----------|-----------|---------|
//! | [`vacuum_to_air`] | vacuum → air | Morton (2000, ApJS 130, 403) |
//! | [`air_to_vacuum`] | air → vacuum | N. Piskunov's inverse fit, as used by VALD |
//!
//! Both evaluate the refractive index of standard air as
//!
//! ```text
//! s = 10⁴ / λ
//! n = 1 + a + b / (p₁ - s²) + c / (p₂ - s²)
//! ```
//!
//! with λ in Angstrom. The inverse fit carries its own coefficients, so
//! `air_to_vacuum(vacuum_to_air(λ))` differs from λ by a small residual; see
//! [`round_trip_error`].
//!
//! # No validation
//!
//! Inputs are not checked. Zero, negative or non-finite wavelengths, and
//! wavelengths that put `s²` on a pole, flow through IEEE-754 arithmetic and return
//! whatever it yields; nothing panics. Just past each pole the index crosses zero and
//! `λ / n` reaches magnitudes of 10⁷ Å and beyond.
//! Use [`validate`](crate::validate) for checked variants.
//!
//! # Example
//!
//! ```
//! use celestial_spectral::airvacuum::{air_to_vacuum, vacuum_to_air};
//!
//! // 2000 cm⁻¹ expressed as an air wavelength
//! assert_eq!(vacuum_to_air(1e8 / 2000.0_f64), 49986.36934549974);
//!
//! // 5500 Å in air, as a vacuum wavenumber
//! assert_eq!(1e8 / air_to_vacuum(5500.0_f64), 18176.768046090445);
//! ```

use crate::constants::{
    ANGSTROM_PER_MICRON, MORTON_COEFF_1, MORTON_COEFF_2, MORTON_OFFSET, MORTON_POLE_1,
    MORTON_POLE_2, PISKUNOV_COEFF_1, PISKUNOV_COEFF_2, PISKUNOV_OFFSET, PISKUNOV_POLE_1,
    PISKUNOV_POLE_2,
};
use crate::elementwise::{apply_in_place, SpectralInput};

/// Refractive index of air from the Morton (2000) formula, given a vacuum wavelength.
#[inline]
pub fn morton_refractive_index(lambda_vac: f64) -> f64 {
    let s = ANGSTROM_PER_MICRON / lambda_vac;
    let s2 = s * s;
    1.0 + MORTON_OFFSET
        + MORTON_COEFF_1 / (MORTON_POLE_1 - s2)
        + MORTON_COEFF_2 / (MORTON_POLE_2 - s2)
}

/// Refractive index of air from the Piskunov inverse fit, given an air wavelength.
#[inline]
pub fn piskunov_refractive_index(lambda_air: f64) -> f64 {
    let s = ANGSTROM_PER_MICRON / lambda_air;
    let s2 = s * s;
    1.0 + PISKUNOV_OFFSET
        + PISKUNOV_COEFF_1 / (PISKUNOV_POLE_1 - s2)
        + PISKUNOV_COEFF_2 / (PISKUNOV_POLE_2 - s2)
}

/// Scalar vacuum → air kernel (Å in, Å out).
#[inline]
pub fn morton_vacuum_to_air(lambda_vac: f64) -> f64 {
    lambda_vac / morton_refractive_index(lambda_vac)
}

/// Scalar air → vacuum kernel (Å in, Å out).
#[inline]
pub fn piskunov_air_to_vacuum(lambda_air: f64) -> f64 {
    lambda_air * piskunov_refractive_index(lambda_air)
}

/// Converts vacuum wavelength(s) in Angstrom to air wavelength(s) in Angstrom.
///
/// Accepts a scalar or any [`SpectralInput`] collection and returns the same shape.
///
/// ```
/// use celestial_spectral::vacuum_to_air;
///
/// let air = vacuum_to_air([5000.0, 6564.61]);
/// assert!(air[0] < 5000.0);
/// assert!((air[1] - 6562.80).abs() < 0.01); // H-alpha
/// ```
pub fn vacuum_to_air<T: SpectralInput>(lambda_vac: T) -> T::Output {
    lambda_vac.map_elements(morton_vacuum_to_air)
}

/// Converts air wavelength(s) in Angstrom to vacuum wavelength(s) in Angstrom.
pub fn air_to_vacuum<T: SpectralInput>(lambda_air: T) -> T::Output {
    lambda_air.map_elements(piskunov_air_to_vacuum)
}

/// In-place [`vacuum_to_air`] over a slice of vacuum wavelengths (Å).
pub fn vacuum_to_air_in_place(lambda: &mut [f64]) {
    apply_in_place(lambda, morton_vacuum_to_air);
}

/// In-place [`air_to_vacuum`] over a slice of air wavelengths (Å).
pub fn air_to_vacuum_in_place(lambda: &mut [f64]) {
    apply_in_place(lambda, piskunov_air_to_vacuum);
}

/// [`vacuum_to_air`] on the rayon pool. Element-for-element identical to the
/// sequential call.
#[cfg(feature = "parallel")]
pub fn par_vacuum_to_air(lambda_vac: &[f64]) -> Vec<f64> {
    crate::elementwise::par_map(lambda_vac, morton_vacuum_to_air)
}

/// [`air_to_vacuum`] on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_air_to_vacuum(lambda_air: &[f64]) -> Vec<f64> {
    crate::elementwise::par_map(lambda_air, piskunov_air_to_vacuum)
}

/// Residual of a vacuum → air → vacuum round trip, in Angstrom.
///
/// This is the curve VALD plots to compare the Morton formula with its inverse fit.
/// It is small but not zero.
pub fn round_trip_error<T: SpectralInput>(lambda_vac: T) -> T::Output {
    lambda_vac.map_elements(|x| piskunov_air_to_vacuum(morton_vacuum_to_air(x)) - x)
}
