//! Air wavelength ↔ vacuum wavenumber.
//!
//! Line lists mix air wavelengths (Å) with vacuum wavenumbers (cm⁻¹). Wavenumber is
//! always taken in vacuum, so both directions pass through the air/vacuum formulas
//! in [`airvacuum`](crate::airvacuum):
//!
//! ```text
//! lambda2nu:  λ_air ──air_to_vacuum──▶ λ_vac ──10⁸/λ──▶ ν_vac
//! nu2lambda:  ν_vac ──10⁸/ν──▶ λ_vac ──vacuum_to_air──▶ λ_air
//! ```
//!
//! Because the two air/vacuum formulas are independent fits, `lambda2nu(nu2lambda(ν))`
//! returns ν only to about one part in 10¹².

use crate::airvacuum::{morton_vacuum_to_air, piskunov_air_to_vacuum};
use crate::constants::ANGSTROM_PER_CM;
use crate::elementwise::{apply_in_place, SpectralInput};

/// Vacuum wavelength (Å) to vacuum wavenumber (cm⁻¹).
#[inline]
pub fn vacuum_wavelength_to_wavenumber(lambda_vac: f64) -> f64 {
    ANGSTROM_PER_CM / lambda_vac
}

/// Vacuum wavenumber (cm⁻¹) to vacuum wavelength (Å).
#[inline]
pub fn wavenumber_to_vacuum_wavelength(nu_vac: f64) -> f64 {
    ANGSTROM_PER_CM / nu_vac
}

/// Scalar kernel behind [`lambda2nu`].
#[inline]
pub fn air_wavelength_to_wavenumber(l_air: f64) -> f64 {
    vacuum_wavelength_to_wavenumber(piskunov_air_to_vacuum(l_air))
}

/// Scalar kernel behind [`nu2lambda`].
#[inline]
pub fn wavenumber_to_air_wavelength(nu_vac: f64) -> f64 {
    morton_vacuum_to_air(wavenumber_to_vacuum_wavelength(nu_vac))
}

/// Air wavelength(s) in Angstrom to vacuum wavenumber(s) in cm⁻¹.
///
/// ```
/// use celestial_spectral::lambda2nu;
///
/// assert_eq!(lambda2nu(5500.0_f64), 18176.768046090445);
/// ```
pub fn lambda2nu<T: SpectralInput>(l_air: T) -> T::Output {
    l_air.map_elements(air_wavelength_to_wavenumber)
}

/// Vacuum wavenumber(s) in cm⁻¹ to air wavelength(s) in Angstrom.
///
/// ```
/// use celestial_spectral::nu2lambda;
///
/// assert_eq!(nu2lambda(2000.0_f64), 49986.36934549974);
/// ```
pub fn nu2lambda<T: SpectralInput>(nu_vac: T) -> T::Output {
    nu_vac.map_elements(wavenumber_to_air_wavelength)
}

/// In-place [`lambda2nu`]: air wavelengths (Å) become vacuum wavenumbers (cm⁻¹).
pub fn lambda2nu_in_place(values: &mut [f64]) {
    apply_in_place(values, air_wavelength_to_wavenumber);
}

/// In-place [`nu2lambda`]: vacuum wavenumbers (cm⁻¹) become air wavelengths (Å).
pub fn nu2lambda_in_place(values: &mut [f64]) {
    apply_in_place(values, wavenumber_to_air_wavelength);
}

/// [`lambda2nu`] on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_lambda2nu(l_air: &[f64]) -> Vec<f64> {
    crate::elementwise::par_map(l_air, air_wavelength_to_wavenumber)
}

/// [`nu2lambda`] on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_nu2lambda(nu_vac: &[f64]) -> Vec<f64> {
    crate::elementwise::par_map(nu_vac, wavenumber_to_air_wavelength)
}
