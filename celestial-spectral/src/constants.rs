//! Dispersion coefficients and unit scale factors.
//!
//! The air/vacuum formulas are written in terms of `s = 10⁴ / λ`, the vacuum
//! wavenumber in µm⁻¹ when λ is in Angstrom. Each formula has two resonance
//! terms of the form `c / (pole - s²)`.

/// Angstrom per centimetre. Wavenumber (cm⁻¹) = `ANGSTROM_PER_CM / λ(Å)`.
pub const ANGSTROM_PER_CM: f64 = 1e8;

/// Angstrom per micrometre. Scales λ(Å) into `s` (µm⁻¹).
pub const ANGSTROM_PER_MICRON: f64 = 1e4;

pub const ANGSTROM_PER_NM: f64 = 10.0;

/// Morton (2000, ApJS 130, 403) constant term of `n - 1`.
pub const MORTON_OFFSET: f64 = 8.34254e-5;
pub const MORTON_COEFF_1: f64 = 0.02406147;
pub const MORTON_POLE_1: f64 = 130.0;
pub const MORTON_COEFF_2: f64 = 0.00015998;
pub const MORTON_POLE_2: f64 = 38.9;

/// Piskunov (VALD) inverse fit, constant term of `n - 1`.
#[allow(clippy::excessive_precision)]
pub const PISKUNOV_OFFSET: f64 = 8.336624212083e-5;
#[allow(clippy::excessive_precision)]
pub const PISKUNOV_COEFF_1: f64 = 0.02408926869968;
#[allow(clippy::excessive_precision)]
pub const PISKUNOV_POLE_1: f64 = 130.1065924522;
#[allow(clippy::excessive_precision)]
pub const PISKUNOV_COEFF_2: f64 = 0.0001599740894897;
#[allow(clippy::excessive_precision)]
pub const PISKUNOV_POLE_2: f64 = 38.92568793293;

/// Lower edge of the VALD comparison range for the two formulas, in Angstrom.
pub const VALD_MIN_WAVELENGTH: f64 = 2000.0;

/// Upper edge of the VALD comparison range, in Angstrom.
pub const VALD_MAX_WAVELENGTH: f64 = 100_000.0;
