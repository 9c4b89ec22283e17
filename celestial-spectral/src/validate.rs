//! Opt-in checked conversions.
//!
//! The raw functions let bad input turn into `inf`/`NaN` silently. The `checked_*`
//! functions here run the same kernels, then apply whatever checks the
//! [`ConversionOptions`] enable:
//!
//! 1. input domain (positive and finite)
//! 2. wavelength window
//! 3. distance of `s²` from the formula's poles
//! 4. finiteness of the result
//!
//! The numeric result is never altered: a checked call either returns exactly what
//! the raw function would, or an error.
//!
//! ```
//! use celestial_spectral::validate::checked_vacuum_to_air;
//! use celestial_spectral::{ConversionOptions, SpectralErrorKind};
//!
//! let opts = ConversionOptions::default();
//! assert_eq!(checked_vacuum_to_air(50_000.0, &opts).unwrap(), 49986.36934549974);
//!
//! let err = checked_vacuum_to_air(-1.0, &opts).unwrap_err();
//! assert_eq!(err.kind(), SpectralErrorKind::NonPositive);
//! ```

use crate::airvacuum::{morton_vacuum_to_air, piskunov_air_to_vacuum};
use crate::constants::{
    ANGSTROM_PER_MICRON, MORTON_POLE_1, MORTON_POLE_2, PISKUNOV_POLE_1, PISKUNOV_POLE_2,
};
use crate::errors::{SpectralError, SpectralErrorKind, SpectralResult};
use crate::options::ConversionOptions;
use crate::wavenumber::{
    air_wavelength_to_wavenumber, wavenumber_to_air_wavelength, wavenumber_to_vacuum_wavelength,
};

fn reject(err: SpectralError) -> SpectralError {
    log::debug!("{}", err);
    err
}

fn check_domain(operation: &str, value: f64, unit: &str) -> SpectralResult<()> {
    if !value.is_finite() {
        return Err(reject(SpectralError::invalid_input(
            operation,
            SpectralErrorKind::NotFinite,
            &format!("{} {} is not finite", value, unit),
        )));
    }
    if value <= 0.0 {
        return Err(reject(SpectralError::invalid_input(
            operation,
            SpectralErrorKind::NonPositive,
            &format!("{} {} is not positive", value, unit),
        )));
    }
    Ok(())
}

fn check_range(operation: &str, lambda: f64, opts: &ConversionOptions) -> SpectralResult<()> {
    let Some((min, max)) = opts.valid_range else {
        return Ok(());
    };
    if (min..=max).contains(&lambda) {
        return Ok(());
    }
    Err(reject(SpectralError::invalid_input(
        operation,
        SpectralErrorKind::OutOfRange,
        &format!("{:.3} Å outside [{}, {}] Å", lambda, min, max),
    )))
}

fn check_resonance(
    operation: &str,
    lambda: f64,
    poles: [f64; 2],
    opts: &ConversionOptions,
) -> SpectralResult<()> {
    if opts.resonance_margin <= 0.0 {
        return Ok(());
    }
    let s = ANGSTROM_PER_MICRON / lambda;
    let s2 = s * s;
    for pole in poles {
        if (pole - s2).abs() < opts.resonance_margin {
            return Err(reject(SpectralError::invalid_input(
                operation,
                SpectralErrorKind::NearResonance,
                &format!(
                    "s² = {:.6} µm⁻² within {} of pole {}",
                    s2, opts.resonance_margin, pole
                ),
            )));
        }
    }
    Ok(())
}

fn check_output(operation: &str, value: f64, opts: &ConversionOptions) -> SpectralResult<f64> {
    if opts.reject_non_finite_output && !value.is_finite() {
        return Err(reject(SpectralError::invalid_output(
            operation,
            SpectralErrorKind::NotFinite,
            &format!("result {} is not finite", value),
        )));
    }
    Ok(value)
}

/// Checks a wavelength (Å) against the domain and window settings.
pub fn validate_wavelength(
    operation: &str,
    lambda: f64,
    opts: &ConversionOptions,
) -> SpectralResult<f64> {
    if opts.validate_input {
        check_domain(operation, lambda, "Å")?;
    }
    check_range(operation, lambda, opts)?;
    Ok(lambda)
}

/// Checks a wavenumber (cm⁻¹). The window, if any, is applied to `10⁸ / ν`.
pub fn validate_wavenumber(
    operation: &str,
    nu: f64,
    opts: &ConversionOptions,
) -> SpectralResult<f64> {
    if opts.validate_input {
        check_domain(operation, nu, "cm⁻¹")?;
    }
    check_range(operation, wavenumber_to_vacuum_wavelength(nu), opts)?;
    Ok(nu)
}

/// Checked [`vacuum_to_air`](crate::vacuum_to_air). Resonance is measured against
/// the Morton poles.
pub fn checked_vacuum_to_air(lambda_vac: f64, opts: &ConversionOptions) -> SpectralResult<f64> {
    const OP: &str = "vacuum_to_air";
    validate_wavelength(OP, lambda_vac, opts)?;
    check_resonance(OP, lambda_vac, [MORTON_POLE_1, MORTON_POLE_2], opts)?;
    check_output(OP, morton_vacuum_to_air(lambda_vac), opts)
}

/// Checked [`air_to_vacuum`](crate::air_to_vacuum). Resonance is measured against
/// the Piskunov poles.
pub fn checked_air_to_vacuum(lambda_air: f64, opts: &ConversionOptions) -> SpectralResult<f64> {
    const OP: &str = "air_to_vacuum";
    validate_wavelength(OP, lambda_air, opts)?;
    check_resonance(OP, lambda_air, [PISKUNOV_POLE_1, PISKUNOV_POLE_2], opts)?;
    check_output(OP, piskunov_air_to_vacuum(lambda_air), opts)
}

/// Checked [`lambda2nu`](crate::lambda2nu). The input is an air wavelength, so the
/// Piskunov poles apply.
pub fn checked_lambda2nu(l_air: f64, opts: &ConversionOptions) -> SpectralResult<f64> {
    const OP: &str = "lambda2nu";
    validate_wavelength(OP, l_air, opts)?;
    check_resonance(OP, l_air, [PISKUNOV_POLE_1, PISKUNOV_POLE_2], opts)?;
    check_output(OP, air_wavelength_to_wavenumber(l_air), opts)
}

/// Checked [`nu2lambda`](crate::nu2lambda). Window and resonance checks run on the
/// vacuum wavelength `10⁸ / ν`.
pub fn checked_nu2lambda(nu_vac: f64, opts: &ConversionOptions) -> SpectralResult<f64> {
    const OP: &str = "nu2lambda";
    validate_wavenumber(OP, nu_vac, opts)?;
    let lambda_vac = wavenumber_to_vacuum_wavelength(nu_vac);
    check_resonance(OP, lambda_vac, [MORTON_POLE_1, MORTON_POLE_2], opts)?;
    check_output(OP, wavenumber_to_air_wavelength(nu_vac), opts)
}

/// Applies a checked scalar conversion to every element, stopping at the first error.
///
/// ```
/// use celestial_spectral::validate::{checked_air_to_vacuum, checked_map};
/// use celestial_spectral::ConversionOptions;
///
/// let opts = ConversionOptions::vald();
/// assert!(checked_map(&[5000.0, 6000.0], &opts, checked_air_to_vacuum).is_ok());
/// assert!(checked_map(&[5000.0, 500.0], &opts, checked_air_to_vacuum).is_err());
/// ```
pub fn checked_map<F>(values: &[f64], opts: &ConversionOptions, f: F) -> SpectralResult<Vec<f64>>
where
    F: Fn(f64, &ConversionOptions) -> SpectralResult<f64>,
{
    values.iter().map(|&x| f(x, opts)).collect()
}
