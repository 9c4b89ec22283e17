//! Air/vacuum wavelength and wavenumber conversions for spectroscopic line lists.
//!
//! `celestial-spectral` implements the conversions used by the Vienna Atomic Line
//! Database (VALD): the Morton (2000) vacuum → air formula, N. Piskunov's fitted
//! inverse for air → vacuum, and the wavelength ↔ wavenumber helpers built on them.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`airvacuum`] | [`vacuum_to_air`], [`air_to_vacuum`], refractive indices, round-trip residual |
//! | [`wavenumber`] | [`lambda2nu`], [`nu2lambda`] |
//! | [`elementwise`] | [`SpectralInput`]: scalar / array / `Vec` / slice inputs |
//! | [`validate`] | Opt-in `checked_*` conversions returning [`SpectralResult`] |
//! | [`options`] | [`ConversionOptions`] for the checked conversions |
//! | [`units`] | [`Wavelength`], [`Wavenumber`], [`Medium`] |
//! | [`constants`] | Dispersion coefficients and unit scale factors |
//! | [`errors`] | [`SpectralError`] and [`SpectralResult`] |
//!
//! # Units
//!
//! Wavelengths are in Angstrom and wavenumbers in cm⁻¹ (always vacuum). The raw
//! functions take bare `f64` and do not check units; [`units`] offers typed wrappers.
//!
//! # Example
//!
//! ```
//! use celestial_spectral::{air_to_vacuum, lambda2nu, nu2lambda, vacuum_to_air};
//!
//! assert_eq!(vacuum_to_air(1e8 / 2000.0_f64), 49986.36934549974);
//! assert_eq!(1e8 / air_to_vacuum(5500.0_f64), 18176.768046090445);
//!
//! // Same functions, whole line list at once
//! let nu = lambda2nu(vec![3933.66, 3968.47]);
//! let back = nu2lambda(&nu);
//! assert!((back[0] - 3933.66).abs() < 1e-6);
//! ```
//!
//! # Numeric behaviour
//!
//! - Results are bit-identical to evaluating the published formulas left to right in
//!   IEEE-754 double precision.
//! - Nothing is validated. Zero, negative, non-finite and on-resonance inputs yield
//!   `inf`/`NaN` rather than errors; the [`validate`] module is the opt-in alternative.
//! - The two air/vacuum formulas are independent fits, so a round trip is accurate to
//!   a few 10⁻⁹ Å over 2000–100000 Å but not exact.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ConversionOptions`] and the unit types.
//! - `parallel`: rayon-backed `par_*` variants of the slice conversions.

pub mod airvacuum;
pub mod constants;
pub mod elementwise;
pub mod errors;
pub mod options;
pub mod units;
pub mod validate;
pub mod wavenumber;

pub use airvacuum::{air_to_vacuum, round_trip_error, vacuum_to_air};
pub use elementwise::SpectralInput;
pub use errors::{SpectralError, SpectralErrorKind, SpectralResult};
pub use options::ConversionOptions;
pub use units::{Medium, Wavelength, Wavenumber};
pub use wavenumber::{lambda2nu, nu2lambda};

pub mod test_helpers;
