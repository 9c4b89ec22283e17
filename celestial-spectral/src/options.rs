//! Settings for the checked conversions in [`validate`](crate::validate).
//!
//! The raw conversions take no options. [`ConversionOptions`] only affects the
//! `checked_*` family, and with every check switched off
//! ([`ConversionOptions::unchecked`]) those return the raw result bit for bit.
//!
//! ```
//! use celestial_spectral::ConversionOptions;
//!
//! let opts = ConversionOptions::vald().with_resonance_margin(1.0);
//! assert_eq!(opts.valid_range, Some((2000.0, 100_000.0)));
//! ```

use crate::constants::{VALD_MAX_WAVELENGTH, VALD_MIN_WAVELENGTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which checks the `checked_*` conversions apply.
///
/// Missing fields deserialize to their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Reject zero, negative and non-finite inputs.
    pub validate_input: bool,
    /// Reject `inf`/`NaN` results.
    pub reject_non_finite_output: bool,
    /// Inclusive wavelength window in Angstrom. For wavenumber input the window is
    /// applied to the equivalent vacuum wavelength `10⁸ / ν`.
    pub valid_range: Option<(f64, f64)>,
    /// Minimum accepted `|pole - s²|` in µm⁻². Zero disables the check.
    pub resonance_margin: f64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            validate_input: true,
            reject_non_finite_output: true,
            valid_range: None,
            resonance_margin: 0.0,
        }
    }
}

impl ConversionOptions {
    /// Same as [`Default::default`]: domain and output checks on, no window, no margin.
    pub fn new() -> Self {
        Self::default()
    }

    /// All checks off.
    pub fn unchecked() -> Self {
        Self {
            validate_input: false,
            reject_non_finite_output: false,
            valid_range: None,
            resonance_margin: 0.0,
        }
    }

    /// Default checks plus the 2000–100000 Å window the VALD inverse fit is
    /// compared over.
    pub fn vald() -> Self {
        Self::default().with_range(VALD_MIN_WAVELENGTH, VALD_MAX_WAVELENGTH)
    }

    /// Restricts accepted wavelengths to `[min_angstrom, max_angstrom]`.
    pub fn with_range(mut self, min_angstrom: f64, max_angstrom: f64) -> Self {
        self.valid_range = Some((min_angstrom, max_angstrom));
        self
    }

    /// Drops the wavelength window.
    pub fn without_range(mut self) -> Self {
        self.valid_range = None;
        self
    }

    /// Rejects inputs whose `s²` lies closer than `margin` (µm⁻²) to either pole.
    pub fn with_resonance_margin(mut self, margin: f64) -> Self {
        self.resonance_margin = margin;
        self
    }

    /// Toggles the positive/finite input check.
    pub fn with_input_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    /// Toggles rejection of `inf`/`NaN` results.
    pub fn with_output_validation(mut self, enabled: bool) -> Self {
        self.reject_non_finite_output = enabled;
        self
    }

    /// `true` when no check is active.
    pub fn is_unchecked(&self) -> bool {
        !self.validate_input
            && !self.reject_non_finite_output
            && self.valid_range.is_none()
            && self.resonance_margin <= 0.0
    }
}
