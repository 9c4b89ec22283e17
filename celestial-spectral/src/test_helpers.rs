//! Wavelength grids and assertions shared by unit and integration tests.
//!
//! The conversions are compared three ways: bit-for-bit against the scalar kernel
//! ([`assert_matches_scalar`]), against a relative tolerance ([`assert_rel_le`]), and,
//! for the inexact air/vacuum round trip, against a residual bound that must also be
//! non-zero ([`assert_residual_bounded`]).

/// `n` wavelengths spaced evenly in `log10` from `start` to `stop`.
///
/// Endpoints go through `10^log10(x)` and can land one ulp off `start`/`stop`.
pub fn log_grid(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let (a, b) = (start.log10(), stop.log10());
    (0..n)
        .map(|i| 10f64.powf(a + (b - a) * i as f64 / (n - 1) as f64))
        .collect()
}

/// `n + 1` evenly spaced values covering `[start, stop]`.
pub fn linear_grid(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| start + (stop - start) * i as f64 / n as f64)
}

/// Largest `|x|`, ignoring NaN.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
}

/// Asserts every output is the scalar kernel applied to the matching input,
/// compared by bit pattern so NaN outputs must also line up.
#[track_caller]
pub fn assert_matches_scalar<F>(inputs: &[f64], outputs: &[f64], kernel: F, ctx: &str)
where
    F: Fn(f64) -> f64,
{
    assert_eq!(inputs.len(), outputs.len(), "{}: length mismatch", ctx);
    for (i, (&x, &y)) in inputs.iter().zip(outputs).enumerate() {
        let expected = kernel(x);
        assert!(
            expected.to_bits() == y.to_bits(),
            "{}: element {} (input {}) gave {}, scalar call gives {}",
            ctx,
            i,
            x,
            y,
            expected
        );
    }
}

/// Asserts a set of round-trip residuals is finite, bounded by `bound`, and not
/// identically zero.
#[track_caller]
pub fn assert_residual_bounded(residuals: &[f64], bound: f64, ctx: &str) {
    assert!(
        residuals.iter().all(|r| r.is_finite()),
        "{}: non-finite residual",
        ctx
    );
    let max = max_abs(residuals);
    assert!(
        max <= bound,
        "{}: max |residual| {:.3e} exceeds {:.3e}",
        ctx,
        max,
        bound
    );
    assert!(
        residuals.iter().any(|&r| r != 0.0),
        "{}: every residual is exactly zero",
        ctx
    );
}

/// Asserts `|a - b| <= tol * |b|`.
#[track_caller]
pub fn assert_rel_le(a: f64, b: f64, tol: f64, ctx: &str) {
    let rel = ((a - b) / b).abs();
    assert!(
        rel <= tol,
        "{}: relative error {:.3e} exceeds {:.3e}, a={} b={}",
        ctx,
        rel,
        tol,
        a,
        b
    );
}
