use celestial_spectral::airvacuum::{morton_refractive_index, piskunov_refractive_index};
use celestial_spectral::test_helpers::{
    assert_matches_scalar, assert_rel_le, assert_residual_bounded, linear_grid, log_grid,
};
use celestial_spectral::validate::{checked_lambda2nu, checked_map, checked_nu2lambda};
use celestial_spectral::wavenumber::wavenumber_to_air_wavelength;
use celestial_spectral::{
    air_to_vacuum, lambda2nu, nu2lambda, round_trip_error, vacuum_to_air, ConversionOptions,
    Medium, SpectralErrorKind, Wavelength,
};

// --- Published reference values ---

#[test]
fn wavenumber_2000_to_air_wavelength() {
    assert_eq!(vacuum_to_air(1e8 / 2000.0_f64), 49986.36934549974);
    assert_eq!(nu2lambda(2000.0_f64), 49986.36934549974);
}

#[test]
fn air_5500_to_wavenumber() {
    assert_eq!(1e8 / air_to_vacuum(5500.0_f64), 18176.768046090445);
    assert_eq!(lambda2nu(5500.0_f64), 18176.768046090445);
}

#[test]
fn reference_values_in_arrays() {
    let out = vacuum_to_air([1e8 / 2000.0, 5000.0]);
    assert_eq!(out[0], 49986.36934549974);

    let nu = lambda2nu(vec![5500.0, 6000.0]);
    assert_eq!(nu[0], 18176.768046090445);
}

// --- Round trips ---

#[test]
fn air_vacuum_round_trip_is_bounded_not_exact() {
    let grid = log_grid(2000.0, 100_000.0, 2000);
    let residuals = round_trip_error(&grid);
    assert_residual_bounded(&residuals, 1e-7, "air_to_vacuum(vacuum_to_air(λ)) - λ");

    let nonzero = residuals.iter().filter(|r| **r != 0.0).count();
    assert!(nonzero > grid.len() / 2, "only {} non-zero residuals", nonzero);

    for (x, r) in grid.iter().zip(&residuals) {
        assert_eq!(*r, air_to_vacuum(vacuum_to_air(*x)) - *x);
    }
}

#[test]
fn wavenumber_round_trip() {
    for nu in log_grid(1000.0, 50_000.0, 500) {
        assert_rel_le(lambda2nu(nu2lambda(nu)), nu, 1e-11, "ν → λ_air → ν");
    }
}

#[test]
fn refractive_indices_agree_closely() {
    for lambda in log_grid(2000.0, 100_000.0, 300) {
        let n_m = morton_refractive_index(lambda);
        let n_p = piskunov_refractive_index(vacuum_to_air(lambda));
        assert!((n_m - n_p).abs() < 1e-11, "λ={} Δn={:.3e}", lambda, n_m - n_p);
    }
}

// --- Element-wise behaviour ---

#[test]
fn every_input_shape_matches_scalar_calls() {
    let grid = log_grid(2500.0, 25_000.0, 17);

    let from_vec = air_to_vacuum(grid.clone());
    let from_slice = air_to_vacuum(grid.as_slice());
    let from_ref = air_to_vacuum(&grid);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_ref);

    for (x, y) in grid.iter().zip(&from_vec) {
        assert_eq!(air_to_vacuum(*x), *y);
    }

    let arr = [grid[0], grid[5], grid[16]];
    let lambdas = nu2lambda(arr);
    assert_matches_scalar(&arr, &lambdas, wavenumber_to_air_wavelength, "nu2lambda array");
}

#[test]
fn empty_input() {
    let empty: Vec<f64> = Vec::new();
    assert!(vacuum_to_air(empty.clone()).is_empty());
    assert!(lambda2nu(&empty).is_empty());
    let none: [f64; 0] = [];
    assert_eq!(nu2lambda(none).len(), 0);
}

// --- IEEE-754 propagation ---

#[test]
fn singular_inputs_do_not_panic() {
    let at_pole = 1e4 / 130.0_f64.sqrt();
    assert!(!morton_refractive_index(at_pole).is_finite());

    let mixed = vacuum_to_air(vec![f64::NAN, 0.0, at_pole, -1.0, 5000.0]);
    assert!(mixed[0].is_nan());
    assert_eq!(mixed[1], 0.0);
    assert_eq!(mixed[2], 0.0);
    assert!(mixed[3] < 0.0);
    assert!(mixed[4].is_finite());
}

#[test]
fn output_grows_without_bound_past_each_pole() {
    // the index crosses zero at s² ≈ 130.02406 and s² ≈ 38.90016
    for (lo, hi, root) in [(129.9, 130.1, 130.02406), (38.89, 38.91, 38.90016)] {
        let lambdas: Vec<f64> = linear_grid(lo, hi, 200_000)
            .map(|s2| 1e4 / s2.sqrt())
            .collect();
        let air = vacuum_to_air(&lambdas);
        assert!(air.iter().all(|a| !a.is_nan()), "NaN in s² ∈ [{}, {}]", lo, hi);

        let (peak_idx, peak) = air
            .iter()
            .enumerate()
            .fold((0, 0.0_f64), |(bi, bv), (i, a)| {
                if a.abs() > bv {
                    (i, a.abs())
                } else {
                    (bi, bv)
                }
            });
        assert!(peak > 1e6, "max |λ_air| {} in s² ∈ [{}, {}]", peak, lo, hi);

        let s2_peak = (1e4 / lambdas[peak_idx]).powi(2);
        assert!((s2_peak - root).abs() < 1e-4, "peak at s² = {}", s2_peak);
    }
}

// --- Typed and checked layers agree with the raw functions ---

#[test]
fn typed_wavelength_matches_raw() {
    let lambda = Wavelength::new(8542.09, Medium::Air);
    assert_eq!(lambda.to_vacuum().angstrom(), air_to_vacuum(8542.09_f64));
    assert_eq!(lambda.to_wavenumber().per_cm(), lambda2nu(8542.09_f64));
}

#[test]
fn checked_layer_matches_raw_within_vald_range() {
    let opts = ConversionOptions::vald();
    let grid = log_grid(2001.0, 99_999.0, 100);
    let checked = checked_map(&grid, &opts, checked_lambda2nu).unwrap();
    let raw = lambda2nu(&grid);
    assert_eq!(checked, raw);
}

#[test]
fn checked_layer_rejects_what_raw_lets_through() {
    let opts = ConversionOptions::default();
    assert!(nu2lambda(-2000.0_f64).is_finite());
    let err = checked_nu2lambda(-2000.0, &opts).unwrap_err();
    assert_eq!(err.kind(), SpectralErrorKind::NonPositive);
}
