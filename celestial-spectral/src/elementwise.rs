//! Element-wise application of scalar conversion kernels.
//!
//! Every public conversion accepts either a single `f64` or a collection of them.
//! [`SpectralInput`] maps a scalar kernel over whatever shape it receives and hands
//! back the same shape:
//!
//! | Input | Output |
//! |-------|--------|
//! | `f64` | `f64` |
//! | `[f64; N]` / `&[f64; N]` | `[f64; N]` |
//! | `Vec<f64>` | `Vec<f64>` (reuses the allocation) |
//! | `&[f64]` / `&Vec<f64>` | `Vec<f64>` |
//!
//! ```
//! use celestial_spectral::vacuum_to_air;
//!
//! let single = vacuum_to_air(5000.0_f64);
//! let many = vacuum_to_air(vec![5000.0, 6000.0]);
//! assert_eq!(many[0], single);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A scalar or collection of `f64` values that a conversion kernel can be mapped over.
pub trait SpectralInput {
    type Output;

    fn map_elements<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;
}

impl SpectralInput for f64 {
    type Output = f64;

    #[inline]
    fn map_elements<F>(self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(self)
    }
}

impl<const N: usize> SpectralInput for [f64; N] {
    type Output = [f64; N];

    #[inline]
    fn map_elements<F>(self, f: F) -> [f64; N]
    where
        F: Fn(f64) -> f64,
    {
        self.map(f)
    }
}

impl<const N: usize> SpectralInput for &[f64; N] {
    type Output = [f64; N];

    #[inline]
    fn map_elements<F>(self, f: F) -> [f64; N]
    where
        F: Fn(f64) -> f64,
    {
        (*self).map(f)
    }
}

impl SpectralInput for Vec<f64> {
    type Output = Vec<f64>;

    fn map_elements<F>(mut self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        apply_in_place(&mut self, f);
        self
    }
}

impl SpectralInput for &[f64] {
    type Output = Vec<f64>;

    fn map_elements<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl SpectralInput for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_elements<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_elements(f)
    }
}

/// Overwrites each element with `f(element)`.
#[inline]
pub fn apply_in_place<F>(values: &mut [f64], f: F)
where
    F: Fn(f64) -> f64,
{
    for v in values.iter_mut() {
        *v = f(*v);
    }
}

/// Maps `f` over `values` on the rayon thread pool.
///
/// Output order matches input order, and each element is bit-identical to the
/// sequential result.
#[cfg(feature = "parallel")]
pub fn par_map<F>(values: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    log::trace!("parallel spectral conversion over {} values", values.len());
    values.par_iter().map(|&x| f(x)).collect()
}

/// Parallel counterpart of [`apply_in_place`].
#[cfg(feature = "parallel")]
pub fn par_apply_in_place<F>(values: &mut [f64], f: F)
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    log::trace!("parallel in-place spectral conversion over {} values", values.len());
    values.par_iter_mut().for_each(|v| *v = f(*v));
}
