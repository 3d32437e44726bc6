//! Built-in peak shape functions.
//!
//! Each free function here satisfies the shape function contract consumed by
//! [`crate::simulate`]: `(x_array, amplitude, centre, width)` to a y-array
//! of the same length, with `width` read as the full width at half maximum.
//! Callers may just as well pass their own closure instead.

use crate::peak::Peak;

/// Converts a full width at half maximum into a Gaussian sigma
const FWHM_TO_SIGMA: f64 = 2.35482;

/// A Gaussian profile with apex `amplitude` at `centre` and full width at
/// half maximum `width`.
pub fn gaussian(x_array: &[f64], amplitude: f64, centre: f64, width: f64) -> Vec<f64> {
    let spread = width / FWHM_TO_SIGMA;
    let denom = 2.0 * spread.powi(2);
    x_array
        .iter()
        .map(|x| amplitude * (-(x - centre).powi(2) / denom).exp())
        .collect()
}

/// A Lorentzian (Cauchy) profile with apex `amplitude` at `centre` and full
/// width at half maximum `width`.
pub fn lorentzian(x_array: &[f64], amplitude: f64, centre: f64, width: f64) -> Vec<f64> {
    let gamma = width / 2.0;
    let gamma2 = gamma.powi(2);
    x_array
        .iter()
        .map(|x| amplitude * gamma2 / ((x - centre).powi(2) + gamma2))
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// A statistical model for peak shapes
pub enum PeakShape {
    #[default]
    Gaussian,
    Lorentzian,
}

impl PeakShape {
    /// Estimate the intensity of `peak` at `x`
    #[inline]
    pub fn predict(&self, x: f64, peak: &Peak) -> f64 {
        match self {
            PeakShape::Gaussian => {
                let spread = peak.width() / FWHM_TO_SIGMA;
                peak.amplitude() * (-(x - peak.centre()).powi(2) / (2.0 * spread.powi(2))).exp()
            }
            PeakShape::Lorentzian => {
                let gamma2 = (peak.width() / 2.0).powi(2);
                peak.amplitude() * gamma2 / ((x - peak.centre()).powi(2) + gamma2)
            }
        }
    }

    /// Generate the theoretical signal for `peak` over `x_array`
    pub fn profile(&self, x_array: &[f64], peak: &Peak) -> Vec<f64> {
        x_array.iter().map(|x| self.predict(*x, peak)).collect()
    }

    /// Add the theoretical signal for `peak` over `x_array` into `out`
    pub fn profile_into(&self, x_array: &[f64], out: &mut [f64], peak: &Peak) {
        assert_eq!(x_array.len(), out.len());
        for (x, o) in x_array.iter().zip(out.iter_mut()) {
            *o += self.predict(*x, peak);
        }
    }

    /// The free shape function matching this model, usable wherever the
    /// simulators expect a `Fn(&[f64], f64, f64, f64) -> Vec<f64>`.
    pub fn as_fn(&self) -> fn(&[f64], f64, f64, f64) -> Vec<f64> {
        match self {
            PeakShape::Gaussian => gaussian,
            PeakShape::Lorentzian => lorentzian,
        }
    }
}
