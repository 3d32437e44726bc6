//! Simulate noisy peaks and spectra from lists of peak parameters.
//!
//! Both operations take the peak shape function as an argument rather than
//! assuming one, so any `Fn(&[f64], f64, f64, f64) -> Vec<f64>` works, the
//! built-ins from [`crate::shapes`] included. The plain functions draw their
//! noise from the thread-local generator; the `*_with_rng` forms accept any
//! [`Rng`], which is how reproducible output is obtained:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use synthspec::{simulate_spectrum_with_rng, shapes, Peak};
//!
//! let x = synthspec::arrayops::gridspace(0.0, 10.0, 0.5);
//! let peaks = vec![Peak::new(1.0, 5.0, 1.0)?];
//! let mut rng = StdRng::seed_from_u64(1);
//! let pair = simulate_spectrum_with_rng(shapes::gaussian, &x, &peaks, true, &mut rng)?;
//! assert_eq!(pair.len(), x.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;

use log::{debug, trace};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;
use thiserror::Error;

use crate::arrayops::ArrayPair;
use crate::peak::Peak;

/// Standard deviation of the additive measurement noise
pub const NOISE_SIGMA: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("peak shape function returned {actual} samples for an x-array of length {expected}")]
    ShapeLengthMismatch { expected: usize, actual: usize },
}

fn noise_model() -> Normal {
    Normal::new(0.0, NOISE_SIGMA).unwrap()
}

/// Simulate a single measured peak: evaluate `peak_fn` over `x_array` and
/// perturb every sample with zero-mean Gaussian noise.
///
/// Noise is always added here, unlike [`simulate_spectrum`] where it is
/// opt-in. Draws come from the thread-local generator; use
/// [`simulate_peak_with_rng`] for a caller-controlled source.
pub fn simulate_peak<F>(
    peak_fn: F,
    x_array: &[f64],
    amplitude: f64,
    centre: f64,
    width: f64,
) -> Result<Vec<f64>, SimulationError>
where
    F: Fn(&[f64], f64, f64, f64) -> Vec<f64>,
{
    let mut rng = rand::thread_rng();
    simulate_peak_with_rng(peak_fn, x_array, amplitude, centre, width, &mut rng)
}

/// [`simulate_peak`] drawing its noise from `rng`.
pub fn simulate_peak_with_rng<F, R>(
    peak_fn: F,
    x_array: &[f64],
    amplitude: f64,
    centre: f64,
    width: f64,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError>
where
    F: Fn(&[f64], f64, f64, f64) -> Vec<f64>,
    R: Rng,
{
    let calc_peak = peak_fn(x_array, amplitude, centre, width);
    if calc_peak.len() != x_array.len() {
        return Err(SimulationError::ShapeLengthMismatch {
            expected: x_array.len(),
            actual: calc_peak.len(),
        });
    }
    let noise = noise_model();
    Ok(calc_peak
        .into_iter()
        .map(|y| y + noise.sample(rng))
        .collect())
}

/// Simulate a spectrum: superpose the profile of every peak in `peaks` over
/// `x_array`, then optionally perturb each sample with zero-mean Gaussian
/// noise.
///
/// The returned [`ArrayPair`] borrows `x_array` unchanged and owns the
/// computed y-array. An empty `peaks` slice yields an all-zero signal, or
/// pure noise when `add_noise` is set.
pub fn simulate_spectrum<'a, F>(
    peak_fn: F,
    x_array: &'a [f64],
    peaks: &[Peak],
    add_noise: bool,
) -> Result<ArrayPair<'a>, SimulationError>
where
    F: Fn(&[f64], f64, f64, f64) -> Vec<f64>,
{
    let mut rng = rand::thread_rng();
    simulate_spectrum_with_rng(peak_fn, x_array, peaks, add_noise, &mut rng)
}

/// [`simulate_spectrum`] drawing its noise from `rng`.
pub fn simulate_spectrum_with_rng<'a, F, R>(
    peak_fn: F,
    x_array: &'a [f64],
    peaks: &[Peak],
    add_noise: bool,
    rng: &mut R,
) -> Result<ArrayPair<'a>, SimulationError>
where
    F: Fn(&[f64], f64, f64, f64) -> Vec<f64>,
    R: Rng,
{
    let mut y_array = vec![0.0f64; x_array.len()];
    for (index, peak) in peaks.iter().enumerate() {
        let calc_peak = peak_fn(x_array, peak.amplitude(), peak.centre(), peak.width());
        if calc_peak.len() != x_array.len() {
            debug!(
                "peak {} produced {} samples, expected {}",
                index,
                calc_peak.len(),
                x_array.len()
            );
            return Err(SimulationError::ShapeLengthMismatch {
                expected: x_array.len(),
                actual: calc_peak.len(),
            });
        }
        trace!("accumulating peak {}: {}", index, peak);
        for (acc, y) in y_array.iter_mut().zip(calc_peak) {
            *acc += y;
        }
    }
    if add_noise {
        let noise = noise_model();
        for y in y_array.iter_mut() {
            *y += noise.sample(rng);
        }
    }
    debug!(
        "simulated {} peaks over {} samples, noise: {}",
        peaks.len(),
        x_array.len(),
        add_noise
    );
    Ok(ArrayPair::new(
        Cow::Borrowed(x_array),
        Cow::Owned(y_array),
    ))
}
