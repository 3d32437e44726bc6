//! `synthspec` is a library for generating synthetic spectroscopic signals:
//! given a peak shape function and a list of peak parameters, it superposes
//! the peaks over an x-axis and optionally perturbs the result with Gaussian
//! measurement noise. It is intended for producing test and demonstration
//! data for spectral-analysis code, not for analyzing real measurements.
//!
//! The peak shape function is supplied by the caller as any
//! `Fn(&[f64], f64, f64, f64) -> Vec<f64>` mapping
//! `(x_array, amplitude, centre, width)` to a y-array of the same length.
//! The [`shapes`] module provides conforming Gaussian and Lorentzian
//! built-ins.
//!
//! # Usage
//! ```
//! use synthspec::arrayops::gridspace;
//! use synthspec::{simulate_spectrum, shapes, Peak};
//!
//! let x = gridspace(400.0, 4000.0, 1.0);
//! let peaks = vec![
//!     Peak::new(1.0, 1715.0, 12.0)?,
//!     Peak::new(0.4, 2950.0, 30.0)?,
//! ];
//! let spectrum = simulate_spectrum(shapes::gaussian, &x, &peaks, true)?;
//! assert_eq!(spectrum.len(), x.len());
//!
//! let apex = spectrum
//!     .iter()
//!     .max_by(|a, b| a.1.total_cmp(&b.1))
//!     .unwrap();
//! assert!((apex.0 - 1715.0).abs() < 5.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reproducible output comes from the `*_with_rng` variants together with a
//! seeded generator, e.g. [`rand::rngs::StdRng`].
pub mod arrayops;
pub mod peak;
pub mod shapes;
pub mod simulate;

pub use crate::arrayops::ArrayPair;
pub use crate::peak::{Peak, PeakError};
pub use crate::shapes::PeakShape;
pub use crate::simulate::{
    simulate_peak, simulate_peak_with_rng, simulate_spectrum, simulate_spectrum_with_rng,
    SimulationError, NOISE_SIGMA,
};
