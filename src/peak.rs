use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ways a [`Peak`] can be rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PeakError {
    #[error("peak {field} must be finite, got {value}")]
    NonFiniteParameter { field: &'static str, value: f64 },
    #[error("peak width must be positive, got {0}")]
    NonPositiveWidth(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A single spectral feature, described by its height (`amplitude`), its
/// position on the x-axis (`centre`), and its spread (`width`).
///
/// A `Peak` is validated when it is created, so any instance in hand has
/// finite parameters and a positive width.
pub struct Peak {
    amplitude: f64,
    centre: f64,
    width: f64,
}

impl Peak {
    pub fn new(amplitude: f64, centre: f64, width: f64) -> Result<Self, PeakError> {
        for (field, value) in [
            ("amplitude", amplitude),
            ("centre", centre),
            ("width", width),
        ] {
            if !value.is_finite() {
                return Err(PeakError::NonFiniteParameter { field, value });
            }
        }
        if width <= 0.0 {
            return Err(PeakError::NonPositiveWidth(width));
        }
        Ok(Self {
            amplitude,
            centre,
            width,
        })
    }

    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    #[inline]
    pub fn centre(&self) -> f64 {
        self.centre
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl TryFrom<(f64, f64, f64)> for Peak {
    type Error = PeakError;

    fn try_from(value: (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Peak({}, {}, {})",
            self.amplitude, self.centre, self.width
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let peak = Peak::new(2.5, 1520.0, 8.0).unwrap();
        assert_eq!(peak.amplitude(), 2.5);
        assert_eq!(peak.centre(), 1520.0);
        assert_eq!(peak.width(), 8.0);
        assert_eq!(peak.to_string(), "Peak(2.5, 1520, 8)");
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Peak::new(f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            PeakError::NonFiniteParameter {
                field: "amplitude",
                ..
            }
        ));

        assert!(Peak::new(1.0, f64::INFINITY, 1.0).is_err());
        assert!(Peak::new(1.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_rejects_non_positive_width() {
        assert_eq!(
            Peak::new(1.0, 0.0, 0.0).unwrap_err(),
            PeakError::NonPositiveWidth(0.0)
        );
        assert_eq!(
            Peak::new(1.0, 0.0, -3.0).unwrap_err(),
            PeakError::NonPositiveWidth(-3.0)
        );
    }

    #[test]
    fn test_try_from_tuple() {
        let peak = Peak::try_from((1.0, 4.0, 0.5)).unwrap();
        assert_eq!(peak, Peak::new(1.0, 4.0, 0.5).unwrap());
        assert!(Peak::try_from((1.0, 4.0, 0.0)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let peak = Peak::new(1.5, 997.0, 12.0).unwrap();
        let text = serde_json::to_string(&peak).unwrap();
        let dup: Peak = serde_json::from_str(&text).unwrap();
        assert_eq!(peak, dup);
    }
}
