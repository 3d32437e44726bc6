use std::borrow::Cow;
use std::iter::Sum;

use num_traits::{Float, ToPrimitive};

/// Create an evenly spaced axis from `start` to `end` (exclusive) with
/// spacing `step`.
pub fn gridspace<T: Float + ToPrimitive>(start: T, end: T, step: T) -> Vec<T> {
    let distance = end - start;
    let steps = (distance / step).to_usize().unwrap();
    let mut result = Vec::with_capacity(steps);
    for i in 0..steps {
        result.push(start + T::from(i).unwrap() * step);
    }
    result
}

/// Integrate `y` over `x` with the trapezoid rule.
pub fn trapz<F: Float + Sum>(x: &[F], y: &[F]) -> F {
    let half = F::from(0.5).unwrap();
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| (xw[1] - xw[0]) * half * (yw[1] + yw[0]))
        .sum()
}

/// A paired set of x and intensity arrays of equal length. Either side may
/// be borrowed or owned.
#[derive(Debug, Default, Clone)]
pub struct ArrayPair<'lifespan> {
    pub x_array: Cow<'lifespan, [f64]>,
    pub y_array: Cow<'lifespan, [f64]>,
    pub min_x: f64,
    pub max_x: f64,
}

impl<'lifespan> ArrayPair<'lifespan> {
    pub fn new(x_array: Cow<'lifespan, [f64]>, y_array: Cow<'lifespan, [f64]>) -> Self {
        let min_x = x_array.first().copied().unwrap_or_default();
        let max_x = x_array.last().copied().unwrap_or_default();
        Self {
            x_array,
            y_array,
            min_x,
            max_x,
        }
    }

    pub fn len(&self) -> usize {
        self.x_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_array.is_empty()
    }

    /// The x, y pair at position `i`, if `i` is in bounds.
    pub fn get(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.x_array.get(i)?, *self.y_array.get(i)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_array
            .iter()
            .copied()
            .zip(self.y_array.iter().copied())
    }

    /// Take ownership of both arrays, copying any borrowed side.
    pub fn into_owned(self) -> (Vec<f64>, Vec<f64>) {
        (self.x_array.into_owned(), self.y_array.into_owned())
    }
}

impl<'lifespan> From<(&'lifespan [f64], &'lifespan [f64])> for ArrayPair<'lifespan> {
    fn from(pair: (&'lifespan [f64], &'lifespan [f64])) -> Self {
        Self::new(Cow::Borrowed(pair.0), Cow::Borrowed(pair.1))
    }
}

impl From<(Vec<f64>, Vec<f64>)> for ArrayPair<'static> {
    fn from(pair: (Vec<f64>, Vec<f64>)) -> Self {
        Self::new(Cow::Owned(pair.0), Cow::Owned(pair.1))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gridspace() {
        let axis = gridspace(0.0, 1.0, 0.25);
        assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75]);

        let axis = gridspace(400.0, 600.0, 0.5);
        assert_eq!(axis.len(), 400);
        assert_eq!(axis[0], 400.0);
        assert_eq!(axis[399], 599.5);
    }

    #[test]
    fn test_trapz() {
        let x: Vec<f64> = (0..=100).map(|i| i as f64 * 0.01).collect();
        let y = x.clone();
        let area = trapz(&x, &y);
        assert!((area - 0.5).abs() < 1e-9, "area = {}", area);
    }

    #[test]
    fn test_array_pair() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![10.0, 20.0, 30.0];
        let pair = ArrayPair::from((x.as_slice(), y.as_slice()));
        assert_eq!(pair.len(), 3);
        assert!(!pair.is_empty());
        assert_eq!(pair.min_x, 1.0);
        assert_eq!(pair.max_x, 3.0);
        assert_eq!(pair.get(1), Some((2.0, 20.0)));
        assert_eq!(pair.get(3), None);

        let collected: Vec<_> = pair.iter().collect();
        assert_eq!(collected, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);

        let (x2, y2) = pair.into_owned();
        assert_eq!(x2, x);
        assert_eq!(y2, y);
    }

    #[test]
    fn test_array_pair_empty() {
        let pair = ArrayPair::from((Vec::new(), Vec::new()));
        assert!(pair.is_empty());
        assert_eq!(pair.min_x, 0.0);
        assert_eq!(pair.max_x, 0.0);
    }
}
