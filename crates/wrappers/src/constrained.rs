use crate::error::WrapperError;
use crate::wrapper::Wrapper;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

const SCORE_MIN: i32 = 0;
const SCORE_MAX: i32 = 100;

/// An ordered value that always lies within `[lower, upper]`.
///
/// Writes are never rejected: a value outside the range is clamped to the nearest bound before
/// it is stored. The one exception is a value that cannot be ordered against the bounds at all
/// (a floating-point NaN), which is discarded and leaves the previous value in place.
///
/// The bounds are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constrained<T> {
    value: T,
    lower: T,
    upper: T,
}

impl<T> Constrained<T>
where
    T: PartialOrd + Clone + fmt::Debug,
{
    /// Creates a wrapper holding `initial` clamped into `[lower, upper]`.
    ///
    /// An `initial` value that cannot be ordered against the bounds starts out at `lower`.
    ///
    /// # Errors
    /// * [`WrapperError::InvalidRange`] If `lower > upper` or the bounds cannot be ordered.
    pub fn new(initial: T, lower: T, upper: T) -> Result<Self, WrapperError> {
        if !matches!(lower.partial_cmp(&upper), Some(Ordering::Less | Ordering::Equal)) {
            return Err(WrapperError::InvalidRange {
                message: format!("lower bound {lower:?} does not precede upper bound {upper:?}").into(),
                context: None,
            });
        }

        let value = lower.clone();
        let mut constrained = Self { value, lower, upper };
        constrained.set(initial);
        Ok(constrained)
    }

    /// Same as [`Constrained::new`], taking the bounds as an inclusive range.
    ///
    /// # Errors
    /// * [`WrapperError::InvalidRange`] If the range is empty or unordered.
    pub fn from_range(initial: T, range: RangeInclusive<T>) -> Result<Self, WrapperError> {
        let (lower, upper) = range.into_inner();
        Self::new(initial, lower, upper)
    }

    /// Stores `value` clamped into the bounds.
    pub fn set(&mut self, value: T) {
        let Some(lower) = value.partial_cmp(&self.lower) else {
            debug!(value = ?value, "discarding value that cannot be ordered against the bounds");
            return;
        };
        let Some(upper) = value.partial_cmp(&self.upper) else {
            debug!(value = ?value, "discarding value that cannot be ordered against the bounds");
            return;
        };

        self.value = match (lower, upper) {
            (Ordering::Less, _) => {
                debug!(value = ?value, lower = ?self.lower, "clamping value to lower bound");
                self.lower.clone()
            }
            (_, Ordering::Greater) => {
                debug!(value = ?value, upper = ?self.upper, "clamping value to upper bound");
                self.upper.clone()
            }
            _ => value,
        };
    }
}

impl<T> Constrained<T> {
    /// Returns the effective value, always within the bounds.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns the `(lower, upper)` bounds.
    #[must_use]
    pub const fn bounds(&self) -> (&T, &T) {
        (&self.lower, &self.upper)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl Constrained<i32> {
    /// A score between 0 and 100 inclusive.
    #[must_use]
    pub fn score(initial: i32) -> Self {
        Self { value: initial.clamp(SCORE_MIN, SCORE_MAX), lower: SCORE_MIN, upper: SCORE_MAX }
    }
}

impl<T> Wrapper for Constrained<T>
where
    T: PartialOrd + Clone + fmt::Debug,
{
    type Value = T;

    fn value(&self) -> T {
        self.value.clone()
    }

    fn assign(&mut self, value: T) {
        self.set(value);
    }
}

impl<T: fmt::Display> fmt::Display for Constrained<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: Serialize> Serialize for Constrained<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_is_clamped() {
        let c = Constrained::new(150, 0, 100).unwrap();
        assert_eq!(*c.get(), 100);

        let c = Constrained::new(-3, 0, 100).unwrap();
        assert_eq!(*c.get(), 0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Constrained::new(5, 10, 0).unwrap_err();
        assert!(matches!(err, WrapperError::InvalidRange { .. }));
        assert_eq!(err.to_string(), "Invalid range: lower bound 10 does not precede upper bound 0");
    }

    #[test]
    fn nan_bounds_are_rejected() {
        assert!(Constrained::new(0.5, f64::NAN, 1.0).is_err());
        assert!(Constrained::new(0.5, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn nan_writes_are_discarded() {
        let mut c = Constrained::new(0.25, 0.0, 1.0).unwrap();
        c.set(f64::NAN);
        assert!((*c.get() - 0.25).abs() < f64::EPSILON);

        let c = Constrained::new(f64::NAN, -1.0, 1.0).unwrap();
        assert!((*c.get() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_range_pins_value() {
        let mut c = Constrained::from_range(9, 4..=4).unwrap();
        c.set(-100);
        assert_eq!(c.into_inner(), 4);
    }

    #[test]
    fn score_preset_clamps() {
        let mut score = Constrained::score(0);
        assert_eq!(*score.get(), 0);

        score.set(55);
        assert_eq!(*score.get(), 55);

        score.set(101);
        assert_eq!(*score.get(), 100);
        assert_eq!(score.bounds(), (&0, &100));
    }
}
