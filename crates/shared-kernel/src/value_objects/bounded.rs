// crates/shared-kernel/src/value_objects/bounded.rs
//! Bounded integer quantities.
//!
//! [`BoundedCounter`] holds an `i64` that never leaves its inclusive [`Bounds`].
//! Every mutation is validated first and either commits or reports an
//! [`OutOfRangeError`]; values are never clamped.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;

/// Which side of a [`Bounds`] a rejected value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    Lower,
    Upper,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// A mutation would have placed a value outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{attempted} is {} the {bound} bound {limit}", direction(.bound))]
pub struct OutOfRangeError {
    attempted: i64,
    bound: BoundKind,
    limit: i64,
}

impl OutOfRangeError {
    #[inline]
    pub const fn new(attempted: i64, bound: BoundKind, limit: i64) -> Self {
        Self { attempted, bound, limit }
    }

    /// The rejected candidate value.
    #[inline]
    pub const fn attempted(&self) -> i64 {
        self.attempted
    }

    /// The side that was violated.
    #[inline]
    pub const fn bound(&self) -> BoundKind {
        self.bound
    }

    /// Value of the violated bound.
    #[inline]
    pub const fn limit(&self) -> i64 {
        self.limit
    }
}

fn direction(bound: &BoundKind) -> &'static str {
    match bound {
        BoundKind::Lower => "below",
        BoundKind::Upper => "above",
    }
}

/// Inclusive `[lower, upper]` range with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    lower: i64,
    upper: i64,
}

#[derive(Deserialize)]
struct RawBounds {
    lower: i64,
    upper: i64,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = DomainError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Bounds {
    pub fn new(lower: i64, upper: i64) -> Result<Self, DomainError> {
        if lower > upper {
            return Err(DomainError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Bounds covering every non-negative `i64`.
    pub const fn non_negative() -> Self {
        Self { lower: 0, upper: i64::MAX }
    }

    /// `[0, upper]`
    pub const fn up_to(upper: u32) -> Self {
        Self { lower: 0, upper: upper as i64 }
    }

    #[inline]
    pub const fn lower(&self) -> i64 {
        self.lower
    }

    #[inline]
    pub const fn upper(&self) -> i64 {
        self.upper
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `value` unchanged when it is inside the bounds.
    pub const fn check(&self, value: i64) -> Result<i64, OutOfRangeError> {
        if value < self.lower {
            Err(OutOfRangeError::new(value, BoundKind::Lower, self.lower))
        } else if value > self.upper {
            Err(OutOfRangeError::new(value, BoundKind::Upper, self.upper))
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// An integer that always satisfies `lower <= value <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCounter", into = "RawCounter")]
pub struct BoundedCounter {
    value: i64,
    bounds: Bounds,
}

#[derive(Serialize, Deserialize)]
struct RawCounter {
    value: i64,
    lower: i64,
    upper: i64,
}

impl TryFrom<RawCounter> for BoundedCounter {
    type Error = DomainError;

    fn try_from(raw: RawCounter) -> Result<Self, Self::Error> {
        let bounds = Bounds::new(raw.lower, raw.upper)?;
        Ok(Self::new(bounds, raw.value)?)
    }
}

impl From<BoundedCounter> for RawCounter {
    fn from(counter: BoundedCounter) -> Self {
        Self { value: counter.value, lower: counter.lower(), upper: counter.upper() }
    }
}

impl BoundedCounter {
    /// Creates a counter at `initial`, which must lie inside `bounds`.
    pub const fn new(bounds: Bounds, initial: i64) -> Result<Self, OutOfRangeError> {
        match bounds.check(initial) {
            Ok(value) => Ok(Self { value, bounds }),
            Err(err) => Err(err),
        }
    }

    /// Creates a counter sitting on its lower bound.
    pub const fn at_lower(bounds: Bounds) -> Self {
        Self { value: bounds.lower, bounds }
    }

    /// Creates a counter sitting on its upper bound.
    pub const fn at_upper(bounds: Bounds) -> Self {
        Self { value: bounds.upper, bounds }
    }

    #[inline]
    pub const fn current(&self) -> i64 {
        self.value
    }

    #[inline]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub const fn lower(&self) -> i64 {
        self.bounds.lower
    }

    #[inline]
    pub const fn upper(&self) -> i64 {
        self.bounds.upper
    }

    #[inline]
    pub const fn is_at_lower(&self) -> bool {
        self.value == self.bounds.lower
    }

    #[inline]
    pub const fn is_at_upper(&self) -> bool {
        self.value == self.bounds.upper
    }

    /// How far the value may still rise.
    pub const fn headroom(&self) -> i64 {
        self.bounds.upper.saturating_sub(self.value)
    }

    /// How far the value may still fall.
    pub const fn slack(&self) -> i64 {
        self.value.saturating_sub(self.bounds.lower)
    }

    /// Moves the value by `delta`, committing only if the result stays in bounds.
    ///
    /// If `value + delta` overflows `i64`, the call fails against the bound in
    /// the direction of `delta` with the candidate saturated.
    pub fn try_adjust(&mut self, delta: i64) -> Result<i64, OutOfRangeError> {
        match self.value.checked_add(delta) {
            Some(candidate) => self.try_set(candidate),
            None if delta > 0 => Err(OutOfRangeError::new(i64::MAX, BoundKind::Upper, self.bounds.upper)),
            None => Err(OutOfRangeError::new(i64::MIN, BoundKind::Lower, self.bounds.lower)),
        }
    }

    /// Moves the value to `target`, committing only if it is in bounds.
    pub fn try_set(&mut self, target: i64) -> Result<i64, OutOfRangeError> {
        self.value = self.bounds.check(target)?;
        Ok(self.value)
    }

    /// Swaps in new bounds, provided the current value lies inside them.
    pub fn try_rebound(&mut self, bounds: Bounds) -> Result<(), OutOfRangeError> {
        bounds.check(self.value)?;
        self.bounds = bounds;
        Ok(())
    }
}

impl fmt::Display for BoundedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} in {}", self.value, self.bounds)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
