// crates/domain/src/model/employee.rs
use serde::{Deserialize, Serialize};

use checkpoints_shared_kernel::{BoundKind, BoundedCounter, Bounds, DomainError, DomainResult, OutOfRangeError};

use super::{non_negative, require_bounds};

pub const DEFAULT_VACATION_DAYS: u32 = 14;

/// Vacation-day tracker for one employee.
///
/// Remaining days live in `[0, allocated]`; `taken` is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEmployee")]
pub struct Employee {
    name: String,
    remaining: BoundedCounter,
}

#[derive(Deserialize)]
struct RawEmployee {
    name: String,
    remaining: BoundedCounter,
}

impl TryFrom<RawEmployee> for Employee {
    type Error = DomainError;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        let allocation = Bounds::new(0, raw.remaining.upper())?;
        Ok(Self { name: raw.name, remaining: require_bounds("remaining vacation days", raw.remaining, allocation)? })
    }
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_allocation(name, DEFAULT_VACATION_DAYS)
    }

    pub fn with_allocation(name: impl Into<String>, allocated: u32) -> Self {
        Self { name: name.into(), remaining: BoundedCounter::at_upper(Bounds::up_to(allocated)) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allocated(&self) -> i64 {
        self.remaining.upper()
    }

    pub fn remaining(&self) -> i64 {
        self.remaining.current()
    }

    pub fn taken(&self) -> i64 {
        self.remaining.headroom()
    }

    /// Books `days` off, returning the days left afterwards.
    pub fn take_vacation(&mut self, days: i64) -> DomainResult<i64> {
        let days = non_negative("take vacation", days)?;
        Ok(self.remaining.try_adjust(-days)?)
    }

    /// Re-allocates so that exactly `days` remain, keeping the days already taken.
    pub fn set_remaining(&mut self, days: i64) -> DomainResult<i64> {
        let days = non_negative("set remaining vacation", days)?;
        let allocated = self
            .taken()
            .checked_add(days)
            .ok_or(OutOfRangeError::new(i64::MAX, BoundKind::Upper, i64::MAX))?;
        self.remaining = BoundedCounter::new(Bounds::new(0, allocated)?, days)?;
        Ok(days)
    }
}
