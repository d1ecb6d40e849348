// crates/domain/src/model/vehicle.rs
use serde::{Deserialize, Serialize};

use checkpoints_shared_kernel::{BoundedCounter, Bounds, DomainError, DomainResult};

use super::{non_negative, require_bounds};

/// A car with a manual gearbox.
///
/// Make, model and seat count are fixed at construction. The current gear can
/// only move through [`Car::shift_up`] and [`Car::shift_down`], which refuse
/// to leave `1..=gears`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCar")]
pub struct Car {
    make: String,
    model: String,
    seats: u32,
    gear: BoundedCounter,
}

#[derive(Deserialize)]
struct RawCar {
    make: String,
    model: String,
    seats: u32,
    gear: BoundedCounter,
}

impl TryFrom<RawCar> for Car {
    type Error = DomainError;

    fn try_from(raw: RawCar) -> Result<Self, Self::Error> {
        let gears = u32::try_from(raw.gear.upper()).map_err(|_| DomainError::InvalidConfiguration {
            reason: format!("gear count {} is out of range", raw.gear.upper()),
        })?;
        let mut car = Self::new(raw.make, raw.model, raw.seats, gears)?;
        car.gear = require_bounds("gear", raw.gear, car.gear.bounds())?;
        Ok(car)
    }
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, seats: u32, gears: u32) -> DomainResult<Self> {
        if seats == 0 {
            return Err(DomainError::InvalidConfiguration { reason: "a car needs at least one seat".into() });
        }
        if gears == 0 {
            return Err(DomainError::InvalidConfiguration { reason: "a car needs at least one gear".into() });
        }
        let bounds = Bounds::new(1, i64::from(gears))?;
        Ok(Self { make: make.into(), model: model.into(), seats, gear: BoundedCounter::at_lower(bounds) })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// "make model"
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Number of forward gears.
    pub fn gears(&self) -> i64 {
        self.gear.upper()
    }

    pub fn gear(&self) -> i64 {
        self.gear.current()
    }

    pub fn shift_up(&mut self, gears: i64) -> DomainResult<i64> {
        let gears = non_negative("shift up", gears)?;
        Ok(self.gear.try_adjust(gears)?)
    }

    pub fn shift_down(&mut self, gears: i64) -> DomainResult<i64> {
        let gears = non_negative("shift down", gears)?;
        Ok(self.gear.try_adjust(-gears)?)
    }
}
