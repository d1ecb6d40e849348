pub mod account;
pub mod animal;
pub mod employee;
pub mod vehicle;

pub use account::BankAccount;
pub use animal::{Animal, CatBreed, DogBreed};
pub use employee::Employee;
pub use vehicle::Car;

use checkpoints_shared_kernel::{BoundedCounter, Bounds, DomainError, DomainResult};

/// Rejects negative step sizes before they reach a counter.
pub(crate) fn non_negative(operation: &'static str, amount: i64) -> DomainResult<i64> {
    if amount < 0 {
        return Err(DomainError::InvalidAmount { operation, amount });
    }
    Ok(amount)
}

/// Accepts a deserialized counter only if it sits on the bounds the record requires.
pub(crate) fn require_bounds(what: &str, counter: BoundedCounter, bounds: Bounds) -> DomainResult<BoundedCounter> {
    if counter.bounds() != bounds {
        return Err(DomainError::InvalidConfiguration {
            reason: format!("{what} must be bounded by {bounds}, got {}", counter.bounds()),
        });
    }
    Ok(counter)
}
