// crates/domain/src/arithmetic.rs
use checkpoints_shared_kernel::{Bounds, DomainError, DomainResult};

/// Inputs accepted by [`integer_sqrt`].
pub const SQRT_INPUT: (i64, i64) = (1, 10_000);

/// Integer square root of `value` found by search, without floating point.
///
/// `value` must lie in `1..=10_000`; numbers that are not perfect squares
/// yield [`DomainError::NoIntegerRoot`].
pub fn integer_sqrt(value: i64) -> DomainResult<i64> {
    let (lower, upper) = SQRT_INPUT;
    let value = Bounds::new(lower, upper)?.check(value)?;

    (1..=value)
        .take_while(|root| root * root <= value)
        .find(|root| root * root == value)
        .ok_or(DomainError::NoIntegerRoot { value })
}
