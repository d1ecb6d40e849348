// crates/domain/src/model/account.rs
use serde::{Deserialize, Serialize};

use checkpoints_shared_kernel::{BoundedCounter, Bounds, DomainError, DomainResult};

use super::{non_negative, require_bounds};

/// A bank balance.
///
/// Funds never go negative: a withdrawal larger than the balance is rejected
/// and leaves the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAccount")]
pub struct BankAccount {
    funds: BoundedCounter,
}

#[derive(Deserialize)]
struct RawAccount {
    funds: BoundedCounter,
}

impl TryFrom<RawAccount> for BankAccount {
    type Error = DomainError;

    fn try_from(raw: RawAccount) -> Result<Self, Self::Error> {
        Ok(Self { funds: require_bounds("funds", raw.funds, Bounds::non_negative())? })
    }
}

impl BankAccount {
    pub fn new() -> Self {
        Self { funds: BoundedCounter::at_lower(Bounds::non_negative()) }
    }

    /// Opens an account holding `funds`.
    pub fn with_funds(funds: i64) -> DomainResult<Self> {
        Ok(Self { funds: BoundedCounter::new(Bounds::non_negative(), funds)? })
    }

    pub fn funds(&self) -> i64 {
        self.funds.current()
    }

    pub fn deposit(&mut self, amount: i64) -> DomainResult<i64> {
        let amount = non_negative("deposit", amount)?;
        Ok(self.funds.try_adjust(amount)?)
    }

    pub fn withdraw(&mut self, amount: i64) -> DomainResult<i64> {
        let amount = non_negative("withdraw", amount)?;
        Ok(self.funds.try_adjust(-amount)?)
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new()
    }
}
