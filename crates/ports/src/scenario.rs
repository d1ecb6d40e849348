// crates/ports/src/scenario.rs
use std::{fmt, path::Path};

use checkpoints_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// A scripted list of steps replayed against one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub subject: Subject,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// The record a scenario operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Car { make: String, model: String, seats: u32, gears: u32 },
    Account {
        #[serde(default)]
        funds: i64,
    },
    Employee {
        name: String,
        #[serde(default = "default_allocation")]
        allocated: u32,
    },
    Counter { lower: i64, upper: i64, initial: i64 },
}

fn default_allocation() -> u32 {
    14
}

impl Subject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Car { .. } => "car",
            Self::Account { .. } => "account",
            Self::Employee { .. } => "employee",
            Self::Counter { .. } => "counter",
        }
    }
}

/// One operation in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    ShiftUp { gears: i64 },
    ShiftDown { gears: i64 },
    Deposit { amount: i64 },
    Withdraw { amount: i64 },
    TakeVacation { days: i64 },
    SetRemaining { days: i64 },
    Adjust { delta: i64 },
    Set { target: i64 },
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Self::ShiftUp { .. } => "shift_up",
            Self::ShiftDown { .. } => "shift_down",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::TakeVacation { .. } => "take_vacation",
            Self::SetRemaining { .. } => "set_remaining",
            Self::Adjust { .. } => "adjust",
            Self::Set { .. } => "set",
        }
    }

    /// The numeric argument, whatever it is called.
    pub fn amount(&self) -> i64 {
        match *self {
            Self::ShiftUp { gears } | Self::ShiftDown { gears } => gears,
            Self::Deposit { amount } | Self::Withdraw { amount } => amount,
            Self::TakeVacation { days } | Self::SetRemaining { days } => days,
            Self::Adjust { delta } => delta,
            Self::Set { target } => target,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action(), self.amount())
    }
}

/// Port for loading scenarios.
pub trait ScenarioSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<Scenario>;
}
