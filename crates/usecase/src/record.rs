// crates/usecase/src/record.rs
use checkpoints_domain::model::{BankAccount, Car, Employee};
use checkpoints_ports::scenario::{Step, Subject};
use checkpoints_shared_kernel::{BoundedCounter, Bounds, DomainResult};

/// A live domain record built from a scenario [`Subject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Car(Car),
    Account(BankAccount),
    Employee(Employee),
    Counter(BoundedCounter),
}

impl Record {
    pub fn build(subject: &Subject) -> DomainResult<Self> {
        let record = match subject {
            Subject::Car { make, model, seats, gears } => Self::Car(Car::new(make.as_str(), model.as_str(), *seats, *gears)?),
            Subject::Account { funds } => Self::Account(BankAccount::with_funds(*funds)?),
            Subject::Employee { name, allocated } => Self::Employee(Employee::with_allocation(name.as_str(), *allocated)),
            Subject::Counter { lower, upper, initial } => {
                Self::Counter(BoundedCounter::new(Bounds::new(*lower, *upper)?, *initial)?)
            }
        };
        Ok(record)
    }

    /// The tracked quantity: gear, funds, remaining days or counter value.
    pub fn value(&self) -> i64 {
        match self {
            Self::Car(car) => car.gear(),
            Self::Account(account) => account.funds(),
            Self::Employee(employee) => employee.remaining(),
            Self::Counter(counter) => counter.current(),
        }
    }

    /// Applies `step`, or returns `None` when the step has no meaning for this record.
    pub fn apply(&mut self, step: Step) -> Option<DomainResult<i64>> {
        let result = match (self, step) {
            (Self::Car(car), Step::ShiftUp { gears }) => car.shift_up(gears),
            (Self::Car(car), Step::ShiftDown { gears }) => car.shift_down(gears),
            (Self::Account(account), Step::Deposit { amount }) => account.deposit(amount),
            (Self::Account(account), Step::Withdraw { amount }) => account.withdraw(amount),
            (Self::Employee(employee), Step::TakeVacation { days }) => employee.take_vacation(days),
            (Self::Employee(employee), Step::SetRemaining { days }) => employee.set_remaining(days),
            (Self::Counter(counter), Step::Adjust { delta }) => counter.try_adjust(delta).map_err(Into::into),
            (Self::Counter(counter), Step::Set { target }) => counter.try_set(target).map_err(Into::into),
            _ => return None,
        };
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use checkpoints_shared_kernel::DomainError;

    use super::*;

    #[test]
    fn builds_each_subject_kind() {
        let car = Record::build(&Subject::Car { make: "Honda".into(), model: "Accord".into(), seats: 5, gears: 5 });
        assert_eq!(car.map(|r| r.value()), Ok(1));

        let account = Record::build(&Subject::Account { funds: 25 }).unwrap();
        assert_eq!(account.value(), 25);

        let employee = Record::build(&Subject::Employee { name: "Archer".into(), allocated: 14 }).unwrap();
        assert_eq!(employee.value(), 14);

        let counter = Record::build(&Subject::Counter { lower: 1, upper: 10, initial: 6 }).unwrap();
        assert_eq!(counter.value(), 6);
    }

    #[test]
    fn invalid_subject_fails_to_build() {
        let err = Record::build(&Subject::Counter { lower: 10, upper: 1, initial: 5 }).unwrap_err();
        assert_eq!(err, DomainError::InvalidBounds { lower: 10, upper: 1 });
        assert!(Record::build(&Subject::Account { funds: -3 }).is_err());
    }

    #[test]
    fn mismatched_step_is_not_applicable() {
        let mut car = Record::build(&Subject::Car { make: "A".into(), model: "B".into(), seats: 2, gears: 2 }).unwrap();
        assert!(car.apply(Step::Deposit { amount: 10 }).is_none());
        assert_eq!(car.apply(Step::ShiftUp { gears: 1 }), Some(Ok(2)));
    }
}
