// crates/domain/src/sequences.rs
//! Small list and sequence exercises.
use std::{collections::HashSet, fmt, hash::Hash, ops::RangeInclusive};

use serde::Serialize;

pub const DEFAULT_LUCKY_NUMBERS: [i64; 10] = [7, 4, 38, 21, 16, 15, 12, 33, 31, 49];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u32),
}

impl From<u32> for FizzBuzz {
    fn from(n: u32) -> Self {
        match (n % 3, n % 5) {
            (0, 0) => Self::FizzBuzz,
            (0, _) => Self::Fizz,
            (_, 0) => Self::Buzz,
            _ => Self::Number(n),
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

pub fn fizzbuzz(range: RangeInclusive<u32>) -> impl Iterator<Item = FizzBuzz> {
    range.map(FizzBuzz::from)
}

/// Odd numbers, ascending, each phrased as "N is a lucky number".
pub fn lucky_numbers(numbers: &[i64]) -> Vec<String> {
    let mut odd: Vec<_> = numbers.iter().copied().filter(|n| n % 2 != 0).collect();
    odd.sort_unstable();
    odd.into_iter().map(|n| format!("{n} is a lucky number")).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniqueCount {
    pub total: usize,
    pub unique: usize,
}

pub fn unique_count<I, T>(items: I) -> UniqueCount
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut total = 0;
    for item in items {
        total += 1;
        seen.insert(item);
    }
    UniqueCount { total, unique: seen.len() }
}
