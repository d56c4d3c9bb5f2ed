//! FizzBuzz as a lazy iterator
//!
//! Produces `"Fizz"` for multiples of 3, `"Buzz"` for multiples of 5,
//! `"FizzBuzz"` for multiples of both and the number itself otherwise.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Iterator over the FizzBuzz sequence from 1 to `limit` inclusive
#[derive(Debug, Clone)]
pub struct FizzBuzz {
    numbers: RangeInclusive<u64>,
}

impl FizzBuzz {
    /// Create a sequence ending at `limit`
    pub fn new(limit: u64) -> Self {
        Self { numbers: 1..=limit }
    }
}

/// FizzBuzz word for a single number
pub fn fizzbuzz_value(n: u64) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

/// Sequence from 1 to `limit` inclusive
pub fn fizzbuzz(limit: u64) -> FizzBuzz {
    FizzBuzz::new(limit)
}

impl Iterator for FizzBuzz {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.numbers.next().map(fizzbuzz_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbers.size_hint()
    }
}

impl FusedIterator for FizzBuzz {}
