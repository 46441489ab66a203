//! Errors and error-related utilities.

use crate::input::Year;
use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A year range whose start comes after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub start: Year,
    pub end: Year,
}

/// A year that has a numerator value but no divisor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompatibleDivisor {
    pub year: Year,
}

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid range: start year {} is after end year {}",
            self.start, self.end
        )
    }
}

impl fmt::Display for IncompatibleDivisor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "incompatible divisor: no value for year {}", self.year)
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl error::Error for InvalidRange {}

impl error::Error for IncompatibleDivisor {}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

/// A helper for constructing [InvalidRange].
pub fn invalid_range(start: Year, end: Year) -> Box<dyn error::Error> {
    InvalidRange { start, end }.into()
}

/// A helper for constructing [IncompatibleDivisor].
pub fn incompatible_divisor(year: Year) -> Box<dyn error::Error> {
    IncompatibleDivisor { year }.into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument_ref(s: &str) -> Box<dyn error::Error> {
    InvalidArgument(s.to_owned()).into()
}
