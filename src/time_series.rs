//! Sparse year-indexed series and year-aligned arithmetic.

use crate::errors::{self, Result};
use crate::input::Year;
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::{fmt, result};

/// A mapping from year to value, iterated in ascending order of year.
///
/// The storage is private: a series handed out by this crate is always a
/// fresh copy, so changing it cannot affect its producer.
///
/// In JSON a series is an object keyed by year. Infinite and NaN values are
/// written as the strings `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    data: BTreeMap<Year, f64>,
}

impl TimeSeries {
    pub fn new() -> TimeSeries {
        TimeSeries {
            data: BTreeMap::new(),
        }
    }

    /// Copies the entries of `source` with `start <= year <= end`.
    pub fn bounded(source: &TimeSeries, start: Year, end: Year) -> Result<TimeSeries> {
        if start > end {
            return Err(errors::invalid_range(start, end));
        }
        Ok(TimeSeries {
            data: source
                .data
                .range(start..=end)
                .map(|(&y, &v)| (y, v))
                .collect(),
        })
    }

    pub fn years(&self) -> Vec<Year> {
        self.data.keys().copied().collect_vec()
    }

    /// Values in the same order as [TimeSeries::years].
    pub fn values(&self) -> Vec<f64> {
        self.data.values().copied().collect_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.data.iter().map(|(&y, &v)| (y, v))
    }

    pub fn get(&self, year: Year) -> Option<f64> {
        self.data.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First and last year, if any.
    pub fn span(&self) -> Option<(Year, Year)> {
        let first = self.data.keys().next()?;
        let last = self.data.keys().next_back()?;
        Some((*first, *last))
    }

    /// Stores `value`, replacing any earlier value for `year`.
    ///
    /// Returns true if `year` already had a value.
    pub(crate) fn insert(&mut self, year: Year, value: f64) -> bool {
        self.data.insert(year, value).is_some()
    }

    /// Stores `value` unless `year` already has one.
    ///
    /// Returns true if `year` already had a value, which is then kept.
    pub(crate) fn insert_first(&mut self, year: Year, value: f64) -> bool {
        match self.data.entry(year) {
            Entry::Vacant(e) => {
                e.insert(value);
                false
            }
            Entry::Occupied(_) => true,
        }
    }

    /// Year-wise sum over the union of years.
    ///
    /// A year present in only one series keeps that series' value.
    pub fn plus(&self, other: &TimeSeries) -> TimeSeries {
        let data = self
            .data
            .iter()
            .merge_join_by(other.data.iter(), |a, b| a.0.cmp(b.0))
            .map(|e| match e {
                EitherOrBoth::Both((&y, &a), (_, &b)) => (y, a + b),
                EitherOrBoth::Left((&y, &v)) | EitherOrBoth::Right((&y, &v)) => (y, v),
            })
            .collect();
        TimeSeries { data }
    }

    /// Year-wise quotient of this series by `other`.
    ///
    /// Every year of this series must be present in `other`, otherwise the
    /// whole operation fails with [errors::IncompatibleDivisor]. Years only
    /// present in `other` are left out.
    pub fn divided_by(&self, other: &TimeSeries) -> Result<TimeSeries> {
        let data = self
            .data
            .iter()
            .map(|(&y, &v)| match other.data.get(&y) {
                Some(&d) => Ok((y, v / d)),
                None => Err(errors::incompatible_divisor(y)),
            })
            .collect::<Result<BTreeMap<Year, f64>>>()?;
        Ok(TimeSeries { data })
    }
}

impl FromIterator<(Year, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (Year, f64)>>(iter: I) -> Self {
        TimeSeries {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.data.iter().map(|(y, v)| format!("{y}={v:?}")).join(", ")
        )
    }
}

/// A value as stored in JSON: a number, or the text form of a non-finite one.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum JsonValue {
    Number(f64),
    Text(String),
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> JsonValue {
        if v.is_finite() {
            JsonValue::Number(v)
        } else {
            JsonValue::Text(format!("{v}"))
        }
    }
}

impl Serialize for TimeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.data.iter().map(|(&y, &v)| (y, JsonValue::from(v))))
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
        let raw = BTreeMap::<Year, JsonValue>::deserialize(deserializer)?;
        let data = raw
            .into_iter()
            .map(|(y, v)| match v {
                JsonValue::Number(v) => Ok((y, v)),
                JsonValue::Text(t) => match t.parse::<f64>() {
                    Ok(v) if !v.is_finite() => Ok((y, v)),
                    _ => Err(de::Error::custom(format!(
                        "year {y}: expected a number, 'inf', '-inf' or 'NaN', got '{t}'"
                    ))),
                },
            })
            .collect::<result::Result<BTreeMap<Year, f64>, D::Error>>()?;
        Ok(TimeSeries { data })
    }
}
