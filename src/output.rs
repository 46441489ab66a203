//! Data structures for representing the output.

use crate::input::Years;
use crate::time_series::TimeSeries;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Raw occurrence counts
    Counts,
    /// Occurrences relative to all words of the same year
    Weights,
    /// Relative frequencies of all words summed into one series
    Summed,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Measure::Counts => write!(f, "counts"),
            Measure::Weights => write!(f, "weights"),
            Measure::Summed => write!(f, "summed weights"),
        }
    }
}

#[derive(PartialEq, Debug, Deserialize, Serialize)]
pub struct OSeries {
    pub label: String,
    pub series: TimeSeries,
}

#[derive(PartialEq, Debug, Deserialize, Serialize)]
pub struct Output {
    pub measure: Measure,
    pub years: Years,
    pub series: Vec<OSeries>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

pub fn pretty_years(p: &Years) -> String {
    if p.0 == p.1 {
        format!("{}", p.0)
    } else {
        format!("{}-{}", p.0, p.1)
    }
}

/// One `label: {year=value, ...}` line per series.
pub fn render_text(output: &Output) -> String {
    output
        .series
        .iter()
        .map(|s| format!("{}: {}\n", s.label, s.series))
        .join("")
}
