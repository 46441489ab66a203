//! Corpus records and readers for the words and counts files.

use crate::errors::{self, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead};
use std::str::FromStr;

pub type Year = i32;

/// Inclusive range of years.
pub type Years = (Year, Year);

/// Earliest year the corpus is expected to cover.
pub const MIN_YEAR: Year = 1400;

/// Latest year the corpus is expected to cover.
pub const MAX_YEAR: Year = 2100;

/// Number of occurrences of one word in one year.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WordRecord {
    pub word: String,
    pub year: Year,
    pub count: f64,
}

/// Number of occurrences of all words in one year.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TotalRecord {
    pub year: Year,
    pub total: f64,
}

fn parse_field<T: FromStr>(name: &str, field: &str, line: usize, what: &str) -> Result<T> {
    field.trim().parse().map_err(|_| {
        errors::invalid_input(format!(
            "{name}, line {line}: cannot parse {what} from '{field}'"
        ))
    })
}

/// Parses a tab-separated words file: `word<TAB>year<TAB>count[<TAB>...]`.
///
/// `name` is only used in error messages.
pub fn read_words<R: BufRead>(name: &str, reader: R) -> Result<Vec<WordRecord>> {
    let mut records = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(errors::invalid_input(format!(
                "{name}, line {}: expected at least 3 tab-separated fields, got {}",
                i + 1,
                fields.len()
            )));
        }
        records.push(WordRecord {
            word: fields[0].to_owned(),
            year: parse_field(name, fields[1], i + 1, "year")?,
            count: parse_field(name, fields[2], i + 1, "count")?,
        });
    }
    Ok(records)
}

/// Parses a comma-separated counts file: `year,total[,...]`.
pub fn read_counts<R: BufRead>(name: &str, reader: R) -> Result<Vec<TotalRecord>> {
    let mut records = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(errors::invalid_input(format!(
                "{name}, line {}: expected at least 2 comma-separated fields, got {}",
                i + 1,
                fields.len()
            )));
        }
        records.push(TotalRecord {
            year: parse_field(name, fields[0], i + 1, "year")?,
            total: parse_field(name, fields[1], i + 1, "total")?,
        });
    }
    Ok(records)
}

pub fn read_words_file(filename: &str) -> Result<Vec<WordRecord>> {
    let file = fs::File::open(filename)?;
    read_words(filename, io::BufReader::new(file))
}

pub fn read_counts_file(filename: &str) -> Result<Vec<TotalRecord>> {
    let file = fs::File::open(filename)?;
    read_counts(filename, io::BufReader::new(file))
}
