//! Word histories and total counts, and the queries built on them.

use crate::errors::Result;
use crate::information;
use crate::input::{TotalRecord, WordRecord, Year, Years};
use crate::time_series::TimeSeries;
use itertools::Itertools;
use log::trace;
use std::collections::HashMap;

/// Per-word occurrence counts together with the total number of words per year.
///
/// Built once from the corpus records; every query returns a new [TimeSeries].
pub struct CorpusIndex {
    histories: HashMap<String, TimeSeries>,
    totals: TimeSeries,
}

impl CorpusIndex {
    /// Builds the index.
    ///
    /// If the same word and year appear more than once in `words`, the last
    /// record wins. If the same year appears more than once in `totals`, the
    /// first record wins.
    pub fn new(words: &[WordRecord], totals: &[TotalRecord]) -> CorpusIndex {
        information::statistics(words, totals);
        let mut histories: HashMap<String, TimeSeries> = HashMap::new();
        let mut overwritten = 0;
        for r in words {
            if histories
                .entry(r.word.clone())
                .or_default()
                .insert(r.year, r.count)
            {
                overwritten += 1;
            }
        }
        let mut total_series = TimeSeries::new();
        let mut ignored = 0;
        for r in totals {
            if total_series.insert_first(r.year, r.total) {
                ignored += 1;
            }
        }
        information::post_statistics(histories.len(), &total_series, overwritten, ignored);
        let mut missing = 0;
        let mut first_missing: Option<(&str, Year)> = None;
        for (word, history) in &histories {
            for (year, _) in history.iter() {
                if total_series.get(year).is_none() {
                    missing += 1;
                    let pair = (word.as_str(), year);
                    if first_missing.is_none_or(|first| pair < first) {
                        first_missing = Some(pair);
                    }
                }
            }
        }
        information::missing_totals(missing, first_missing);
        CorpusIndex {
            histories,
            totals: total_series,
        }
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.histories.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.histories.contains_key(word)
    }

    /// First and last year with a total count.
    pub fn years(&self) -> Option<Years> {
        self.totals.span()
    }

    fn history(&self, word: &str, years: Option<Years>) -> Result<TimeSeries> {
        match (self.histories.get(word), years) {
            (None, _) => Ok(TimeSeries::new()),
            (Some(h), None) => Ok(h.clone()),
            (Some(h), Some((start, end))) => TimeSeries::bounded(h, start, end),
        }
    }

    fn total_history(&self, years: Option<Years>) -> Result<TimeSeries> {
        match years {
            None => Ok(self.totals.clone()),
            Some((start, end)) => TimeSeries::bounded(&self.totals, start, end),
        }
    }

    fn weights(&self, word: &str, years: Option<Years>) -> Result<TimeSeries> {
        if !self.contains(word) {
            trace!(target: "ngrams", "unknown word '{word}'");
            return Ok(TimeSeries::new());
        }
        let counts = self.history(word, years)?;
        counts.divided_by(&self.total_history(years)?)
    }

    fn summed_weights<I, S>(&self, words: I, years: Option<Years>) -> Result<TimeSeries>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // sum_i(count_i) / total == sum_i(count_i / total)
        let mut sum = TimeSeries::new();
        for word in words.into_iter().unique_by(|w| w.as_ref().to_owned()) {
            let counts = self.history(word.as_ref(), years)?;
            if counts.is_empty() {
                trace!(target: "ngrams", "no counts for '{}'", word.as_ref());
                continue;
            }
            sum = sum.plus(&counts);
        }
        sum.divided_by(&self.total_history(years)?)
    }

    /// Occurrence counts of `word`. Empty if the word is unknown.
    pub fn count_history(&self, word: &str) -> TimeSeries {
        self.histories.get(word).cloned().unwrap_or_default()
    }

    /// Occurrence counts of `word` for `start <= year <= end`.
    ///
    /// Empty if the word is unknown, whatever the range.
    pub fn count_history_in(&self, word: &str, start: Year, end: Year) -> Result<TimeSeries> {
        self.history(word, Some((start, end)))
    }

    /// Total number of words recorded per year.
    pub fn total_count_history(&self) -> TimeSeries {
        self.totals.clone()
    }

    pub fn total_count_history_in(&self, start: Year, end: Year) -> Result<TimeSeries> {
        self.total_history(Some((start, end)))
    }

    /// Relative frequency of `word` per year.
    pub fn weight_history(&self, word: &str) -> Result<TimeSeries> {
        self.weights(word, None)
    }

    /// Relative frequency of `word` per year, for `start <= year <= end`.
    ///
    /// Fails with [crate::errors::IncompatibleDivisor] only if the word has a
    /// count in a year that has no total count.
    pub fn weight_history_in(&self, word: &str, start: Year, end: Year) -> Result<TimeSeries> {
        self.weights(word, Some((start, end)))
    }

    /// Summed relative frequency of all `words` per year.
    ///
    /// Unknown words are ignored. A word listed more than once is counted once.
    pub fn summed_weight_history<I, S>(&self, words: I) -> Result<TimeSeries>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.summed_weights(words, None)
    }

    pub fn summed_weight_history_in<I, S>(
        &self,
        words: I,
        start: Year,
        end: Year,
    ) -> Result<TimeSeries>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.summed_weights(words, Some((start, end)))
    }
}
