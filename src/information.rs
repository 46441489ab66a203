use crate::input::{TotalRecord, WordRecord, Year};
use crate::output;
use crate::time_series::TimeSeries;
use log::{debug, info, warn};
use std::collections::HashSet;

pub fn statistics(words: &[WordRecord], totals: &[TotalRecord]) {
    let distinct: HashSet<&str> = words.iter().map(|r| r.word.as_str()).collect();
    info!(target: "ngrams", "word records: {}", words.len());
    info!(target: "ngrams", "distinct words: {}", distinct.len());
    info!(target: "ngrams", "total-count records: {}", totals.len());
}

pub fn post_statistics(
    word_count: usize,
    totals: &TimeSeries,
    overwritten: usize,
    ignored: usize,
) {
    match totals.span() {
        None => info!(target: "ngrams", "years in total counts: none"),
        Some(span) => info!(
            target: "ngrams",
            "years in total counts: {}",
            output::pretty_years(&span)
        ),
    }
    debug!(target: "ngrams", "indexed words: {word_count}");
    if overwritten > 0 {
        debug!(
            target: "ngrams",
            "duplicate word records: {overwritten} (last record kept)"
        );
    }
    if ignored > 0 {
        debug!(
            target: "ngrams",
            "duplicate total-count records: {ignored} (first record kept)"
        );
    }
}

pub fn missing_totals(missing: usize, first: Option<(&str, Year)>) {
    if let Some((word, year)) = first {
        warn!(
            target: "ngrams",
            "{missing} word records fall in years without a total count, e.g. '{word}' in {year}"
        );
    }
}
