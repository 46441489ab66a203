//! Main entry point for answering a query.

use crate::corpus::CorpusIndex;
use crate::errors::{self, Result};
use crate::input::Year;
use crate::output::{self, Measure, OSeries, Output};
use itertools::Itertools;
use log::debug;

/// What to look up?
pub struct QueryArgs<'a> {
    /// Words to look up, in the order in which they are reported.
    pub words: &'a [String],

    /// What to calculate for the words.
    pub measure: Measure,

    /// First year to include.
    pub start: Year,

    /// Last year to include.
    pub end: Year,
}

/// Answer a query.
///
/// With [Measure::Counts] and [Measure::Weights] there is one series per
/// word; with [Measure::Summed] there is a single series labelled with all
/// distinct words joined by `+`. Unknown words yield empty series.
pub fn run(args: &QueryArgs, corpus: &CorpusIndex) -> Result<Output> {
    if args.words.is_empty() {
        return Err(errors::invalid_argument_ref("no words given"));
    }
    if args.start > args.end {
        return Err(errors::invalid_range(args.start, args.end));
    }
    let years = (args.start, args.end);
    debug!(
        target: "ngrams",
        "{} of {} word(s), {}",
        args.measure,
        args.words.len(),
        output::pretty_years(&years)
    );
    let series = match args.measure {
        Measure::Counts => args
            .words
            .iter()
            .map(|w| -> Result<OSeries> {
                Ok(OSeries {
                    label: w.clone(),
                    series: corpus.count_history_in(w, args.start, args.end)?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Measure::Weights => args
            .words
            .iter()
            .map(|w| -> Result<OSeries> {
                Ok(OSeries {
                    label: w.clone(),
                    series: corpus.weight_history_in(w, args.start, args.end)?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Measure::Summed => vec![OSeries {
            label: args.words.iter().unique().join("+"),
            series: corpus.summed_weight_history_in(args.words, args.start, args.end)?,
        }],
    };
    for s in &series {
        debug!(target: "ngrams", "{}: {} year(s)", s.label, s.series.len());
    }
    Ok(Output {
        measure: args.measure,
        years,
        series,
    })
}
