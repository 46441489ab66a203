use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info};
use ngrams::corpus::CorpusIndex;
use ngrams::errors::Result;
use ngrams::input::{self, MAX_YEAR, MIN_YEAR, Year};
use ngrams::output::{self, Measure, OError};
use ngrams::query::{self, QueryArgs};
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Words file (tab-separated: word, year, count)
    wordsfile: String,
    /// Counts file (comma-separated: year, total)
    countsfile: String,
    /// Words to look up
    #[arg(required = true)]
    words: Vec<String>,
    /// What to report
    #[arg(long, value_enum, default_value_t = Measure::Weights)]
    measure: Measure,
    /// Starting year
    #[arg(long, default_value_t = MIN_YEAR)]
    start: Year,
    /// Ending year
    #[arg(long, default_value_t = MAX_YEAR)]
    end: Year,
    /// Output file (JSON); without it, results are printed as text
    #[arg(long)]
    outfile: Option<String>,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    info!(target: "ngrams", "read: {}", args.wordsfile);
    let words = input::read_words_file(&args.wordsfile)?;
    info!(target: "ngrams", "read: {}", args.countsfile);
    let totals = input::read_counts_file(&args.countsfile)?;
    let corpus = CorpusIndex::new(&words, &totals);
    let query_args = QueryArgs {
        words: &args.words,
        measure: args.measure,
        start: args.start,
        end: args.end,
    };
    let result = query::run(&query_args, &corpus)?;
    match &args.outfile {
        None => print!("{}", output::render_text(&result)),
        Some(outfile) => {
            info!(target: "ngrams", "write: {}", outfile);
            let file = fs::File::create(outfile)?;
            let writer = io::BufWriter::new(file);
            if args.compact {
                serde_json::to_writer(writer, &result)?;
            } else {
                serde_json::to_writer_pretty(writer, &result)?;
            }
        }
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "ngrams", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "ngrams", "{e}");
                        error!(target: "ngrams", "{e2}");
                    }
                },
                None => error!(target: "ngrams", "{e}"),
            }
            process::exit(1);
        }
    }
}
