use ngrams::corpus::CorpusIndex;
use ngrams::errors::IncompatibleDivisor;
use ngrams::input::{self, TotalRecord, WordRecord};
use ngrams::output::{self, Measure, Output};
use ngrams::query::{self, QueryArgs};
use ngrams::time_series::TimeSeries;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn path(filename: &str) -> String {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    path.to_str().unwrap().to_owned()
}

fn load() -> CorpusIndex {
    let words = input::read_words_file(&path("sample-data/words.tsv")).unwrap();
    let totals = input::read_counts_file(&path("sample-data/counts.csv")).unwrap();
    CorpusIndex::new(&words, &totals)
}

fn assert_close(a: &TimeSeries, b: &TimeSeries) {
    assert_eq!(a.years(), b.years());
    for (x, y) in a.values().iter().zip(b.values()) {
        assert!((x - y).abs() < 1e-10, "{a} vs. {b}");
    }
}

fn ts(pairs: &[(i32, f64)]) -> TimeSeries {
    pairs.iter().copied().collect()
}

#[test]
fn test_load() {
    init();
    let corpus = load();
    assert_eq!(corpus.word_count(), 3);
    assert_eq!(corpus.years(), Some((1989, 1992)));
    // The second record for 1992 in the counts file is ignored.
    assert_eq!(
        corpus.total_count_history(),
        ts(&[(1989, 500.0), (1990, 100.0), (1991, 200.0), (1992, 250.0)])
    );
}

#[test]
fn test_weights() {
    init();
    let corpus = load();
    assert_close(
        &corpus.weight_history_in("cat", 1990, 1992).unwrap(),
        &ts(&[(1990, 0.1), (1991, 0.1), (1992, 0.06)]),
    );
    assert_close(
        &corpus.weight_history("airport").unwrap(),
        &ts(&[(1991, 0.025), (1992, 0.02)]),
    );
    assert!(corpus.weight_history("zebra").unwrap().is_empty());
}

#[test]
fn test_summed_identity() {
    init();
    let corpus = load();
    let summed = corpus
        .summed_weight_history_in(["cat", "dog"], 1990, 1992)
        .unwrap();
    let separate = corpus
        .weight_history_in("cat", 1990, 1992)
        .unwrap()
        .plus(&corpus.weight_history_in("dog", 1990, 1992).unwrap());
    assert_close(&summed, &separate);
    let with_unknown = corpus
        .summed_weight_history_in(["cat", "zebra"], 1990, 1992)
        .unwrap();
    assert_eq!(
        with_unknown,
        corpus.weight_history_in("cat", 1990, 1992).unwrap()
    );
}

#[test]
fn test_query_json() {
    init();
    let corpus = load();
    let words = vec!["cat".to_owned(), "airport".to_owned()];
    let args = QueryArgs {
        words: &words,
        measure: Measure::Summed,
        start: 1991,
        end: 1992,
    };
    let result = query::run(&args, &corpus).unwrap();
    assert_eq!(result.series.len(), 1);
    assert_eq!(result.series[0].label, "cat+airport");
    assert_close(&result.series[0].series, &ts(&[(1991, 0.125), (1992, 0.08)]));
    let json = serde_json::to_string(&result).unwrap();
    let back: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(back.measure, Measure::Summed);
    assert_eq!(back.years, (1991, 1992));
    assert_eq!(back.series[0].label, "cat+airport");
    assert_close(&back.series[0].series, &result.series[0].series);
}

#[test]
fn test_query_text() {
    init();
    let corpus = load();
    let words = vec!["cat".to_owned(), "zebra".to_owned()];
    let args = QueryArgs {
        words: &words,
        measure: Measure::Counts,
        start: 1991,
        end: 1991,
    };
    let result = query::run(&args, &corpus).unwrap();
    assert_eq!(output::render_text(&result), "cat: {1991=20.0}\nzebra: {}\n");
}

#[test]
fn test_zero_total_json() {
    init();
    let words = vec![WordRecord {
        word: "cat".to_owned(),
        year: 1990,
        count: 1.0,
    }];
    let totals = vec![TotalRecord {
        year: 1990,
        total: 0.0,
    }];
    let corpus = CorpusIndex::new(&words, &totals);
    let query_words = vec!["cat".to_owned()];
    let args = QueryArgs {
        words: &query_words,
        measure: Measure::Weights,
        start: 1990,
        end: 1990,
    };
    let result = query::run(&args, &corpus).unwrap();
    assert_eq!(result.series[0].series.get(1990), Some(f64::INFINITY));
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#"{"1990":"inf"}"#), "{json}");
    let back: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(back.series[0].series.get(1990), Some(f64::INFINITY));
    assert_eq!(output::render_text(&back), "cat: {1990=inf}\n");
}

#[test]
fn test_missing_total_year() {
    init();
    let words = vec![
        WordRecord {
            word: "cat".to_owned(),
            year: 1990,
            count: 10.0,
        },
        WordRecord {
            word: "cat".to_owned(),
            year: 1992,
            count: 3.0,
        },
    ];
    let totals = vec![TotalRecord {
        year: 1990,
        total: 100.0,
    }];
    let corpus = CorpusIndex::new(&words, &totals);
    let e = corpus.weight_history_in("cat", 1992, 1992).unwrap_err();
    assert_eq!(
        e.downcast_ref::<IncompatibleDivisor>(),
        Some(&IncompatibleDivisor { year: 1992 })
    );
    assert_eq!(corpus.count_history_in("cat", 1992, 1992).unwrap().values(), [3.0]);
}
