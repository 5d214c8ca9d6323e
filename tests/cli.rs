// tests/cli.rs
//
// Argument parsing and the text report.
//
use page_wordfreq::{
    analysis::{rank, AnalysisResult, AnalysisStats, FrequencyTable, RankedList},
    chart::{render, Chart, ChartRequest},
    cli::{parse_args, render_chart, render_report, top_lines, CliArgs},
    config::options::ChartKind,
};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn ranked(pairs: &[(&str, u64)]) -> RankedList {
    rank(&FrequencyTable::from_counts(pairs.iter().copied()), 20)
}

fn result_for(list: RankedList, kind: ChartKind) -> AnalysisResult {
    let chart = render(&ChartRequest::new(kind, &list));
    AnalysisResult {
        url: "http://example.invalid/".into(),
        top: list,
        cloud: None,
        chart,
        stats: AnalysisStats::default(),
    }
}

#[test]
fn parses_long_flags() {
    let a = parse_args(args(&["--url", "https://example.com", "--chart", "funnel", "--top", "5", "--quiet"]))
        .expect("parse");
    assert_eq!(
        a,
        CliArgs { url: "https://example.com".into(), chart: ChartKind::Funnel, top_n: 5, quiet: true }
    );
}

#[test]
fn positional_url_and_defaults() {
    let a = parse_args(args(&["https://example.com"])).expect("parse");
    assert_eq!(a.url, "https://example.com");
    assert_eq!(a.chart, ChartKind::Bar);
    assert_eq!(a.top_n, 20);
    assert!(!a.quiet);
}

#[test]
fn rejects_bad_input() {
    assert!(parse_args(args(&[])).is_err());
    assert!(parse_args(args(&["--url", "  "])).is_err());
    assert!(parse_args(args(&["-u", "x", "--chart", "donut"])).is_err());
    assert!(parse_args(args(&["-u", "x", "--top", "0"])).is_err());
    assert!(parse_args(args(&["-u", "x", "--top", "many"])).is_err());
    assert!(parse_args(args(&["-u", "x", "--frobnicate"])).is_err());
    assert!(parse_args(args(&["--url"])).is_err());
}

#[test]
fn chart_keys_round_trip() {
    for kind in ChartKind::ALL {
        let a = parse_args(args(&["-u", "x", "-c", kind.key()])).expect("parse");
        assert_eq!(a.chart, kind);
    }
}

#[test]
fn top_lines_format() {
    let list = ranked(&[("the", 2), ("cat", 2), ("mat", 1)]);
    assert_eq!(top_lines(&list), ["the: 2", "cat: 2", "mat: 1"]);
}

#[test]
fn report_lists_words_then_chart() {
    let list = ranked(&[("the", 2), ("cat", 1)]);
    let report = render_report(&result_for(list, ChartKind::Bar));

    let expected = "Top 2 words\nthe: 2\ncat: 1\n\n== Bar chart ==\nFrequency\nthe\t2\ncat\t1\n";
    assert_eq!(report, expected);
}

#[test]
fn empty_report_says_no_results() {
    let report = render_report(&result_for(RankedList::default(), ChartKind::Pie));
    assert_eq!(report, "No results.\n");
}

#[test]
fn heatmap_prints_matrix_rows() {
    let list = ranked(&[("1", 3), ("cat", 1)]);
    let Some(chart @ Chart::Heatmap(_)) = render(&ChartRequest::new(ChartKind::Heatmap, &list)) else {
        panic!("expected a heatmap");
    };
    let text = render_chart(&chart);
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows, ["0 0 0", "0 0 0", "0 0 0"]);
}
