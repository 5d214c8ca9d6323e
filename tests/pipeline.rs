// tests/pipeline.rs
//
// End-to-end runs with a stub transport, plus the real HTTP fetcher against a
// throwaway local server.
//
use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

use page_wordfreq::{
    analysis::{AnalysisRequest, Analyzer},
    chart::Chart,
    config::options::{AnalysisOptions, ChartKind, FetchOptions},
    core::{html::PlainText, Fetch, FetchError, HttpFetcher, RawDocument, Segmenter},
    progress::{Progress, Stage},
};

/* ---------- stubs ---------- */

struct CannedPage(&'static str);
impl Fetch for CannedPage {
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        Ok(RawDocument::new(url, self.0))
    }
}

struct Unreachable;
impl Fetch for Unreachable {
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        Err(FetchError::Status { url: url.to_owned(), status: 503 })
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<Stage>,
    finished: bool,
}
impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn stage_done(&mut self, stage: Stage) { self.stages.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

fn analyzer<F: Fetch>(fetcher: F) -> Analyzer<F> {
    Analyzer::new(fetcher, Segmenter::new(), AnalysisOptions::default())
}

const CAT_PAGE: &str = "<!DOCTYPE html><html><body>\
    <p>the cat sat on the cat mat</p><script>ignored script text</script>\
    </body></html>";

/* ---------- pipeline ---------- */

#[test]
fn canned_page_runs_every_stage() {
    let a = analyzer(CannedPage(CAT_PAGE));
    let mut rec = Recorder::default();
    let req = AnalysisRequest::new("http://example.invalid/cat", ChartKind::Bar);

    let result = a.analyze(&req, Some(&mut rec)).expect("analysis");

    assert_eq!(rec.total, Stage::ALL.len());
    assert_eq!(rec.stages, Stage::ALL);
    assert!(rec.finished);

    let top: Vec<(&str, u64)> = result.top.iter().collect();
    assert_eq!(top, [("the", 2), ("cat", 2), ("sat", 1), ("on", 1), ("mat", 1)]);
    assert_eq!(result.stats.tokens, 7);
    assert_eq!(result.stats.distinct, 5);
    assert!(!result.stats.degraded);
    assert_eq!(result.url, "http://example.invalid/cat");

    let Some(Chart::Bar(bar)) = &result.chart else { panic!("expected a bar chart") };
    assert_eq!(bar.categories, ["the", "cat", "sat", "on", "mat"]);
    assert_eq!(result.cloud.as_ref().map(|c| c.words.len()), Some(5));
}

#[test]
fn fetch_failure_halts_before_tokenizing() {
    let a = analyzer(Unreachable);
    let mut rec = Recorder::default();
    let req = AnalysisRequest::new("http://example.invalid/", ChartKind::Pie);

    let err = a.analyze(&req, Some(&mut rec)).unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 503, .. }));
    assert!(rec.stages.is_empty());
    assert!(!rec.stages.contains(&Stage::Tokenize));
    assert!(rec.finished);
}

#[test]
fn empty_page_is_no_results_not_error() {
    let a = analyzer(CannedPage("<!DOCTYPE html><html><body><p>!!! ... ???</p></body></html>"));
    let req = AnalysisRequest::new("http://example.invalid/", ChartKind::Radar);

    let result = a.analyze(&req, None).expect("analysis");

    assert!(result.is_empty());
    assert!(result.chart.is_none());
    assert!(result.cloud.is_none());
    for kind in ChartKind::ALL {
        assert!(result.chart_for(kind).is_none());
    }
}

#[test]
fn top_list_is_capped() {
    let opts = AnalysisOptions { top_n: 3, ..AnalysisOptions::default() };
    let a = Analyzer::new(CannedPage(""), Segmenter::new(), opts);

    let text = "red red red red blue blue blue green green black";
    let result = a.analyze_text(PlainText::new(text), ChartKind::Bar);

    assert_eq!(result.top.tokens(), ["red", "blue", "green"]);
    // the cloud ranks the whole table, not just the headline list
    assert!(result.cloud.as_ref().is_some_and(|c| c.words.len() > 3));
}

#[test]
fn chart_kind_switch_reuses_ranked_list() {
    let a = analyzer(CannedPage(CAT_PAGE));
    let req = AnalysisRequest::new("http://example.invalid/cat", ChartKind::Bar);
    let result = a.analyze(&req, None).expect("analysis");

    let funnel = result.chart_for(ChartKind::Funnel).expect("funnel");
    let Chart::Funnel(f) = funnel else { panic!("expected a funnel") };
    assert_eq!(f.stages.len(), 5);
    assert_eq!(f.stages[0].value, 2);
}

#[test]
fn broken_markup_marks_result_degraded() {
    let a = analyzer(CannedPage("<!DOCTYPE html><p>the cat<b>sat</p></i>"));
    let req = AnalysisRequest::new("http://example.invalid/", ChartKind::Bar);
    let result = a.analyze(&req, None).expect("analysis");

    assert!(result.stats.degraded);
    assert!(!result.is_empty());
}

/* ---------- real fetcher ---------- */

/// Serves exactly one response on 127.0.0.1 and returns its URL.
fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else { return };
        let mut buf = [0u8; 4096];
        let mut req = Vec::new();
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => req.extend_from_slice(&buf[..n]),
            }
        }
        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(body);
    });

    format!("http://{addr}/page")
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&FetchOptions::default()).expect("client")
}

#[test]
fn http_ok_returns_body() {
    let url = serve_once("200 OK", b"<p>hello</p>");
    let doc = fetcher().fetch(&url).expect("fetch");
    assert_eq!(doc.body, "<p>hello</p>");
    assert_eq!(doc.url, url);
}

#[test]
fn http_error_status_is_fetch_error() {
    let url = serve_once("404 Not Found", b"nope");
    let err = fetcher().fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }), "{err}");
}

#[test]
fn non_utf8_body_is_fetch_error() {
    let url = serve_once("200 OK", &[0x66, 0x6f, 0xff, 0xfe]);
    let err = fetcher().fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "{err}");
}

#[test]
fn refused_connection_is_fetch_error() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().expect("addr").port()
    };
    let err = fetcher().fetch(&format!("http://127.0.0.1:{port}/")).unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "{err}");
}

#[test]
fn blank_url_is_rejected_before_sending() {
    let err = fetcher().fetch("   ").unwrap_err();
    assert!(matches!(err, FetchError::EmptyUrl));
}

#[test]
fn full_run_over_http() {
    let url = serve_once("200 OK", b"<!DOCTYPE html><p>the cat sat on the cat mat</p>");
    let a = Analyzer::http(AnalysisOptions::default()).expect("analyzer");
    let result = a.analyze(&AnalysisRequest::new(url, ChartKind::Line), None).expect("analysis");

    assert_eq!(result.top.get("cat"), Some(2));
    assert!(matches!(result.chart, Some(Chart::Line(_))));
}
