// src/cli.rs
use std::{env, error::Error, fmt::Write as _};

use crate::{
    analysis::{AnalysisRequest, AnalysisResult, Analyzer, RankedList},
    chart::Chart,
    config::options::{AnalysisOptions, ChartKind},
    progress::{Progress, Stage},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub url: String,
    pub chart: ChartKind,
    pub top_n: usize,
    pub quiet: bool,
}

pub fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = parse_args(env::args().skip(1))?;

    let options = AnalysisOptions { top_n: args.top_n, ..AnalysisOptions::default() };
    let analyzer = Analyzer::http(options)?;

    let mut prog = CliProgress { quiet: args.quiet };
    let req = AnalysisRequest::new(args.url.clone(), args.chart);
    let result = analyzer.analyze(&req, Some(&mut prog))?;

    print!("{}", render_report(&result));
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error + Send + Sync>>
where
    I: IntoIterator<Item = String>,
{
    let defaults = AnalysisOptions::default();
    let mut url = None;
    let mut chart = ChartKind::default();
    let mut top_n = defaults.top_n;
    let mut quiet = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => url = Some(args.next().ok_or("Missing value for --url")?),
            "-c" | "--chart" => {
                let v = args.next().ok_or("Missing value for --chart")?;
                chart = ChartKind::from_key(&v)
                    .ok_or_else(|| format!("Unknown chart: {} (bar, pie, line, scatter, radar, funnel, heatmap)", v))?;
            }
            "-n" | "--top" => {
                let v: usize = args.next().ok_or("Missing value for --top")?.parse()?;
                if v == 0 { return Err("--top must be at least 1".into()); }
                top_n = v;
            }
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if url.is_none() && !other.starts_with('-') => url = Some(s!(other)),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let url = url.filter(|u| !u.trim().is_empty()).ok_or("Specify --url <URL>")?;
    Ok(CliArgs { url, chart, top_n, quiet })
}

/// Top list followed by the chart, as printed on stdout.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = s!();
    if result.is_empty() {
        out.push_str("No results.\n");
        return out;
    }

    let _ = writeln!(out, "Top {} words", result.top.len());
    for line in top_lines(&result.top) {
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(chart) = &result.chart {
        out.push('\n');
        out.push_str(&render_chart(chart));
    }
    out
}

/// "token: count" per entry.
pub fn top_lines(ranked: &RankedList) -> Vec<String> {
    ranked
        .iter()
        .map(|(token, count)| join!(token, ": ", &count.to_string()))
        .collect()
}

pub fn render_chart(chart: &Chart) -> String {
    let mut out = s!();
    let _ = writeln!(out, "== {} ==", chart.title());

    match chart {
        Chart::Bar(c) | Chart::Line(c) | Chart::Scatter(c) => {
            let _ = writeln!(out, "{}", c.series_name);
            for (cat, v) in c.categories.iter().zip(&c.values) {
                let _ = writeln!(out, "{cat}\t{v}");
            }
        }
        Chart::Pie(c) => {
            for s in &c.slices {
                let _ = writeln!(out, "{}\t{}\t{:.1}%", s.label, s.value, s.percent);
            }
        }
        Chart::Radar(c) => {
            for (ind, v) in c.indicators.iter().zip(&c.values) {
                let _ = writeln!(out, "{}\t{}/{}", ind.name, v, ind.max);
            }
        }
        Chart::Funnel(c) => {
            let _ = writeln!(out, "{}", c.series_name);
            for s in &c.stages {
                let _ = writeln!(out, "{}\t{}", s.name, s.value);
            }
        }
        Chart::Heatmap(c) => {
            for row in &c.cells {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                let _ = writeln!(out, "{}", cells.join(" "));
            }
        }
    }
    out
}

/* ---------- Progress adapter ---------- */
struct CliProgress { quiet: bool }
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn stage_done(&mut self, stage: Stage) {
        if !self.quiet { eprintln!("  {stage} done"); }
    }
}
