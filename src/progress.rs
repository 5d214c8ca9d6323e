// src/progress.rs
use std::fmt;

/// Pipeline stages, in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Normalize,
    Tokenize,
    Rank,
    Render,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Fetch,
        Stage::Extract,
        Stage::Normalize,
        Stage::Tokenize,
        Stage::Rank,
        Stage::Render,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch     => "fetch",
            Stage::Extract   => "extract",
            Stage::Normalize => "normalize",
            Stage::Tokenize  => "tokenize",
            Stage::Rank      => "rank",
            Stage::Render    => "render",
        };
        f.write_str(name)
    }
}

/// Lightweight progress reporting for an analysis run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
