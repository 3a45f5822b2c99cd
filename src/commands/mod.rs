//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod replay;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use replay::{ReplayResult, ReplayStep, replay_guesses};
pub use simple::{play_lines, run_simple};
