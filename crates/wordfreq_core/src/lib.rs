//! Wordfreq core: pure text-to-frequency pipeline and chart selection.
mod aggregate;
mod chart;
mod config;
mod error;
mod filter;
mod pipeline;
mod rank;
mod token;

pub use aggregate::{aggregate, FrequencyTable};
pub use chart::{ChartKind, ChartKindParseError};
pub use config::{AnalysisConfig, DEFAULT_MIN_LENGTH, DEFAULT_TOP_N};
pub use error::PipelineError;
pub use filter::{Filtered, TokenFilter, DEFAULT_EXCLUSIONS};
pub use pipeline::{FrequencyReport, Pipeline};
pub use rank::{rank, top_n, RankedEntry};
pub use token::{Token, TokenizeError, Tokenizer, Tokens};
