use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::config::AnalysisConfig;
use crate::error::PipelineError;
use crate::filter::TokenFilter;
use crate::rank::{rank, top_n, RankedEntry};
use crate::token::{Token, TokenizeError, Tokenizer};

/// Ranked tables produced by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Every word, count descending, ties in first-occurrence order.
    pub full: Vec<RankedEntry>,
    /// Prefix of `full`.
    pub top: Vec<RankedEntry>,
    /// Number of tokens that survived filtering; equals the sum of counts in `full`.
    pub token_count: u64,
}

impl FrequencyReport {
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Turn an empty report into [`PipelineError::EmptyInput`].
    pub fn require_data(self) -> Result<Self, PipelineError> {
        if self.is_empty() {
            Err(PipelineError::EmptyInput)
        } else {
            Ok(self)
        }
    }

    /// Re-select the top rows from the full table without re-running the pipeline.
    pub fn reselect(&self, n: i64) -> Vec<RankedEntry> {
        top_n(&self.full, n).to_vec()
    }
}

/// Tokenize → filter → aggregate → rank → select.
///
/// Holds only immutable state, so a single pipeline can be shared across
/// threads and every run builds its own table.
#[derive(Debug)]
pub struct Pipeline {
    tokenizer: Tokenizer,
    filter: TokenFilter,
    top_n: i64,
}

impl Pipeline {
    pub fn new(tokenizer: Tokenizer, config: &AnalysisConfig) -> Self {
        Self {
            tokenizer,
            filter: config.token_filter(),
            top_n: config.top_n,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    pub fn top_n(&self) -> i64 {
        self.top_n
    }

    pub fn run(&self, text: &str) -> FrequencyReport {
        self.run_with_top(text, self.top_n)
    }

    pub fn run_with_top(&self, text: &str, n: i64) -> FrequencyReport {
        self.report(self.tokenizer.tokenize(text), n)
    }

    /// Like [`Pipeline::run`] for raw bytes; malformed UTF-8 fails before any counting.
    pub fn run_bytes(&self, bytes: &[u8]) -> Result<FrequencyReport, TokenizeError> {
        let tokens = self.tokenizer.tokenize_bytes(bytes)?;
        Ok(self.report(tokens, self.top_n))
    }

    fn report<'t>(&self, tokens: impl Iterator<Item = Token<'t>>, n: i64) -> FrequencyReport {
        let table = aggregate(self.filter.filter(tokens));
        let full = rank(&table);
        let top = top_n(&full, n).to_vec();
        FrequencyReport {
            token_count: table.total(),
            full,
            top,
        }
    }
}
