//! Wordfreq engine: fetch, decode and extract collaborators around the core pipeline.
mod analyze;
mod decode;
mod extract;
mod fetch;
mod types;

pub use analyze::{Analysis, AnalyzeError, Analyzer, DEFAULT_PROCESSING_TIMEOUT};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use extract::{
    AnchorTextExtractor, ExtractedText, ExtractionError, Extractor, ExtractorKind,
    ReadabilityLikeExtractor, SelectorExtractor, DEFAULT_ARTICLE_SELECTOR,
};
pub use fetch::{
    FetchSettings, Fetcher, LogProgressSink, NoopProgressSink, ProgressSink, ReqwestFetcher,
};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, Progress, Stage};
