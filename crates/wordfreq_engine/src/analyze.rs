use std::sync::Arc;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use wordfreq_core::{FrequencyReport, Pipeline, TokenizeError};

use crate::decode::{decode_html, DecodeError};
use crate::extract::{ExtractionError, Extractor};
use crate::fetch::{Fetcher, ProgressSink};
use crate::{FetchError, FetchMetadata, Progress, Stage};

pub const DEFAULT_PROCESSING_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Extract(#[from] ExtractionError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("processing timed out at stage {stage:?} after {timeout:?}")]
    ProcessingTimeout { stage: Stage, timeout: Duration },
    #[error("processing task failed: {0}")]
    Processing(String),
}

/// Everything produced for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub metadata: FetchMetadata,
    pub encoding_label: String,
    pub title: Option<String>,
    pub text: String,
    pub report: FrequencyReport,
}

/// Drives fetch → decode → extract → pipeline for a URL.
///
/// The pipeline is CPU bound and has no cancellation, so it runs on the
/// blocking pool under `processing_timeout`.
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    pipeline: Arc<Pipeline>,
    processing_timeout: Duration,
}

impl Analyzer {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn Extractor>,
        pipeline: Arc<Pipeline>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            pipeline,
            processing_timeout: DEFAULT_PROCESSING_TIMEOUT,
        }
    }

    pub fn with_processing_timeout(mut self, timeout: Duration) -> Self {
        self.processing_timeout = timeout;
        self
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub async fn analyze_url(
        &self,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<Analysis, AnalyzeError> {
        let output = self.fetcher.fetch(url, sink).await?;

        sink.emit(Progress::stage(Stage::Decoding));
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())?;
        engine_info!("Decoded {} as {}", url, decoded.encoding_label);

        sink.emit(Progress::stage(Stage::Extracting));
        let extracted = self.extractor.extract(&decoded.html).inspect_err(|err| {
            engine_warn!("Extraction failed for {}: {}", url, err);
        })?;
        engine_info!(
            "Extracted {} chars of text (title: {:?})",
            extracted.text.chars().count(),
            extracted.title
        );

        let (text, report) = self.analyze_text(extracted.text, sink).await?;
        Ok(Analysis {
            metadata: output.metadata,
            encoding_label: decoded.encoding_label,
            title: extracted.title,
            text,
            report,
        })
    }

    /// Run the pipeline on already extracted text. The text is handed back
    /// alongside the report.
    pub async fn analyze_text(
        &self,
        text: String,
        sink: &dyn ProgressSink,
    ) -> Result<(String, FrequencyReport), AnalyzeError> {
        let pipeline = self.pipeline.clone();
        self.process(sink, move || {
            let report = pipeline.run(&text);
            Ok((text, report))
        })
        .await
    }

    /// Like [`Analyzer::analyze_text`] for raw bytes. Malformed UTF-8 is
    /// rejected by the tokenizer before anything is counted.
    pub async fn analyze_bytes(
        &self,
        bytes: Vec<u8>,
        sink: &dyn ProgressSink,
    ) -> Result<(String, FrequencyReport), AnalyzeError> {
        let pipeline = self.pipeline.clone();
        self.process(sink, move || {
            let report = pipeline.run_bytes(&bytes)?;
            Ok((String::from_utf8_lossy(&bytes).into_owned(), report))
        })
        .await
    }

    async fn process<F>(
        &self,
        sink: &dyn ProgressSink,
        work: F,
    ) -> Result<(String, FrequencyReport), AnalyzeError>
    where
        F: FnOnce() -> Result<(String, FrequencyReport), TokenizeError> + Send + 'static,
    {
        sink.emit(Progress::stage(Stage::Tokenizing));
        let task = tokio::task::spawn_blocking(work);

        let (text, report) = tokio::time::timeout(self.processing_timeout, task)
            .await
            .map_err(|_| AnalyzeError::ProcessingTimeout {
                stage: Stage::Tokenizing,
                timeout: self.processing_timeout,
            })?
            .map_err(|err| AnalyzeError::Processing(err.to_string()))??;

        engine_info!(
            "Counted {} tokens, {} distinct words",
            report.token_count,
            report.full.len()
        );
        sink.emit(Progress {
            stage: Stage::Done,
            bytes: None,
            tokens: Some(report.token_count),
        });
        Ok((text, report))
    }
}
