use std::fs::{self, File};
use std::future::Future;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn};
use wordfreq_core::{ChartKind, FrequencyReport, Pipeline, Tokenizer};
use wordfreq_engine::{Analyzer, Extractor, LogProgressSink, ReqwestFetcher};

use super::cli::Cli;
use super::config::{self, AppConfig};
use super::render::{render_chart, render_table};

/// What a run produced, ready to print.
pub(crate) struct Output<'a> {
    pub title: Option<&'a str>,
    pub text: &'a str,
    pub report: &'a FrequencyReport,
    pub chart: ChartKind,
}

/// Which sections to print.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Sections {
    pub show_text: bool,
    pub all: bool,
    pub json: bool,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    engine_info!(
        "Analysis settings: top_n={}, min_length={}, chart={}, extractor={:?}",
        config.analysis.top_n,
        config.analysis.min_length,
        config.chart.name(),
        config.extractor
    );

    let analyzer = build_analyzer(&config)?;
    let source = match (&cli.url, &cli.text_file) {
        (Some(url), _) => Source::Url(url),
        (None, Some(path)) => Source::File {
            path,
            bytes: fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        },
        (None, None) => anyhow::bail!("a URL or --text-file is required"),
    };
    let (title, text, report) = block_on_detached(analyze_source(&analyzer, source))??;

    let sections = Sections {
        show_text: cli.show_text,
        all: cli.all,
        json: cli.json,
    };
    let output = Output {
        title: title.as_deref(),
        text: &text,
        report: &report,
        chart: config.chart,
    };
    let stdout = io::stdout();
    write_output(&mut stdout.lock(), &output, sections).context("writing output")
}

enum Source<'a> {
    Url(&'a str),
    File { path: &'a Path, bytes: Vec<u8> },
}

async fn analyze_source(
    analyzer: &Analyzer,
    source: Source<'_>,
) -> anyhow::Result<(Option<String>, String, FrequencyReport)> {
    let sink = LogProgressSink;
    match source {
        Source::Url(url) => {
            let analysis = analyzer
                .analyze_url(url, &sink)
                .await
                .with_context(|| format!("analyzing {url}"))?;
            Ok((analysis.title, analysis.text, analysis.report))
        }
        Source::File { path, bytes } => {
            let (text, report) = analyzer
                .analyze_bytes(bytes, &sink)
                .await
                .with_context(|| format!("analyzing {}", path.display()))?;
            Ok((None, text, report))
        }
    }
}

/// Drive `future` on a fresh runtime. Blocking work it leaves behind, such as
/// a pipeline that outlived its timeout, is abandoned rather than awaited.
fn block_on_detached<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

fn build_analyzer(config: &AppConfig) -> anyhow::Result<Analyzer> {
    let tokenizer = match &config.dictionary {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            engine_info!("Loading segmentation dictionary {:?}", path);
            Tokenizer::with_dictionary(&mut BufReader::new(file))?
        }
        None => Tokenizer::new(),
    }
    .with_hmm(config.hmm);

    let pipeline = Arc::new(Pipeline::new(tokenizer, &config.analysis));
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.to_settings()));
    let extractor: Arc<dyn Extractor> =
        Arc::from(config.extractor.build(config.selector.as_deref())?);

    Ok(Analyzer::new(fetcher, extractor, pipeline)
        .with_processing_timeout(config.processing_timeout()))
}

pub(crate) fn write_output(
    out: &mut impl Write,
    output: &Output<'_>,
    sections: Sections,
) -> anyhow::Result<()> {
    if sections.json {
        serde_json::to_writer_pretty(&mut *out, output.report)?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(title) = output.title {
        writeln!(out, "# {title}\n")?;
    }
    if sections.show_text {
        writeln!(out, "{}\n", output.text.trim_end())?;
    }

    if let Err(err) = output.report.clone().require_data() {
        engine_warn!("Nothing to chart: {}", err);
        writeln!(out, "{err}")?;
        return Ok(());
    }

    if sections.all {
        writeln!(out, "All words ({} tokens)", output.report.token_count)?;
        writeln!(out, "{}", render_table(&output.report.full))?;
    }
    writeln!(out, "Top {}", output.report.top.len())?;
    writeln!(out, "{}", render_table(&output.report.top))?;

    let chart = render_chart(output.chart, &output.report.top)
        .with_context(|| format!("no renderer for {}", output.chart))?;
    writeln!(out, "{}", output.chart.title())?;
    writeln!(out, "{chart}")?;
    Ok(())
}
