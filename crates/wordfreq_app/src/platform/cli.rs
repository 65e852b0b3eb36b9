use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use wordfreq_core::ChartKind;
use wordfreq_engine::ExtractorKind;

use super::config::AppConfig;
use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "wordfreq")]
#[command(version, about = "Fetch an article and chart its word frequencies")]
pub struct Cli {
    /// Article URL to fetch.
    #[arg(required_unless_present = "text_file")]
    pub url: Option<String>,

    /// Analyze a local UTF-8 text file instead of fetching a URL.
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub text_file: Option<PathBuf>,

    /// Number of top words to chart (0 or less charts nothing).
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Chart type: word_cloud, bar, pie, line, heatmap, scatter, horizontal_bar.
    #[arg(long, short = 'c')]
    pub chart: Option<ChartKind>,

    /// Minimum token length in characters.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Extra token to exclude (repeatable).
    #[arg(long = "exclude", value_name = "TOKEN")]
    pub exclude: Vec<String>,

    /// Article extraction strategy: selector, anchors or readability.
    #[arg(long)]
    pub extractor: Option<ExtractorKind>,

    /// CSS selector for the `selector` extraction strategy.
    #[arg(long)]
    pub selector: Option<String>,

    /// Segmentation dictionary replacing the bundled one.
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// RON configuration file (defaults to ./wordfreq.ron when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the extracted article text.
    #[arg(long)]
    pub show_text: bool,

    /// Print the full frequency table.
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON instead of tables and charts.
    #[arg(long)]
    pub json: bool,

    /// Also write logs to ./wordfreq.log.
    #[arg(long)]
    pub log_file: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        engine_logging::level_for_verbosity(self.verbose)
    }

    /// Command-line flags win over values from the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(top) = self.top {
            config.analysis.top_n = top;
        }
        if let Some(min_length) = self.min_length {
            config.analysis.min_length = min_length;
        }
        config.analysis.extend_exclusions(self.exclude.iter().cloned());
        if let Some(chart) = self.chart {
            config.chart = chart;
        }
        if let Some(extractor) = self.extractor {
            config.extractor = extractor;
        }
        if let Some(selector) = &self.selector {
            config.selector = Some(selector.clone());
        }
        if let Some(dictionary) = &self.dictionary {
            config.dictionary = Some(dictionary.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::platform::config::AppConfig;
    use crate::platform::logging::LogDestination;
    use clap::Parser;
    use wordfreq_core::ChartKind;
    use wordfreq_engine::ExtractorKind;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "wordfreq",
            "https://example.com/a",
            "--top",
            "-3",
            "--chart",
            "饼图",
            "--exclude",
            "的确",
            "--extractor",
            "anchors",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.analysis.top_n, -3);
        assert_eq!(config.chart, ChartKind::Pie);
        assert_eq!(config.extractor, ExtractorKind::Anchors);
        assert!(config.analysis.exclusions.contains(&"的确".to_string()));
        assert!(config.analysis.exclusions.contains(&"。".to_string()));
    }

    #[test]
    fn url_or_text_file_is_required() {
        assert!(Cli::try_parse_from(["wordfreq"]).is_err());
        assert!(Cli::try_parse_from(["wordfreq", "--text-file", "a.txt"]).is_ok());
        assert!(Cli::try_parse_from(["wordfreq", "https://x", "--text-file", "a.txt"]).is_err());
    }

    #[test]
    fn log_file_flag_adds_file_logging() {
        let cli = Cli::try_parse_from(["wordfreq", "https://x"]).unwrap();
        assert!(matches!(cli.log_destination(), LogDestination::Terminal));
        let cli = Cli::try_parse_from(["wordfreq", "https://x", "--log-file"]).unwrap();
        assert!(matches!(cli.log_destination(), LogDestination::Both));
    }

    #[test]
    fn unknown_chart_is_rejected() {
        assert!(Cli::try_parse_from(["wordfreq", "https://x", "--chart", "radar"]).is_err());
    }
}
