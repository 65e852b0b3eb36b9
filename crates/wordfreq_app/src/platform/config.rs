use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use wordfreq_core::{AnalysisConfig, ChartKind};
use wordfreq_engine::{ExtractorKind, FetchSettings};

pub const DEFAULT_CONFIG_FILENAME: &str = "wordfreq.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub chart: ChartKind,
    pub extractor: ExtractorKind,
    pub selector: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub hmm: bool,
    pub processing_timeout_secs: u64,
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            chart: ChartKind::default(),
            extractor: ExtractorKind::default(),
            selector: None,
            dictionary: None,
            hmm: false,
            processing_timeout_secs: 30,
            fetch: FetchConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn processing_timeout(&self) -> Duration {
        Duration::from_secs(self.processing_timeout_secs)
    }
}

/// Fetch settings in a file-friendly shape (whole seconds, optional overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            redirect_limit: settings.redirect_limit,
            max_bytes: settings.max_bytes,
            user_agent: None,
            accept_language: None,
        }
    }
}

impl FetchConfig {
    pub fn to_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            accept_language: self
                .accept_language
                .clone()
                .unwrap_or(defaults.accept_language),
            allowed_content_types: defaults.allowed_content_types,
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist and parse. Without one, `./wordfreq.ron` is
/// used when present and defaults otherwise.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            engine_warn!("Failed to read config from {:?}: {}", path, err);
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };

    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    engine_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use wordfreq_core::ChartKind;
    use wordfreq_engine::ExtractorKind;

    use super::{load, AppConfig};

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wordfreq.ron");
        fs::write(
            &path,
            r#"(
                analysis: (min_length: 3, top_n: 5),
                chart: horizontal_bar,
                extractor: readability,
                fetch: (request_timeout_secs: 5),
            )"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.analysis.min_length, 3);
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(
            config.analysis.exclusions,
            AppConfig::default().analysis.exclusions
        );
        assert_eq!(config.chart, ChartKind::HorizontalBar);
        assert_eq!(config.extractor, ExtractorKind::Readability);

        let settings = config.fetch.to_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn exclusions_can_extend_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wordfreq.ron");
        fs::write(
            &path,
            r#"(analysis: (exclusions: ["的确"], extend_default_exclusions: true))"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert!(config.analysis.extend_default_exclusions);
        let filter = config.analysis.token_filter();
        assert!(!filter.accepts("的确"));
        assert!(!filter.accepts("。"));
        assert!(!filter.accepts("，"));
        assert!(filter.exclusions().contains("“"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(load(Some(&temp.path().join("absent.ron"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(chart: radar)").unwrap();
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_ron() {
        let config = AppConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let parsed: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
