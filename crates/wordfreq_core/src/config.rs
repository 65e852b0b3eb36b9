use serde::{Deserialize, Serialize};

use crate::filter::{TokenFilter, DEFAULT_EXCLUSIONS};

pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_TOP_N: i64 = 20;

/// Tunables for one pipeline: what counts as a word and how many rows to select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub min_length: usize,
    pub exclusions: Vec<String>,
    /// Treat `exclusions` as additions to [`DEFAULT_EXCLUSIONS`] rather than a replacement.
    pub extend_default_exclusions: bool,
    pub top_n: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            extend_default_exclusions: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Append exclusions on top of the current set, skipping duplicates.
    pub fn extend_exclusions<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in extra {
            let item = item.into();
            if !self.exclusions.contains(&item) {
                self.exclusions.push(item);
            }
        }
    }

    pub fn token_filter(&self) -> TokenFilter {
        let defaults: &[&str] = if self.extend_default_exclusions {
            DEFAULT_EXCLUSIONS
        } else {
            &[]
        };
        let exclusions = defaults
            .iter()
            .map(|s| s.to_string())
            .chain(self.exclusions.iter().cloned());
        TokenFilter::new(self.min_length, exclusions)
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisConfig;
    use crate::filter::DEFAULT_EXCLUSIONS;

    #[test]
    fn listed_exclusions_replace_defaults() {
        let config = AnalysisConfig {
            exclusions: vec!["的确".to_string()],
            ..AnalysisConfig::default()
        };
        let filter = config.token_filter();
        assert_eq!(filter.exclusions().len(), 1);
        assert!(filter.accepts("。。"));
        assert!(!filter.accepts("的确"));
    }

    #[test]
    fn extending_keeps_default_punctuation() {
        let config = AnalysisConfig {
            exclusions: vec!["的确".to_string()],
            extend_default_exclusions: true,
            ..AnalysisConfig::default()
        };
        let filter = config.token_filter();
        assert!(!filter.accepts("的确"));
        for excluded in DEFAULT_EXCLUSIONS {
            assert!(filter.exclusions().contains(*excluded));
        }
    }
}
