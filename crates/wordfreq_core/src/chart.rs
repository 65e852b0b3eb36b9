use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chart families a frequency table can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    WordCloud,
    Bar,
    Pie,
    Line,
    Heatmap,
    Scatter,
    HorizontalBar,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown chart type {0:?}")]
pub struct ChartKindParseError(pub String);

impl ChartKind {
    /// Selector order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Heatmap,
        ChartKind::Scatter,
        ChartKind::HorizontalBar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "word_cloud",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter => "scatter",
            ChartKind::HorizontalBar => "horizontal_bar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "柱状图",
            ChartKind::Pie => "饼图",
            ChartKind::Line => "折线图",
            ChartKind::Heatmap => "热力图",
            ChartKind::Scatter => "散点图",
            ChartKind::HorizontalBar => "条形图",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word cloud",
            ChartKind::Bar => "Word frequency bar chart",
            ChartKind::Pie => "Word frequency pie chart",
            ChartKind::Line => "Word frequency line chart",
            ChartKind::Heatmap => "Word frequency heatmap",
            ChartKind::Scatter => "Word frequency scatter plot",
            ChartKind::HorizontalBar => "Word frequency horizontal bar chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the snake_case name (hyphens allowed, any ASCII case) or the Chinese label.
impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.label() == trimmed)
            .ok_or_else(|| ChartKindParseError(s.to_string()))
    }
}
