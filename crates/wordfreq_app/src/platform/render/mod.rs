//! Plain-text chart renderers keyed by [`ChartKind`].
//!
//! Renderers only see `(word, count)` rows. Adding a chart means adding a
//! variant to `ChartKind` and one entry to [`RENDERERS`].
mod charts;

use std::fmt::Write;

use wordfreq_core::{ChartKind, RankedEntry};

pub type RenderFn = fn(&[RankedEntry]) -> String;

pub const NO_DATA: &str = "No data to plot.";

const RENDERERS: &[(ChartKind, RenderFn)] = &[
    (ChartKind::WordCloud, charts::word_cloud),
    (ChartKind::Bar, charts::bar),
    (ChartKind::Pie, charts::pie),
    (ChartKind::Line, charts::line),
    (ChartKind::Heatmap, charts::heatmap),
    (ChartKind::Scatter, charts::scatter),
    (ChartKind::HorizontalBar, charts::horizontal_bar),
];

pub fn renderer_for(kind: ChartKind) -> Option<RenderFn> {
    RENDERERS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, render)| *render)
}

/// Render `rows` as `kind`, with a placeholder for empty input.
pub fn render_chart(kind: ChartKind, rows: &[RankedEntry]) -> Option<String> {
    let render = renderer_for(kind)?;
    if rows.is_empty() {
        return Some(NO_DATA.to_string());
    }
    Some(render(rows))
}

/// Two-column word/count table.
pub fn render_table(rows: &[RankedEntry]) -> String {
    let word_width = rows
        .iter()
        .map(|row| display_width(&row.word))
        .max()
        .unwrap_or(0)
        .max(display_width("word"));
    let mut out = String::new();
    let _ = writeln!(out, "{}  count", pad("word", word_width));
    for row in rows {
        let _ = writeln!(out, "{}  {}", pad(&row.word, word_width), row.count);
    }
    out
}

/// Terminal columns taken by `text`; East Asian wide characters take two.
pub(crate) fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

pub(crate) fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}'
        | '\u{20000}'..='\u{3FFFD}'
    )
}

#[cfg(test)]
mod tests {
    use super::{display_width, render_chart, render_table, renderer_for, NO_DATA};
    use pretty_assertions::assert_eq;
    use wordfreq_core::{ChartKind, RankedEntry};

    fn rows() -> Vec<RankedEntry> {
        vec![
            RankedEntry::new("猫猫", 4),
            RankedEntry::new("rust", 2),
            RankedEntry::new("狗狗", 1),
        ]
    }

    #[test]
    fn every_chart_kind_has_a_renderer() {
        for kind in ChartKind::ALL {
            assert!(renderer_for(kind).is_some(), "missing renderer for {kind}");
        }
    }

    #[test]
    fn every_renderer_mentions_every_word() {
        for kind in ChartKind::ALL {
            let chart = render_chart(kind, &rows()).unwrap();
            for row in rows() {
                assert!(chart.contains(&row.word), "{kind} dropped {}", row.word);
            }
        }
    }

    #[test]
    fn empty_rows_render_placeholder() {
        for kind in ChartKind::ALL {
            assert_eq!(render_chart(kind, &[]).unwrap(), NO_DATA);
        }
    }

    #[test]
    fn table_aligns_wide_words() {
        let table = render_table(&rows());
        assert_eq!(table, "word  count\n猫猫  4\nrust  2\n狗狗  1\n");
        assert_eq!(display_width("猫猫a"), 5);
    }
}
