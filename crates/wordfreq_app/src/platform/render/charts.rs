use std::fmt::Write;

use wordfreq_core::RankedEntry;

use super::{display_width, pad};

const PLOT_HEIGHT: u64 = 8;
const BAR_WIDTH: u64 = 40;
const CLOUD_WIDTH: usize = 60;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

fn max_count(rows: &[RankedEntry]) -> u64 {
    rows.iter().map(|row| row.count).max().unwrap_or(0).max(1)
}

/// `count` scaled onto `1..=steps`; zero stays zero.
fn scaled(count: u64, max: u64, steps: u64) -> u64 {
    (count.saturating_mul(steps)).div_ceil(max).min(steps)
}

fn word_column(rows: &[RankedEntry]) -> usize {
    rows.iter().map(|row| display_width(&row.word)).max().unwrap_or(0)
}

fn legend(out: &mut String, rows: &[RankedEntry]) {
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} ({})", i + 1, row.word, row.count);
    }
}

fn index_axis(out: &mut String, columns: usize) {
    let _ = writeln!(out, "{}", "───".repeat(columns));
    let labels: String = (1..=columns).map(|i| format!("{i:<3}")).collect();
    let _ = writeln!(out, "{}", labels.trim_end());
}

pub(super) fn bar(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let mut out = String::new();
    for level in (1..=PLOT_HEIGHT).rev() {
        let line: String = rows
            .iter()
            .map(|row| {
                if scaled(row.count, max, PLOT_HEIGHT) >= level {
                    "██ "
                } else {
                    "   "
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    index_axis(&mut out, rows.len());
    legend(&mut out, rows);
    out
}

pub(super) fn horizontal_bar(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let width = word_column(rows);
    let mut out = String::new();
    for row in rows {
        let len = scaled(row.count, max, BAR_WIDTH) as usize;
        let _ = writeln!(out, "{} │{} {}", pad(&row.word, width), "█".repeat(len), row.count);
    }
    out
}

pub(super) fn pie(rows: &[RankedEntry]) -> String {
    let total: u64 = rows.iter().map(|row| row.count).sum::<u64>().max(1);
    let width = word_column(rows);
    let mut out = String::new();
    for row in rows {
        let share = row.count as f64 / total as f64;
        let len = (share * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{} {:>5.1}% {}",
            pad(&row.word, width),
            share * 100.0,
            "●".repeat(len.max(1))
        );
    }
    let _ = writeln!(out, "total: {total}");
    out
}

pub(super) fn line(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let spark: String = rows
        .iter()
        .map(|row| {
            let step = scaled(row.count, max, SPARKS.len() as u64).max(1);
            SPARKS[step as usize - 1]
        })
        .collect();
    let mut out = String::new();
    let _ = writeln!(out, "{spark}");
    legend(&mut out, rows);
    out
}

pub(super) fn heatmap(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let width = word_column(rows);
    let mut out = String::new();
    for row in rows {
        let step = scaled(row.count, max, SHADES.len() as u64).max(1);
        let cell = SHADES[step as usize - 1].to_string().repeat(6);
        let _ = writeln!(out, "{} {} {}", pad(&row.word, width), cell, row.count);
    }
    out
}

pub(super) fn scatter(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let mut out = String::new();
    for level in (1..=PLOT_HEIGHT).rev() {
        let line: String = rows
            .iter()
            .map(|row| {
                if scaled(row.count, max, PLOT_HEIGHT) == level {
                    "●  "
                } else {
                    "   "
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    index_axis(&mut out, rows.len());
    legend(&mut out, rows);
    out
}

/// Words wrapped into lines, emphasised by relative count.
pub(super) fn word_cloud(rows: &[RankedEntry]) -> String {
    let max = max_count(rows);
    let mut out = String::new();
    let mut line = String::new();
    for row in rows {
        let word = match scaled(row.count, max, 3) {
            3 => format!("【{}】", row.word),
            2 => format!("[{}]", row.word),
            _ => row.word.clone(),
        };
        if !line.is_empty() && display_width(&line) + 1 + display_width(&word) > CLOUD_WIDTH {
            let _ = writeln!(out, "{line}");
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        let _ = writeln!(out, "{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{bar, horizontal_bar, scaled, word_cloud};
    use pretty_assertions::assert_eq;
    use wordfreq_core::RankedEntry;

    #[test]
    fn scaling_keeps_nonzero_counts_visible() {
        assert_eq!(scaled(1, 1000, 8), 1);
        assert_eq!(scaled(1000, 1000, 8), 8);
        assert_eq!(scaled(500, 1000, 8), 4);
        assert_eq!(scaled(0, 10, 8), 0);
    }

    #[test]
    fn horizontal_bar_scales_to_largest() {
        let rows = vec![RankedEntry::new("猫猫", 4), RankedEntry::new("ab", 2)];
        let chart = horizontal_bar(&rows);
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines[0], format!("猫猫 │{} 4", "█".repeat(40)));
        assert_eq!(lines[1], format!("ab   │{} 2", "█".repeat(20)));
    }

    #[test]
    fn bar_columns_are_as_tall_as_counts() {
        let rows = vec![RankedEntry::new("aa", 8), RankedEntry::new("bb", 4)];
        let chart = bar(&rows);
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines[0], "██");
        assert_eq!(lines[4], "██ ██");
        assert_eq!(lines[8], "──────");
        assert_eq!(lines[9], "1  2");
    }

    #[test]
    fn word_cloud_emphasises_frequent_words() {
        let rows = vec![
            RankedEntry::new("猫猫", 9),
            RankedEntry::new("狗狗", 5),
            RankedEntry::new("鱼肉", 1),
        ];
        assert_eq!(word_cloud(&rows), "【猫猫】 [狗狗] 鱼肉\n");
    }
}
