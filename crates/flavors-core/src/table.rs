//! Box table rendering for flavor summaries.
//!
//! Tables are drawn with rounded box characters and sized from their widest
//! cell. Widths are measured in Unicode scalar values so every line of a table
//! has the same `chars().count()`, whatever the phrases contain.
//!
//! ```text
//! ╭─────────────────╮
//! │ Your Flavors    │
//! ├─────────────┬───┤
//! │ Thinking    │ 2 │
//! │ Moonwalking │ 1 │
//! ╰─────────────┴───╯
//! ```

use std::borrow::Cow;

use crate::aggregate::AggregateRow;

/// Title shown in the header row of the summary table.
pub const TABLE_TITLE: &str = "Your Flavors";

/// Output for a summary with nothing to show.
pub const EMPTY_SUMMARY: &str = "No flavor texts found yet.\n";

/// Spaces on each side of a cell's content.
const PADDING: usize = 1;

/// Renders the summary output for `rows`.
///
/// Returns [`EMPTY_SUMMARY`] when there are no rows, otherwise a table titled
/// [`TABLE_TITLE`]. The result always ends with a newline.
pub fn render_summary(rows: &[AggregateRow]) -> String {
    if rows.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    render_table(TABLE_TITLE, rows)
}

/// Renders `rows` as a box table under a one-cell header holding `title`.
///
/// Text is left-aligned and counts are right-aligned. If the title is wider
/// than the two columns together, the text column absorbs the difference.
pub fn render_table(title: &str, rows: &[AggregateRow]) -> String {
    let title = cell_text(title);
    let cells: Vec<(Cow<'_, str>, String)> = rows
        .iter()
        .map(|row| (cell_text(row.text.as_str()), row.count.to_string()))
        .collect();

    let text_width = cells.iter().map(|(text, _)| width(text)).max().unwrap_or(0);
    let count_width = cells.iter().map(|(_, count)| width(count)).max().unwrap_or(0);

    let mut text_column = text_width + 2 * PADDING;
    let count_column = count_width + 2 * PADDING;
    let title_column = width(&title) + 2 * PADDING;

    // Columns plus the junction between them.
    let mut inner = text_column + 1 + count_column;
    if title_column > inner {
        text_column += title_column - inner;
        inner = title_column;
    }

    let text_width = text_column - 2 * PADDING;
    let title_width = inner - 2 * PADDING;

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("╭{}╮", rule(inner)));
    lines.push(format!("│ {title:<title_width$} │"));
    lines.push(format!("├{}┬{}┤", rule(text_column), rule(count_column)));
    for (text, count) in &cells {
        // `str` padding counts chars, matching `width`.
        lines.push(format!("│ {text:<text_width$} │ {count:>count_width$} │"));
    }
    lines.push(format!("╰{}┴{}╯", rule(text_column), rule(count_column)));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn rule(len: usize) -> String {
    "─".repeat(len)
}

/// Replaces control characters so a cell always occupies a single line.
fn cell_text(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_control) {
        Cow::Owned(
            s.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::types::FlavorText;

    fn row(text: &str, count: u64) -> AggregateRow {
        AggregateRow {
            text: FlavorText::new(text).unwrap(),
            count,
        }
    }

    fn assert_box_table(output: &str) {
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.len() >= 3, "expected table output, got:\n{output}");

        let expected = lines[0].chars().count();
        for line in &lines {
            assert_eq!(
                line.chars().count(),
                expected,
                "table lines have inconsistent widths:\n{output}"
            );
        }
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        let last = lines[lines.len() - 1];
        assert!(last.starts_with('╰') && last.ends_with('╯'));
    }

    #[test]
    fn empty_rows_render_sentinel() {
        assert_eq!(render_summary(&[]), "No flavor texts found yet.\n");
    }

    #[test]
    fn summary_table_layout() {
        let rows = vec![row("Thinking", 2), row("Moonwalking", 1), row("Refactoring", 1)];
        let output = render_summary(&rows);

        assert_box_table(&output);
        assert_snapshot!(output);
    }

    #[test]
    fn wide_title_stretches_text_column() {
        let output = render_summary(&[row("Hi", 3)]);

        assert_box_table(&output);
        assert_eq!(
            output,
            "╭──────────────╮\n\
             │ Your Flavors │\n\
             ├──────────┬───┤\n\
             │ Hi       │ 3 │\n\
             ╰──────────┴───╯\n"
        );
    }

    #[test]
    fn multibyte_text_keeps_uniform_width() {
        let rows = vec![
            row("思考中", 12),
            row("🚀 Launching", 7),
            row("Café", 1),
            row("Cafe\u{301}", 1),
        ];
        let output = render_summary(&rows);

        assert_box_table(&output);
        assert!(output.contains("│ 思考中         │ 12 │"));
        assert!(output.contains("│ 🚀 Launching │  7 │"));
    }

    #[test]
    fn long_counts_widen_count_column() {
        let output = render_summary(&[row("Thinking", 1_234_567), row("Pondering", 8)]);

        assert_box_table(&output);
        assert!(output.contains("│ Thinking  │ 1234567 │"));
        assert!(output.contains("│ Pondering │       8 │"));
    }

    #[test]
    fn control_characters_do_not_break_lines() {
        let output = render_summary(&[row("Tab\there", 1), row("New\nline", 1)]);

        assert_box_table(&output);
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("│ Tab here │"));
    }

    #[test]
    fn render_table_without_rows_draws_header_only() {
        let output = render_table("Title", &[]);

        assert_box_table(&output);
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("│ Title │"));
    }
}
