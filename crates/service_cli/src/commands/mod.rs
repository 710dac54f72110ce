//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Results go to stdout,
//! either as a box-drawn table or as pretty-printed JSON.

pub mod compare;
pub mod price;
pub mod sweep;

use serde::Serialize;

use crate::Result;

/// Print any serialisable report as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render rows under a header with box-drawing borders
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {:>width$} ", cell, width = w))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = border("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&border("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&border("└", "┴", "┘"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &["Strike", "Price"],
            &[
                vec!["150.00".to_string(), "15.7".to_string()],
                vec!["160.00".to_string(), "10.9692".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌────────┬─────────┐");
        assert_eq!(lines[1], "│ Strike │   Price │");
        assert_eq!(lines[3], "│ 150.00 │    15.7 │");
        assert_eq!(lines[5], "└────────┴─────────┘");
    }

    #[test]
    fn test_render_table_empty_body() {
        let table = render_table(&["A"], &[]);
        assert_eq!(table.lines().count(), 4);
    }
}
