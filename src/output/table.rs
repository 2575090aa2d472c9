use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use super::{Outcome, Value};

#[derive(Tabled)]
struct PrefixRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "After prefix")]
    rest: String,
}

#[derive(Tabled)]
struct SortRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Item")]
    item: String,
}

/// Format a multi-item outcome as a table with a short header
///
/// Only `prefix` and `sort` have a table layout; anything else falls back to
/// plain text.
pub fn format_table(outcome: &Outcome) -> String {
    match (outcome.command, &outcome.input, &outcome.output) {
        ("prefix", Value::List(items), Value::Text(prefix)) => {
            let rows: Vec<PrefixRow> = items
                .iter()
                .map(|item| PrefixRow {
                    item: item.clone(),
                    rest: item.strip_prefix(prefix.as_str()).unwrap_or(item).to_string(),
                })
                .collect();

            let shown = if prefix.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                format!("\"{}\"", prefix.green())
            };

            format!(
                "{} {}\n\n{}\n",
                "Common prefix:".bold(),
                shown,
                Table::new(rows)
            )
        }
        ("sort", _, Value::List(sorted)) => {
            let rows: Vec<SortRow> = sorted
                .iter()
                .enumerate()
                .map(|(i, item)| SortRow {
                    rank: i + 1,
                    item: item.clone(),
                })
                .collect();

            format!(
                "{} {}\n\n{}\n",
                "Sorted (ignoring case):".bold(),
                sorted.len().cyan(),
                Table::new(rows)
            )
        }
        _ => super::format_text(outcome),
    }
}
