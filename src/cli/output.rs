//! Output formatting helpers for CLI commands

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::panels::tracker::{TrackerView, DEMO_CATEGORIES};
use crate::render::{RecItem, RecKind};

/// Formats the tracker demo grid as a table with an averages footer.
pub fn format_tracker_table(view: &TrackerView) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Month".to_string()];
    header.extend(DEMO_CATEGORIES.iter().map(|c| c.to_string()));
    header.push("Total".to_string());
    table.set_header(header);

    for row in &view.table.rows {
        let mut cells = vec![Cell::new(&row.month)];
        cells.extend(row.values.iter().map(Cell::new));
        cells.push(Cell::new(row.total));
        table.add_row(cells);
    }

    let mut footer = vec![Cell::new("Average")];
    footer.extend(view.table.averages.iter().map(Cell::new));
    footer.push(Cell::new(view.table.average_total));
    table.add_row(footer);

    table.to_string()
}

/// Formats the tracker's top metrics after an analysis.
pub fn format_tracker_metrics(view: &TrackerView) -> String {
    format!(
        "Income: {}  Expenses: {}  Savings: {}  Health: {}  Save rate: {}",
        view.income.bold(),
        view.expenses.bold(),
        view.savings.bold(),
        view.health.bold(),
        view.save_rate.bold(),
    )
}

/// Formats one recommendation list entry.
pub fn format_rec_item(item: &RecItem) -> String {
    let mut line = String::new();
    if let Some(glyph) = item.glyph {
        line.push_str(glyph);
        line.push(' ');
    }
    if let Some(category) = &item.category {
        line.push_str(&format!("{}: ", category.bold()));
    }
    match item.kind {
        RecKind::Critical => line.push_str(&item.message.red().to_string()),
        RecKind::Warning => line.push_str(&item.message.yellow().to_string()),
        RecKind::Success => line.push_str(&item.message.green().to_string()),
        _ => line.push_str(&item.message),
    }
    if let Some(saving) = &item.saving {
        line.push_str(&format!(" ({})", saving));
    }
    line
}

/// Formats a blocking error notice.
pub fn format_notice(message: &str) -> String {
    format!("{} {}", "error:".red().bold(), message)
}
