use crate::application::read_models::{InventoryReadModel, PreviewView, RowView};
use crate::application::state::Notice;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Column titles, in display order
const COLUMNS: [&str; 7] = ["ID", "Name", "Qty", "Storage", "Source", "Specifications", "Flags"];

/// Longer cells are cut and end with an ellipsis
const MAX_CELL_WIDTH: usize = 40;

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// TableFormatter adapter rendering aligned plain-text tables for a terminal
///
/// Widths are measured before any coloring so ANSI escapes never skew
/// alignment.
pub struct TableFormatter {
    color: bool,
}

impl TableFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn cells(row: &RowView) -> [String; 7] {
        [
            row.id.to_string(),
            truncate(&row.name),
            row.quantity.to_string(),
            truncate(&row.storage),
            truncate(&row.source),
            truncate(&row.specifications),
            row.flags().join(","),
        ]
    }

    fn render_table(&self, output: &mut String, rows: &[RowView]) {
        let cells: Vec<[String; 7]> = rows.iter().map(Self::cells).collect();
        let mut widths = COLUMNS.map(|title| title.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = join_padded(COLUMNS.iter().map(|c| c.to_string()), &widths);
        if self.color {
            output.push_str(&header.bold().to_string());
        } else {
            output.push_str(&header);
        }
        output.push('\n');

        for (row, cells) in rows.iter().zip(cells) {
            let line = join_padded(cells.into_iter(), &widths);
            output.push_str(&self.paint_row(row, line));
            output.push('\n');
        }
    }

    fn paint_row(&self, row: &RowView, line: String) -> String {
        if !self.color {
            return line;
        }
        if row.highlighted {
            line.green().bold().to_string()
        } else if row.duplicate {
            line.yellow().to_string()
        } else if row.zero_quantity {
            line.red().to_string()
        } else {
            line
        }
    }

    fn heading(&self, text: &str) -> String {
        let heading = format!("== {} ==", text);
        if self.color {
            heading.cyan().bold().to_string()
        } else {
            heading
        }
    }

    fn render_preview(&self, output: &mut String, preview: &PreviewView) {
        output.push_str(&self.heading("Parse Preview"));
        output.push('\n');
        for (field, value) in [
            ("Name", preview.name.clone()),
            ("Category", preview.category.clone()),
            ("Quantity", preview.quantity.to_string()),
            ("Source", preview.source.clone()),
            ("Specifications", preview.specifications.clone()),
        ] {
            output.push_str(&format!("{:<15}{}\n", format!("{}:", field), value));
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

fn truncate(text: &str) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= MAX_CELL_WIDTH {
        return single_line;
    }
    let cut: String = single_line.chars().take(MAX_CELL_WIDTH - 1).collect();
    format!("{}…", cut)
}

fn join_padded(cells: impl Iterator<Item = String>, widths: &[usize; 7]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

impl InventoryFormatter for TableFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut output = String::new();

        if let Some(banner) = model.status.failure_banner() {
            output.push_str(&banner);
            output.push('\n');
            return Ok(output);
        }

        if let Some(preview) = &model.preview {
            self.render_preview(&mut output, preview);
            return Ok(output);
        }

        if let Some(similar) = &model.similar {
            output.push_str(&self.heading(&format!("Similar to {}", similar.component_id)));
            output.push('\n');
            if similar.rows.is_empty() {
                output.push_str("No similar components found\n");
            } else {
                self.render_table(&mut output, &similar.rows);
            }
            return Ok(output);
        }

        if let Some(search) = &model.search {
            output.push_str(&format!(
                "Search \"{}\" ({} filter(s)): {} result(s)\n",
                search.query, search.active_filters, model.total
            ));
        }
        if let Some(warning) = model.duplicate_warning() {
            let line = format!("⚠ {}", warning);
            if self.color {
                output.push_str(&line.yellow().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }

        if let Some(row) = &model.new_component {
            output.push_str(&self.heading("New Component"));
            output.push('\n');
            self.render_table(&mut output, std::slice::from_ref(row));
        }

        for section in &model.sections {
            if let Some(header) = &section.header {
                output.push_str(&self.heading(header));
                output.push('\n');
            }
            self.render_table(&mut output, &section.rows);
        }

        if let Some(message) = model.empty_message() {
            output.push_str(message);
            output.push('\n');
        }
        if let Some(enabled) = model.llm_parser_enabled {
            output.push_str(&format!(
                "LLM parser {}\n",
                if enabled { "enabled" } else { "disabled" }
            ));
        }
        if let Some(Notice::Info(message)) = &model.notice {
            if model.llm_parser_enabled.is_none() {
                output.push_str(message);
                output.push('\n');
            }
        }

        Ok(output)
    }
}
