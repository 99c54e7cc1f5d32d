use crate::application::read_models::{
    InventoryReadModel, PreviewView, RowView, SectionView, SimilarView,
};
use crate::application::state::Notice;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;

/// Markdown table header for component rows
const TABLE_HEADER: &str = "| ID | Name | Quantity | Source | Storage | Specifications | Flags |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----|------|----------|--------|---------|----------------|-------|\n";

/// MarkdownFormatter adapter for rendering the inventory as a Markdown document
///
/// One table per category section; the freshly created component, search
/// summary, duplicate alert and similar-component listings get their own
/// blocks.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_row(output: &mut String, row: &RowView) {
        let name = if row.highlighted {
            format!("**{}**", Self::escape_markdown_table_cell(&row.name))
        } else {
            Self::escape_markdown_table_cell(&row.name)
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            row.id,
            name,
            row.quantity,
            Self::escape_markdown_table_cell(&row.source),
            Self::escape_markdown_table_cell(&row.storage),
            Self::escape_markdown_table_cell(&row.specifications),
            row.flags().join(", ")
        ));
    }

    fn render_table(output: &mut String, rows: &[RowView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in rows {
            Self::render_row(output, row);
        }
        output.push('\n');
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &InventoryReadModel) {
        output.push_str("# Component Inventory\n\n");
        if let Some(category) = &model.active_category {
            output.push_str(&format!(
                "Category: **{}**\n\n",
                Self::escape_markdown_table_cell(category)
            ));
        }
        if let Some(search) = &model.search {
            output.push_str(&format!(
                "Search: `{}` with {} filter(s), {} result(s)\n\n",
                search.query, search.active_filters, model.total
            ));
        }
    }

    fn render_alerts(&self, output: &mut String, model: &InventoryReadModel) {
        if let Some(banner) = model.status.failure_banner() {
            output.push_str(&format!("> ❌ {}\n\n", banner.replace('\n', " ")));
        }
        if let Some(warning) = model.duplicate_warning() {
            output.push_str(&format!(
                "> ⚠️ {}. Review and merge similar components.\n\n",
                warning
            ));
        }
        if let Some(Notice::Error(message)) = &model.notice {
            if model.status.failure_banner().is_none() {
                output.push_str(&format!("> ❌ {}\n\n", message.replace('\n', " ")));
            }
        }
    }

    fn render_new_component(&self, output: &mut String, row: &RowView) {
        output.push_str("## ✨ New Component\n\n");
        Self::render_table(output, std::slice::from_ref(row));
    }

    fn render_sections(&self, output: &mut String, sections: &[SectionView]) {
        for section in sections {
            if let Some(header) = &section.header {
                output.push_str(&format!("## {}\n\n", Self::escape_markdown_table_cell(header)));
            }
            Self::render_table(output, &section.rows);
        }
    }

    fn render_similar(&self, output: &mut String, similar: &SimilarView) {
        output.push_str(&format!(
            "## Similar Components to {}\n\n",
            similar.component_id
        ));
        if similar.rows.is_empty() {
            output.push_str("No similar components found.\n\n");
        } else {
            Self::render_table(output, &similar.rows);
        }
    }

    fn render_preview(&self, output: &mut String, preview: &PreviewView) {
        output.push_str("## Parse Preview\n\n");
        output.push_str("| Field | Value |\n|-------|-------|\n");
        for (field, value) in [
            ("Name", preview.name.clone()),
            ("Category", preview.category.clone()),
            ("Quantity", preview.quantity.to_string()),
            ("Source", preview.source.clone()),
            ("Specifications", preview.specifications.clone()),
        ] {
            output.push_str(&format!(
                "| {} | {} |\n",
                field,
                Self::escape_markdown_table_cell(&value)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for MarkdownFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_alerts(&mut output, model);

        if let Some(preview) = &model.preview {
            self.render_preview(&mut output, preview);
            return Ok(output);
        }

        if let Some(similar) = &model.similar {
            self.render_similar(&mut output, similar);
            return Ok(output);
        }

        if let Some(row) = &model.new_component {
            self.render_new_component(&mut output, row);
        }
        self.render_sections(&mut output, &model.sections);

        if let Some(message) = model.empty_message() {
            output.push_str(&format!("_{}_\n", message));
        }
        if let Some(enabled) = model.llm_parser_enabled {
            output.push_str(&format!(
                "LLM parser: **{}**\n",
                if enabled { "enabled" } else { "disabled" }
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::InventoryReadModelBuilder;
    use crate::application::state::{ViewEvent, ViewState};
    use crate::inventory::domain::{Component, ComponentId, ParsedPreview};

    fn create_test_state() -> ViewState {
        ViewState::new().reduce(ViewEvent::Loaded {
            components: vec![
                Component::new(1, "10k | 1%", "Resistors", 5).with_storage("Drawer 1"),
                Component::new(2, "LM358", "ICs", 0).with_similar(true),
            ],
            search: None,
        })
    }

    fn render(state: &ViewState) -> String {
        MarkdownFormatter::new()
            .format(&InventoryReadModelBuilder::build(state))
            .unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped = MarkdownFormatter::escape_markdown_table_cell("Text with | pipe and\nnewline");
        assert_eq!(escaped, "Text with \\| pipe and newline");
    }

    #[test]
    fn test_format_sections_in_category_order() {
        let markdown = render(&create_test_state());
        assert!(markdown.contains("# Component Inventory"));
        let ics = markdown.find("## ICs").unwrap();
        let resistors = markdown.find("## Resistors").unwrap();
        assert!(ics < resistors);
        assert!(markdown.contains("| 1 | 10k \\| 1% | 5 | N/A | Drawer 1 | N/A |  |"));
        assert!(markdown.contains("| 2 | LM358 | 0 | N/A | Not specified | N/A | DUPLICATE, OUT OF STOCK |"));
        assert!(markdown.contains("Detected 1 potential duplicate in inventory"));
    }

    #[test]
    fn test_format_active_category_has_no_section_headers() {
        let state = create_test_state().reduce(ViewEvent::CategorySelected(Some("ICs".to_string())));
        let markdown = render(&state);
        assert!(markdown.contains("Category: **ICs**"));
        assert!(!markdown.contains("## ICs"));
        assert!(markdown.contains("| 2 | LM358 |"));
        assert!(!markdown.contains("10k"));
    }

    #[test]
    fn test_format_new_component_block() {
        let state = ViewState::new().reduce(ViewEvent::Created {
            stored: ParsedPreview {
                name: "LM358".to_string(),
                category: "ICs".to_string(),
                quantity: 0,
                source: None,
                specifications: None,
            },
            components: create_test_state().components().to_vec(),
            search: None,
        });
        let markdown = render(&state);
        assert!(markdown.contains("## ✨ New Component"));
        assert!(markdown.contains("| 2 | **LM358** |"));
        assert!(!markdown.contains("## ICs"));
    }

    #[test]
    fn test_format_failed_and_empty_states() {
        let failed = create_test_state().reduce(ViewEvent::LoadFailed {
            message: "HTTP 500".to_string(),
        });
        let markdown = render(&failed);
        assert!(markdown.contains("> ❌ Failed to load components: HTTP 500"));
        assert!(!markdown.contains("No components found"));

        let empty = ViewState::new().reduce(ViewEvent::Loaded {
            components: Vec::new(),
            search: None,
        });
        assert!(render(&empty).contains("_No components found_"));
    }

    #[test]
    fn test_format_similar_listing() {
        let state = create_test_state().reduce(ViewEvent::SimilarFound {
            component_id: ComponentId::new(2),
            components: Vec::new(),
        });
        let markdown = render(&state);
        assert!(markdown.contains("## Similar Components to 2"));
        assert!(markdown.contains("No similar components found."));
    }

    #[test]
    fn test_format_preview() {
        let state = ViewState::new().reduce(ViewEvent::PreviewReady(ParsedPreview {
            name: "Resistor".to_string(),
            category: "Resistors".to_string(),
            quantity: 2,
            source: None,
            specifications: Some("10k".to_string()),
        }));
        let markdown = render(&state);
        assert!(markdown.contains("## Parse Preview"));
        assert!(markdown.contains("| Source | N/A |"));
        assert!(markdown.contains("| Specifications | 10k |"));
    }
}
