//! Plain-text renderer.

use datatable_lib::TableView;
use datatable_lib::options::TableOptions;
use unicode_width::UnicodeWidthStr;

use super::{EMPTY_LABEL, Renderer, page_label};

const COLUMN_GAP: &str = "  ";

/// Renders aligned columns with a pagination footer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    options: TableOptions,
}

impl TextRenderer {
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    fn cells(&self, view: &TableView) -> Vec<Vec<String>> {
        view.rows
            .iter()
            .map(|row| {
                self.options
                    .display_keys
                    .iter()
                    .map(|key| row.display(key).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Pads `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn join_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

impl Renderer for TextRenderer {
    fn render(&self, view: &TableView) -> String {
        let headers = &self.options.display_keys;
        let rows = self.cells(view);

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = Vec::with_capacity(rows.len() + 5);
        if let Some(query) = &view.query {
            out.push(format!("search: {}", query));
        }
        out.push(join_line(headers, &widths));
        out.push(
            widths
                .iter()
                .map(|&w| "─".repeat(w))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP),
        );
        if rows.is_empty() {
            out.push(EMPTY_LABEL.to_string());
        }
        for row in &rows {
            out.push(join_line(row, &widths));
        }
        out.push(String::new());
        out.push(format!(
            "⏮  ◀  {}  ▶  ⏭    {} per page",
            page_label(view),
            view.page_size
        ));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use datatable_lib::PaginationSummary;
    use datatable_lib::model::Record;

    use super::*;

    fn view(rows: Vec<Record>) -> TableView {
        TableView {
            rows,
            summary: PaginationSummary::new(0, 2),
            page_size: 10,
            query: None,
        }
    }

    #[test]
    fn test_columns_are_aligned() {
        let renderer = TextRenderer::new(TableOptions::new(["firstName", "age"]));
        let output = renderer.render(
            &view(vec![
                Record::new().set("firstName", "Jo").set("age", 30i64),
                Record::new().set("firstName", "Émilie").set("age", 5i64),
            ]),
        );
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "firstName  age");
        assert_eq!(lines[1], "─────────  ───");
        assert_eq!(lines[2], "Jo         30");
        assert_eq!(lines[3], "Émilie     5");
        assert_eq!(lines[5], "⏮  ◀  Page 1 of 2  ▶  ⏭    10 per page");
    }

    #[test]
    fn test_empty_view_shows_placeholder() {
        let renderer = TextRenderer::new(TableOptions::new(["id"]));
        let mut empty = view(Vec::new());
        empty.query = Some("zz".into());
        let output = renderer.render(&empty);

        assert!(output.starts_with("search: zz\n"));
        assert!(output.contains(EMPTY_LABEL));
    }
}
