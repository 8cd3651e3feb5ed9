//! HTML-style markup renderer.
//!
//! Produces the structure a browser host would mount: a header with the
//! page-size select, the search input and one `data-sortby` button per
//! column, one row element per record, and a footer whose buttons carry the
//! page index they navigate to.

use datatable_lib::TableView;
use datatable_lib::model::Record;
use datatable_lib::options::TableOptions;

use super::{EMPTY_LABEL, Renderer, page_label};

/// Renders a view as markup.
#[derive(Debug, Clone)]
pub struct MarkupRenderer {
    options: TableOptions,
}

impl MarkupRenderer {
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    /// Attributes shared by every row, plus the embedded JSON blob.
    fn row_attributes(&self, record: &Record) -> String {
        let mut attrs: String = self
            .options
            .row_attributes
            .iter()
            .map(|(name, value)| data_attribute(name, value))
            .collect();
        let embedded = &self.options.embedded_json;
        if !embedded.is_empty() {
            let blob = record.project(&embedded.keys);
            attrs.push_str(&data_attribute(&embedded.prefix, &blob.to_string()));
        }
        attrs
    }

    fn header(&self, out: &mut String, view: &TableView) {
        out.push_str("  <div class=\"datatable__header\">\n");
        out.push_str("    <select id=\"usercount\">");
        for &size in &self.options.page_sizes {
            let selected = if size == view.page_size { " selected" } else { "" };
            out.push_str(&format!("<option value=\"{0}\"{1}>{0}</option>", size, selected));
        }
        out.push_str("</select>\n");
        out.push_str(&format!(
            "    <input class=\"datatable__input__search\" type=\"text\" id=\"findItem\" value=\"{}\">\n",
            escape(view.query.as_deref().unwrap_or_default())
        ));
        out.push_str("    <div class=\"datatable__sort\">");
        for key in &self.options.display_keys {
            let key = escape(key);
            out.push_str(&format!("<button type=\"button\" data-sortby=\"{0}\">{0}</button>", key));
        }
        out.push_str("</div>\n");
        out.push_str("  </div>\n");
    }

    fn body(&self, out: &mut String, view: &TableView) {
        let columns = self.options.display_keys.len().max(1);
        out.push_str("  <div class=\"datatable__body\">\n");
        if view.is_empty() {
            out.push_str(&format!(
                "    <div class=\"datatable__row datatable__row--empty\"><span>{}</span></div>\n",
                EMPTY_LABEL
            ));
        }
        for record in &view.rows {
            out.push_str(&format!(
                "    <div class=\"datatable__row\" style=\"grid-template-columns: repeat({}, 1fr)\"{}>",
                columns,
                self.row_attributes(record)
            ));
            for key in &self.options.display_keys {
                let cell = record.display(key).unwrap_or_default();
                out.push_str(&format!("<span>{}</span>", escape(&cell)));
            }
            out.push_str("</div>\n");
        }
        out.push_str("  </div>\n");
    }

    fn footer(&self, out: &mut String, view: &TableView) {
        let summary = &view.summary;
        let button = |index: usize, label: &str| {
            format!("    <button type=\"button\" data-index=\"{}\">{}</button>\n", index, label)
        };
        out.push_str("  <div class=\"datatable__footer\">\n");
        out.push_str(&button(summary.first_page_index, "⏮"));
        out.push_str(&button(summary.prev_page_index, "◀"));
        out.push_str(&format!("    <span>{}</span>\n", page_label(view)));
        out.push_str(&button(summary.next_page_index, "▶"));
        out.push_str(&button(summary.last_page_index, "⏭"));
        out.push_str("  </div>\n");
    }
}

impl Renderer for MarkupRenderer {
    fn render(&self, view: &TableView) -> String {
        let mut out = String::from("<div class=\"datatable__wrapper\"");
        if let Some(theme) = &self.options.theme {
            out.push_str(&format!(" data-theme=\"{}\"", escape(theme)));
        }
        out.push_str(">\n");
        self.header(&mut out, view);
        self.body(&mut out, view);
        self.footer(&mut out, view);
        out.push_str("</div>");
        out
    }
}

fn data_attribute(name: &str, value: &str) -> String {
    format!(" data-{}=\"{}\"", escape(name), escape(value))
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use datatable_lib::PaginationSummary;

    use super::*;

    fn options() -> TableOptions {
        TableOptions::new(["firstName", "age"])
            .with_page_sizes([10, 25])
            .with_embedded_json("user", ["id"])
            .with_row_attribute("attcell", "n1")
    }

    fn view(rows: Vec<Record>, current: usize, total: usize) -> TableView {
        TableView {
            rows,
            summary: PaginationSummary::new(current, total),
            page_size: 10,
            query: None,
        }
    }

    #[test]
    fn test_row_carries_attributes_and_embedded_json() {
        let renderer = MarkupRenderer::new(options());
        let record = Record::new()
            .set("id", 7i64)
            .set("firstName", "Ann")
            .set("age", 41i64);
        let output = renderer.render(&view(vec![record], 0, 1));

        assert!(output.contains(
            r#"style="grid-template-columns: repeat(2, 1fr)" data-attcell="n1" data-user="{&quot;id&quot;:7}"><span>Ann</span><span>41</span></div>"#
        ));
        assert!(output.contains(r#"<option value="10" selected>10</option><option value="25">25</option>"#));
    }

    #[test]
    fn test_header_has_sort_button_per_display_key() {
        let renderer = MarkupRenderer::new(options());
        let output = renderer.render(&view(Vec::new(), 0, 1));

        assert!(output.contains(
            r#"<div class="datatable__sort"><button type="button" data-sortby="firstName">firstName</button><button type="button" data-sortby="age">age</button></div>"#
        ));
        assert_eq!(output.matches("data-sortby=").count(), 2);
    }

    #[test]
    fn test_footer_indices() {
        let renderer = MarkupRenderer::new(options());
        let output = renderer.render(&view(Vec::new(), 1, 3));

        assert!(output.contains(r#"data-index="0">⏮"#));
        assert!(output.contains(r#"data-index="0">◀"#));
        assert!(output.contains("<span>Page 2 of 3</span>"));
        assert!(output.contains(r#"data-index="2">▶"#));
        assert!(output.contains(r#"data-index="2">⏭"#));
        assert!(output.contains(EMPTY_LABEL));
    }

    #[test]
    fn test_escapes_content_and_theme() {
        let mut options = TableOptions::new(["name"]);
        options.theme = Some("dark\"".into());
        let renderer = MarkupRenderer::new(options);
        let record = Record::new().set("name", "<b>Tom & Jerry</b>");
        let output = renderer.render(&view(vec![record], 0, 1));

        assert!(output.starts_with(r#"<div class="datatable__wrapper" data-theme="dark&quot;">"#));
        assert!(output.contains("<span>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</span>"));
    }
}
