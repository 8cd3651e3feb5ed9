//! Renderers turning a table view into output.
//!
//! Rendering is a pure function of the view and the table options; the
//! table state never touches the output surface.

mod markup;
mod text;

pub use markup::MarkupRenderer;
pub use text::TextRenderer;

use std::rc::Rc;

use clap::ValueEnum;
use datatable_lib::TableView;
use datatable_lib::options::TableOptions;

/// Label shown instead of rows when the view is empty.
pub const EMPTY_LABEL: &str = "No records";

/// Output formats offered on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Text,
    /// HTML-style markup with data attributes.
    Markup,
}

/// Draws a table view.
pub trait Renderer {
    fn render(&self, view: &TableView) -> String;
}

/// Creates the renderer for a format.
pub fn renderer_for(format: OutputFormat, options: TableOptions) -> Rc<dyn Renderer> {
    match format {
        OutputFormat::Text => Rc::new(TextRenderer::new(options)),
        OutputFormat::Markup => Rc::new(MarkupRenderer::new(options)),
    }
}

/// Footer label, e.g. `Page 2 of 5`.
pub fn page_label(view: &TableView) -> String {
    format!(
        "Page {} of {}",
        view.summary.current_page_number, view.summary.total_pages
    )
}
