use crate::error::RenderError;
use almanac_layout::PageCanvas;
use std::io::Write;

/// A trait for document renderers, abstracting the output format.
///
/// Pages are appended in call order. Fonts are fixed when the renderer is
/// constructed, so every page may reference every font role.
pub trait DocumentRenderer<W: Write + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &PageCanvas) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    /// Serializes the document into the writer passed to `begin_document`
    /// and hands the writer back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
