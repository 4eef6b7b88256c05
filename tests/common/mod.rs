pub mod fixtures;
pub mod pdf_assertions;

use almanac::{CalendarBuilder, CalendarError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Build and render a calendar from a configured builder
pub fn generate_pdf(builder: CalendarBuilder) -> Result<GeneratedPdf, CalendarError> {
    let bytes = builder.build()?.render_to_bytes()?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| CalendarError::Config(e.to_string()))
}
