use crate::error::CalendarError;
use almanac_layout::{FontLibrary, LayoutConfig, MonthGridLayout, PageCanvas};
use almanac_render_core::DocumentRenderer;
use almanac_render_lopdf::LopdfRenderer;
use almanac_source::AnnotationStore;
use almanac_types::YearMonth;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A year's calendar, ready to lay out and serialize.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    year: i32,
    months: Vec<YearMonth>,
    annotations: AnnotationStore,
    fonts: FontLibrary,
    layout: LayoutConfig,
}

impl CalendarDocument {
    pub(super) fn new(
        year: i32,
        months: Vec<YearMonth>,
        annotations: AnnotationStore,
        fonts: FontLibrary,
        layout: LayoutConfig,
    ) -> Self {
        Self {
            year,
            months,
            annotations,
            fonts,
            layout,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Lays out every month, January first.
    pub fn pages(&self) -> Result<Vec<PageCanvas>, CalendarError> {
        let layout = MonthGridLayout::new(self.layout, &self.fonts)?;
        Ok(self.lay_out(&layout))
    }

    #[cfg(not(feature = "parallel"))]
    fn lay_out(&self, layout: &MonthGridLayout<'_>) -> Vec<PageCanvas> {
        self.months
            .iter()
            .map(|month| layout.render(*month, &self.annotations))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn lay_out(&self, layout: &MonthGridLayout<'_>) -> Vec<PageCanvas> {
        use rayon::prelude::*;

        self.months
            .par_iter()
            .map(|month| layout.render(*month, &self.annotations))
            .collect()
    }

    /// Builds the complete PDF in memory.
    pub fn render_to_bytes(&self) -> Result<Vec<u8>, CalendarError> {
        let pages = self.pages()?;

        let mut renderer: Box<dyn DocumentRenderer<Vec<u8>>> = Box::new(
            LopdfRenderer::<Vec<u8>>::new(&self.fonts)?.with_title(format!("Calendar {}", self.year)),
        );
        renderer.begin_document(Vec::new())?;
        for (month, page) in self.months.iter().zip(&pages) {
            log::debug!("Rendering page for {}", month);
            renderer.render_page(page)?;
        }
        log::info!("Rendered {} pages for {}", renderer.page_count(), self.year);
        Ok(renderer.finish()?)
    }

    /// Writes the PDF to `path`, replacing it only once the whole document is
    /// on disk. Nothing is left behind on failure.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CalendarError> {
        let path = path.as_ref();
        let bytes = self.render_to_bytes()?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staging = NamedTempFile::new_in(directory)?;
        staging.write_all(&bytes)?;
        // The staging file is created owner-only; match the file it replaces.
        let permissions = match fs::metadata(path) {
            Ok(existing) => existing.permissions(),
            Err(_) => output_permissions(staging.as_file())?,
        };
        staging.as_file().set_permissions(permissions)?;
        staging.as_file().sync_all()?;
        staging.persist(path).map_err(|e| CalendarError::Io(e.error))?;

        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Permissions for a freshly created output file.
#[cfg(unix)]
fn output_permissions(_staging: &fs::File) -> std::io::Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn output_permissions(staging: &fs::File) -> std::io::Result<fs::Permissions> {
    Ok(staging.metadata()?.permissions())
}
