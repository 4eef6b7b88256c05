use super::document::CalendarDocument;
use crate::config::{AppConfig, DEFAULT_ANNOTATIONS_PATH};
use crate::error::CalendarError;
use almanac_layout::{FontLibrary, LayoutConfig};
use almanac_source::AnnotationStore;
use almanac_types::YearMonth;
use std::path::{Path, PathBuf};

/// A builder for creating a `CalendarDocument`.
///
/// Annotations load eagerly in `with_annotations_file`, so a malformed file
/// fails before any page is laid out.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    year: i32,
    annotations: AnnotationStore,
    fonts: FontLibrary,
    layout: LayoutConfig,
}

impl CalendarBuilder {
    /// Creates a builder with no annotations, built-in fonts and the advanced layout.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            annotations: AnnotationStore::new(),
            fonts: FontLibrary::builtin(),
            layout: LayoutConfig::advanced(),
        }
    }

    /// Builds everything an [`AppConfig`] describes, loading its files.
    pub fn from_config(config: &AppConfig, year: i32) -> Result<Self, CalendarError> {
        let builder = Self::new(year)
            .with_fonts(config.font_library()?)
            .with_layout(config.layout_config());

        match &config.annotations_path {
            Some(path) => builder.with_annotations_file(path),
            None => builder.with_optional_annotations_file(DEFAULT_ANNOTATIONS_PATH),
        }
    }

    pub fn with_annotations(mut self, annotations: AnnotationStore) -> Self {
        self.annotations = annotations;
        self
    }

    /// Loads annotations from a file that must exist.
    pub fn with_annotations_file<P: AsRef<Path>>(self, path: P) -> Result<Self, CalendarError> {
        let annotations = AnnotationStore::from_path(path)?;
        Ok(self.with_annotations(annotations))
    }

    /// Loads annotations from a file if it exists; a missing file leaves the
    /// calendar unannotated.
    pub fn with_optional_annotations_file<P: AsRef<Path>>(self, path: P) -> Result<Self, CalendarError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        if path.exists() {
            self.with_annotations_file(path)
        } else {
            log::warn!("No annotation file at {}, rendering without labels", path.display());
            Ok(self)
        }
    }

    pub fn with_fonts(mut self, fonts: FontLibrary) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Validates the year and layout and creates the `CalendarDocument`.
    pub fn build(self) -> Result<CalendarDocument, CalendarError> {
        let months = YearMonth::months_of(self.year)?;
        self.layout.validate()?;
        Ok(CalendarDocument::new(
            self.year,
            months,
            self.annotations,
            self.fonts,
            self.layout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_year_is_a_config_error() {
        let err = CalendarBuilder::new(0).build().unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
    }

    #[test]
    fn invalid_layout_is_a_config_error() {
        let mut layout = LayoutConfig::basic();
        layout.geometry.height = -1.0;
        let err = CalendarBuilder::new(2026).with_layout(layout).build().unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
    }

    #[test]
    fn required_annotation_file_must_exist() {
        let err = CalendarBuilder::new(2026)
            .with_annotations_file("/no/such/dates.csv")
            .unwrap_err();
        assert!(matches!(err, CalendarError::MissingResource { .. }));
    }

    #[test]
    fn optional_annotation_file_may_be_missing() {
        let builder = CalendarBuilder::new(2026)
            .with_optional_annotations_file("/no/such/dates.csv")
            .unwrap();
        assert!(builder.annotations.is_empty());
    }
}
