//! Run configuration: a JSON file whose values the command line can override.

use crate::error::CalendarError;
use almanac_layout::{FontFace, FontLibrary, LayoutConfig, StandardFont, TrueTypeFace};
use almanac_types::Color;
use serde::Deserialize;
use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Annotation file read when none is configured.
pub const DEFAULT_ANNOTATIONS_PATH: &str = "dates.csv";
/// Output written when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "calendar.pdf";

/// The two calendar layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Tinted page, fixed six-row grid.
    Basic,
    /// Weekday header, week-count aware rows and neighbouring mini-months.
    #[default]
    Advanced,
}

impl Variant {
    pub fn layout_config(self) -> LayoutConfig {
        match self {
            Variant::Basic => LayoutConfig::basic(),
            Variant::Advanced => LayoutConfig::advanced(),
        }
    }
}

/// Where a font role's face comes from.
///
/// Parses from `builtin`, a Standard-14 name such as `Helvetica`, or a path
/// to a TrueType file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FontSource {
    Builtin(StandardFont),
    File(PathBuf),
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::Builtin(StandardFont::HelveticaBold)
    }
}

impl FromStr for FontSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("builtin") {
            return Ok(FontSource::default());
        }
        Ok(match s.parse::<StandardFont>() {
            Ok(font) => FontSource::Builtin(font),
            Err(_) => FontSource::File(PathBuf::from(s)),
        })
    }
}

impl From<String> for FontSource {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

impl FontSource {
    /// Loads the face. An unreadable file is a missing resource; a readable
    /// one that does not parse is a font error.
    pub fn load(&self) -> Result<FontFace, CalendarError> {
        match self {
            FontSource::Builtin(font) => Ok(FontFace::Builtin(*font)),
            FontSource::File(path) => {
                let data = fs::read(path).map_err(|source| CalendarError::MissingResource {
                    path: path.clone(),
                    source,
                })?;
                let face = TrueTypeFace::from_bytes(data, &path.display().to_string())?;
                log::info!("Loaded font {}", path.display());
                Ok(FontFace::TrueType(face))
            }
        }
    }
}

/// Optional palette replacements, as `#RRGGBB` strings or `{r, g, b}` maps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    pub background: Option<Color>,
    pub weekday_fill: Option<Color>,
    pub weekend_fill: Option<Color>,
    pub cell_stroke: Option<Color>,
    pub header_fill: Option<Color>,
    pub header_text: Option<Color>,
    pub text: Option<Color>,
    pub title: Option<Color>,
    pub mini_month: Option<Color>,
}

/// Optional switches applied on top of the variant's preset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOverrides {
    pub show_background: Option<bool>,
    pub week_count_adjustment: Option<bool>,
    pub show_mini_months: Option<bool>,
    pub show_weekday_header: Option<bool>,
    pub palette: PaletteOverrides,
}

impl LayoutOverrides {
    pub fn apply(&self, config: &mut LayoutConfig) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut config.show_background, self.show_background);
        set(&mut config.week_count_adjustment, self.week_count_adjustment);
        set(&mut config.show_mini_months, self.show_mini_months);
        set(&mut config.show_weekday_header, self.show_weekday_header);

        let p = &self.palette;
        let palette = &mut config.palette;
        set(&mut palette.background, p.background);
        set(&mut palette.weekday_fill, p.weekday_fill);
        set(&mut palette.weekend_fill, p.weekend_fill);
        set(&mut palette.cell_stroke, p.cell_stroke);
        set(&mut palette.header_fill, p.header_fill);
        set(&mut palette.header_text, p.header_text);
        set(&mut palette.text, p.text);
        set(&mut palette.title, p.title);
        set(&mut palette.mini_month, p.mini_month);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Defaults to the current year.
    pub year: Option<i32>,
    /// `None` reads [`DEFAULT_ANNOTATIONS_PATH`] if it exists.
    pub annotations_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub font: FontSource,
    pub display_font: FontSource,
    pub variant: Variant,
    pub layout: LayoutOverrides,
}

impl AppConfig {
    pub fn from_json(source: &str) -> Result<Self, CalendarError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CalendarError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CalendarError::MissingResource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// The variant preset with the configured overrides applied.
    pub fn layout_config(&self) -> LayoutConfig {
        let mut config = self.variant.layout_config();
        self.layout.apply(&mut config);
        config
    }

    pub fn font_library(&self) -> Result<FontLibrary, CalendarError> {
        Ok(FontLibrary::new(self.font.load()?, self.display_font.load()?))
    }
}
