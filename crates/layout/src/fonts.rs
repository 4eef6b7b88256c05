//! Font faces and the role-based font library used for text measurement.
//!
//! Two kinds of face are supported:
//! - **Built-in** Standard-14 faces, measured from compiled-in AFM advance widths.
//!   The PDF viewer supplies the glyphs, so nothing is embedded.
//! - **TrueType** faces loaded from bytes, measured with `ttf-parser` and
//!   embedded into the document by the renderer.

use crate::encoding::win_ansi_byte;
use almanac_traits::{FontError, FontMetrics, FontRole};
use almanac_types::FontUnits;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Advance widths for ASCII 32..=126 of Helvetica-Bold, from the Adobe AFM.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Advance widths for ASCII 32..=126 of Helvetica, from the Adobe AFM.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Advance widths for WinAnsi 0x80..=0xFF of Helvetica-Bold. Unassigned codes are 0.
const HELVETICA_BOLD_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Advance widths for WinAnsi 0x80..=0xFF of Helvetica. Unassigned codes are 0.
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Width used for characters WinAnsi cannot encode.
const FALLBACK_WIDTH: u16 = 556;

/// A Standard-14 face the PDF viewer is required to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    HelveticaBold,
    Helvetica,
}

impl StandardFont {
    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Helvetica => "Helvetica",
        }
    }

    fn widths(self) -> (&'static [u16; 95], &'static [u16; 128]) {
        match self {
            StandardFont::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_HIGH_WIDTHS),
            StandardFont::Helvetica => (&HELVETICA_WIDTHS, &HELVETICA_HIGH_WIDTHS),
        }
    }

    /// Width of the WinAnsi glyph the renderer writes for `ch`.
    fn advance(self, ch: char) -> FontUnits {
        let (low, high) = self.widths();
        let width = match win_ansi_byte(ch) {
            Some(code @ 0x20..=0x7E) => low[(code - 0x20) as usize],
            Some(code @ 0x80..=0xFF) => high[(code - 0x80) as usize],
            _ => FALLBACK_WIDTH,
        };
        FontUnits(width as f32)
    }
}

impl FromStr for StandardFont {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "helvetica-bold" => Ok(StandardFont::HelveticaBold),
            "helvetica" => Ok(StandardFont::Helvetica),
            _ => Err(FontError::UnknownBuiltin(s.to_string())),
        }
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

/// Vertical metrics a PDF font descriptor needs, in 1/1000 em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub bbox: [f32; 4],
    pub italic_angle: f32,
}

/// A parsed TrueType face that owns its font program.
///
/// `ttf_parser::Face` borrows the data, so a face view is re-created on demand
/// instead of being stored alongside the bytes.
#[derive(Clone)]
pub struct TrueTypeFace {
    postscript_name: String,
    data: Arc<Vec<u8>>,
    units_per_em: u16,
    descriptor: DescriptorMetrics,
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl TrueTypeFace {
    /// Parses a TrueType font program. `label` names the source in errors and
    /// serves as the PostScript name when the font does not carry one.
    pub fn from_bytes(data: Vec<u8>, label: &str) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::ParseFailed {
            name: label.to_string(),
            message: e.to_string(),
        })?;

        let units_per_em = face.units_per_em();
        let scale = |value: i16| FontUnits::from_design(value as f32, units_per_em).value();
        let bbox = face.global_bounding_box();
        let descriptor = DescriptorMetrics {
            ascent: scale(face.ascender()),
            descent: scale(face.descender()),
            cap_height: scale(face.capital_height().unwrap_or(face.ascender())),
            bbox: [
                scale(bbox.x_min),
                scale(bbox.y_min),
                scale(bbox.x_max),
                scale(bbox.y_max),
            ],
            italic_angle: face.italic_angle(),
        };

        let postscript_name = extract_postscript_name(&face).unwrap_or_else(|| sanitize_name(label));
        log::debug!(
            "Parsed TrueType font '{}' ({} units/em, {} glyphs)",
            postscript_name,
            units_per_em,
            face.number_of_glyphs()
        );

        Ok(Self {
            postscript_name,
            data: Arc::new(data),
            units_per_em,
            descriptor,
        })
    }

    /// The raw font program, for embedding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn descriptor(&self) -> DescriptorMetrics {
        self.descriptor
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }

    fn advance_in(&self, face: &ttf_parser::Face<'_>, ch: char) -> FontUnits {
        let advance = face
            .glyph_index(ch)
            .or_else(|| {
                log::warn!(
                    "Glyph for {:?} missing from '{}', measuring .notdef",
                    ch,
                    self.postscript_name
                );
                Some(ttf_parser::GlyphId(0))
            })
            .and_then(|glyph| face.glyph_hor_advance(glyph))
            .unwrap_or(0);
        FontUnits::from_design(advance as f32, self.units_per_em)
    }
}

fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
        .find_map(|n| n.to_string())
        .map(|name| sanitize_name(&name))
        .filter(|name| !name.is_empty())
}

/// PDF names may not contain whitespace or delimiters.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%#".contains(*c))
        .collect()
}

impl FontMetrics for TrueTypeFace {
    fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    fn char_width(&self, ch: char) -> FontUnits {
        match self.face() {
            Some(face) => self.advance_in(&face, ch),
            None => FontUnits::ZERO,
        }
    }

    fn string_width(&self, text: &str) -> FontUnits {
        match self.face() {
            Some(face) => text.chars().map(|ch| self.advance_in(&face, ch)).sum(),
            None => FontUnits::ZERO,
        }
    }
}

/// A measurable face, either built in or loaded from a TrueType program.
#[derive(Debug, Clone)]
pub enum FontFace {
    Builtin(StandardFont),
    TrueType(TrueTypeFace),
}

impl FontMetrics for FontFace {
    fn postscript_name(&self) -> &str {
        match self {
            FontFace::Builtin(font) => font.postscript_name(),
            FontFace::TrueType(face) => face.postscript_name(),
        }
    }

    fn char_width(&self, ch: char) -> FontUnits {
        match self {
            FontFace::Builtin(font) => font.advance(ch),
            FontFace::TrueType(face) => face.char_width(ch),
        }
    }

    fn string_width(&self, text: &str) -> FontUnits {
        match self {
            FontFace::Builtin(font) => text.chars().map(|ch| font.advance(ch)).sum(),
            FontFace::TrueType(face) => face.string_width(text),
        }
    }
}

/// The faces assigned to each [`FontRole`].
///
/// Built once and shared by reference between layout and rendering.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    body: FontFace,
    display: FontFace,
}

impl FontLibrary {
    pub fn new(body: FontFace, display: FontFace) -> Self {
        Self { body, display }
    }

    /// Helvetica-Bold for every role.
    pub fn builtin() -> Self {
        Self::new(
            FontFace::Builtin(StandardFont::HelveticaBold),
            FontFace::Builtin(StandardFont::HelveticaBold),
        )
    }

    pub fn face(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Body => &self.body,
            FontRole::Display => &self.display,
        }
    }

    /// Iterates the roles with their faces, body first.
    pub fn faces(&self) -> impl Iterator<Item = (FontRole, &FontFace)> {
        FontRole::ALL.into_iter().map(move |role| (role, self.face(role)))
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_types::font_units_to_points;

    #[test]
    fn test_helvetica_bold_digits() {
        let face = FontFace::Builtin(StandardFont::HelveticaBold);
        assert_eq!(face.string_width("12"), FontUnits(1112.0));
        assert_eq!(face.char_width(' '), FontUnits(278.0));
        assert_eq!(face.char_width('A'), FontUnits(722.0));
    }

    #[test]
    fn test_latin1_and_punctuation_widths() {
        let bold = FontFace::Builtin(StandardFont::HelveticaBold);
        assert_eq!(bold.char_width('í'), FontUnits(278.0));
        assert_eq!(bold.char_width('\u{2019}'), FontUnits(278.0));
        assert_eq!(bold.char_width('\u{2014}'), FontUnits(1000.0));
        assert_eq!(bold.char_width('ñ'), FontUnits(611.0));

        let regular = FontFace::Builtin(StandardFont::Helvetica);
        assert_eq!(regular.char_width('é'), FontUnits(556.0));
        assert_eq!(regular.char_width('\u{201C}'), FontUnits(333.0));
        assert_eq!(regular.char_width('ç'), FontUnits(500.0));
        assert_eq!(
            regular.string_width("D\u{ED}a"),
            FontUnits(722.0 + 278.0 + 556.0)
        );
    }

    #[test]
    fn test_unencodable_characters_use_fallback() {
        let bold = FontFace::Builtin(StandardFont::HelveticaBold);
        assert_eq!(bold.char_width('\u{65E5}'), FontUnits(FALLBACK_WIDTH as f32));
        assert_eq!(bold.char_width('\u{7F}'), FontUnits(FALLBACK_WIDTH as f32));
    }

    #[test]
    fn test_regular_and_bold_differ() {
        let bold = FontFace::Builtin(StandardFont::HelveticaBold);
        let regular = FontFace::Builtin(StandardFont::Helvetica);
        assert!(bold.string_width("Monday") > regular.string_width("Monday"));
    }

    #[test]
    fn test_non_ascii_uses_fallback_width() {
        let face = FontFace::Builtin(StandardFont::Helvetica);
        assert_eq!(face.char_width('é'), FontUnits(FALLBACK_WIDTH as f32));
    }

    #[test]
    fn test_points_at_size() {
        let face = FontFace::Builtin(StandardFont::HelveticaBold);
        let width = font_units_to_points(face.string_width("10"), 18.0);
        assert!((width - 20.016).abs() < 1e-3);
    }

    #[test]
    fn test_standard_font_from_str() {
        assert_eq!(
            "Helvetica-Bold".parse::<StandardFont>().unwrap(),
            StandardFont::HelveticaBold
        );
        assert_eq!("helvetica".parse::<StandardFont>().unwrap(), StandardFont::Helvetica);
        assert!(matches!(
            "Comic Sans".parse::<StandardFont>(),
            Err(FontError::UnknownBuiltin(_))
        ));
    }

    #[test]
    fn test_invalid_truetype_data() {
        let err = TrueTypeFace::from_bytes(b"not a font".to_vec(), "broken.ttf").unwrap_err();
        match err {
            FontError::ParseFailed { name, .. } => assert_eq!(name, "broken.ttf"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("My Font (Bold)"), "MyFontBold");
    }

    #[test]
    fn test_library_roles() {
        let library = FontLibrary::new(
            FontFace::Builtin(StandardFont::Helvetica),
            FontFace::Builtin(StandardFont::HelveticaBold),
        );
        assert_eq!(library.face(FontRole::Body).postscript_name(), "Helvetica");
        assert_eq!(library.face(FontRole::Display).postscript_name(), "Helvetica-Bold");
        assert_eq!(library.faces().count(), 2);
    }
}
