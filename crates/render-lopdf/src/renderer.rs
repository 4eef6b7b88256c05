use crate::helpers;
use almanac_layout::encoding::win_ansi_char;
use almanac_layout::{FontFace, FontLibrary, PageCanvas, TrueTypeFace};
use almanac_render_core::utils::font_resource_name;
use almanac_render_core::{DocumentRenderer, RenderError};
use almanac_traits::FontMetrics;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;
use std::io::Write;

/// Flags for a non-symbolic font with Latin text.
const NONSYMBOLIC_FLAG: i64 = 1 << 5;

/// An in-memory PDF renderer using the `lopdf` library.
///
/// Pages accumulate in a `Document`; nothing reaches the writer until
/// [`DocumentRenderer::finish`].
pub struct LopdfRenderer<W: Write + Send> {
    writer: Option<W>,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    title: Option<String>,
}

impl<W: Write + Send> LopdfRenderer<W> {
    /// Creates a renderer whose pages can use every font in `fonts`.
    pub fn new(fonts: &FontLibrary) -> Result<Self, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        // Roles sharing a face share one font object.
        let mut embedded: HashMap<String, ObjectId> = HashMap::new();
        let mut font_dict = Dictionary::new();
        for (role, face) in fonts.faces() {
            let name = face.postscript_name().to_string();
            let font_id = match embedded.get(&name) {
                Some(id) => *id,
                None => {
                    let id = match face {
                        FontFace::Builtin(font) => document.add_object(dictionary! {
                            "Type" => "Font",
                            "Subtype" => "Type1",
                            "BaseFont" => font.postscript_name(),
                            "Encoding" => "WinAnsiEncoding",
                        }),
                        FontFace::TrueType(face) => embed_truetype(&mut document, face)?,
                    };
                    embedded.insert(name, id);
                    id
                }
            };
            font_dict.set(font_resource_name(role), Object::Reference(font_id));
        }

        let resources_id = document.add_object(dictionary! {
            "Font" => font_dict,
        });

        Ok(Self {
            writer: None,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            title: None,
        })
    }

    /// Sets the document title recorded in the info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Embeds a TrueType program with a WinAnsi width table covering codes 32..=255.
fn embed_truetype(document: &mut Document, face: &TrueTypeFace) -> Result<ObjectId, RenderError> {
    let name = face.postscript_name().to_string();
    let data = face.data().to_vec();
    if data.is_empty() {
        return Err(RenderError::FontEmbedding {
            name,
            message: "font program is empty".into(),
        });
    }

    let length = data.len() as i64;
    let file_id = document.add_object(Stream::new(dictionary! { "Length1" => length }, data));

    let metrics = face.descriptor();
    let descriptor_id = document.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => Object::Name(name.as_bytes().to_vec()),
        "Flags" => NONSYMBOLIC_FLAG,
        "FontBBox" => metrics.bbox.iter().map(|v| Object::from(*v)).collect::<Vec<_>>(),
        "ItalicAngle" => metrics.italic_angle,
        "Ascent" => metrics.ascent,
        "Descent" => metrics.descent,
        "CapHeight" => metrics.cap_height,
        "StemV" => 80,
        "FontFile2" => file_id,
    });

    let widths: Vec<Object> = (32u8..=255)
        .map(|code| {
            let width = win_ansi_char(code)
                .map(|ch| face.char_width(ch).value().round() as i64)
                .unwrap_or(0);
            Object::Integer(width)
        })
        .collect();

    log::debug!("Embedding TrueType font '{}' ({} bytes)", name, length);
    Ok(document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => Object::Name(name.as_bytes().to_vec()),
        "FirstChar" => 32,
        "LastChar" => 255,
        "Widths" => widths,
        "Encoding" => "WinAnsiEncoding",
        "FontDescriptor" => descriptor_id,
    }))
}

impl<W: Write + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::Other("Document already started".into()));
        }
        self.writer = Some(writer);
        Ok(())
    }

    fn render_page(&mut self, page: &PageCanvas) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        let content = helpers::canvas_to_content(page)?;
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let size = page.size();
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document not started or already finished".into()))?;

        let kids: Vec<Object> = renderer.page_ids.iter().copied().map(Object::Reference).collect();
        let count = kids.len() as i64;
        renderer.document.objects.insert(
            renderer.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = renderer.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => renderer.pages_id,
        });
        renderer.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal("almanac"),
        };
        if let Some(title) = &renderer.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        let info_id = renderer.document.add_object(info);
        renderer.document.trailer.set("Info", info_id);

        renderer.document.save_to(&mut writer)?;
        log::debug!("Serialized PDF with {} pages", count);
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_layout::{Color, DrawOp, Rect, Size, StandardFont};

    fn page() -> PageCanvas {
        let mut canvas = PageCanvas::new(Size::new(810.0, 810.0));
        canvas.push(DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 810.0, 810.0),
            color: Color::rgb(227, 248, 240),
        });
        canvas
    }

    fn render(fonts: &FontLibrary, pages: usize) -> Vec<u8> {
        let mut renderer: Box<dyn DocumentRenderer<Vec<u8>>> =
            Box::new(LopdfRenderer::new(fonts).unwrap().with_title("Calendar 2026"));
        renderer.begin_document(Vec::new()).unwrap();
        for _ in 0..pages {
            renderer.render_page(&page()).unwrap();
        }
        assert_eq!(renderer.page_count(), pages);
        renderer.finish().unwrap()
    }

    #[test]
    fn test_renders_loadable_pdf() {
        let bytes = render(&FontLibrary::builtin(), 3);
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    fn base_fonts(bytes: &[u8]) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        let mut names: Vec<String> = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter(|dict| {
                dict.get(b"Type")
                    .and_then(|t| t.as_name())
                    .map(|n| n == b"Font")
                    .unwrap_or(false)
            })
            .filter_map(|dict| dict.get(b"BaseFont").ok())
            .filter_map(|name| name.as_name().ok())
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_shared_builtin_face_is_written_once() {
        let bytes = render(&FontLibrary::builtin(), 1);
        assert_eq!(base_fonts(&bytes), vec!["Helvetica-Bold"]);
    }

    #[test]
    fn test_distinct_builtin_faces() {
        let fonts = FontLibrary::new(
            FontFace::Builtin(StandardFont::HelveticaBold),
            FontFace::Builtin(StandardFont::Helvetica),
        );
        let bytes = render(&fonts, 1);
        assert_eq!(base_fonts(&bytes), vec!["Helvetica", "Helvetica-Bold"]);
    }

    #[test]
    fn test_render_before_begin_fails() {
        let mut renderer = LopdfRenderer::<Vec<u8>>::new(&FontLibrary::builtin()).unwrap();
        assert!(renderer.render_page(&page()).is_err());
    }

    #[test]
    fn test_finish_without_begin_fails() {
        let renderer: Box<dyn DocumentRenderer<Vec<u8>>> =
            Box::new(LopdfRenderer::new(&FontLibrary::builtin()).unwrap());
        assert!(renderer.finish().is_err());
    }
}
