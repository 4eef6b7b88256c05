use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object, ObjectId};
use std::collections::HashSet;

fn page_ids(doc: &LopdfDocument) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// Every string shown with `Tj` on a page, in paint order, decoded from WinAnsi
pub fn page_strings(doc: &LopdfDocument, page_index: usize) -> Vec<String> {
    let Some(page_id) = page_ids(doc).get(page_index).copied() else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| match operand {
            Object::String(bytes, _) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

/// True when some page shows exactly `text`
pub fn page_shows(doc: &LopdfDocument, page_index: usize, text: &str) -> bool {
    page_strings(doc, page_index).iter().any(|s| s == text)
}

/// Count of operators named `operator` on a page
pub fn operator_count(doc: &LopdfDocument, page_index: usize, operator: &str) -> usize {
    let Some(page_id) = page_ids(doc).get(page_index).copied() else {
        return 0;
    };
    doc.get_page_content(page_id)
        .ok()
        .and_then(|data| Content::decode(&data).ok())
        .map(|content| content.operations.iter().filter(|op| op.operator == operator).count())
        .unwrap_or(0)
}

/// The `[width, height]` of each page's MediaBox
pub fn media_boxes(doc: &LopdfDocument) -> Vec<(f32, f32)> {
    page_ids(doc)
        .into_iter()
        .filter_map(|id| doc.get_object(id).ok()?.as_dict().ok()?.get(b"MediaBox").ok()?.as_array().ok().cloned())
        .filter_map(|array| {
            let width = array.get(2)?.as_float().ok()?;
            let height = array.get(3)?.as_float().ok()?;
            Some((width, height))
        })
        .collect()
}

/// Base font names of every font object in the PDF
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = HashSet::new();
    for object in doc.objects.values() {
        let Ok(dict) = object.as_dict() else { continue };
        let is_font = dict
            .get(b"Type")
            .and_then(Object::as_name)
            .map(|name| name == b"Font")
            .unwrap_or(false);
        if !is_font {
            continue;
        }
        if let Ok(name) = dict.get(b"BaseFont").and_then(Object::as_name) {
            fonts.insert(String::from_utf8_lossy(name).to_string());
        }
    }
    let mut fonts: Vec<_> = fonts.into_iter().collect();
    fonts.sort();
    fonts
}

/// Look up a string entry in the document information dictionary
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let dict = doc.get_object(info).ok()?.as_dict().ok()?;
    match dict.get(key.as_bytes()).ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}
