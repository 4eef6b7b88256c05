use std::io::Write;
use tempfile::NamedTempFile;

/// A small annotation file covering quoting, trailing commas and stacked labels
pub fn holidays_csv() -> &'static str {
    concat!(
        "2026.01.01,New Year's Day\n",
        "\"2026.07.04,Independence Day\",\n",
        "2026.12.24,Christmas Eve\\nOffice closed\n",
        "\n",
        "2026.12.25,Christmas Day\n",
    )
}

/// Write `contents` to a temporary file that lives as long as the handle
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// A JSON configuration selecting the basic layout
#[allow(dead_code)]
pub fn basic_config_json(annotations: &str, output: &str) -> String {
    serde_json::json!({
        "year": 2026,
        "annotations_path": annotations,
        "output_path": output,
        "variant": "basic",
    })
    .to_string()
}
