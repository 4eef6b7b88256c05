mod common;

use almanac::{AppConfig, CalendarBuilder, CalendarError, FontLibrary, LayoutConfig, Variant};
use almanac_layout::{FontFace, StandardFont};
use common::fixtures::{basic_config_json, holidays_csv, temp_file};
use common::pdf_assertions::{
    extract_font_names, info_entry, media_boxes, operator_count, page_shows, page_strings,
};
use common::{generate_pdf, TestResult};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[test]
fn test_twelve_square_pages() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2026))?;
    assert_eq!(pdf.page_count(), 12);
    let boxes = media_boxes(&pdf.doc);
    assert_eq!(boxes.len(), 12);
    for (width, height) in boxes {
        assert_eq!(width, 810.0);
        assert_eq!(height, 810.0);
    }
    Ok(())
}

#[test]
fn test_month_titles_in_order() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2026).with_layout(LayoutConfig::basic()))?;
    for (index, name) in MONTHS.iter().enumerate() {
        assert!(page_shows(&pdf.doc, index, name), "page {} lacks title {}", index + 1, name);
    }
    Ok(())
}

#[test]
fn test_every_day_is_numbered() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2024).with_layout(LayoutConfig::basic()))?;
    // Leap February
    let february = page_strings(&pdf.doc, 1);
    for day in 1..=29 {
        assert!(february.contains(&day.to_string()), "missing day {}", day);
    }
    assert!(!february.contains(&"30".to_string()));
    Ok(())
}

#[test]
fn test_annotations_land_on_their_month() -> TestResult {
    let file = temp_file(holidays_csv());
    let pdf = generate_pdf(CalendarBuilder::new(2026).with_annotations_file(file.path())?)?;

    assert!(page_shows(&pdf.doc, 0, "New Year's Day"));
    assert!(page_shows(&pdf.doc, 6, "Independence Day"));
    assert!(page_shows(&pdf.doc, 11, "Christmas Eve"));
    assert!(page_shows(&pdf.doc, 11, "Office closed"));
    assert!(page_shows(&pdf.doc, 11, "Christmas Day"));
    assert!(!page_shows(&pdf.doc, 0, "Christmas Day"));
    Ok(())
}

#[test]
fn test_annotations_for_other_years_are_ignored() -> TestResult {
    let file = temp_file(holidays_csv());
    let pdf = generate_pdf(CalendarBuilder::new(2027).with_annotations_file(file.path())?)?;
    for index in 0..12 {
        assert!(!page_shows(&pdf.doc, index, "Christmas Day"));
    }
    Ok(())
}

#[test]
fn test_malformed_annotation_file_fails() {
    let file = temp_file("2026.01.01,Fine\n2026-13-01,Broken\n");
    let err = CalendarBuilder::new(2026)
        .with_annotations_file(file.path())
        .unwrap_err();
    match err {
        CalendarError::MalformedRecord { line, record, .. } => {
            assert_eq!(line, 2);
            assert!(record.contains("Broken"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_advanced_layout_has_header_and_mini_months() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2026).with_layout(LayoutConfig::advanced()))?;
    let january = page_strings(&pdf.doc, 0);
    for label in ["Sun", "Mon", "Sat"] {
        assert!(january.contains(&label.to_string()));
    }
    assert!(january.contains(&"December 2025".to_string()));
    assert!(january.contains(&"February 2026".to_string()));

    let december = page_strings(&pdf.doc, 11);
    assert!(december.contains(&"January 2027".to_string()));
    Ok(())
}

#[test]
fn test_basic_layout_has_no_header_or_mini_months() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2026).with_layout(LayoutConfig::basic()))?;
    let january = page_strings(&pdf.doc, 0);
    assert!(!january.contains(&"Sun".to_string()));
    assert!(!january.contains(&"December 2025".to_string()));
    // Background plus one rounded box per day
    assert!(operator_count(&pdf.doc, 0, "c") >= 31 * 4);
    Ok(())
}

#[test]
fn test_distinct_display_font() -> TestResult {
    let fonts = FontLibrary::new(
        FontFace::Builtin(StandardFont::Helvetica),
        FontFace::Builtin(StandardFont::HelveticaBold),
    );
    let pdf = generate_pdf(CalendarBuilder::new(2026).with_fonts(fonts))?;
    assert_eq!(
        extract_font_names(&pdf.doc),
        vec!["Helvetica".to_string(), "Helvetica-Bold".to_string()]
    );
    Ok(())
}

#[test]
fn test_document_info() -> TestResult {
    let pdf = generate_pdf(CalendarBuilder::new(2026))?;
    assert_eq!(info_entry(&pdf.doc, "Producer").as_deref(), Some("almanac"));
    assert_eq!(info_entry(&pdf.doc, "Title").as_deref(), Some("Calendar 2026"));
    Ok(())
}

#[test]
fn test_write_replaces_existing_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("calendar.pdf");
    std::fs::write(&output, b"stale")?;

    CalendarBuilder::new(2026).build()?.write_to_file(&output)?;

    let bytes = std::fs::read(&output)?;
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_new_output_is_world_readable() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let output = dir.path().join("calendar.pdf");
    CalendarBuilder::new(2026).build()?.write_to_file(&output)?;

    let mode = std::fs::metadata(&output)?.permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_overwrite_keeps_existing_permissions() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let output = dir.path().join("calendar.pdf");
    std::fs::write(&output, b"stale")?;
    std::fs::set_permissions(&output, std::fs::Permissions::from_mode(0o640))?;

    CalendarBuilder::new(2026).build()?.write_to_file(&output)?;

    let mode = std::fs::metadata(&output)?.permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    Ok(())
}

#[test]
fn test_failed_write_leaves_nothing_behind() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("missing").join("calendar.pdf");

    let result = CalendarBuilder::new(2026).build()?.write_to_file(&output);
    assert!(matches!(result, Err(CalendarError::Io(_))));
    assert!(!output.exists());
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_json_config_drives_the_pipeline() -> TestResult {
    let annotations = temp_file(holidays_csv());
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.pdf");
    let json = basic_config_json(
        &annotations.path().display().to_string(),
        &output.display().to_string(),
    );
    let config_file = temp_file(&json);

    let config = AppConfig::from_file(config_file.path())?;
    assert_eq!(config.variant, Variant::Basic);

    let year = config.year.unwrap_or(2000);
    CalendarBuilder::from_config(&config, year)?
        .build()?
        .write_to_file(config.output_path())?;

    let pdf = common::GeneratedPdf::from_bytes(std::fs::read(&output)?)?;
    assert_eq!(pdf.page_count(), 12);
    assert!(page_shows(&pdf.doc, 0, "New Year's Day"));
    assert!(!page_shows(&pdf.doc, 0, "Sun"));
    Ok(())
}

#[test]
fn test_configured_annotation_file_must_exist() {
    let config = AppConfig::from_json(r#"{"annotations_path": "/no/such/dates.csv"}"#).unwrap();
    let err = CalendarBuilder::from_config(&config, 2026).unwrap_err();
    assert!(matches!(err, CalendarError::MissingResource { .. }));
}
