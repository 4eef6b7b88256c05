use crate::AnnotationError;
use almanac_types::CalendarDate;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The literal two-character escape that splits a label into stacked lines.
pub const LINE_BREAK_MARKER: &str = "\\n";

/// A read-only mapping from date to the label lines printed in that day's cell.
///
/// Built once before layout starts and shared by reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    entries: HashMap<CalendarDate, Vec<String>>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens and loads an annotation file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnnotationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AnnotationError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::load(BufReader::new(file))?;
        log::info!(
            "Loaded {} annotated dates from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Loads annotations from an in-memory source.
    pub fn parse_str(source: &str) -> Result<Self, AnnotationError> {
        Self::load(source.as_bytes())
    }

    /// Reads every record from `reader`.
    ///
    /// The first record with an unparseable date aborts the whole load.
    /// Blank lines and lines without a comma are skipped. A later record for
    /// the same date replaces the earlier one.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, AnnotationError> {
        let mut store = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let Some((date, lines)) = parse_record(&line, line_number)? else {
                continue;
            };
            if lines.is_empty() {
                log::debug!("Line {line_number}: empty label for {date}, skipping");
                continue;
            }
            if store.entries.insert(date, lines).is_some() {
                log::debug!("Line {line_number}: {date} replaces an earlier annotation");
            }
        }
        Ok(store)
    }

    /// Adds or replaces the lines for `date`.
    pub fn insert(&mut self, date: CalendarDate, lines: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(date, lines)
    }

    /// The label lines for `date`, in display order (first line on top).
    pub fn get(&self, date: &CalendarDate) -> Option<&[String]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.entries.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&CalendarDate, &[String])> {
        self.entries.iter().map(|(date, lines)| (date, lines.as_slice()))
    }
}

/// Parses one raw line. `Ok(None)` means the line carries no record.
fn parse_record(
    raw: &str,
    line_number: usize,
) -> Result<Option<(CalendarDate, Vec<String>)>, AnnotationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let cleaned = trimmed.replace('"', "");
    let cleaned = cleaned.trim_end_matches(',');

    let Some((date_token, label)) = cleaned.split_once(',') else {
        log::debug!("Line {line_number}: no separating comma, skipping");
        return Ok(None);
    };

    let date = CalendarDate::parse_dotted(date_token.trim()).map_err(|source| {
        AnnotationError::MalformedRecord {
            line: line_number,
            record: trimmed.to_string(),
            source,
        }
    })?;

    Ok(Some((date, split_label(label.trim()))))
}

/// Splits an already trimmed label into its lines, keeping blank lines.
fn split_label(label: &str) -> Vec<String> {
    if label.is_empty() {
        return Vec::new();
    }
    label.split(LINE_BREAK_MARKER).map(str::to_string).collect()
}
