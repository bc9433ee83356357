//! Embedded file payloads attached to insights.
//!
//! The page bootstrap builds one [`FileStore`] from the catalog and hands it
//! to the views; nothing mutates it afterwards.

use std::collections::HashMap;

use serde::Deserialize;

/// A single embedded file. `data` carries verbatim text for plain files and
/// a base64 workbook payload when `spreadsheet` is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub spreadsheet: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStore {
    spreadsheet_mode: bool,
    files: HashMap<String, FileRecord>,
}

impl FileStore {
    pub fn new(spreadsheet_mode: bool, records: Vec<FileRecord>) -> Self {
        let files = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self {
            spreadsheet_mode,
            files,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    /// Stored content for `name`, verbatim. Absent files read as empty.
    pub fn raw_content(&self, name: &str) -> &str {
        self.get(name)
            .map(|record| record.data.as_str())
            .unwrap_or("")
    }

    /// True when the page is in spreadsheet mode and `name` is flagged as a
    /// workbook payload. Absent files are never flagged.
    pub fn requires_decoding(&self, name: &str) -> bool {
        self.spreadsheet_mode
            && self
                .get(name)
                .map(|record| record.spreadsheet)
                .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, data: &str, spreadsheet: bool) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            data: data.to_string(),
            spreadsheet,
        }
    }

    #[test]
    fn raw_content_returns_stored_text() {
        let store = FileStore::new(false, vec![record("notes.txt", "hello", false)]);
        assert_eq!(store.raw_content("notes.txt"), "hello");
    }

    #[test]
    fn absent_files_read_as_empty() {
        let store = FileStore::new(false, Vec::new());
        assert_eq!(store.raw_content("ghost.txt"), "");
        assert!(!store.requires_decoding("ghost.txt"));
    }

    #[test]
    fn decoding_requires_both_the_mode_and_the_flag() {
        let flagged = record("sheet.xlsx", "AAAA", true);
        let plain = record("notes.txt", "hello", false);

        let store = FileStore::new(true, vec![flagged.clone(), plain.clone()]);
        assert!(store.requires_decoding("sheet.xlsx"));
        assert!(!store.requires_decoding("notes.txt"));

        let mode_off = FileStore::new(false, vec![flagged, plain]);
        assert!(!mode_off.requires_decoding("sheet.xlsx"));
    }
}
