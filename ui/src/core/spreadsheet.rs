//! Spreadsheet-to-CSV reflow for embedded workbook payloads.
//!
//! Workbook files arrive as base64 blobs in the page catalog. [`file_as_csv`]
//! turns them into CSV text for display: first sheet only, blank rows
//! dropped, leading junk rows trimmed by a header heuristic. Plain files pass
//! through untouched. Every failure degrades to an empty string so the page
//! keeps rendering.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use calamine::{DataType, Reader, Xlsx};
use thiserror::Error;

use super::files::FileStore;

/// Header candidates are only searched this deep; anything later is assumed
/// to be data and the sheet is kept from the top.
const HEADER_SCAN_LIMIT: usize = 25;

#[derive(Debug, Error)]
enum SheetError {
    #[error("payload is not valid base64: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("workbook rejected: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("csv serialization failed: {0}")]
    Csv(String),
}

/// Content of `name` as CSV text.
///
/// Plain files pass through verbatim (empty string when absent). Workbook
/// payloads are decoded, trimmed, and re-serialized; any failure along the
/// way is logged and collapses to an empty string, which callers must treat
/// as "no data available" rather than a valid empty file.
pub fn file_as_csv(store: &FileStore, name: &str) -> String {
    if !store.requires_decoding(name) {
        return store.raw_content(name).to_string();
    }

    match reflow_workbook(store.raw_content(name)) {
        Ok(csv) => csv,
        Err(err) => {
            tracing::error!(file = name, error = %err, "failed to reflow workbook payload");
            String::new()
        }
    }
}

fn reflow_workbook(payload: &str) -> Result<String, SheetError> {
    let rows = without_blank_rows(workbook_rows(payload)?);
    let header = header_row_index(&rows);
    serialize_rows(&rows[header..])
}

/// First sheet of the decoded workbook as row-major strings. Missing and
/// empty cells read as `""`. Multi-sheet workbooks are not supported; only
/// sheet 0 is read.
fn workbook_rows(payload: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let bytes = BASE64.decode(payload.trim())?;
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(SheetError::NoSheets)??;

    Ok(range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.as_string()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| format!("{}", cell))
                })
                .collect()
        })
        .collect())
}

fn filled_cells(row: &[String]) -> usize {
    row.iter().filter(|cell| !cell.is_empty()).count()
}

/// Keep rows with at least one non-empty cell. Stringified zeros and
/// booleans count as content; only genuinely empty cells are blank.
fn without_blank_rows(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .filter(|row| filled_cells(row) > 0)
        .collect()
}

/// First row that looks like column labels: its non-empty cell count is at
/// least the next row's. The final row has no successor and is never a
/// candidate. Candidates past [`HEADER_SCAN_LIMIT`], or no candidate at all,
/// fall back to row 0.
fn header_row_index(rows: &[Vec<String>]) -> usize {
    match rows
        .windows(2)
        .position(|pair| filled_cells(&pair[0]) >= filled_cells(&pair[1]))
    {
        Some(index) if index <= HEADER_SCAN_LIMIT => index,
        _ => 0,
    }
}

fn serialize_rows(rows: &[Vec<String>]) -> Result<String, SheetError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|err| SheetError::Csv(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| SheetError::Csv(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| SheetError::Csv(err.to_string()))
}
