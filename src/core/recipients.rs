//! Recipient list extraction from uploaded spreadsheets
//!
//! The first column of the first worksheet holds one phone number per row.
//! Acceptance is all-or-nothing: if any row fails to yield a number the whole
//! upload is rejected.

use crate::utils::error::{PortalError, Result};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use serde::Serialize;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

pub const PARSE_ERROR_MESSAGE: &str = "Failed to read file, make sure it is a valid spreadsheet";
pub const INVALID_ROWS_MESSAGE: &str =
    "The spreadsheet contains empty or invalid rows. Please fix the file.";

/// Phone numbers accepted from one uploaded file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientList {
    file_name: String,
    numbers: Vec<String>,
    preview: Vec<String>,
}

impl RecipientList {
    pub fn new<S: Into<String>>(file_name: S, numbers: Vec<String>, preview_size: usize) -> Self {
        let preview = numbers.iter().take(preview_size).cloned().collect();
        Self {
            file_name: file_name.into(),
            numbers,
            preview,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// First few numbers, for display
    pub fn preview(&self) -> &[String] {
        &self.preview
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Read and parse a spreadsheet from disk
pub async fn parse_recipient_file<P: AsRef<Path>>(
    path: P,
    preview_size: usize,
) -> Result<RecipientList> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!("Could not read recipient file {:?}: {}", path, e);
        PortalError::parse(PARSE_ERROR_MESSAGE)
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_recipient_bytes(file_name, bytes, preview_size)
}

/// Parse an in-memory spreadsheet (xls, xlsx, xlsb or ods)
pub fn parse_recipient_bytes<S: Into<String>>(
    file_name: S,
    bytes: Vec<u8>,
    preview_size: usize,
) -> Result<RecipientList> {
    let file_name = file_name.into();
    debug!("Parsing recipient file {} ({} bytes)", file_name, bytes.len());

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| {
        warn!("Recipient file {} is not a spreadsheet: {}", file_name, e);
        PortalError::parse(PARSE_ERROR_MESSAGE)
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            warn!("Recipient file {} has no worksheet", file_name);
            PortalError::parse(PARSE_ERROR_MESSAGE)
        })?
        .map_err(|e| {
            warn!("Failed to read first worksheet of {}: {}", file_name, e);
            PortalError::parse(PARSE_ERROR_MESSAGE)
        })?;

    let numbers = extract_recipients(&range)?;
    info!(
        "Accepted {} recipients from {}",
        numbers.len(),
        file_name
    );

    Ok(RecipientList::new(file_name, numbers, preview_size))
}

/// Take the first cell of every row; fail if any row has no usable value
pub fn extract_recipients(range: &Range<Data>) -> Result<Vec<String>> {
    let mut row_count = 0usize;
    let numbers: Vec<String> = range
        .rows()
        .inspect(|_| row_count += 1)
        .filter_map(|row| row.first().and_then(cell_text))
        .collect();

    if numbers.len() != row_count {
        warn!(
            "Rejecting spreadsheet: {} of {} rows yielded a number",
            numbers.len(),
            row_count
        );
        return Err(PortalError::validation(INVALID_ROWS_MESSAGE));
    }

    Ok(numbers)
}

/// Trimmed string form of a cell, `None` when blank or an error value
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}
