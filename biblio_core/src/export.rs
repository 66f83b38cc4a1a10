//! Loan history export.
//!
//! Writes the open loans as CSV or as JSON Lines, either to any writer or
//! to a file whose extension picks the format.

use crate::{Loan, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for history export
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    JsonLines,
}

impl ExportFormat {
    /// Pick a format from a file extension (`.json`/`.jsonl` or CSV)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") | Some("jsonl") => ExportFormat::JsonLines,
            _ => ExportFormat::Csv,
        }
    }
}

/// One exported loan; both formats share these field names
#[derive(Debug, serde::Serialize)]
struct ExportRow<'a> {
    loan_id: String,
    user_id: &'a str,
    book_code: &'a str,
    start_date: String,
    due_date: String,
}

impl<'a> From<&'a Loan> for ExportRow<'a> {
    fn from(loan: &'a Loan) -> Self {
        ExportRow {
            loan_id: loan.id.to_string(),
            user_id: &loan.user_id,
            book_code: &loan.book_code,
            start_date: loan.start.to_string(),
            due_date: loan.due.to_string(),
        }
    }
}

/// Write loans to `writer` in the given format, returning the row count
pub fn write_history<'a, W, I>(loans: I, format: ExportFormat, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Loan>,
{
    let mut count = 0;
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for loan in loans {
                writer.serialize(ExportRow::from(loan))?;
                count += 1;
            }
            // Header row still goes out for an empty ledger
            if count == 0 {
                writer.write_record(["loan_id", "user_id", "book_code", "start_date", "due_date"])?;
            }
            writer.flush()?;
        }
        ExportFormat::JsonLines => {
            let mut writer = writer;
            for loan in loans {
                let line = serde_json::to_string(&ExportRow::from(loan))?;
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                count += 1;
            }
            writer.flush()?;
        }
    }
    Ok(count)
}

/// Export loans to a file, creating parent directories as needed
pub fn export_history_to<'a, I>(path: &Path, loans: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Loan>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let format = ExportFormat::from_path(path);
    let file = File::create(path)?;
    let count = write_history(loans, format, BufWriter::new(file))?;

    tracing::info!("Exported {} loans to {:?} as {:?}", count, path, format);
    Ok(count)
}
