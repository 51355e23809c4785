//! Spreadsheet file source backed by calamine
//!
//! Opens xlsx, xlsm, xls or ods workbooks. The worksheet is read once, when
//! the source is opened; later reads work from that snapshot.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::Timelike;

use super::RowSource;
use crate::error::{FosterPleaError, Result};

/// One worksheet of a spreadsheet file
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    sheet_name: String,
    range: Range<Data>,
}

impl WorkbookSource {
    /// Open a workbook and load a worksheet
    ///
    /// When `sheet_name` is `None` the first worksheet is used.
    ///
    /// # Errors
    ///
    /// Returns [`FosterPleaError::Retrieval`] if the file cannot be opened,
    /// the workbook has no sheets, or the named sheet cannot be read
    pub fn open(path: impl AsRef<Path>, sheet_name: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            FosterPleaError::Retrieval(format!("failed to open {}: {}", path.display(), e))
        })?;

        let sheet_name = match sheet_name {
            Some(name) => name.to_string(),
            None => workbook.sheet_names().first().cloned().ok_or_else(|| {
                FosterPleaError::Retrieval(format!("{} has no worksheets", path.display()))
            })?,
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            FosterPleaError::Retrieval(format!(
                "failed to read sheet '{}' of {}: {}",
                sheet_name,
                path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %path.display(),
            sheet = %sheet_name,
            "Opened workbook"
        );

        Ok(Self {
            path: path.to_path_buf(),
            sheet_name,
            range,
        })
    }

    /// Path the workbook was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the worksheet being read
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl RowSource for WorkbookSource {
    fn max_rows(&self) -> Result<usize> {
        // end() is an absolute position, so blank leading rows are counted
        Ok(self
            .range
            .end()
            .map(|(row, _)| row as usize + 1)
            .unwrap_or(0))
    }

    fn read_range(&self, rows: usize, columns: usize) -> Result<Vec<Vec<String>>> {
        Ok((0..rows)
            .map(|r| {
                (0..columns)
                    .map(|c| {
                        self.range
                            .get_value((r as u32, c as u32))
                            .map(cell_to_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect())
    }
}

/// Display text of a cell
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => excel_datetime_to_string(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Calendar form of a date cell
///
/// Dates at midnight print as `YYYY-MM-DD`, others as
/// `YYYY-MM-DD HH:MM:SS`. Durations and serials outside chrono's range keep
/// the raw serial number.
fn excel_datetime_to_string(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.to_string();
    }

    match dt.as_datetime() {
        Some(datetime) if datetime.time().num_seconds_from_midnight() == 0 => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.to_string(),
    }
}
