//! Intake sheet access and row extraction
//!
//! A [`RowSource`] exposes a rectangular block of text cells starting at the
//! top-left of a sheet. [`extract_entries`] turns that block into
//! [`PleaEntry`] records, dropping rows that are not real entries.
//!
//! # Modules
//!
//! - [`workbook`]: spreadsheet files (xlsx, xls, ods) through calamine
//! - [`memory`]: rows held in memory

pub mod memory;
pub mod workbook;

pub use memory::MemorySource;
pub use workbook::WorkbookSource;

use crate::error::Result;
use crate::plea::{PleaEntry, TOTAL_COLUMNS};

/// Tabular data source for plea rows
pub trait RowSource {
    /// Number of rows the source reports, counting from the first row
    fn max_rows(&self) -> Result<usize>;

    /// Read `rows` rows of `columns` cells each, starting at the first row
    /// and first column
    ///
    /// Every returned row has exactly `columns` cells; blank cells are empty
    /// strings.
    fn read_range(&self, rows: usize, columns: usize) -> Result<Vec<Vec<String>>>;
}

/// Read every row of the source and build plea entries
///
/// Rows with an empty animal type or status are skipped without error.
/// Source order is preserved.
///
/// # Errors
///
/// Returns the source's retrieval error unchanged
///
/// # Examples
///
/// ```
/// use foster_plea::sheet::{extract_entries, MemorySource};
///
/// let source = MemorySource::from_rows(&[
///     &["Neonatal Orphan", "Foster Plea", "Biscuit"],
///     &["", "", ""],
/// ]);
/// let entries = extract_entries(&source).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].name, "Biscuit");
/// ```
pub fn extract_entries(source: &dyn RowSource) -> Result<Vec<PleaEntry>> {
    let max_rows = source.max_rows()?;
    let rows = source.read_range(max_rows, TOTAL_COLUMNS)?;

    let entries: Vec<PleaEntry> = rows
        .iter()
        .map(|row| PleaEntry::from_row(row))
        .filter(PleaEntry::is_complete)
        .collect();

    tracing::debug!(
        rows = rows.len(),
        entries = entries.len(),
        skipped = rows.len() - entries.len(),
        "Extracted plea entries"
    );

    Ok(entries)
}
