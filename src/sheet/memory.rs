//! In-memory row source

use super::RowSource;
use crate::error::Result;

/// Rows held in memory, read as if they were the top of a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    rows: Vec<Vec<String>>,
}

impl MemorySource {
    /// Create a source from owned rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create a source from string slices
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }
}

impl RowSource for MemorySource {
    fn max_rows(&self) -> Result<usize> {
        Ok(self.rows.len())
    }

    fn read_range(&self, rows: usize, columns: usize) -> Result<Vec<Vec<String>>> {
        Ok((0..rows)
            .map(|r| {
                let row = self.rows.get(r);
                (0..columns)
                    .map(|c| row.and_then(|cells| cells.get(c)).cloned().unwrap_or_default())
                    .collect()
            })
            .collect())
    }
}
