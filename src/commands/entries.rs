//! `entries` command: list entries read from the intake workbook

use colored::Colorize;
use prettytable::{format, Table};

use super::open_sheet;
use crate::config::Config;
use crate::error::Result;
use crate::plea::{Column, PleaEntry};
use crate::scenario::neonatal_sg_entries;
use crate::sheet::extract_entries;

/// Longest cell shown in the table before truncation
const MAX_CELL_CHARS: usize = 40;

/// List entries from the configured workbook
///
/// Only the entries going on the neonatal SG plea are shown unless `all`
/// is set.
pub fn list_entries(config: &Config, all: bool, json: bool) -> Result<()> {
    let source = open_sheet(config)?;
    let entries = if all {
        extract_entries(&source)?
    } else {
        neonatal_sg_entries(&source)?
    };

    if json {
        println!("{}", entries_json(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No plea entries found.".yellow());
        return Ok(());
    }

    entries_table(&entries).printstd();
    println!("{} entries", entries.len().to_string().bold());

    Ok(())
}

/// Entries as pretty-printed JSON
pub fn entries_json(entries: &[PleaEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Entries as a table, one column per sheet column except the photo
pub fn entries_table(entries: &[PleaEntry]) -> Table {
    let columns: Vec<Column> = Column::ORDER
        .into_iter()
        .filter(|c| *c != Column::Photo)
        .collect();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(columns.iter().map(|c| c.header().bold()).collect());

    for entry in entries {
        table.add_row(
            columns
                .iter()
                .map(|c| truncate(entry.get(*c), MAX_CELL_CHARS))
                .collect(),
        );
    }

    table
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        let kept: String = value.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}
