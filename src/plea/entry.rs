//! Plea entry record and the fixed column layout of the intake sheet

use serde::{Deserialize, Serialize};

/// Number of columns read from the intake sheet
pub const TOTAL_COLUMNS: usize = 8;

/// A column of the intake sheet, in sheet order
///
/// The sheet layout is positional. [`Column::ORDER`] is the single place
/// that ties a position to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Animal type, e.g. "Neonatal Orphan"
    AnimalType,
    /// Placement status, e.g. "Foster Plea"
    Status,
    /// Animal or litter name
    Name,
    /// Age, free text
    Age,
    /// Physical description
    PhysicalDescription,
    /// Free-text notes shown on the plea
    PleaNotes,
    /// Photo reference (usually a URL)
    Photo,
    /// Feeding notes tag, e.g. "SG"
    FeedingNotes,
}

impl Column {
    /// Columns in sheet order, A through H
    pub const ORDER: [Column; TOTAL_COLUMNS] = [
        Column::AnimalType,
        Column::Status,
        Column::Name,
        Column::Age,
        Column::PhysicalDescription,
        Column::PleaNotes,
        Column::Photo,
        Column::FeedingNotes,
    ];

    /// Zero-based position of this column in a row
    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Human-readable header used in listings
    pub fn header(self) -> &'static str {
        match self {
            Column::AnimalType => "Type",
            Column::Status => "Status",
            Column::Name => "Name",
            Column::Age => "Age",
            Column::PhysicalDescription => "Description",
            Column::PleaNotes => "Notes",
            Column::Photo => "Photo",
            Column::FeedingNotes => "Feeding",
        }
    }
}

/// One animal, or group of animals, that someone can foster
///
/// The plea email is a list of these under a heading. Entries are built
/// fresh from the sheet on every run and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PleaEntry {
    pub animal_type: String,
    pub status: String,
    pub name: String,
    pub age: String,
    pub physical_description: String,
    pub plea_notes: String,
    pub photo: String,
    pub feeding_notes: String,
}

impl PleaEntry {
    /// Build an entry from one sheet row
    ///
    /// Missing trailing cells read as empty strings and cells past
    /// [`TOTAL_COLUMNS`] are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use foster_plea::plea::PleaEntry;
    ///
    /// let row = vec!["Neonatal Orphan".to_string(), "Foster Plea".to_string()];
    /// let entry = PleaEntry::from_row(&row);
    /// assert_eq!(entry.animal_type, "Neonatal Orphan");
    /// assert_eq!(entry.feeding_notes, "");
    /// ```
    pub fn from_row(row: &[String]) -> Self {
        let cell = |column: Column| row.get(column.index()).cloned().unwrap_or_default();

        Self {
            animal_type: cell(Column::AnimalType),
            status: cell(Column::Status),
            name: cell(Column::Name),
            age: cell(Column::Age),
            physical_description: cell(Column::PhysicalDescription),
            plea_notes: cell(Column::PleaNotes),
            photo: cell(Column::Photo),
            feeding_notes: cell(Column::FeedingNotes),
        }
    }

    /// Value of a single column
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::AnimalType => &self.animal_type,
            Column::Status => &self.status,
            Column::Name => &self.name,
            Column::Age => &self.age,
            Column::PhysicalDescription => &self.physical_description,
            Column::PleaNotes => &self.plea_notes,
            Column::Photo => &self.photo,
            Column::FeedingNotes => &self.feeding_notes,
        }
    }

    /// A row is a real entry only when both type and status are filled in
    ///
    /// Header-less blank rows and the trailing empty rows of a sheet fail
    /// this check.
    pub fn is_complete(&self) -> bool {
        !self.animal_type.is_empty() && !self.status.is_empty()
    }
}
