//! Entry filtering
//!
//! Selects the plea entries that belong in a given email. Matching is exact
//! string equality: case-sensitive and without trimming.

use super::entry::PleaEntry;

/// Exact-match filter over the tag columns of a plea entry
///
/// An unset field matches any value. All set fields must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryFilter<'a> {
    /// Required animal type
    pub animal_type: Option<&'a str>,
    /// Required placement status
    pub status: Option<&'a str>,
    /// Required feeding notes tag
    pub feeding_notes: Option<&'a str>,
}

impl<'a> EntryFilter<'a> {
    /// Filter requiring all three tag columns to match
    ///
    /// # Examples
    ///
    /// ```
    /// use foster_plea::plea::{EntryFilter, PleaEntry};
    ///
    /// let filter = EntryFilter::exact("Neonatal Orphan", "Foster Plea", "SG");
    /// let entry = PleaEntry {
    ///     animal_type: "Neonatal Orphan".to_string(),
    ///     status: "Foster Plea".to_string(),
    ///     feeding_notes: "SG".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(filter.matches(&entry));
    /// ```
    pub const fn exact(animal_type: &'a str, status: &'a str, feeding_notes: &'a str) -> Self {
        Self {
            animal_type: Some(animal_type),
            status: Some(status),
            feeding_notes: Some(feeding_notes),
        }
    }

    /// Check whether an entry satisfies every configured field
    ///
    /// # Returns
    ///
    /// Returns true if every set field equals the entry's value exactly
    pub fn matches(&self, entry: &PleaEntry) -> bool {
        if let Some(animal_type) = self.animal_type {
            if entry.animal_type != animal_type {
                return false;
            }
        }

        if let Some(status) = self.status {
            if entry.status != status {
                return false;
            }
        }

        if let Some(feeding_notes) = self.feeding_notes {
            if entry.feeding_notes != feeding_notes {
                return false;
            }
        }

        true
    }

    /// Matching entries, in their original order
    ///
    /// # Arguments
    ///
    /// * `entries` - Entries to filter
    ///
    /// # Returns
    ///
    /// Clones of the entries that match, as an order-preserving
    /// subsequence of `entries`. Applying the filter again to the result
    /// returns it unchanged.
    pub fn apply(&self, entries: &[PleaEntry]) -> Vec<PleaEntry> {
        filter_entries(entries, |entry| self.matches(entry))
    }

    /// Get filter summary for logging
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if let Some(animal_type) = self.animal_type {
            parts.push(format!("type={}", animal_type));
        }

        if let Some(status) = self.status {
            parts.push(format!("status={}", status));
        }

        if let Some(feeding_notes) = self.feeding_notes {
            parts.push(format!("feeding={}", feeding_notes));
        }

        if parts.is_empty() {
            "no filters (all entries)".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Keep the entries satisfying `predicate`, preserving order
pub fn filter_entries<F>(entries: &[PleaEntry], predicate: F) -> Vec<PleaEntry>
where
    F: Fn(&PleaEntry) -> bool,
{
    entries
        .iter()
        .filter(|entry| predicate(entry))
        .cloned()
        .collect()
}
