//! Plea entries and entry filtering
//!
//! - [`entry`]: the [`PleaEntry`] record and the fixed sheet [`Column`] order
//! - [`filter`]: exact-match [`EntryFilter`] and closure-based filtering

pub mod entry;
pub mod filter;

pub use entry::{Column, PleaEntry, TOTAL_COLUMNS};
pub use filter::{filter_entries, EntryFilter};
