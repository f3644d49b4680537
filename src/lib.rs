//! # Initial Table
//!
//! A separate-chaining hash table that buckets names by their first letter.
//!
//! Every bucket is a singly-linked chain of [`Entry`] nodes with the newest name at
//! the head. The bucket for a name is the code point of its uppercased first letter
//! modulo the capacity; names that don't start with an ASCII letter all go to
//! bucket 0. When more than 70% of the buckets are in use the next insertion first
//! doubles the capacity and reinserts everything.
//!
//! ## Basic Usage
//!
//! ```rust
//! use initial_table::InitialTable;
//!
//! let mut table = InitialTable::new();
//! for name in ["Wallis", "Willow", "Will", "Wendy", "Wynona", "Zoe", "Ann"] {
//!     table.add(name);
//! }
//!
//! assert!(table.exists("Zoe"));
//! assert_eq!(table.len(), 7);
//!
//! // Removing hands back the unlinked entry
//! let removed = table.remove("Zoe");
//! assert_eq!(removed.as_ref().map(|entry| entry.name()), Some("Zoe"));
//! assert!(!table.exists("Zoe"));
//! assert_eq!(table.len(), 6);
//!
//! // All "W" names share one chain, newest first
//! let chain: Vec<&str> = table.chain(table.bucket_index("Will")).collect();
//! assert_eq!(chain, ["Wynona", "Wendy", "Will", "Willow", "Wallis"]);
//!
//! println!("{table}");
//! ```
//!
//! ## Resizing
//!
//! ```rust
//! use initial_table::InitialTable;
//!
//! let mut table = InitialTable::with_capacity(2);
//! table.add("A");
//! table.add("B");
//! // Both buckets are used, so this insertion grows the table first
//! table.add("C");
//! assert_eq!(table.capacity(), 4);
//! ```

/// Module with construction options for the table
mod config;
/// Module with the chain node type
mod entry;
/// Module with the crate error type
mod errors;
/// Module implementing the chained table itself
mod initial_table;
/// Utility functions and traits for the table
mod utils;

pub use config::{
    DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, DEFAULT_LOAD_FACTOR_THRESHOLD, TableOptions,
};
pub use entry::{Chain, Entry};
pub use errors::TableError;
pub use initial_table::{EMPTY_MESSAGE, InitialTable, NEXT_DELIMITER};
pub use utils::{TableExtensions, from_names};
