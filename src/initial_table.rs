use std::{fmt, mem};

use log::{debug, trace};

use crate::{
    TableError,
    config::TableOptions,
    entry::{Chain, Entry},
};

/// Report text for a table without entries
pub const EMPTY_MESSAGE: &str = "The table is empty.";

/// Separator placed between names of one bucket in the report
pub const NEXT_DELIMITER: &str = " --> ";

/// A separate-chaining hash table that buckets names by their first letter.
///
/// A name whose first character uppercases to `A`..=`Z` lands in bucket
/// `code point % capacity`; every other name (empty, digits, punctuation, non-ASCII
/// letters) lands in bucket 0. Each bucket holds a singly-linked chain with the most
/// recently added name at its head. Duplicate names are kept as separate entries.
///
/// The table doubles its capacity at the start of an insertion whenever more than 70%
/// of its buckets are in use. It never shrinks.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug)]
pub struct InitialTable {
    /// Chain heads, one slot per bucket
    buckets: Vec<Option<Box<Entry>>>,
    /// Number of non-empty buckets
    used_buckets: usize,
    /// Number of entries across all chains
    count: usize,
    /// Used-bucket percentage that must be exceeded before resizing
    load_factor_threshold: usize,
    /// Capacity multiplier applied on resize
    growth_factor: usize,
}

impl Default for InitialTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> Extend<S> for InitialTable {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for name in iter {
            self.add(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for InitialTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Allocates `capacity` empty chain slots
fn empty_buckets(capacity: usize) -> Vec<Option<Box<Entry>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl InitialTable {
    /// Creates a table with 26 buckets, one per letter
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(TableOptions::new())
    }

    /// Creates a table with `capacity` buckets, raising 0 to 1
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_options(TableOptions::new().capacity(capacity.max(1)))
    }

    /// Creates a table with exactly `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] when `capacity` is 0.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TableError> {
        Self::with_options(TableOptions::new().capacity(capacity))
    }

    /// Creates a table from custom options.
    ///
    /// # Errors
    ///
    /// Returns whatever [`TableOptions::validate`] rejects.
    pub fn with_options(options: TableOptions) -> Result<Self, TableError> {
        options.validate().map(Self::from_options)
    }

    /// Builds the table from options that are known to be valid
    fn from_options(options: TableOptions) -> Self {
        Self {
            buckets: empty_buckets(options.capacity),
            used_buckets: 0,
            count: 0,
            load_factor_threshold: options.load_factor_threshold,
            growth_factor: options.growth_factor,
        }
    }

    /// Computes the bucket for `name` at the current capacity.
    ///
    /// Only the first character matters, compared case-insensitively. Anything that
    /// does not uppercase to an ASCII letter maps to bucket 0, so those names all
    /// share one chain regardless of capacity.
    #[must_use]
    pub fn bucket_index(&self, name: &str) -> usize {
        let Some(initial) = name.chars().next().and_then(|c| c.to_uppercase().next()) else {
            return 0;
        };
        match u8::try_from(initial) {
            Ok(code) if code.is_ascii_uppercase() => {
                usize::from(code).checked_rem(self.capacity()).unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Returns true once more than the threshold share of buckets is in use
    #[must_use]
    pub fn exceeds_threshold(&self) -> bool {
        self.used_buckets.saturating_mul(100) >
            self.load_factor_threshold.saturating_mul(self.capacity())
    }

    /// Adds `name` at the head of its bucket's chain.
    ///
    /// The load factor is checked before the bucket is computed, so an insertion that
    /// finds the table over the threshold first grows it and then lands in the grown
    /// table. Duplicates are allowed.
    pub fn add(&mut self, name: impl Into<String>) {
        self.insert_entry(Box::new(Entry::new(name)));
    }

    /// Links an entry into the table, resizing first when needed
    fn insert_entry(&mut self, mut entry: Box<Entry>) {
        if self.exceeds_threshold() {
            self.rehash();
        }

        let room = self.bucket_index(entry.name());
        trace!("adding {:?} to bucket {room}", entry.name());

        let Some(slot) = self.buckets.get_mut(room) else {
            return; // bucket_index is always below capacity
        };
        let head = slot.take();
        if head.is_none() {
            self.used_buckets = self.used_buckets.saturating_add(1);
        }
        entry.set_next(head);
        *slot = Some(entry);
        self.count = self.count.saturating_add(1);
    }

    /// Grows the bucket array and reinserts every entry.
    ///
    /// Old buckets are walked in index order and each chain head to tail, so every
    /// chain comes out reversed relative to its old order. Reinsertion goes through
    /// the normal insert path, which may grow the table again if the new capacity is
    /// still too small for the spread of initials.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(self.growth_factor);
        debug!("rehashing {} entries from {old_capacity} to {new_capacity} buckets", self.count);

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.used_buckets = 0;
        self.count = 0;

        for mut chain in old_buckets {
            while let Some(mut entry) = chain {
                chain = entry.take_next();
                self.insert_entry(entry);
            }
        }
    }

    /// Returns true if some entry's name equals `name` exactly (case-sensitive)
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.chain(self.bucket_index(name)).any(|candidate| candidate == name)
    }

    /// Removes every entry named `name` from its bucket.
    ///
    /// The whole chain is scanned. When several entries match, all of them are
    /// unlinked and the one found last (the oldest) is returned. Returns `None` when
    /// nothing matched.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        let room = self.bucket_index(name);
        let slot = self.buckets.get_mut(room)?;
        let was_used = slot.is_some();

        let mut removed = None;
        let mut removed_count: usize = 0;
        let mut cursor = &mut *slot;
        loop {
            let matched = match cursor.as_deref() {
                Some(entry) => entry.name() == name,
                None => break,
            };
            if matched {
                if let Some(mut entry) = cursor.take() {
                    *cursor = entry.take_next();
                    removed = Some(entry);
                    removed_count = removed_count.saturating_add(1);
                }
            } else {
                match cursor.as_mut() {
                    Some(entry) => cursor = entry.next_slot(),
                    None => break,
                }
            }
        }

        if was_used && slot.is_none() {
            self.used_buckets = self.used_buckets.saturating_sub(1);
        }
        self.count = self.count.saturating_sub(removed_count);
        trace!("removed {removed_count} entries named {name:?} from bucket {room}");

        removed.map(|entry| *entry)
    }

    /// Iterates over the names in bucket `index`, head to tail.
    ///
    /// An out-of-range index yields nothing.
    #[must_use]
    pub fn chain(&self, index: usize) -> Chain<'_> {
        Chain::new(self.buckets.get(index).and_then(Option::as_deref))
    }

    /// Iterates over all names, bucket by bucket, each chain head to tail
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().flat_map(|slot| Chain::new(slot.as_deref()))
    }

    /// Drops every entry while keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        self.used_buckets = 0;
        self.count = 0;
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of non-empty buckets
    #[must_use]
    pub fn used_buckets(&self) -> usize {
        self.used_buckets
    }

    /// Returns the share of buckets in use
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.used_buckets as f64 / self.capacity() as f64
    }
}

impl fmt::Display for InitialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_MESSAGE);
        }

        let count = self.count;
        let load_factor = self.load_factor();
        writeln!(f, "There are {count} guest(s) in the table.")?;
        writeln!(
            f,
            "The table has a capacity of {} buckets and is using {} bucket(s).",
            self.capacity(),
            self.used_buckets
        )?;
        write!(f, "The load factor is {load_factor:.2}. The {count} guest(s) are:")?;

        for (index, slot) in self.buckets.iter().enumerate() {
            let Some(head) = slot.as_deref() else {
                continue;
            };
            write!(f, "\n\tBucket {index:02}: ")?;
            for (position, name) in Chain::new(Some(head)).enumerate() {
                if position > 0 {
                    f.write_str(NEXT_DELIMITER)?;
                }
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}
