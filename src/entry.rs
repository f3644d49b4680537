use std::fmt;

/// A single name stored in a bucket chain.
///
/// Each entry exclusively owns the rest of its chain through `next`, so a chain is
/// a plain singly-linked list of boxes hanging off one bucket slot.
pub struct Entry {
    /// The stored name, never changed after creation
    name: String,
    /// The following entry in the same bucket, if any
    next: Option<Box<Entry>>,
}

impl Entry {
    /// Creates an entry with no successor.
    ///
    /// The name is stored as-is: empty or non-alphabetic names are accepted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), next: None }
    }

    /// Returns the stored name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the next entry in the chain
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Replaces the link to the next entry, returning the previous one.
    ///
    /// No check is made that `next` is not already linked elsewhere; ownership
    /// makes that impossible for boxed entries anyway.
    pub fn set_next(&mut self, next: Option<Box<Self>>) -> Option<Box<Self>> {
        std::mem::replace(&mut self.next, next)
    }

    /// Detaches and returns the rest of the chain
    pub fn take_next(&mut self) -> Option<Box<Self>> {
        self.next.take()
    }

    /// Mutable access to the link slot, used to walk a chain while unlinking
    pub(crate) fn next_slot(&mut self) -> &mut Option<Box<Self>> {
        &mut self.next
    }

    /// Consumes the entry, dropping its link and returning the name
    #[must_use]
    pub fn into_name(mut self) -> String {
        drop(self.next.take());
        std::mem::take(&mut self.name)
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        // Unlink iteratively so a long chain doesn't recurse once per entry
        let mut next = self.next.take();
        while let Some(mut entry) = next {
            next = entry.next.take();
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Iterator over the names of a chain, head to tail
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    /// The entry that will be yielded next
    current: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    /// Starts iterating at `head`
    pub(crate) fn new(head: Option<&'a Entry>) -> Self {
        Self { current: head }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        self.current = entry.next();
        Some(entry.name())
    }
}
