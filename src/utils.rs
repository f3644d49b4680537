//! Utility functions and traits for `InitialTable`

use crate::InitialTable;

/// Extension trait providing bulk views over a table
pub trait TableExtensions {
    /// Returns every stored name as an owned Vec, in bucket then chain order
    fn names(&self) -> Vec<String>;

    /// Returns the chain length of every bucket, indexed by bucket
    fn chain_lengths(&self) -> Vec<usize>;

    /// Returns true if every name in `names` is present
    fn contains_all<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl TableExtensions for InitialTable {
    fn names(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    fn chain_lengths(&self) -> Vec<usize> {
        (0..self.capacity()).map(|index| self.chain(index).count()).collect()
    }

    fn contains_all<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().all(|name| self.exists(name.as_ref()))
    }
}

/// Creates a default `InitialTable` holding `names`, added in order
pub fn from_names<I, S>(names: I) -> InitialTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = InitialTable::new();
    table.extend(names);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names() {
        let table = from_names(["Ann", "Bob", "Ann"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.capacity(), 26);
        assert!(table.contains_all(["Ann", "Bob"]));
        assert!(!table.contains_all(["Ann", "Cat"]));
    }

    #[test]
    fn test_names() {
        let table = from_names(["Zoe", "Ann", "Amy"]);
        // Z maps to 12, A to 13
        assert_eq!(table.names(), vec!["Zoe".to_string(), "Amy".to_string(), "Ann".to_string()]);
    }

    #[test]
    fn test_chain_lengths() {
        let table = from_names(["Will", "Wendy", "Zoe", "42"]);
        let lengths = table.chain_lengths();
        assert_eq!(lengths.len(), 26);
        assert_eq!(lengths.first(), Some(&1));
        assert_eq!(lengths.get(9), Some(&2));
        assert_eq!(lengths.get(12), Some(&1));
        assert_eq!(lengths.iter().sum::<usize>(), table.len());
    }
}
