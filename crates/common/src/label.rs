//! The label table: symbolic names for instruction addresses.

use crate::error::LabelError;
use std::collections::HashMap;
use std::fmt;

/// Maps jump labels to instruction addresses for one loaded program.
///
/// Each name may be bound exactly once per load. Addresses are indices
/// into the program sequence; they are not range-checked here — a jump
/// that lands past the end simply halts the machine at the next fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: HashMap<String, usize>,
}

impl LabelTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `label` to `address`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Duplicate`] if `label` is already bound.
    pub fn insert(&mut self, label: &str, address: usize) -> Result<(), LabelError> {
        if self.labels.contains_key(label) {
            return Err(LabelError::Duplicate(label.to_string()));
        }
        self.labels.insert(label.to_string(), address);
        Ok(())
    }

    /// Look up the address bound to `label`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Undefined`] if `label` was never bound.
    pub fn address(&self, label: &str) -> Result<usize, LabelError> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| LabelError::Undefined(label.to_string()))
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Number of bound labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no labels are bound.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for LabelTable {
    /// Renders `[name -> address, ...]` sorted by name.
    ///
    /// The sort is for stable diagnostic output only; the table itself
    /// has no iteration-order contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.labels.iter().collect();
        entries.sort_by_key(|(name, _)| name.as_str());
        write!(f, "[")?;
        for (i, (name, address)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} -> {address}")?;
        }
        write!(f, "]")
    }
}
