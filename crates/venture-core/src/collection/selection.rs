//! Multi-select toggles.

use serde::{Deserialize, Serialize};

/// An ordered set of selected keys, toggled one at a time.
///
/// Keeps the order in which keys were first selected so that results read
/// back the way the user picked them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    selected: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `key`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        match self.selected.iter().position(|existing| existing == key) {
            Some(index) => {
                self.selected.remove(index);
                false
            }
            None => {
                self.selected.push(key.to_string());
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.selected.iter().any(|existing| existing == key)
    }

    pub fn values(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert!(set.toggle("fintech"));
        assert!(set.toggle("climate"));
        assert!(!set.toggle("fintech"));
        assert_eq!(set.values(), &["climate".to_string()]);
        assert!(set.toggle("fintech"));
        assert_eq!(set.values(), &["climate".to_string(), "fintech".to_string()]);
    }
}
