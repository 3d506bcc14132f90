// 🎛️ Controls - Reducer-style state for dropdowns and expandable rows
//
// Each control is a small closed state machine; `reduce` is pure and total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// DROPDOWN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dropdown {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    Toggle,
    Open,
    Close,
    /// An option was picked; the menu closes
    Select,
    ClickOutside,
}

impl Dropdown {
    pub fn reduce(self, event: DropdownEvent) -> Dropdown {
        match (self, event) {
            (Dropdown::Closed, DropdownEvent::Toggle) => Dropdown::Open,
            (Dropdown::Open, DropdownEvent::Toggle) => Dropdown::Closed,
            (_, DropdownEvent::Open) => Dropdown::Open,
            (_, DropdownEvent::Close)
            | (_, DropdownEvent::Select)
            | (_, DropdownEvent::ClickOutside) => Dropdown::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        *self == Dropdown::Open
    }
}

// ============================================================================
// EXPANDED ROWS
// ============================================================================

/// Which financial rows show their sub-accounts, keyed by name path
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpandedRows {
    expanded: BTreeSet<String>,
}

impl ExpandedRows {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(path: &[&str]) -> String {
        path.join(" / ")
    }

    pub fn is_expanded(&self, path: &[&str]) -> bool {
        self.expanded.contains(&Self::key(path))
    }

    pub fn toggle(&mut self, path: &[&str]) {
        let key = Self::key(path);
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    pub fn expand(&mut self, path: &[&str]) {
        self.expanded.insert(Self::key(path));
    }

    /// Expand every listed path
    pub fn expand_all<'a, I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = Vec<&'a str>>,
    {
        for path in paths {
            self.expand(&path);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_transitions() {
        let d = Dropdown::default();
        assert!(!d.is_open());

        let d = d.reduce(DropdownEvent::Toggle);
        assert!(d.is_open());
        assert_eq!(d.reduce(DropdownEvent::Toggle), Dropdown::Closed);
        assert_eq!(d.reduce(DropdownEvent::Select), Dropdown::Closed);
        assert_eq!(d.reduce(DropdownEvent::ClickOutside), Dropdown::Closed);
        assert_eq!(d.reduce(DropdownEvent::Open), Dropdown::Open);
        assert_eq!(Dropdown::Closed.reduce(DropdownEvent::Close), Dropdown::Closed);
    }

    #[test]
    fn test_expanded_rows_toggle() {
        let mut rows = ExpandedRows::new();

        rows.toggle(&["Revenue"]);
        assert!(rows.is_expanded(&["Revenue"]));
        assert!(!rows.is_expanded(&["Revenue", "Beverage Sales"]));

        rows.toggle(&["Revenue"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_expand_all_and_collapse() {
        let mut rows = ExpandedRows::new();
        rows.expand_all(vec![vec!["Revenue"], vec!["Revenue", "Beverage Sales"]]);

        assert_eq!(rows.len(), 2);
        rows.collapse_all();
        assert!(rows.is_empty());
    }
}
