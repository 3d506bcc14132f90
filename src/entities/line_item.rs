// 🧾 Financial Line Items - Statement rows with nested sub-accounts
//
// A parent's `total` is an authored constant. It is never recomputed from
// its children; `children_discrepancy` exposes the gap instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// LINE ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub total: f64,

    /// Amount per period label (e.g., "Jan" → 310000.0)
    #[serde(default)]
    pub periods: BTreeMap<String, f64>,

    /// Sub-accounts, same shape, arbitrarily deep
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LineItem>,
}

/// A flattened row produced by walking the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRow<'a> {
    pub depth: usize,
    /// Names from the root section down to this row
    pub path: Vec<&'a str>,
    pub item: &'a LineItem,
}

impl LineItem {
    pub fn new(name: &str, total: f64, periods: &[(&str, f64)]) -> Self {
        LineItem {
            name: name.to_string(),
            total,
            periods: periods
                .iter()
                .map(|(label, amount)| (label.to_string(), *amount))
                .collect(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<LineItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Amount booked for a period label (0 when the period is absent)
    pub fn amount_for(&self, period: &str) -> f64 {
        self.periods.get(period).copied().unwrap_or(0.0)
    }

    /// Sum of the direct children's authored totals
    pub fn children_total(&self) -> f64 {
        self.children.iter().fold(0.0, |acc, c| acc + c.total)
    }

    /// Authored total minus the sum of children (0 for leaves)
    pub fn children_discrepancy(&self) -> f64 {
        if self.is_leaf() {
            return 0.0;
        }
        self.total - self.children_total()
    }

    /// Find a descendant by its name path, starting below this item
    pub fn find(&self, path: &[&str]) -> Option<&LineItem> {
        let (first, rest) = path.split_first()?;
        let child = self.children.iter().find(|c| c.name == *first)?;
        if rest.is_empty() {
            Some(child)
        } else {
            child.find(rest)
        }
    }

    /// Depth-first rows for this item and every descendant
    pub fn walk(&self) -> Vec<LineRow<'_>> {
        let mut rows = Vec::new();
        self.walk_into(0, Vec::new(), &mut |_: &[&str]| true, &mut rows);
        rows
    }

    /// Depth-first rows, descending only where `expand` says so
    pub fn walk_filtered<'a, F>(&'a self, expand: &mut F) -> Vec<LineRow<'a>>
    where
        F: FnMut(&[&str]) -> bool,
    {
        let mut rows = Vec::new();
        self.walk_into(0, Vec::new(), expand, &mut rows);
        rows
    }

    fn walk_into<'a, F>(
        &'a self,
        depth: usize,
        mut path: Vec<&'a str>,
        expand: &mut F,
        rows: &mut Vec<LineRow<'a>>,
    ) where
        F: FnMut(&[&str]) -> bool,
    {
        path.push(&self.name);
        let descend = !self.is_leaf() && expand(&path);
        rows.push(LineRow {
            depth,
            path: path.clone(),
            item: self,
        });

        if descend {
            for child in &self.children {
                child.walk_into(depth + 1, path.clone(), expand, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beverages() -> LineItem {
        LineItem::new("Beverage Sales", 100.0, &[("Jan", 40.0), ("Feb", 60.0)]).with_children(vec![
            LineItem::new("Beer", 30.0, &[]),
            LineItem::new("Wine", 45.0, &[]).with_children(vec![
                LineItem::new("Red", 25.0, &[]),
                LineItem::new("White", 20.0, &[]),
            ]),
            LineItem::new("Cocktails", 20.0, &[]),
        ])
    }

    #[test]
    fn test_total_is_not_recomputed() {
        let item = beverages();

        assert_eq!(item.total, 100.0);
        assert_eq!(item.children_total(), 95.0);
        assert_eq!(item.children_discrepancy(), 5.0);
        assert_eq!(item.find(&["Beer"]).unwrap().children_discrepancy(), 0.0);
    }

    #[test]
    fn test_amount_for_period() {
        let item = beverages();

        assert_eq!(item.amount_for("Feb"), 60.0);
        assert_eq!(item.amount_for("Dec"), 0.0);
    }

    #[test]
    fn test_find_nested() {
        let item = beverages();

        assert_eq!(item.find(&["Wine", "Red"]).unwrap().total, 25.0);
        assert!(item.find(&["Wine", "Rosé"]).is_none());
        assert!(item.find(&[]).is_none());
    }

    #[test]
    fn test_walk_depth_first() {
        let item = beverages();
        let names: Vec<(&str, usize)> = item
            .walk()
            .iter()
            .map(|r| (r.item.name.as_str(), r.depth))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Beverage Sales", 0),
                ("Beer", 1),
                ("Wine", 1),
                ("Red", 2),
                ("White", 2),
                ("Cocktails", 1),
            ]
        );
        assert_eq!(item.walk()[3].path, vec!["Beverage Sales", "Wine", "Red"]);
    }

    #[test]
    fn test_walk_filtered_collapsed() {
        let item = beverages();
        let rows = item.walk_filtered(&mut |path: &[&str]| path.len() == 1);

        // Root expanded, Wine collapsed
        assert_eq!(rows.len(), 4);
    }
}
