// 📦 Inventory - Stock valuation and status rollups
//
// Rollups read the authored `total_value` and `status` of each item.

use crate::entities::inventory_item::{InventoryItem, StockStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub item_count: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_value: f64,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub overstock: usize,
    pub by_category: Vec<CategoryValue>,
}

impl InventorySummary {
    pub fn summary(&self) -> String {
        format!(
            "{} items worth ${:.2}: {} low, {} out, {} over",
            self.item_count, self.total_value, self.low_stock, self.out_of_stock, self.overstock
        )
    }
}

/// Search/filter controls of the inventory table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryFilter {
    pub category: Option<String>,
    pub status: Option<StockStatus>,

    /// Case-insensitive substring of name or supplier
    pub search: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(category) = &self.category {
            if !item.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && !item.name.to_lowercase().contains(&needle)
                && !item.supplier.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}

pub fn summarize(items: &[InventoryItem]) -> InventorySummary {
    let count = |status: StockStatus| items.iter().filter(|i| i.status == status).count();

    let mut categories: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for item in items {
        let entry = categories.entry(item.category.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += item.total_value;
    }

    InventorySummary {
        item_count: items.len(),
        total_value: items.iter().fold(0.0, |acc, i| acc + i.total_value),
        in_stock: count(StockStatus::InStock),
        low_stock: count(StockStatus::LowStock),
        out_of_stock: count(StockStatus::OutOfStock),
        overstock: count(StockStatus::Overstock),
        by_category: categories
            .into_iter()
            .map(|(category, (item_count, total_value))| CategoryValue {
                category: category.to_string(),
                item_count,
                total_value,
            })
            .collect(),
    }
}

pub fn filter<'a>(items: &'a [InventoryItem], filter: &InventoryFilter) -> Vec<&'a InventoryItem> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

/// Items whose status tag calls for reordering, lowest stock first
pub fn needs_reorder(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut picked: Vec<&InventoryItem> = items.iter().filter(|i| i.status.needs_reorder()).collect();
    picked.sort_by(|a, b| a.current_stock.total_cmp(&b.current_stock));
    picked
}

/// Items whose tag disagrees with their thresholds
pub fn status_mismatches(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|i| i.status_disagrees()).collect()
}

pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut names: Vec<String> = items.iter().map(|i| i.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}
