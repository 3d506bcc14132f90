// 📦 Inventory Item Entity - Stock on hand with a manually assigned status
//
// `status` is authored alongside the numbers. It is NOT derived from
// current_stock vs reorder_point/max_stock; `threshold_status` only reports
// what the thresholds would say.

use serde::{Deserialize, Serialize};

// ============================================================================
// STOCK STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Overstock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Overstock => "Overstock",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "in stock" => Ok(StockStatus::InStock),
            "low stock" => Ok(StockStatus::LowStock),
            "out of stock" => Ok(StockStatus::OutOfStock),
            "overstock" => Ok(StockStatus::Overstock),
            other => Err(format!("Unknown stock status: {}", other)),
        }
    }

    /// Statuses that call for a purchase order
    pub fn needs_reorder(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

// ============================================================================
// INVENTORY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,

    /// Category tag (e.g., "Proteins", "Produce", "Beverages")
    pub category: String,

    pub current_stock: f64,
    pub unit: String,
    pub unit_cost: f64,

    /// Stored value as authored (not recomputed)
    pub total_value: f64,

    pub reorder_point: f64,
    pub max_stock: f64,
    pub supplier: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// stock × unit cost, for comparison with the stored `total_value`
    pub fn computed_value(&self) -> f64 {
        self.current_stock * self.unit_cost
    }

    /// Status implied by the thresholds
    pub fn threshold_status(&self) -> StockStatus {
        if self.current_stock <= 0.0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.reorder_point {
            StockStatus::LowStock
        } else if self.current_stock > self.max_stock {
            StockStatus::Overstock
        } else {
            StockStatus::InStock
        }
    }

    /// True when the authored tag differs from what thresholds imply
    pub fn status_disagrees(&self) -> bool {
        self.status != self.threshold_status()
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: &str,
    current_stock: f64,
    unit: &str,
    unit_cost: f64,
    total_value: f64,
    thresholds: (f64, f64),
    supplier: &str,
    status: StockStatus,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        current_stock,
        unit: unit.to_string(),
        unit_cost,
        total_value,
        reorder_point: thresholds.0,
        max_stock: thresholds.1,
        supplier: supplier.to_string(),
        status,
    }
}

/// Sample stock list
pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        item("inv-001", "Ribeye Steak", "Proteins", 85.0, "lbs", 18.50, 1_572.50, (40.0, 150.0), "Prime Meats Co.", StockStatus::InStock),
        item("inv-002", "Atlantic Salmon", "Proteins", 22.0, "lbs", 14.25, 313.50, (30.0, 100.0), "Bay Seafood Supply", StockStatus::LowStock),
        item("inv-003", "Chicken Breast", "Proteins", 120.0, "lbs", 4.80, 576.00, (50.0, 200.0), "Prime Meats Co.", StockStatus::InStock),
        item("inv-004", "Romaine Lettuce", "Produce", 0.0, "cases", 32.00, 0.00, (5.0, 25.0), "Valley Farms", StockStatus::OutOfStock),
        item("inv-005", "Heirloom Tomatoes", "Produce", 14.0, "cases", 41.00, 574.00, (6.0, 20.0), "Valley Farms", StockStatus::InStock),
        // Authored as in stock even though it sits at the reorder point
        item("inv-006", "Yukon Potatoes", "Produce", 10.0, "sacks", 22.50, 225.00, (10.0, 40.0), "Valley Farms", StockStatus::InStock),
        item("inv-007", "Arborio Rice", "Dry Goods", 260.0, "lbs", 2.10, 546.00, (50.0, 200.0), "Restaurant Depot", StockStatus::Overstock),
        item("inv-008", "All-Purpose Flour", "Dry Goods", 95.0, "lbs", 0.65, 61.75, (40.0, 250.0), "Restaurant Depot", StockStatus::InStock),
        item("inv-009", "House Cabernet", "Beverages", 18.0, "bottles", 12.00, 216.00, (24.0, 120.0), "Golden Gate Wines", StockStatus::LowStock),
        item("inv-010", "Craft IPA Keg", "Beverages", 6.0, "kegs", 165.00, 990.00, (2.0, 10.0), "Mission Brewing", StockStatus::InStock),
        item("inv-011", "Heavy Cream", "Dairy", 12.0, "quarts", 4.40, 52.80, (8.0, 30.0), "Sunrise Dairy", StockStatus::InStock),
        item("inv-012", "Parmigiano Reggiano", "Dairy", 3.0, "wheels", 310.00, 930.00, (2.0, 6.0), "Sunrise Dairy", StockStatus::InStock),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_authored_not_derived() {
        let items = sample_inventory();
        let potatoes = items.iter().find(|i| i.id == "inv-006").unwrap();

        assert_eq!(potatoes.status, StockStatus::InStock);
        assert_eq!(potatoes.threshold_status(), StockStatus::LowStock);
        assert!(potatoes.status_disagrees());
    }

    #[test]
    fn test_threshold_status_bands() {
        let items = sample_inventory();
        let by_id = |id: &str| items.iter().find(|i| i.id == id).unwrap().threshold_status();

        assert_eq!(by_id("inv-004"), StockStatus::OutOfStock);
        assert_eq!(by_id("inv-002"), StockStatus::LowStock);
        assert_eq!(by_id("inv-007"), StockStatus::Overstock);
        assert_eq!(by_id("inv-001"), StockStatus::InStock);
    }

    #[test]
    fn test_computed_value_matches_sample() {
        for item in sample_inventory() {
            assert!((item.computed_value() - item.total_value).abs() < 0.005, "{}", item.name);
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(StockStatus::parse("low_stock"), Ok(StockStatus::LowStock));
        assert_eq!(StockStatus::parse("Out of Stock"), Ok(StockStatus::OutOfStock));
        assert!(StockStatus::parse("missing").is_err());
        assert!(StockStatus::OutOfStock.needs_reorder());
        assert!(!StockStatus::Overstock.needs_reorder());
    }
}
