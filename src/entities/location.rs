// 🍽️ Location Entity - Restaurant records with per-timeframe figures
//
// Every granularity is an independently authored number: weekly is NOT
// 7 × daily, quarterly revenue is NOT 3 × monthly revenue.
// The one exception is the quarterly read of customers/labor/food, which
// has no stored field and is approximated as floor(monthly × 3).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// TIMEFRAME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl Timeframe {
    pub fn all() -> [Timeframe; 4] {
        [
            Timeframe::Daily,
            Timeframe::Weekly,
            Timeframe::Monthly,
            Timeframe::Quarterly,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Quarterly => "quarterly",
        }
    }

    /// Parse a timeframe name (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            "quarterly" => Ok(Timeframe::Quarterly),
            other => Err(format!("Unknown timeframe: {}", other)),
        }
    }
}

// ============================================================================
// OPERATING STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingStatus {
    Open,
    Renovation,
    Closed,
}

impl OperatingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingStatus::Open => "Open",
            OperatingStatus::Renovation => "Renovation",
            OperatingStatus::Closed => "Closed",
        }
    }
}

// ============================================================================
// LOCATION ENTITY
// ============================================================================

/// One restaurant and its hardcoded figures at every granularity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,

    /// Cuisine/format tag (e.g., "Fine Dining", "Café")
    pub category: String,

    pub status: OperatingStatus,

    // ========================================================================
    // REVENUE (all four granularities stored)
    // ========================================================================
    pub daily_revenue: f64,
    pub weekly_revenue: f64,
    pub monthly_revenue: f64,
    pub quarterly_revenue: f64,

    // ========================================================================
    // CUSTOMERS & COSTS (no quarterly field)
    // ========================================================================
    pub daily_customers: u64,
    pub weekly_customers: u64,
    pub monthly_customers: u64,

    pub daily_labor_cost: f64,
    pub weekly_labor_cost: f64,
    pub monthly_labor_cost: f64,

    pub daily_food_cost: f64,
    pub weekly_food_cost: f64,
    pub monthly_food_cost: f64,

    /// Average ticket size
    pub avg_order_value: f64,
}

impl Location {
    pub fn revenue_for(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::Daily => self.daily_revenue,
            Timeframe::Weekly => self.weekly_revenue,
            Timeframe::Monthly => self.monthly_revenue,
            Timeframe::Quarterly => self.quarterly_revenue,
        }
    }

    pub fn customers_for(&self, timeframe: Timeframe) -> u64 {
        match timeframe {
            Timeframe::Daily => self.daily_customers,
            Timeframe::Weekly => self.weekly_customers,
            Timeframe::Monthly => self.monthly_customers,
            Timeframe::Quarterly => self.monthly_customers * 3,
        }
    }

    pub fn labor_cost_for(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::Daily => self.daily_labor_cost,
            Timeframe::Weekly => self.weekly_labor_cost,
            Timeframe::Monthly => self.monthly_labor_cost,
            Timeframe::Quarterly => (self.monthly_labor_cost * 3.0).floor(),
        }
    }

    pub fn food_cost_for(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::Daily => self.daily_food_cost,
            Timeframe::Weekly => self.weekly_food_cost,
            Timeframe::Monthly => self.monthly_food_cost,
            Timeframe::Quarterly => (self.monthly_food_cost * 3.0).floor(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == OperatingStatus::Open
    }
}

// ============================================================================
// LOCATION REGISTRY
// ============================================================================

/// Ordered, read-only collection of locations
///
/// Built once and never mutated; order is the display order.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn from_locations(locations: Vec<Location>) -> Self {
        LocationRegistry { locations }
    }

    /// Registry pre-loaded with the four sample restaurants
    pub fn with_defaults() -> Self {
        LocationRegistry::from_locations(sample_locations())
    }

    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    pub fn ids(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.id.clone()).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Find location by name (exact match, case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        let lower_name = name.to_lowercase();
        self.locations
            .iter()
            .find(|l| l.name.to_lowercase() == lower_name)
    }

    pub fn count(&self) -> usize {
        self.locations.len()
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn location(
    id: &str,
    name: &str,
    address: &str,
    category: &str,
    status: OperatingStatus,
    revenue: [f64; 4],
    customers: [u64; 3],
    labor: [f64; 3],
    food: [f64; 3],
    avg_order_value: f64,
) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        category: category.to_string(),
        status,
        daily_revenue: revenue[0],
        weekly_revenue: revenue[1],
        monthly_revenue: revenue[2],
        quarterly_revenue: revenue[3],
        daily_customers: customers[0],
        weekly_customers: customers[1],
        monthly_customers: customers[2],
        daily_labor_cost: labor[0],
        weekly_labor_cost: labor[1],
        monthly_labor_cost: labor[2],
        daily_food_cost: food[0],
        weekly_food_cost: food[1],
        monthly_food_cost: food[2],
        avg_order_value,
    }
}

/// The four-restaurant sample set
pub fn sample_locations() -> Vec<Location> {
    vec![
        location(
            "downtown-bistro",
            "Downtown Bistro",
            "120 Market St, San Francisco, CA",
            "Casual Dining",
            OperatingStatus::Open,
            [10_800.0, 76_000.0, 325_000.0, 980_000.0],
            [420, 2_900, 12_400],
            [3_200.0, 22_500.0, 97_500.0],
            [3_300.0, 23_000.0, 100_750.0],
            26.20,
        ),
        location(
            "harbor-grill",
            "Harbor Grill",
            "48 Embarcadero, San Francisco, CA",
            "Seafood",
            OperatingStatus::Open,
            [7_700.0, 54_000.0, 232_000.0, 701_000.0],
            [280, 1_950, 8_300],
            [2_400.0, 16_800.0, 71_900.0],
            [2_450.0, 17_100.0, 74_240.0],
            27.95,
        ),
        location(
            "uptown-steakhouse",
            "Uptown Steakhouse",
            "901 Pine St, San Francisco, CA",
            "Fine Dining",
            OperatingStatus::Open,
            [13_100.0, 92_500.0, 395_000.0, 1_190_000.0],
            [310, 2_180, 9_400],
            [3_900.0, 27_400.0, 118_500.0],
            [4_300.0, 30_200.0, 130_350.0],
            42.00,
        ),
        location(
            "garden-cafe",
            "Garden Café",
            "15 Valencia St, San Francisco, CA",
            "Café",
            OperatingStatus::Renovation,
            [2_750.0, 19_400.0, 83_000.0, 247_000.0],
            [190, 1_320, 5_700],
            [880.0, 6_100.0, 26_560.0],
            [760.0, 5_350.0, 22_410.0],
            14.56,
        ),
    ]
}

// ============================================================================
// CSV INGESTION
// ============================================================================

/// Load location records from a CSV file whose headers match the field names
pub fn load_locations_csv(csv_path: &Path) -> Result<Vec<Location>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open locations CSV: {:?}", csv_path))?;

    let mut locations = Vec::new();

    for result in rdr.deserialize() {
        let location: Location = result.context("Failed to deserialize location")?;
        locations.push(location);
    }

    Ok(locations)
}

// ============================================================================
// TESTS
// ============================================================================
