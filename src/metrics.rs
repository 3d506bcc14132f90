// 📊 Metrics Aggregator - Dashboard rollups per timeframe and location set
//
// Formula:
//   other_expenses = 9.5% × revenue
//   net_income     = revenue − (labor + food + other_expenses)
//
// Arithmetic is permissive: nothing here returns an error. Divisions that
// have no zero guard (cost percentages, average ticket, total orders)
// propagate NaN/Infinity. Only `calculate_percentage` guards a zero total.

use crate::entities::location::{Location, Timeframe};
use crate::logging::{self, obj, v_num, v_str};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Share of revenue booked as "other" operating expenses
pub const OTHER_EXPENSE_RATE: f64 = 0.095;

/// Gross margin shown on the dashboard (fixed, not derived)
pub const GROSS_MARGIN_PCT: f64 = 68.5;

/// Operating margin shown on the dashboard (fixed, not derived)
pub const OPERATING_MARGIN_PCT: f64 = 18.2;

// ============================================================================
// DASHBOARD METRICS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub timeframe: Timeframe,
    pub location_count: usize,
    pub total_revenue: f64,
    pub total_customers: u64,
    pub labor_cost: f64,
    pub food_cost: f64,
    pub food_cost_pct: f64,
    pub labor_cost_pct: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub other_expenses: f64,
    pub net_income: f64,
    pub avg_order_value: f64,
    pub total_orders: f64,
}

impl DashboardMetrics {
    /// Prime cost = labor + food
    pub fn prime_cost(&self) -> f64 {
        self.labor_cost + self.food_cost
    }

    pub fn summary(&self) -> String {
        format!(
            "{} locations ({}): revenue ${:.2}, customers {}, labor {:.1}%, food {:.1}%, net ${:.2}",
            self.location_count,
            self.timeframe.as_str(),
            self.total_revenue,
            self.total_customers,
            self.labor_cost_pct,
            self.food_cost_pct,
            self.net_income
        )
    }
}

/// One row of the per-location breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBreakdown {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub customers: u64,
    pub revenue_share: String,
    pub labor_cost_pct: String,
    pub food_cost_pct: String,
}

/// The same selection rolled up under every timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeComparison {
    pub rows: Vec<DashboardMetrics>,
}

impl TimeframeComparison {
    pub fn get(&self, timeframe: Timeframe) -> Option<&DashboardMetrics> {
        self.rows.iter().find(|m| m.timeframe == timeframe)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Format `value / total` as a percentage with one decimal
///
/// A zero total yields the literal `"0%"`.
pub fn calculate_percentage(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Locations passing the selection; an empty subset passes everything
pub fn filter_locations<'a>(
    locations: &'a [Location],
    selection: &Selection<String>,
) -> Vec<&'a Location> {
    selection.filter(locations, |l| &l.id)
}

/// Net income after labor, food and the fixed other-expense rate
pub fn net_income(revenue: f64, labor_cost: f64, food_cost: f64) -> f64 {
    revenue - (labor_cost + food_cost + OTHER_EXPENSE_RATE * revenue)
}

/// Roll up the selected locations for one timeframe
pub fn aggregate(
    locations: &[Location],
    timeframe: Timeframe,
    selection: &Selection<String>,
) -> DashboardMetrics {
    let selected = filter_locations(locations, selection);

    let total_revenue = selected.iter().fold(0.0, |acc, l| acc + l.revenue_for(timeframe));
    let total_customers: u64 = selected.iter().map(|l| l.customers_for(timeframe)).sum();
    let labor_cost = selected.iter().fold(0.0, |acc, l| acc + l.labor_cost_for(timeframe));
    let food_cost = selected.iter().fold(0.0, |acc, l| acc + l.food_cost_for(timeframe));

    // Unguarded: an empty set gives 0/0 = NaN
    let avg_order_value =
        selected.iter().fold(0.0, |acc, l| acc + l.avg_order_value) / selected.len() as f64;

    let metrics = DashboardMetrics {
        timeframe,
        location_count: selected.len(),
        total_revenue,
        total_customers,
        labor_cost,
        food_cost,
        food_cost_pct: food_cost / total_revenue * 100.0,
        labor_cost_pct: labor_cost / total_revenue * 100.0,
        gross_margin: GROSS_MARGIN_PCT,
        operating_margin: OPERATING_MARGIN_PCT,
        other_expenses: OTHER_EXPENSE_RATE * total_revenue,
        net_income: net_income(total_revenue, labor_cost, food_cost),
        avg_order_value,
        total_orders: total_revenue / avg_order_value,
    };

    if !metrics.total_orders.is_finite() {
        logging::warn(
            "metrics",
            "total_orders_not_finite",
            obj(&[
                ("msg", v_str("average ticket is zero or undefined")),
                ("timeframe", v_str(timeframe.as_str())),
                ("avg_order_value", v_num(avg_order_value)),
            ]),
        );
    }

    logging::debug(
        "metrics",
        "aggregate",
        obj(&[
            ("timeframe", v_str(timeframe.as_str())),
            ("locations", json!(metrics.location_count)),
            ("revenue", v_num(metrics.total_revenue)),
            ("net_income", v_num(metrics.net_income)),
        ]),
    );

    metrics
}

/// Per-location table rows for the selection and timeframe
pub fn location_breakdown(
    locations: &[Location],
    timeframe: Timeframe,
    selection: &Selection<String>,
) -> Vec<LocationBreakdown> {
    let selected = filter_locations(locations, selection);
    let total_revenue = selected.iter().fold(0.0, |acc, l| acc + l.revenue_for(timeframe));

    selected
        .iter()
        .map(|l| {
            let revenue = l.revenue_for(timeframe);
            LocationBreakdown {
                id: l.id.clone(),
                name: l.name.clone(),
                revenue,
                customers: l.customers_for(timeframe),
                revenue_share: calculate_percentage(revenue, total_revenue),
                labor_cost_pct: calculate_percentage(l.labor_cost_for(timeframe), revenue),
                food_cost_pct: calculate_percentage(l.food_cost_for(timeframe), revenue),
            }
        })
        .collect()
}

/// Aggregate the selection under every timeframe
pub fn compare_timeframes(
    locations: &[Location],
    selection: &Selection<String>,
) -> TimeframeComparison {
    TimeframeComparison {
        rows: Timeframe::all()
            .iter()
            .map(|tf| aggregate(locations, *tf, selection))
            .collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
