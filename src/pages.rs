// 🧭 Pages - Route table and per-page report assembly
//
// Each route maps to one page; a page report bundles the figures that page
// derives from the dataset under the current view configuration.

use crate::config::ViewConfig;
use crate::dataset::Dataset;
use crate::entities::inventory_item::InventoryItem;
use crate::financials::{self, FinancialSummary};
use crate::inventory::{self, InventorySummary};
use crate::metrics::{self, DashboardMetrics, LocationBreakdown};
use crate::payroll::{self, PayrollSummary};
use crate::statements::{self, StatementFilter, StatementSummary};
use serde::Serialize;

// ============================================================================
// PAGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Inventory,
    Financials,
    Payroll,
    Statements,
}

impl Page {
    pub fn all() -> [Page; 5] {
        [
            Page::Dashboard,
            Page::Inventory,
            Page::Financials,
            Page::Payroll,
            Page::Statements,
        ]
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Inventory => "/inventory",
            Page::Financials => "/financials",
            Page::Payroll => "/payroll",
            Page::Statements => "/statements",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Financials => "Financials",
            Page::Payroll => "Payroll",
            Page::Statements => "Statements",
        }
    }

    /// Resolve a route (trailing slash tolerated) or a bare page name
    pub fn from_route(route: &str) -> Result<Page, String> {
        let trimmed = route.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        Page::all()
            .into_iter()
            .find(|p| {
                p.route() == normalized
                    || p.title().eq_ignore_ascii_case(normalized.trim_start_matches('/'))
            })
            .ok_or_else(|| format!("Unknown page: {}", route))
    }

    pub fn next(&self) -> Self {
        match self {
            Page::Dashboard => Page::Inventory,
            Page::Inventory => Page::Financials,
            Page::Financials => Page::Payroll,
            Page::Payroll => Page::Statements,
            Page::Statements => Page::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Dashboard => Page::Statements,
            Page::Inventory => Page::Dashboard,
            Page::Financials => Page::Inventory,
            Page::Payroll => Page::Financials,
            Page::Statements => Page::Payroll,
        }
    }
}

// ============================================================================
// PAGE REPORTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageReport {
    Dashboard {
        metrics: DashboardMetrics,
        breakdown: Vec<LocationBreakdown>,
    },
    Inventory {
        summary: InventorySummary,
        reorder: Vec<InventoryItem>,
    },
    Financials {
        title: String,
        summary: FinancialSummary,
        selected_balance: f64,
        discrepancies: Vec<(String, f64)>,
    },
    Payroll {
        summary: PayrollSummary,
    },
    Statements {
        summary: StatementSummary,
    },
}

impl PageReport {
    pub fn page(&self) -> Page {
        match self {
            PageReport::Dashboard { .. } => Page::Dashboard,
            PageReport::Inventory { .. } => Page::Inventory,
            PageReport::Financials { .. } => Page::Financials,
            PageReport::Payroll { .. } => Page::Payroll,
            PageReport::Statements { .. } => Page::Statements,
        }
    }

    /// Plain-text lines for terminal output
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} ({})", self.page().title(), self.page().route())];

        match self {
            PageReport::Dashboard { metrics, breakdown } => {
                lines.push(metrics.summary());
                lines.push(format!(
                    "  orders {:.0}, avg ticket ${:.2}, gross margin {}%, operating margin {}%",
                    metrics.total_orders,
                    metrics.avg_order_value,
                    metrics.gross_margin,
                    metrics.operating_margin
                ));
                for row in breakdown {
                    lines.push(format!(
                        "  {:<20} ${:>12.2}  share {:>6}  labor {:>6}  food {:>6}",
                        row.name, row.revenue, row.revenue_share, row.labor_cost_pct, row.food_cost_pct
                    ));
                }
            }
            PageReport::Inventory { summary, reorder } => {
                lines.push(summary.summary());
                for item in reorder {
                    lines.push(format!(
                        "  reorder {:<20} {} {} ({})",
                        item.name,
                        item.current_stock,
                        item.unit,
                        item.status.as_str()
                    ));
                }
            }
            PageReport::Financials {
                title,
                summary,
                selected_balance,
                discrepancies,
            } => {
                lines.push(title.clone());
                lines.push(format!(
                    "  revenue ${:.2}, gross profit ${:.2} ({}), net income ${:.2} ({})",
                    summary.revenue,
                    summary.gross_profit,
                    summary.gross_margin_pct,
                    summary.net_income,
                    summary.net_margin_pct
                ));
                lines.push(format!("  selected bank balance ${:.2}", selected_balance));
                for (path, gap) in discrepancies {
                    lines.push(format!("  ⚠️  {} total differs from sub-accounts by ${:.2}", path, gap));
                }
            }
            PageReport::Payroll { summary } => {
                lines.push(summary.summary());
                for dept in &summary.by_department {
                    lines.push(format!(
                        "  {:<16} {:>3} staff  ${:>12.2}",
                        dept.department, dept.headcount, dept.annual_cost
                    ));
                }
            }
            PageReport::Statements { summary } => {
                lines.push(summary.summary());
                for s in &summary.by_status {
                    lines.push(format!("  {:<11} {}", s.status.label(), s.count));
                }
            }
        }

        lines
    }
}

/// Assemble the report for one page
pub fn build_report(page: Page, data: &Dataset, config: &ViewConfig) -> PageReport {
    let location_ids = data.location_ids();
    let locations = config.location_selection(&location_ids);

    match page {
        Page::Dashboard => PageReport::Dashboard {
            metrics: metrics::aggregate(&data.locations, config.timeframe, &locations),
            breakdown: metrics::location_breakdown(&data.locations, config.timeframe, &locations),
        },
        Page::Inventory => PageReport::Inventory {
            summary: inventory::summarize(&data.inventory),
            reorder: inventory::needs_reorder(&data.inventory)
                .into_iter()
                .cloned()
                .collect(),
        },
        Page::Financials => PageReport::Financials {
            title: data.income_statement.title.clone(),
            summary: data.income_statement.summary(),
            selected_balance: financials::total_balance(
                &data.bank_accounts,
                &config.bank_account_selection(&data.bank_account_ids()),
            ),
            discrepancies: data
                .income_statement
                .discrepancies(0.005)
                .into_iter()
                .map(|(path, gap)| (path.join(" / "), gap))
                .collect(),
        },
        Page::Payroll => PageReport::Payroll {
            summary: payroll::summarize(&data.employees, &locations),
        },
        Page::Statements => PageReport::Statements {
            summary: statements::summarize(
                &data.statements,
                &StatementFilter {
                    owners: config.owner_selection(&data.owner_ids()),
                    restaurants: config.restaurant_selection(&location_ids),
                    ..Default::default()
                },
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::location::Timeframe;

    #[test]
    fn test_routes_roundtrip() {
        for page in Page::all() {
            assert_eq!(Page::from_route(page.route()), Ok(page));
        }
        assert_eq!(Page::from_route("/payroll/"), Ok(Page::Payroll));
        assert_eq!(Page::from_route("statements"), Ok(Page::Statements));
        assert!(Page::from_route("/settings").is_err());
    }

    #[test]
    fn test_page_cycle() {
        let mut page = Page::Dashboard;
        for _ in 0..5 {
            assert_eq!(page.next().previous(), page);
            page = page.next();
        }
        assert_eq!(page, Page::Dashboard);
    }

    #[test]
    fn test_dashboard_report() {
        let data = Dataset::sample();
        let report = build_report(Page::Dashboard, &data, &ViewConfig::default());

        match &report {
            PageReport::Dashboard { metrics, breakdown } => {
                assert_eq!(metrics.total_revenue, 1_035_000.0);
                assert_eq!(breakdown.len(), 4);
            }
            other => panic!("unexpected report: {:?}", other.page()),
        }
        assert_eq!(report.summary_lines()[0], "Dashboard (/)");
    }

    #[test]
    fn test_dashboard_report_respects_config() {
        let data = Dataset::sample();
        let config = ViewConfig {
            timeframe: Timeframe::Daily,
            locations: vec!["garden-cafe".to_string()],
            ..Default::default()
        };

        if let PageReport::Dashboard { metrics, .. } = build_report(Page::Dashboard, &data, &config) {
            assert_eq!(metrics.total_revenue, 2_750.0);
            assert_eq!(metrics.location_count, 1);
        } else {
            panic!("expected dashboard report");
        }
    }

    #[test]
    fn test_mistyped_location_falls_back_to_all() {
        let data = Dataset::sample();
        let config = ViewConfig {
            locations: vec!["downtwn-bistro".to_string()],
            ..Default::default()
        };

        if let PageReport::Dashboard { metrics, breakdown } = build_report(Page::Dashboard, &data, &config) {
            assert_eq!(metrics.location_count, 4);
            assert_eq!(metrics.total_revenue, 1_035_000.0);
            assert!(metrics.food_cost_pct.is_finite());
            assert_eq!(breakdown.len(), 4);
        } else {
            panic!("expected dashboard report");
        }
    }

    #[test]
    fn test_unknown_owner_and_account_ids_fall_back_to_all() {
        let data = Dataset::sample();
        let defaults = ViewConfig::default();
        let config = ViewConfig {
            owners: vec!["nobody".to_string()],
            bank_accounts: vec!["acct-missing".to_string()],
            ..Default::default()
        };

        for page in [Page::Financials, Page::Statements] {
            assert_eq!(
                serde_json::to_value(build_report(page, &data, &config)).unwrap(),
                serde_json::to_value(build_report(page, &data, &defaults)).unwrap()
            );
        }
    }

    #[test]
    fn test_financials_report_lists_discrepancy() {
        let data = Dataset::sample();
        let report = build_report(Page::Financials, &data, &ViewConfig::default());

        if let PageReport::Financials { discrepancies, .. } = &report {
            assert_eq!(discrepancies, &vec![("Operating Expenses".to_string(), 4_600.0)]);
        } else {
            panic!("expected financials report");
        }
        assert!(report.summary_lines().iter().any(|l| l.contains("4600.00")));
    }

    #[test]
    fn test_every_page_builds_and_serializes() {
        let data = Dataset::sample();
        let config = ViewConfig::default();

        for page in Page::all() {
            let report = build_report(page, &data, &config);
            assert_eq!(report.page(), page);
            assert!(report.summary_lines().len() > 1);

            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["page"], serde_json::to_value(page).unwrap());
        }
    }
}
