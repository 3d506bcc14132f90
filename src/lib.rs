// Restaurant Analytics - Core Library
// Sample data, derived metrics and view state for the dashboard,
// inventory, financials, payroll and statements pages.

pub mod logging;
pub mod entities;
pub mod selection;
pub mod metrics;
pub mod financials;
pub mod inventory;
pub mod payroll;
pub mod statements;
pub mod controls;
pub mod notification;
pub mod dataset;
pub mod config;
pub mod pages;

// Re-export commonly used types
pub use entities::{
    Benefits, Compensation, Employee,
    InventoryItem, StockStatus,
    LineItem, LineRow,
    Location, LocationRegistry, OperatingStatus, Timeframe,
    Owner, OwnerStatement, StatementStatus,
};
pub use entities::location::load_locations_csv;
pub use selection::Selection;
pub use metrics::{
    aggregate, calculate_percentage, compare_timeframes, filter_locations, location_breakdown,
    DashboardMetrics, LocationBreakdown, TimeframeComparison,
};
pub use financials::{BankAccount, FinancialStatement, FinancialSummary};
pub use inventory::{InventoryFilter, InventorySummary};
pub use payroll::PayrollSummary;
pub use statements::{StatementFilter, StatementSummary};
pub use controls::{Dropdown, DropdownEvent, ExpandedRows};
pub use notification::{Notice, NotificationKind, NotificationState, Notifier};
pub use dataset::Dataset;
pub use config::ViewConfig;
pub use pages::{build_report, Page, PageReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
