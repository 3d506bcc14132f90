// Entity Models
// Plain records created once from literals (or loaded from disk) and
// never mutated afterwards.

pub mod location;
pub mod line_item;
pub mod inventory_item;
pub mod employee;
pub mod statement;

pub use location::{Location, LocationRegistry, OperatingStatus, Timeframe};
pub use line_item::{LineItem, LineRow};
pub use inventory_item::{InventoryItem, StockStatus};
pub use employee::{Benefits, Compensation, Employee};
pub use statement::{Owner, OwnerStatement, StatementStatus};
