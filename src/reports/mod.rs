//! Reports module for fintrack
//!
//! Pure aggregations over a ledger snapshot: overall totals, expense
//! breakdown by category, and a per-month summary.

pub mod dashboard;
pub mod monthly;
pub mod spending;
pub mod totals;

pub use dashboard::Dashboard;
pub use monthly::{monthly_summary, monthly_summary_in, MonthSummary, MONTHLY_SUMMARY_LIMIT};
pub use spending::{category_breakdown, CategoryShare};
pub use totals::{totals, Totals};
