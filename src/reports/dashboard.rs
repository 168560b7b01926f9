//! Dashboard report
//!
//! Bundles every aggregate the dashboard view needs, computed from one
//! snapshot so the numbers always agree with each other.

use crate::catalog::Currency;
use crate::services::Snapshot;

use super::monthly::{monthly_summary, MonthSummary};
use super::spending::{category_breakdown, CategoryShare};
use super::totals::Totals;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub currency: Currency,
    pub totals: Totals,
    pub categories: Vec<CategoryShare>,
    pub months: Vec<MonthSummary>,
}

impl Dashboard {
    pub fn generate(snapshot: Snapshot<'_>) -> Self {
        Self {
            currency: snapshot.currency,
            totals: Totals::generate(snapshot.transactions),
            categories: category_breakdown(snapshot.transactions),
            months: monthly_summary(snapshot.transactions),
        }
    }
}
