//! Spending by category
//!
//! Groups expense transactions by category and expresses each group as a
//! share of total expense.

use crate::catalog::Category;
use crate::models::{Money, Transaction};

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    /// Total expense in this category
    pub amount: Money,
    /// Share of total expense, 0.0 to 100.0
    pub percentage: f64,
}

/// Expense totals per category, in the order categories first appear
///
/// Income is ignored. Returns an empty list when there is no expense, so no
/// row is ever computed against a zero total.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut groups: Vec<(Category, Money)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match groups.iter_mut().find(|(category, _)| *category == txn.category) {
            Some((_, amount)) => *amount += txn.amount,
            None => groups.push((txn.category, txn.amount)),
        }
    }

    let total_expense: Money = groups.iter().map(|(_, amount)| *amount).sum();
    if total_expense.is_zero() {
        return Vec::new();
    }

    groups
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: amount.percentage_of(total_expense),
        })
        .collect()
}
