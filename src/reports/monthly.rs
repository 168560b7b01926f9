//! Monthly summary
//!
//! Income, expense and net per calendar month. Months are listed in the order
//! they are first met while walking the (newest-first) transaction list, and
//! only the first [`MONTHLY_SUMMARY_LIMIT`] are kept.

use chrono::{Datelike, Local, TimeZone};
use std::fmt::Display;

use crate::models::{Money, Transaction, TransactionType};

/// Maximum number of months in a summary
pub const MONTHLY_SUMMARY_LIMIT: usize = 6;

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Short month name and year, e.g. "Jan 2024"
    pub label: String,
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub net: Money,
}

/// Monthly summary with months taken in the local time zone
pub fn monthly_summary(transactions: &[Transaction]) -> Vec<MonthSummary> {
    monthly_summary_in(transactions, &Local)
}

/// Monthly summary with months taken in `tz`
pub fn monthly_summary_in<Tz>(transactions: &[Transaction], tz: &Tz) -> Vec<MonthSummary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut months: Vec<MonthSummary> = Vec::new();

    for txn in transactions {
        let local = txn.date.with_timezone(tz);
        let (year, month) = (local.year(), local.month());

        let index = match months.iter().position(|m| m.year == year && m.month == month) {
            Some(index) => index,
            None => {
                months.push(MonthSummary {
                    year,
                    month,
                    label: local.format("%b %Y").to_string(),
                    income: Money::zero(),
                    expense: Money::zero(),
                    net: Money::zero(),
                });
                months.len() - 1
            }
        };

        let entry = &mut months[index];
        match txn.kind {
            TransactionType::Income => entry.income += txn.amount,
            TransactionType::Expense => entry.expense += txn.amount,
        }
        entry.net = entry.income - entry.expense;
    }

    months.truncate(MONTHLY_SUMMARY_LIMIT);
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use chrono::{FixedOffset, Utc};

    fn at(year: i32, month: u32, cents: i64, kind: TransactionType) -> Transaction {
        Transaction::with_date(
            "t",
            Money::from_cents(cents),
            Category::Other,
            kind,
            Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty() {
        assert!(monthly_summary_in(&[], &Utc).is_empty());
    }

    #[test]
    fn test_groups_by_month_with_net() {
        let txns = vec![
            at(2024, 2, 5000, TransactionType::Expense),
            at(2024, 2, 100000, TransactionType::Income),
            at(2024, 1, 30000, TransactionType::Expense),
        ];

        let summary = monthly_summary_in(&txns, &Utc);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].label, "Feb 2024");
        assert_eq!(summary[0].income, Money::from_cents(100000));
        assert_eq!(summary[0].expense, Money::from_cents(5000));
        assert_eq!(summary[0].net, Money::from_cents(95000));

        assert_eq!(summary[1].label, "Jan 2024");
        assert_eq!(summary[1].net, Money::from_cents(-30000));
    }

    #[test]
    fn test_same_month_different_years_are_distinct() {
        let txns = vec![
            at(2024, 3, 100, TransactionType::Expense),
            at(2023, 3, 100, TransactionType::Expense),
        ];
        let labels: Vec<_> = monthly_summary_in(&txns, &Utc)
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(labels, vec!["Mar 2024", "Mar 2023"]);
    }

    #[test]
    fn test_truncates_to_first_six_months_seen() {
        let txns: Vec<_> = (1..=7)
            .rev()
            .map(|month| at(2024, month, 100, TransactionType::Expense))
            .collect();

        let summary = monthly_summary_in(&txns, &Utc);
        assert_eq!(summary.len(), MONTHLY_SUMMARY_LIMIT);

        let labels: Vec<_> = summary.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jul 2024", "Jun 2024", "May 2024", "Apr 2024", "Mar 2024", "Feb 2024"]
        );
    }

    #[test]
    fn test_keeps_first_seen_order_not_chronological() {
        let txns = vec![
            at(2024, 1, 100, TransactionType::Expense),
            at(2024, 5, 100, TransactionType::Expense),
            at(2024, 3, 100, TransactionType::Expense),
        ];
        let months: Vec<_> = monthly_summary_in(&txns, &Utc)
            .into_iter()
            .map(|m| m.month)
            .collect();
        assert_eq!(months, vec![1, 5, 3]);
    }

    #[test]
    fn test_late_rows_still_count_toward_kept_months() {
        let mut txns: Vec<_> = (1..=7)
            .rev()
            .map(|month| at(2024, month, 100, TransactionType::Expense))
            .collect();
        txns.push(at(2024, 7, 900, TransactionType::Income));

        let summary = monthly_summary_in(&txns, &Utc);
        assert_eq!(summary[0].label, "Jul 2024");
        assert_eq!(summary[0].income, Money::from_cents(900));
        assert_eq!(summary[0].net, Money::from_cents(800));
    }

    #[test]
    fn test_month_boundary_follows_time_zone() {
        let txn = Transaction::with_date(
            "late night",
            Money::from_cents(100),
            Category::Food,
            TransactionType::Expense,
            Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap(),
        );
        let txns = [txn];

        assert_eq!(monthly_summary_in(&txns, &Utc)[0].label, "Jan 2024");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(monthly_summary_in(&txns, &plus_two)[0].label, "Feb 2024");
    }
}
