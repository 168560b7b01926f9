//! Income, expense and balance totals

use crate::models::{Money, Transaction, TransactionType};

/// Overall totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

impl Totals {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => expense += txn.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Whether more went out than came in
    pub fn is_deficit(&self) -> bool {
        self.balance.is_negative()
    }
}

/// Compute totals for `transactions`
pub fn totals(transactions: &[Transaction]) -> Totals {
    Totals::generate(transactions)
}
