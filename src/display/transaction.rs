//! Transaction display formatting
//!
//! The history view: one row per transaction, newest first, with the signed
//! amount in the active currency.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{format_local_date, format_money, truncate};
use crate::catalog::Currency;
use crate::config::Settings;
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Amount with its direction sign, e.g. "+$1000.00" or "-€12.50"
pub fn format_signed_amount(txn: &Transaction, currency: Currency) -> String {
    format!("{}{}", txn.kind.sign(), format_money(txn.amount, currency))
}

fn history_row(txn: &Transaction, currency: Currency, settings: &Settings) -> HistoryRow {
    let description = truncate(&txn.description, DESCRIPTION_WIDTH);
    let description = if settings.show_icons {
        format!("{} {}", txn.category.icon(), description)
    } else {
        description
    };

    HistoryRow {
        id: txn.id.to_string(),
        date: format_local_date(txn.date, &settings.date_format),
        description,
        category: txn.category.name().to_string(),
        amount: format_signed_amount(txn, currency),
    }
}

/// Format the transaction history as a table
///
/// At most `limit` rows are shown; a footer notes how many were left out.
pub fn format_history(
    transactions: &[Transaction],
    currency: Currency,
    settings: &Settings,
    limit: usize,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet\n".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .take(limit)
        .map(|txn| history_row(txn, currency, settings))
        .collect();
    let shown = rows.len();

    let mut output = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()))
        .to_string();
    output.push('\n');

    if shown < transactions.len() {
        output.push_str(&format!(
            "Showing {} of {} transactions\n",
            shown,
            transactions.len()
        ));
    }

    output
}

/// Format a single transaction's details
pub fn format_transaction_details(
    txn: &Transaction,
    currency: Currency,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, currency)
    ));
    output.push_str(&format!(
        "Category:    {} {}\n",
        txn.category.icon(),
        txn.category.name()
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Date:        {}\n",
        format_local_date(txn.date, &settings.date_format)
    ));

    output
}
