//! Dashboard view
//!
//! Summary cards, a bar per expense category, and the monthly summary.

use super::report::{
    double_separator, format_bar, format_money, format_money_signed_color, format_percentage,
    hex_color, red, separator,
};
use crate::config::Settings;
use crate::reports::Dashboard;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let currency = dashboard.currency;
    let mut output = String::new();

    output.push_str(&format!("Dashboard ({})\n", currency.badge()));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    let totals = &dashboard.totals;
    let balance = format_money(totals.balance, currency);
    let balance = if totals.is_deficit() {
        red(&balance)
    } else {
        balance
    };
    output.push_str(&format!(
        "Income:  {}\n",
        format_money(totals.income, currency)
    ));
    output.push_str(&format!(
        "Expense: {}\n",
        format_money(totals.expense, currency)
    ));
    output.push_str(&format!("Balance: {}\n\n", balance));

    output.push_str("Spending by Category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if dashboard.categories.is_empty() {
        output.push_str("No expenses yet\n");
    } else {
        for share in &dashboard.categories {
            let label = if settings.show_icons {
                format!("{} {}", share.category.icon(), share.category.name())
            } else {
                share.category.name().to_string()
            };
            output.push_str(&format!(
                "{:<22} {} {:>12} {:>6}\n",
                label,
                hex_color(
                    &format_bar(share.percentage, 100.0, BAR_WIDTH),
                    share.category.color()
                ),
                format_money(share.amount, currency),
                format_percentage(share.percentage)
            ));
        }
    }
    output.push('\n');

    output.push_str("Monthly Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if dashboard.months.is_empty() {
        output.push_str("No data yet\n");
    } else {
        for month in &dashboard.months {
            output.push_str(&format!(
                "{:<9} Income: {}  Expense: {}  Net: {}\n",
                month.label,
                format_money(month.income, currency),
                format_money(month.expense, currency),
                format_money_signed_color(month.net, currency)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Currency};
    use crate::models::{Money, Transaction, TransactionType};
    use crate::services::Snapshot;

    fn render(transactions: &[Transaction], currency: Currency) -> String {
        let dashboard = Dashboard::generate(Snapshot {
            transactions,
            currency,
        });
        format_dashboard(&dashboard, &Settings::default())
    }

    #[test]
    fn test_empty_states() {
        let output = render(&[], Currency::Usd);
        assert!(output.contains("Dashboard ($ USD)"));
        assert!(output.contains("Income:  $0.00"));
        assert!(output.contains("Balance: $0.00"));
        assert!(output.contains("No expenses yet"));
        assert!(output.contains("No data yet"));
    }

    #[test]
    fn test_deficit_is_highlighted() {
        let txns = vec![Transaction::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            TransactionType::Expense,
        )];
        let output = render(&txns, Currency::Eur);

        assert!(output.contains("Dashboard (€ EUR)"));
        assert!(output.contains("Expense: €12.50"));
        assert!(output.contains(&red("-€12.50")));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("100%"));
        assert!(output.contains("\x1b[38;2;255;99;132m█"));
        assert!(!output.contains("No expenses yet"));
    }

    #[test]
    fn test_surplus_is_plain() {
        let txns = vec![Transaction::new(
            "Paycheck",
            Money::from_cents(100000),
            Category::Salary,
            TransactionType::Income,
        )];
        let output = render(&txns, Currency::Usd);

        assert!(output.contains("Balance: $1000.00\n"));
        assert!(output.contains("No expenses yet"));
        assert!(!output.contains("No data yet"));
    }
}
