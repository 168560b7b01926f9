//! Catalog and settings display
//!
//! Lists supported currencies and categories, marking the active currency.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::separator;
use crate::catalog::{Category, Currency};
use crate::config::Settings;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Icon")]
    icon: &'static str,
    #[tabled(rename = "Color")]
    color: &'static str,
}

/// Table of every category with its key, name, icon and color
pub fn format_category_table() -> String {
    let rows = Category::ALL.iter().map(|c| {
        let info = c.info();
        CategoryRow {
            key: info.key,
            name: info.name,
            icon: info.icon,
            color: info.color,
        }
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Supported currencies, one per line, with the active one marked
pub fn format_currency_list(active: Currency) -> String {
    let mut output = String::new();
    for currency in Currency::ALL {
        let marker = if currency == active { '*' } else { ' ' };
        output.push_str(&format!(
            "{} {}  {}\n",
            marker,
            currency.code(),
            currency.symbol()
        ));
    }
    output
}

/// The settings view: active currency, display preferences, catalog
pub fn format_settings_view(active: Currency, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Settings\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Currency:    {}\n", active.badge()));
    output.push_str(&format!("Date format: {}\n", settings.date_format));
    output.push_str(&format!("Show icons:  {}\n\n", settings.show_icons));

    output.push_str("Currencies\n");
    output.push_str(&format_currency_list(active));
    output.push('\n');

    output.push_str("Categories\n");
    output.push_str(&format_category_table());

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_lists_all() {
        let table = format_category_table();
        for category in Category::ALL {
            assert!(table.contains(category.key()));
            assert!(table.contains(category.name()));
        }
        assert!(table.contains("#FF6384"));
    }

    #[test]
    fn test_currency_list_marks_active() {
        let list = format_currency_list(Currency::Gbp);
        assert!(list.contains("* GBP  £"));
        assert!(list.contains("  USD  $"));
        assert_eq!(list.lines().count(), Currency::ALL.len());
    }

    #[test]
    fn test_settings_view() {
        let view = format_settings_view(Currency::Inr, &Settings::default());
        assert!(view.contains("Currency:    ₹ INR"));
        assert!(view.contains("Date format: %-m/%-d/%Y"));
        assert!(view.contains("Bills & Utilities"));
    }
}
