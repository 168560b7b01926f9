//! Display formatting for terminal output
//!
//! The presentation adapter: turns ledger snapshots and report structures
//! into text. Which view to render is always passed in explicitly.

pub mod catalog;
pub mod dashboard;
pub mod report;
pub mod transaction;

use clap::ValueEnum;

pub use catalog::{format_category_table, format_currency_list, format_settings_view};
pub use dashboard::format_dashboard;
pub use transaction::{format_history, format_signed_amount, format_transaction_details};

use crate::config::Settings;
use crate::reports::Dashboard;
use crate::services::Snapshot;

/// A top-level screen of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Totals, category breakdown and monthly summary
    Dashboard,
    /// Every transaction, newest first
    History,
    /// Active currency, preferences and catalog
    Settings,
}

/// Render `view` from the given snapshot
pub fn render_view(view: View, snapshot: Snapshot<'_>, settings: &Settings) -> String {
    match view {
        View::Dashboard => format_dashboard(&Dashboard::generate(snapshot), settings),
        View::History => format_history(
            snapshot.transactions,
            snapshot.currency,
            settings,
            settings.history_limit,
        ),
        View::Settings => format_settings_view(snapshot.currency, settings),
    }
}
