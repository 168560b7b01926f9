//! View CLI commands
//!
//! Renders the dashboard, history and settings views and the category list.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_table, render_view, View};
use crate::services::Ledger;
use crate::storage::BlobStore;

/// View commands
#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Show totals, spending by category and the monthly summary
    #[command(alias = "dash")]
    Dashboard,
    /// Show a view by name
    Show {
        /// The view to render
        #[arg(value_enum)]
        view: View,
    },
    /// List the available categories
    Categories,
}

/// Handle a view command
pub fn handle_view_command<S: BlobStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    cmd: ViewCommands,
) {
    let output = match cmd {
        ViewCommands::Dashboard => render_view(View::Dashboard, ledger.snapshot(), settings),
        ViewCommands::Show { view } => render_view(view, ledger.snapshot(), settings),
        ViewCommands::Categories => format_category_table(),
    };

    print!("{}", output);
}
