//! Currency CLI command
//!
//! Shows or changes the active currency.

use crate::display::format_currency_list;
use crate::error::TrackerResult;
use crate::services::Ledger;
use crate::storage::BlobStore;

/// Show the active currency, or switch to `code` when given
pub fn handle_currency_command<S: BlobStore>(
    ledger: &mut Ledger<S>,
    code: Option<String>,
) -> TrackerResult<()> {
    match code {
        Some(code) => {
            let currency = ledger.set_currency(&code)?;
            println!("Currency set to {}", currency.badge());
        }
        None => {
            println!("Active currency: {}", ledger.currency().badge());
            println!();
            print!("{}", format_currency_list(ledger.currency()));
        }
    }

    Ok(())
}
