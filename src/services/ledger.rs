//! Ledger service
//!
//! Owns the transaction list and the active currency, validates input, and
//! re-saves the full state to the blob store after every mutation.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{Category, Currency};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::storage::{BlobStore, CURRENCY_KEY, TRANSACTIONS_KEY};

/// Read-only view of the ledger at a point in time
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Newest first
    pub transactions: &'a [Transaction],
    pub currency: Currency,
}

/// Why a persisted blob was discarded on load
#[derive(Debug, Error)]
enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("duplicate transaction id {0}")]
    DuplicateId(TransactionId),
}

/// The authoritative collection of transactions plus the currency setting
pub struct Ledger<S: BlobStore> {
    store: S,
    transactions: Vec<Transaction>,
    currency: Currency,
}

impl<S: BlobStore> Ledger<S> {
    /// Load ledger state from `store`
    ///
    /// Absent or malformed blobs fall back to an empty list and the default
    /// currency. Only a failure of the store itself is an error.
    pub fn load(store: S) -> TrackerResult<Self> {
        let transactions = match store.load(TRANSACTIONS_KEY)? {
            Some(blob) => decode_transactions(&blob).unwrap_or_else(|e| {
                warn!("Discarding stored transactions: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let currency = match store.load(CURRENCY_KEY)? {
            Some(blob) => blob.parse::<Currency>().unwrap_or_else(|_| {
                warn!("Discarding stored currency {:?}, using default", blob.trim());
                Currency::default()
            }),
            None => Currency::default(),
        };

        debug!(
            count = transactions.len(),
            currency = currency.code(),
            "ledger loaded"
        );

        Ok(Self {
            store,
            transactions,
            currency,
        })
    }

    /// Record a new transaction from raw user input
    ///
    /// The amount text must be a plain positive decimal. On success the
    /// transaction is placed first and the ledger is persisted.
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        category: Category,
        kind: TransactionType,
    ) -> TrackerResult<Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TrackerError::validation("Description cannot be empty"));
        }

        let amount = Money::parse(amount).map_err(|e| {
            TrackerError::Validation(format!(
                "Invalid amount '{}': {}. Use a positive number like '12.50'",
                amount.trim(),
                e
            ))
        })?;

        let mut txn = Transaction::new(description, amount, category, kind);
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        while self.contains(txn.id) {
            txn.id = TransactionId::new();
        }

        self.transactions.insert(0, txn.clone());
        if let Err(e) = self.persist() {
            self.transactions.remove(0);
            self.restore_store();
            return Err(e);
        }

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    /// Remove the transaction with `id`; absent ids are a no-op
    ///
    /// Returns whether a transaction was removed. Persists either way.
    pub fn remove(&mut self, id: TransactionId) -> TrackerResult<bool> {
        let position = self.transactions.iter().position(|t| t.id == id);
        let removed = position.map(|index| (index, self.transactions.remove(index)));

        if let Err(e) = self.persist() {
            if let Some((index, txn)) = removed {
                self.transactions.insert(index, txn);
            }
            self.restore_store();
            return Err(e);
        }

        let removed = removed.is_some();
        if removed {
            info!(%id, "transaction removed");
        } else {
            debug!(%id, "remove: no such transaction");
        }
        Ok(removed)
    }

    /// Switch the display currency
    pub fn set_currency(&mut self, code: &str) -> TrackerResult<Currency> {
        let currency: Currency = code.parse()?;
        let previous = std::mem::replace(&mut self.currency, currency);
        if let Err(e) = self.persist() {
            self.currency = previous;
            self.restore_store();
            return Err(e);
        }

        info!(currency = currency.code(), "currency changed");
        Ok(currency)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transactions: &self.transactions,
            currency: self.currency,
        }
    }

    /// Write the full state, replacing whatever the store held
    pub fn persist(&mut self) -> TrackerResult<()> {
        let blob = serde_json::to_string(&self.transactions)?;
        self.store.save(TRANSACTIONS_KEY, &blob)?;
        self.store.save(CURRENCY_KEY, self.currency.code())?;
        Ok(())
    }

    /// Rewrite the rolled-back state after a failed save
    ///
    /// `persist` writes one key at a time, so a failure can leave the first
    /// key holding the rejected state.
    fn restore_store(&mut self) {
        if let Err(e) = self.persist() {
            warn!("Could not restore stored ledger after failed save: {}", e);
        }
    }

    /// Resolve a full id, its display form, or an unambiguous short prefix
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        if let Ok(id) = identifier.trim().parse::<TransactionId>() {
            return self.transactions.iter().find(|t| t.id == id);
        }

        let mut matches = self.transactions.iter().filter(|t| t.id.matches(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Some(txn),
            _ => None,
        }
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.transactions.iter().any(|t| t.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Decode the stored transaction list, rejecting it whole on any bad record
fn decode_transactions(blob: &str) -> Result<Vec<Transaction>, DecodeError> {
    let transactions: Vec<Transaction> = serde_json::from_str(blob)?;

    let mut seen = std::collections::HashSet::with_capacity(transactions.len());
    for (index, txn) in transactions.iter().enumerate() {
        txn.validate().map_err(|e| DecodeError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        if !seen.insert(txn.id) {
            return Err(DecodeError::DuplicateId(txn.id));
        }
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn empty_ledger() -> Ledger<MemoryStore> {
        Ledger::load(MemoryStore::new()).unwrap()
    }

    /// Memory store whose saves to `failing_key` are refused
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing_key: Option<&'static str>,
    }

    impl BlobStore for FlakyStore {
        fn load(&self, key: &str) -> TrackerResult<Option<String>> {
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> TrackerResult<()> {
            if self.failing_key == Some(key) {
                return Err(TrackerError::Storage(format!("save to '{}' refused", key)));
            }
            self.inner.save(key, value)
        }
    }

    fn reload(ledger: &Ledger<FlakyStore>) -> Ledger<MemoryStore> {
        Ledger::load(ledger.store().inner.clone()).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let ledger = empty_ledger();
        assert!(ledger.is_empty());
        assert_eq!(ledger.currency(), Currency::Usd);
        assert_eq!(ledger.store().writes(), 0);
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut ledger = empty_ledger();

        let first = ledger
            .add("Lunch", "12.50", Category::Food, TransactionType::Expense)
            .unwrap();
        let second = ledger
            .add("Bus", "2.75", Category::Transport, TransactionType::Expense)
            .unwrap();

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.transactions[0], second);
        assert_eq!(snapshot.transactions[1], first);
        assert_ne!(first.id, second.id);
        assert_eq!(first.amount, Money::from_cents(1250));

        let stored = ledger.store().get(TRANSACTIONS_KEY).unwrap();
        assert!(stored.contains("Lunch"));
        assert_eq!(ledger.store().get(CURRENCY_KEY), Some("USD"));
    }

    #[test]
    fn test_add_trims_description() {
        let mut ledger = empty_ledger();
        let txn = ledger
            .add("  Coffee  ", "3", Category::Food, TransactionType::Expense)
            .unwrap();
        assert_eq!(txn.description, "Coffee");
    }

    #[test]
    fn test_add_rejects_invalid_input_without_writing() {
        let mut ledger = empty_ledger();

        for (description, amount) in [
            ("", "10"),
            ("   ", "10"),
            ("Lunch", ""),
            ("Lunch", "abc"),
            ("Lunch", "12abc"),
            ("Lunch", "0"),
            ("Lunch", "-5"),
        ] {
            let err = ledger
                .add(description, amount, Category::Food, TransactionType::Expense)
                .unwrap_err();
            assert!(err.is_validation(), "{description:?}/{amount:?}: {err}");
        }

        assert!(ledger.is_empty());
        assert_eq!(ledger.store().writes(), 0);
    }

    #[test]
    fn test_add_rejects_oversized_amounts() {
        let mut ledger = empty_ledger();
        let err = ledger
            .add("a", "90000000000000000", Category::Food, TransactionType::Income)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
        assert_eq!(ledger.store().writes(), 0);

        ledger
            .add("a", "1000000000", Category::Salary, TransactionType::Income)
            .unwrap();
        ledger
            .add("b", "1000000000", Category::Salary, TransactionType::Income)
            .unwrap();
        let totals = crate::reports::totals(ledger.transactions());
        assert_eq!(totals.income, Money::from_cents(200_000_000_000));
    }

    #[test]
    fn test_oversized_stored_amount_discards_all() {
        let blob = format!(
            r#"[{{"id":"{}","description":"big","amount":100000000001,"category":"food","type":"income","date":"2024-01-15T12:00:00Z"}}]"#,
            uuid::Uuid::new_v4()
        );
        let ledger = Ledger::load(MemoryStore::new().with_blob(TRANSACTIONS_KEY, &blob)).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_failed_add_leaves_memory_and_store_in_agreement() {
        let mut ledger = Ledger::load(FlakyStore::default()).unwrap();
        ledger.store.failing_key = Some(CURRENCY_KEY);

        let err = ledger
            .add("Lunch", "12.50", Category::Food, TransactionType::Expense)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(ledger.is_empty());
        assert!(reload(&ledger).is_empty());
    }

    #[test]
    fn test_failed_remove_leaves_memory_and_store_in_agreement() {
        let mut ledger = Ledger::load(FlakyStore::default()).unwrap();
        let txn = ledger
            .add("Lunch", "12.50", Category::Food, TransactionType::Expense)
            .unwrap();

        ledger.store.failing_key = Some(CURRENCY_KEY);
        assert!(ledger.remove(txn.id).is_err());

        assert_eq!(ledger.len(), 1);
        let reloaded = reload(&ledger);
        assert_eq!(reloaded.transactions(), ledger.transactions());
    }

    #[test]
    fn test_failed_set_currency_keeps_previous() {
        let mut ledger = Ledger::load(FlakyStore::default()).unwrap();
        ledger.set_currency("EUR").unwrap();

        ledger.store.failing_key = Some(CURRENCY_KEY);
        assert!(ledger.set_currency("JPY").is_err());

        assert_eq!(ledger.currency(), Currency::Eur);
        assert_eq!(reload(&ledger).currency(), Currency::Eur);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ledger = empty_ledger();
        for i in 0..50 {
            ledger
                .add(&format!("item {i}"), "1", Category::Other, TransactionType::Expense)
                .unwrap();
        }

        let mut ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_remove() {
        let mut ledger = empty_ledger();
        let keep = ledger
            .add("Salary", "1000", Category::Salary, TransactionType::Income)
            .unwrap();
        let gone = ledger
            .add("Cinema", "15", Category::Entertainment, TransactionType::Expense)
            .unwrap();

        assert!(ledger.remove(gone.id).unwrap());
        assert!(!ledger.contains(gone.id));
        assert_eq!(ledger.transactions(), &[keep]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = empty_ledger();
        ledger
            .add("Salary", "1000", Category::Salary, TransactionType::Income)
            .unwrap();
        let before = ledger.transactions().to_vec();
        let writes = ledger.store().writes();

        assert!(!ledger.remove(TransactionId::new()).unwrap());
        assert_eq!(ledger.transactions(), before.as_slice());
        assert!(ledger.store().writes() > writes);
    }

    #[test]
    fn test_set_currency() {
        let mut ledger = empty_ledger();

        assert_eq!(ledger.set_currency("EUR").unwrap(), Currency::Eur);
        assert_eq!(ledger.snapshot().currency, Currency::Eur);
        assert_eq!(ledger.store().get(CURRENCY_KEY), Some("EUR"));

        let writes = ledger.store().writes();
        let err = ledger.set_currency("XYZ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.currency(), Currency::Eur);
        assert_eq!(ledger.store().writes(), writes);
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let mut ledger = empty_ledger();
        ledger
            .add("Salary", "1000", Category::Salary, TransactionType::Income)
            .unwrap();
        ledger
            .add("Rent", "650.00", Category::Bills, TransactionType::Expense)
            .unwrap();
        ledger.set_currency("GBP").unwrap();

        let expected = ledger.transactions().to_vec();
        let store = ledger.store().clone();

        let reloaded = Ledger::load(store).unwrap();
        assert_eq!(reloaded.transactions(), expected.as_slice());
        assert_eq!(reloaded.currency(), Currency::Gbp);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut ledger = Ledger::load(FileStore::new(paths.data_dir())).unwrap();
        let txn = ledger
            .add("Groceries", "42.10", Category::Food, TransactionType::Expense)
            .unwrap();
        ledger.set_currency("CAD").unwrap();

        let reloaded = Ledger::load(FileStore::new(paths.data_dir())).unwrap();
        assert_eq!(reloaded.transactions(), &[txn]);
        assert_eq!(reloaded.currency(), Currency::Cad);
    }

    #[test]
    fn test_malformed_blobs_reset_to_defaults() {
        let store = MemoryStore::new()
            .with_blob(TRANSACTIONS_KEY, "{not json")
            .with_blob(CURRENCY_KEY, "DOGE");

        let ledger = Ledger::load(store).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.currency(), Currency::Usd);
    }

    #[test]
    fn test_one_bad_record_discards_all() {
        let good = Transaction::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            TransactionType::Expense,
        );
        let mut bad = good.clone();
        bad.id = TransactionId::new();
        bad.amount = Money::from_cents(-100);

        let blob = serde_json::to_string(&vec![good, bad]).unwrap();
        let ledger = Ledger::load(MemoryStore::new().with_blob(TRANSACTIONS_KEY, &blob)).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicate_ids_discard_all() {
        let txn = Transaction::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            TransactionType::Expense,
        );
        let blob = serde_json::to_string(&vec![txn.clone(), txn]).unwrap();

        let ledger = Ledger::load(MemoryStore::new().with_blob(TRANSACTIONS_KEY, &blob)).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_category_in_blob_discards_all() {
        let blob = r#"[{"id":"550e8400-e29b-41d4-a716-446655440000","description":"x",
            "amount":100,"category":"pets","type":"expense","date":"2024-01-15T12:00:00Z"}]"#;

        let ledger = Ledger::load(MemoryStore::new().with_blob(TRANSACTIONS_KEY, blob)).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_currency_blob_tolerates_whitespace() {
        let ledger = Ledger::load(MemoryStore::new().with_blob(CURRENCY_KEY, "JPY\n")).unwrap();
        assert_eq!(ledger.currency(), Currency::Jpy);
    }

    #[test]
    fn test_find_by_display_id() {
        let mut ledger = empty_ledger();
        let txn = ledger
            .add("Pharmacy", "8.99", Category::Health, TransactionType::Expense)
            .unwrap();

        assert_eq!(ledger.find(&txn.id.to_string()), Some(&txn));
        assert_eq!(ledger.find(&txn.id.short()), Some(&txn));
        assert_eq!(ledger.find(&txn.id.as_uuid().to_string()), Some(&txn));
        assert_eq!(ledger.find("txn-00000000"), None);
    }
}
