//! The monthly ledger store: read-modify-write operations over the key-value
//! persistence layer.
//!
//! The store is a stateless service; it holds no ledger state of its own, and
//! any in-memory copy of a ledger is the caller's responsibility. `remove` and
//! `clear` mutate a caller-supplied snapshot rather than re-reading from
//! storage, so edits the caller has not yet saved are not clobbered. Nothing
//! locks the read-modify-write sequence; overlapping writers to the same month
//! race with last-write-wins.

use crate::db::Db;
use crate::model::amount::sanitize_amount;
use crate::model::{Kind, Month, MonthlyLedger, Transaction};
use crate::Result;
use anyhow::Context;
use tracing::warn;

pub struct LedgerStore {
    db: Db,
}

impl LedgerStore {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Loads the ledger for `month`, or a default (empty) ledger if no record
    /// exists yet. The default is not written back; a month's key is first
    /// written when its first mutation is saved.
    ///
    /// A record that cannot be read or parsed is treated the same as an absent
    /// one: the failure is logged and an empty ledger is returned, so the
    /// caller sees zero values rather than an error.
    pub async fn load_or_default(&self, month: Month) -> MonthlyLedger {
        let key = month.key();
        match self.db.get(&key).await {
            Ok(Some(record)) => match serde_json::from_str(&record) {
                Ok(ledger) => ledger,
                Err(e) => {
                    warn!("Malformed ledger record under '{key}': {e}; treating it as empty");
                    MonthlyLedger::default()
                }
            },
            Ok(None) => MonthlyLedger::default(),
            Err(e) => {
                warn!("Failed to read the ledger under '{key}': {e:#}; treating it as empty");
                MonthlyLedger::default()
            }
        }
    }

    /// Appends a new transaction to `month`'s ledger and persists the result.
    ///
    /// `raw_amount` is sanitized with [`sanitize_amount`]; unparseable input
    /// records a `0.00` entry. For income the category is fixed and `category`
    /// is ignored. Returns the created transaction once the write has
    /// completed.
    pub async fn append(
        &self,
        month: Month,
        kind: Kind,
        description: impl Into<String>,
        category: Option<String>,
        raw_amount: &str,
    ) -> Result<Transaction> {
        let mut ledger = self.load_or_default(month).await;
        let amount = sanitize_amount(raw_amount);
        let transaction = Transaction::new(kind, description, category, amount);
        ledger.transactions_mut(kind).push(transaction.clone());
        self.save(month, &ledger).await?;
        Ok(transaction)
    }

    /// Removes the transaction with `id` from the matching sequence of the
    /// caller's `snapshot`, persists the result and returns the new ledger
    /// state. An unknown id leaves the sequence unchanged; this is not an
    /// error.
    pub async fn remove(
        &self,
        month: Month,
        snapshot: &MonthlyLedger,
        kind: Kind,
        id: &str,
    ) -> Result<MonthlyLedger> {
        let mut updated = snapshot.clone();
        updated.transactions_mut(kind).retain(|t| t.id != id);
        self.save(month, &updated).await?;
        Ok(updated)
    }

    /// Replaces the matching sequence of the caller's `snapshot` with an empty
    /// one, preserving the opening balance and the other sequence. Persists
    /// the result and returns the new ledger state.
    pub async fn clear(
        &self,
        month: Month,
        snapshot: &MonthlyLedger,
        kind: Kind,
    ) -> Result<MonthlyLedger> {
        let mut updated = snapshot.clone();
        updated.transactions_mut(kind).clear();
        self.save(month, &updated).await?;
        Ok(updated)
    }

    async fn save(&self, month: Month, ledger: &MonthlyLedger) -> Result<()> {
        let record = serde_json::to_string(ledger).context("Unable to serialize ledger record")?;
        self.db.set(&month.key(), &record).await
    }
}
