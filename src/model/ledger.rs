//! The financial record for one month: opening balance plus the income and
//! expense sequences.

use crate::model::{Kind, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One month's financial record.
///
/// This is the unit of persistence: the whole ledger is serialized to a JSON
/// record and stored under the month's key. Sequences keep insertion order;
/// display ordering (newest first) is the presentation layer's concern.
///
/// The opening balance is stored and carried through every mutation, but it is
/// intentionally not part of [`MonthlyLedger::balance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLedger {
    #[serde(rename = "openingBalance")]
    pub opening_balance: f64,
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
}

impl Default for MonthlyLedger {
    fn default() -> Self {
        Self {
            opening_balance: 0.0,
            income: Vec::new(),
            expenses: Vec::new(),
        }
    }
}

impl MonthlyLedger {
    /// The sequence holding transactions of `kind`.
    pub fn transactions(&self, kind: Kind) -> &[Transaction] {
        match kind {
            Kind::Income => &self.income,
            Kind::Expense => &self.expenses,
        }
    }

    pub(crate) fn transactions_mut(&mut self, kind: Kind) -> &mut Vec<Transaction> {
        match kind {
            Kind::Income => &mut self.income,
            Kind::Expense => &mut self.expenses,
        }
    }

    /// Sums the amounts of one sequence. No rounding happens here; rounding
    /// is deferred to formatting time.
    pub fn total(&self, kind: Kind) -> f64 {
        self.transactions(kind).iter().map(|t| t.amount).sum()
    }

    /// Income total minus expense total. The opening balance is not added in.
    pub fn balance(&self) -> f64 {
        self.total(Kind::Income) - self.total(Kind::Expense)
    }

    /// Groups expenses by category, summing amounts per distinct category.
    /// Buckets come back in category-name order.
    pub fn expense_breakdown(&self) -> BTreeMap<String, f64> {
        let mut buckets = BTreeMap::new();
        for transaction in &self.expenses {
            *buckets.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
        }
        buckets
    }
}
