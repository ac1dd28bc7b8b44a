//! Finance ledger use-case service.
//!
//! # Invariants
//! - Balance arithmetic uses integer cents end to end.
//! - Totals are derived on demand from the transaction collection; no
//!   running counters are stored.

use crate::model::transaction::{Transaction, TransactionKind, TransactionPatch};
use crate::model::RecordId;
use crate::persist::SnapshotSlot;
use crate::store::{AppStore, StoreResult};

/// Input for recording a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    /// Strictly positive amount in cents.
    pub amount_cents: i64,
    pub note: Option<String>,
}

/// Per-kind totals over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub income_cents: i64,
    pub expense_cents: i64,
}

/// Ledger service facade over the application store.
pub struct LedgerService<'a, S: SnapshotSlot> {
    store: &'a mut AppStore<S>,
}

impl<'a, S: SnapshotSlot> LedgerService<'a, S> {
    pub fn new(store: &'a mut AppStore<S>) -> Self {
        Self { store }
    }

    /// Records a new transaction and returns it.
    pub fn record(&mut self, request: NewTransaction) -> StoreResult<Transaction> {
        let mut transaction =
            Transaction::new(request.kind, request.category, request.amount_cents);
        transaction.note = request.note;

        self.store.add_transaction(transaction.clone())?;
        Ok(transaction)
    }

    /// Merges a partial update into an existing transaction.
    pub fn edit(&mut self, id: RecordId, patch: TransactionPatch) -> StoreResult<()> {
        self.store.update_transaction(id, patch)
    }

    /// Deletes a transaction and returns the removed record.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<Transaction> {
        self.store.remove_transaction(id)
    }

    /// Net balance: income minus expense, in cents.
    pub fn balance_cents(&self) -> i64 {
        self.store
            .transactions()
            .iter()
            .map(Transaction::signed_cents)
            .sum()
    }

    /// Income and expense totals over the whole ledger.
    pub fn totals(&self) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for transaction in self.store.transactions().iter() {
            match transaction.kind {
                TransactionKind::Income => totals.income_cents += transaction.amount_cents,
                TransactionKind::Expense => totals.expense_cents += transaction.amount_cents,
            }
        }
        totals
    }

    /// All transactions in insertion order.
    pub fn list(&self) -> Vec<Transaction> {
        self.store.transactions().list()
    }
}
