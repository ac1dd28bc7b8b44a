//! Finance ledger transaction record.
//!
//! Amounts are integer cents; the sign is carried by the kind so stored
//! values stay strictly positive and rounding never enters the model.

use crate::model::{epoch_ms_now, Record, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One finance ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    pub kind: TransactionKind,
    /// User-facing bucket, e.g. "groceries" or "salary".
    pub category: String,
    /// Strictly positive amount in cents.
    pub amount_cents: i64,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: i64,
}

impl Transaction {
    /// Creates a transaction with a generated id.
    pub fn new(kind: TransactionKind, category: impl Into<String>, amount_cents: i64) -> Self {
        Self::with_id(Uuid::new_v4(), kind, category, amount_cents, epoch_ms_now())
    }

    /// Creates a transaction with caller-provided identity.
    pub fn with_id(
        id: RecordId,
        kind: TransactionKind,
        category: impl Into<String>,
        amount_cents: i64,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            kind,
            category: category.into(),
            amount_cents,
            note: None,
            created_at,
        }
    }

    /// Amount with the kind's sign applied, for balance arithmetic.
    pub fn signed_cents(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }
}

/// Partial update for [`Transaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub amount_cents: Option<i64>,
    pub note: Option<Option<String>>,
}

impl Record for Transaction {
    type Patch = TransactionPatch;

    const COLLECTION: &'static str = "transactions";

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: TransactionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount_cents) = patch.amount_cents {
            self.amount_cents = amount_cents;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "transaction",
                field: "category",
            });
        }
        if self.amount_cents <= 0 {
            return Err(ValidationError::NonPositiveAmount(self.amount_cents));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Transaction, TransactionKind, TransactionPatch};
    use crate::model::{Record, ValidationError};

    #[test]
    fn signed_cents_follows_kind() {
        let income = Transaction::new(TransactionKind::Income, "salary", 250_000);
        let expense = Transaction::new(TransactionKind::Expense, "rent", 120_000);
        assert_eq!(income.signed_cents(), 250_000);
        assert_eq!(expense.signed_cents(), -120_000);
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        let mut entry = Transaction::new(TransactionKind::Expense, "misc", 100);
        entry.apply_patch(TransactionPatch {
            amount_cents: Some(0),
            ..TransactionPatch::default()
        });
        assert_eq!(
            entry.validate(),
            Err(ValidationError::NonPositiveAmount(0))
        );
    }
}
