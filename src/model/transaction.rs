//! A single income or expense entry in a monthly ledger.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The category every income transaction carries. Income is not categorized
/// by the user; expenses are.
pub const INCOME_CATEGORY: &str = "income";

/// Discriminates income from expense transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

serde_plain::derive_display_from_serialize!(Kind);
serde_plain::derive_fromstr_from_deserialize!(Kind);

/// A single ledger entry.
///
/// The `amount` is always non-negative; whether it adds to or subtracts from
/// the balance is determined by `kind`. The `id` derives from the creation
/// timestamp and is unique enough within one ledger, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: Kind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction stamped with the current time. Income forces the
    /// fixed [`INCOME_CATEGORY`]; the caller's category only applies to
    /// expenses.
    pub fn new(
        kind: Kind,
        description: impl Into<String>,
        category: Option<String>,
        amount: f64,
    ) -> Self {
        let now = Utc::now();
        let category = match kind {
            Kind::Income => INCOME_CATEGORY.to_string(),
            Kind::Expense => category.unwrap_or_default(),
        };
        Self {
            id: generate_id(&now),
            kind,
            category,
            description: description.into(),
            amount,
            timestamp: now,
        }
    }
}

/// Generates a transaction ID from the creation time.
/// Format: `<timestamp_ms>-<hex_suffix>`, e.g. `1735689600123-af3c`. The
/// suffix disambiguates entries created within the same millisecond.
fn generate_id(now: &DateTime<Utc>) -> String {
    let suffix = now.timestamp_subsec_nanos() % 0x10000;
    format!("{}-{:04x}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_category_is_fixed() {
        let t = Transaction::new(
            Kind::Income,
            "Salary",
            Some("should be ignored".to_string()),
            5000.0,
        );
        assert_eq!(t.category, INCOME_CATEGORY);
    }

    #[test]
    fn test_expense_category_defaults_to_empty() {
        let t = Transaction::new(Kind::Expense, "Rent", None, 1200.5);
        assert_eq!(t.category, "");
    }

    #[test]
    fn test_id_derives_from_creation_time() {
        let t = Transaction::new(Kind::Expense, "Rent", Some("Moradia".to_string()), 1200.5);
        let millis = t.timestamp.timestamp_millis().to_string();
        assert!(t.id.starts_with(&format!("{millis}-")), "id was {}", t.id);
    }

    #[test]
    fn test_ids_distinguish_same_millisecond_entries() {
        let a = Transaction::new(Kind::Expense, "a", None, 1.0);
        let b = Transaction::new(Kind::Expense, "b", None, 2.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Income).unwrap(), "\"income\"");
        assert_eq!(
            serde_json::to_string(&Kind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(Kind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_serialized_field_names() {
        let t = Transaction::new(Kind::Expense, "Rent", Some("Moradia".to_string()), 1200.5);
        let json = serde_json::to_value(&t).unwrap();
        let object = json.as_object().unwrap();
        for field in ["id", "kind", "category", "description", "amount", "timestamp"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 6);
        assert_eq!(json["kind"], "expense");
        assert_eq!(json["amount"], 1200.5);
    }

    #[test]
    fn test_deserializes_stored_record_shape() {
        let json = r#"{
            "id": "1735689600000",
            "kind": "income",
            "category": "income",
            "description": "Salary",
            "amount": 5000,
            "timestamp": "2025-01-01T00:00:00.000Z"
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.kind, Kind::Income);
        assert_eq!(t.amount, 5000.0);
        assert_eq!(t.id, "1735689600000");
    }
}
