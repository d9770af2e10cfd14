//! Chart command handler: the per-category expense breakdown.

use crate::args::ChartArgs;
use crate::commands::Out;
use crate::model::amount::format_brl;
use crate::model::Kind;
use crate::{Config, Result};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One slice of the expense pie: a category, its summed amount, and a display
/// color. Colors are regenerated on every render and carry no meaning beyond
/// telling slices apart; they are never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBucket {
    pub category: String,
    pub total: f64,
    pub color: String,
}

/// Shows a month's expenses grouped by category, one bucket per distinct
/// category value, with the month's expense total.
pub async fn chart(config: Config, args: ChartArgs) -> Result<Out<Vec<CategoryBucket>>> {
    let ledger = config.store().load_or_default(args.month()).await;
    let expense_total = ledger.total(Kind::Expense);

    let buckets: Vec<CategoryBucket> = ledger
        .expense_breakdown()
        .into_iter()
        .enumerate()
        .map(|(i, (category, total))| CategoryBucket {
            category,
            total,
            color: random_color(i),
        })
        .collect();

    let mut lines = vec![format!("Expense breakdown for {}:", args.month())];
    if buckets.is_empty() {
        lines.push("  (no expenses)".to_string());
    }
    for bucket in &buckets {
        lines.push(format!(
            "  {}  {}  {}",
            bucket.color,
            bucket.category,
            format_brl(bucket.total)
        ));
    }
    lines.push(format!("Total: {}", format_brl(expense_total)));

    Ok(Out::new(lines.join("\n"), buckets))
}

/// Generates a `#RRGGBB` color from the monotonic-ish system clock, mixed with
/// the bucket index so buckets rendered in the same instant still differ.
fn random_color(nonce: usize) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mixed = nanos
        .wrapping_mul(6364136223846793005)
        .wrapping_add(nonce as u128);
    format!("#{:06X}", (mixed % 0x1000000) as u32)
}
