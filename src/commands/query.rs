//! List and stats command handlers.

use crate::args::{ListArgs, StatsArgs};
use crate::commands::Out;
use crate::model::amount::format_brl;
use crate::model::{Kind, Transaction};
use crate::{Config, Result};
use serde::Serialize;

/// Lists a month's income or expense entries, newest first, with the
/// sequence total.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with one line per entry and the formatted total.
/// - The entries in display order (timestamp descending).
pub async fn list(config: Config, args: ListArgs) -> Result<Out<Vec<Transaction>>> {
    let ledger = config.store().load_or_default(args.month()).await;

    let mut entries = ledger.transactions(args.kind()).to_vec();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let total = ledger.total(args.kind());

    let label = match args.kind() {
        Kind::Income => "Income",
        Kind::Expense => "Expenses",
    };
    let mut lines = vec![format!("{} for {}:", label, args.month())];
    if entries.is_empty() {
        lines.push("  (no entries)".to_string());
    }
    for entry in &entries {
        lines.push(format!(
            "  {}  {}  {}  [{}]",
            entry.timestamp.format("%Y-%m-%d"),
            entry.description,
            format_brl(entry.amount),
            entry.id
        ));
    }
    lines.push(format!("Total: {}", format_brl(total)));

    Ok(Out::new(lines.join("\n"), entries))
}

/// Per-month aggregate figures.
#[derive(Debug, Clone, Serialize)]
pub struct MonthStats {
    pub income_total: f64,
    pub expense_total: f64,
    pub balance: f64,
}

/// Shows a month's income total, expense total and balance.
///
/// The balance is income minus expenses; the stored opening balance does not
/// participate.
pub async fn stats(config: Config, args: StatsArgs) -> Result<Out<MonthStats>> {
    let ledger = config.store().load_or_default(args.month()).await;

    let summary = MonthStats {
        income_total: ledger.total(Kind::Income),
        expense_total: ledger.total(Kind::Expense),
        balance: ledger.balance(),
    };

    let message = format!(
        "Stats for {}:\n  Income:   {}\n  Expenses: {}\n  Balance:  {}",
        args.month(),
        format_brl(summary.income_total),
        format_brl(summary.expense_total),
        format_brl(summary.balance)
    );
    Ok(Out::new(message, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::model::Month;
    use crate::test::TestEnv;

    async fn seed(env: &TestEnv) {
        add(
            env.config(),
            AddArgs::new(Month::Janeiro, Kind::Income, "Salary", None, "5000.00"),
        )
        .await
        .unwrap();
        add(
            env.config(),
            AddArgs::new(
                Month::Janeiro,
                Kind::Expense,
                "Rent",
                Some("Moradia".to_string()),
                "1200.50",
            ),
        )
        .await
        .unwrap();
        add(
            env.config(),
            AddArgs::new(
                Month::Janeiro,
                Kind::Expense,
                "Groceries",
                Some("Supermercado".to_string()),
                "350.00",
            ),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_list_newest_first_with_total() {
        let env = TestEnv::new().await;
        seed(&env).await;

        let out = list(env.config(), ListArgs::new(Month::Janeiro, Kind::Expense))
            .await
            .unwrap();

        let entries = out.structure().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].timestamp >= entries[1].timestamp);
        assert!(out.message().contains("Rent"));
        assert!(out.message().contains("Groceries"));
        assert!(out.message().contains("Total: R$ 1.550,50"));
    }

    #[tokio::test]
    async fn test_list_empty_month() {
        let env = TestEnv::new().await;

        let out = list(env.config(), ListArgs::new(Month::Dezembro, Kind::Income))
            .await
            .unwrap();

        assert!(out.structure().unwrap().is_empty());
        assert!(out.message().contains("(no entries)"));
        assert!(out.message().contains("Total: R$ 0,00"));
    }

    #[tokio::test]
    async fn test_stats_totals_and_balance() {
        let env = TestEnv::new().await;
        seed(&env).await;

        let out = stats(env.config(), StatsArgs::new(Month::Janeiro))
            .await
            .unwrap();

        let summary = out.structure().unwrap();
        assert_eq!(summary.income_total, 5000.0);
        assert_eq!(summary.expense_total, 1550.5);
        assert_eq!(summary.balance, 3449.5);
        assert!(out.message().contains("R$ 3.449,50"));
    }

    #[tokio::test]
    async fn test_stats_empty_month_is_all_zeros() {
        let env = TestEnv::new().await;

        let out = stats(env.config(), StatsArgs::new(Month::Fevereiro))
            .await
            .unwrap();

        let summary = out.structure().unwrap();
        assert_eq!(summary.income_total, 0.0);
        assert_eq!(summary.expense_total, 0.0);
        assert_eq!(summary.balance, 0.0);
    }
}
