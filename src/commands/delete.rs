//! Remove and clear command handlers.
//!
//! Both operations are destructive, so they ask for confirmation unless the
//! caller passed `--yes`. Both mutate the ledger snapshot loaded at the start
//! of the command rather than re-reading between filter and write.

use crate::args::{ClearArgs, RemoveArgs};
use crate::commands::{confirm, Out};
use crate::model::MonthlyLedger;
use crate::{Config, Result};

/// Removes a single entry from a month's ledger by ID.
///
/// An unknown ID is not an error: the ledger is written back unchanged and
/// the message says nothing was removed.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message saying whether an entry was removed.
/// - The new ledger state.
///
/// # Errors
///
/// - Returns an error if the ledger record cannot be written.
/// - Returns an error if the confirmation prompt cannot be read.
pub async fn remove(config: Config, args: RemoveArgs) -> Result<Out<MonthlyLedger>> {
    if !args.yes() {
        let question = format!(
            "Really remove {} entry {} from {}?",
            args.kind(),
            args.id(),
            args.month()
        );
        if !confirm(&question)? {
            return Ok(Out::new_message("Cancelled; nothing was removed"));
        }
    }

    let store = config.store();
    let snapshot = store.load_or_default(args.month()).await;
    let updated = store
        .remove(args.month(), &snapshot, args.kind(), args.id())
        .await?;

    let before = snapshot.transactions(args.kind()).len();
    let after = updated.transactions(args.kind()).len();
    let message = if after < before {
        format!("Removed {} entry {} from {}", args.kind(), args.id(), args.month())
    } else {
        format!(
            "No {} entry with ID {} in {}; nothing was removed",
            args.kind(),
            args.id(),
            args.month()
        )
    };
    Ok(Out::new(message, updated))
}

/// Clears all of a month's income or expense entries, preserving the other
/// sequence and the opening balance.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the number of entries cleared.
/// - The new ledger state.
///
/// # Errors
///
/// - Returns an error if the ledger record cannot be written.
/// - Returns an error if the confirmation prompt cannot be read.
pub async fn clear(config: Config, args: ClearArgs) -> Result<Out<MonthlyLedger>> {
    if !args.yes() {
        let question = format!(
            "Really clear every {} entry recorded in {}?",
            args.kind(),
            args.month()
        );
        if !confirm(&question)? {
            return Ok(Out::new_message("Cancelled; nothing was cleared"));
        }
    }

    let store = config.store();
    let snapshot = store.load_or_default(args.month()).await;
    let cleared = snapshot.transactions(args.kind()).len();
    let updated = store.clear(args.month(), &snapshot, args.kind()).await?;

    let message = format!(
        "Cleared {} {} entr{} from {}",
        cleared,
        args.kind(),
        if cleared == 1 { "y" } else { "ies" },
        args.month()
    );
    Ok(Out::new(message, updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddArgs;
    use crate::commands::add;
    use crate::model::{Kind, Month};
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_remove_entry() {
        let env = TestEnv::new().await;
        let created = add(
            env.config(),
            AddArgs::new(Month::Janeiro, Kind::Expense, "Rent", None, "1200.50"),
        )
        .await
        .unwrap();
        let id = created.structure().unwrap().id.clone();

        let out = remove(
            env.config(),
            RemoveArgs::new(Month::Janeiro, Kind::Expense, &id, true),
        )
        .await
        .unwrap();

        assert!(out.message().contains("Removed expense entry"));
        assert!(out.structure().unwrap().expenses.is_empty());
        let reloaded = env.store().load_or_default(Month::Janeiro).await;
        assert!(reloaded.expenses.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_reports_nothing_removed() {
        let env = TestEnv::new().await;
        add(
            env.config(),
            AddArgs::new(Month::Janeiro, Kind::Expense, "Rent", None, "1200.50"),
        )
        .await
        .unwrap();

        let out = remove(
            env.config(),
            RemoveArgs::new(Month::Janeiro, Kind::Expense, "no-such-id", true),
        )
        .await
        .unwrap();

        assert!(out.message().contains("nothing was removed"));
        assert_eq!(out.structure().unwrap().expenses.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_expenses_keeps_income() {
        let env = TestEnv::new().await;
        add(
            env.config(),
            AddArgs::new(Month::Maio, Kind::Income, "Salary", None, "5000.00"),
        )
        .await
        .unwrap();
        for amount in ["100.00", "200.00"] {
            add(
                env.config(),
                AddArgs::new(Month::Maio, Kind::Expense, "Stuff", None, amount),
            )
            .await
            .unwrap();
        }

        let out = clear(
            env.config(),
            ClearArgs::new(Month::Maio, Kind::Expense, true),
        )
        .await
        .unwrap();

        assert!(out.message().contains("Cleared 2 expense entries"));
        let updated = out.structure().unwrap();
        assert!(updated.expenses.is_empty());
        assert_eq!(updated.income.len(), 1);

        let reloaded = env.store().load_or_default(Month::Maio).await;
        assert_eq!(&reloaded, updated);
    }
}
