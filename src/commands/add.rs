//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::amount::format_brl;
use crate::model::Transaction;
use crate::{Config, Result};

/// Records a new income or expense entry in a month's ledger.
///
/// The amount is taken as raw text and sanitized; input that cannot be parsed
/// records a `0.00` entry rather than failing. The full updated ledger is
/// persisted before this function returns.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message describing the recorded entry.
/// - The created transaction, including its generated ID.
///
/// # Errors
///
/// - Returns an error if the ledger record cannot be written.
pub async fn add(config: Config, args: AddArgs) -> Result<Out<Transaction>> {
    let transaction = config
        .store()
        .append(
            args.month(),
            args.kind(),
            args.description(),
            args.category().map(str::to_string),
            args.amount(),
        )
        .await?;

    let message = format!(
        "Recorded {} '{}' of {} in {} with ID: {}",
        transaction.kind,
        transaction.description,
        format_brl(transaction.amount),
        args.month(),
        transaction.id
    );
    Ok(Out::new(message, transaction))
}
