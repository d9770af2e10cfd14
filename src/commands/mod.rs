//! Command handlers for the contas CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod add;
mod categories;
mod chart;
mod delete;
mod init;
mod query;

use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;
use tracing::{debug, info};

pub use add::add;
pub use categories::categories;
pub use chart::chart;
pub use chart::CategoryBucket;
pub use delete::{clear, remove};
pub use init::init;
pub use query::{list, stats, MonthStats};

/// The output type for a command. This allows the command to return a
/// consistent message and, optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the
    /// command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Asks the user a yes/no question on the terminal and reads one line of
/// input. Anything other than an explicit yes counts as no.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout()
        .flush()
        .context("Unable to flush stdout")?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Unable to read confirmation input")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}
