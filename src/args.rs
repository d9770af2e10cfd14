//! These structs provide the CLI interface for the contas CLI.

use crate::model::{Kind, Month};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// contas: A command-line tool for tracking monthly income and expenses.
///
/// Each calendar month has its own ledger. You add income and expense entries
/// to a month, list them, view totals and the month's balance, see a
/// per-category breakdown of expenses, and remove entries or clear a whole
/// sequence. Everything is stored locally in the contas home directory.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration and database.
    ///
    /// This is the first command you should run. Decide what directory you
    /// want to store data in and pass it as --home (or CONTAS_HOME). By
    /// default it will be $HOME/contas.
    Init,
    /// Record an income or expense entry in a month's ledger.
    Add(AddArgs),
    /// List a month's income or expense entries, newest first, with the total.
    List(ListArgs),
    /// Show a month's income total, expense total and balance.
    Stats(StatsArgs),
    /// Show a month's expenses grouped by category, as chart buckets.
    Chart(ChartArgs),
    /// Remove a single entry from a month's ledger.
    Remove(RemoveArgs),
    /// Clear all of a month's income or expense entries.
    Clear(ClearArgs),
    /// Print the suggested expense categories.
    Categories,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where contas data and configuration is held.
    /// Defaults to ~/contas
    #[arg(long, env = "CONTAS_HOME", default_value_t = default_contas_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The month whose ledger receives the entry.
    month: Month,

    /// Whether this is an income or an expense entry.
    kind: Kind,

    /// A short description of the entry, e.g. "Rent".
    #[arg(long)]
    description: String,

    /// The expense category, e.g. "Moradia". Free text; see `contas
    /// categories` for suggestions. Ignored for income, which always uses the
    /// fixed income category.
    #[arg(long)]
    category: Option<String>,

    /// The amount, e.g. "1200.50". Characters other than digits and periods
    /// are stripped; input that cannot be parsed records 0.00.
    #[arg(long)]
    amount: String,
}

impl AddArgs {
    pub fn new(
        month: Month,
        kind: Kind,
        description: impl Into<String>,
        category: Option<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            month,
            kind,
            description: description.into(),
            category,
            amount: amount.into(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// The month to list.
    month: Month,

    /// Which sequence to list: income or expense entries.
    kind: Kind,
}

impl ListArgs {
    pub fn new(month: Month, kind: Kind) -> Self {
        Self { month, kind }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

#[derive(Debug, Parser, Clone)]
pub struct StatsArgs {
    /// The month to summarize.
    month: Month,
}

impl StatsArgs {
    pub fn new(month: Month) -> Self {
        Self { month }
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// The month whose expenses are broken down by category.
    month: Month,
}

impl ChartArgs {
    pub fn new(month: Month) -> Self {
        Self { month }
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

#[derive(Debug, Parser, Clone)]
pub struct RemoveArgs {
    /// The month whose ledger holds the entry.
    month: Month,

    /// Whether the entry is income or an expense.
    kind: Kind,

    /// The id of the entry to remove, as shown by `contas list`.
    id: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl RemoveArgs {
    pub fn new(month: Month, kind: Kind, id: impl Into<String>, yes: bool) -> Self {
        Self {
            month,
            kind,
            id: id.into(),
            yes,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ClearArgs {
    /// The month to clear.
    month: Month,

    /// Which sequence to clear: income or expense entries. The other sequence
    /// and the opening balance are preserved.
    kind: Kind,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl ClearArgs {
    pub fn new(month: Month, kind: Kind, yes: bool) -> Self {
        Self { month, kind, yes }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

fn default_contas_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("contas"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or CONTAS_HOME instead of relying on the default \
                contas home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("contas")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_add_expense() {
        let args = Args::parse_from([
            "contas",
            "add",
            "janeiro",
            "expense",
            "--description",
            "Rent",
            "--category",
            "Moradia",
            "--amount",
            "1200.50",
        ]);
        match args.command() {
            Command::Add(add) => {
                assert_eq!(add.month(), Month::Janeiro);
                assert_eq!(add.kind(), Kind::Expense);
                assert_eq!(add.description(), "Rent");
                assert_eq!(add.category(), Some("Moradia"));
                assert_eq!(add.amount(), "1200.50");
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_month_accents() {
        // Both the ASCII name and the accented alias parse.
        let a = Args::parse_from(["contas", "stats", "marco"]);
        let b = Args::parse_from(["contas", "stats", "março"]);
        match (a.command(), b.command()) {
            (Command::Stats(x), Command::Stats(y)) => {
                assert_eq!(x.month(), Month::Marco);
                assert_eq!(y.month(), Month::Marco);
            }
            other => panic!("expected Stats, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_clear_with_yes() {
        let args = Args::parse_from(["contas", "clear", "maio", "expense", "--yes"]);
        match args.command() {
            Command::Clear(clear) => {
                assert_eq!(clear.month(), Month::Maio);
                assert_eq!(clear.kind(), Kind::Expense);
                assert!(clear.yes());
            }
            other => panic!("expected Clear, got {other:?}"),
        }
    }
}
