//! The twelve months a ledger can be addressed by.
//!
//! Month names double as storage keys: the record for March 2025 lives under
//! the key `MARÇO_2025`. The year is fixed; the application tracks a single
//! calendar year and the key format makes that limitation explicit.

use clap::ValueEnum;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The calendar year all ledger keys are scoped to.
pub const LEDGER_YEAR: u16 = 2025;

/// A calendar month, displayed with its Brazilian Portuguese uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Month {
    Janeiro,
    Fevereiro,
    #[value(alias = "março")]
    Marco,
    Abril,
    Maio,
    Junho,
    Julho,
    Agosto,
    Setembro,
    Outubro,
    Novembro,
    Dezembro,
}

impl Month {
    /// The uppercase display name, e.g. `JANEIRO`.
    pub fn name(&self) -> &'static str {
        match self {
            Month::Janeiro => "JANEIRO",
            Month::Fevereiro => "FEVEREIRO",
            Month::Marco => "MARÇO",
            Month::Abril => "ABRIL",
            Month::Maio => "MAIO",
            Month::Junho => "JUNHO",
            Month::Julho => "JULHO",
            Month::Agosto => "AGOSTO",
            Month::Setembro => "SETEMBRO",
            Month::Outubro => "OUTUBRO",
            Month::Novembro => "NOVEMBRO",
            Month::Dezembro => "DEZEMBRO",
        }
    }

    /// The storage key this month's ledger record is saved under.
    pub fn key(&self) -> String {
        format!("{}_{}", self.name(), LEDGER_YEAR)
    }

    /// All twelve months in calendar order.
    pub fn all() -> [Month; 12] {
        [
            Month::Janeiro,
            Month::Fevereiro,
            Month::Marco,
            Month::Abril,
            Month::Maio,
            Month::Junho,
            Month::Julho,
            Month::Agosto,
            Month::Setembro,
            Month::Outubro,
            Month::Novembro,
            Month::Dezembro,
        ]
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
