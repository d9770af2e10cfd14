//! Categories command handler.

use crate::commands::Out;
use crate::Result;

/// The suggested expense categories offered to the user. Free text is always
/// accepted when recording an expense; this list is only a convenience.
pub const SUGGESTED_CATEGORIES: [&str; 15] = [
    "Moradia",
    "Supermercado",
    "Restaurante",
    "Transporte",
    "Saúde",
    "Lazer",
    "Cartão",
    "Internet",
    "Estudos",
    "Vestuário",
    "Academia",
    "Pets",
    "Estética",
    "Assinaturas",
    "Outros",
];

/// Prints the suggested expense categories.
pub async fn categories() -> Result<Out<Vec<String>>> {
    let names: Vec<String> = SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect();
    let message = format!("Suggested expense categories:\n  {}", names.join("\n  "));
    Ok(Out::new(message, names))
}
