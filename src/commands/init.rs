//! Init command handler.

use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the contas home directory with an initial `config.json` and an
/// empty ledger database.
///
/// # Errors
///
/// - Returns an error if the directory cannot be created.
/// - Returns an error if a database file already exists in the directory.
pub async fn init(home: &Path) -> Result<Out<String>> {
    let config = Config::create(home).await?;
    let root = config.root().display().to_string();
    let message = format!("Initialized contas home at {root}");
    Ok(Out::new(message, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_home() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("contas");

        let out = init(&home).await.unwrap();

        assert!(out.message().contains("Initialized contas home at"));
        assert!(home.join("config.json").is_file());
        assert!(home.join("contas.sqlite").is_file());
    }

    #[tokio::test]
    async fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("contas");
        init(&home).await.unwrap();

        assert!(init(&home).await.is_err());
    }
}
