//! File source port for abstracting where data files come from.
//!
//! Registries only ever ask for the text of a logical data file; the port
//! decides how that path is resolved (project directory, archive, mock).

use async_trait::async_trait;
use std::path::Path;

/// Port for reading game data files.
///
/// Paths are logical, relative to the project root (e.g.
/// `Content/Datas/armors.json`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileSourcePort: Send + Sync {
    /// Read file contents as string.
    async fn read_to_string(&self, path: &Path) -> anyhow::Result<String>;
}
