//! File source adapter using tokio::fs for async reads under a project root.

use anyhow::{bail, Context};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::infrastructure::ports::FileSourcePort;

/// Tokio-based file source rooted at a project directory.
///
/// Logical paths are joined onto the root; absolute paths and `..`
/// components are refused so a data file can never point outside the
/// project.
#[derive(Debug, Clone)]
pub struct TokioFileSource {
    root: PathBuf,
}

impl TokioFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> anyhow::Result<PathBuf> {
        // Prevent path traversal
        for component in path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => bail!("invalid data file path (must stay inside the project): {}", path.display()),
            }
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl FileSourcePort for TokioFileSource {
    async fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
        let full_path = self.resolve(path)?;
        tracing::debug!(path = %full_path.display(), "Reading data file");
        let content = fs::read_to_string(&full_path)
            .await
            .with_context(|| format!("failed to read {}", full_path.display()))?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_files_under_root() {
        let dir = tempfile::tempdir().expect("temp dir");
        let datas = dir.path().join("Content/Datas");
        std::fs::create_dir_all(&datas).expect("create datas dir");
        std::fs::write(datas.join("armors.json"), r#"{"armors":[]}"#).expect("write file");

        let source = TokioFileSource::new(dir.path());
        let path = Path::new("Content/Datas/armors.json");

        let content = source.read_to_string(path).await.expect("read");
        assert_eq!(content, r#"{"armors":[]}"#);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = TokioFileSource::new(dir.path());
        let path = Path::new("Content/Datas/weapons.json");

        let err = source.read_to_string(path).await.expect_err("file is missing");
        assert!(err.to_string().contains("weapons.json"));
    }

    #[tokio::test]
    async fn refuses_paths_outside_root() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = TokioFileSource::new(dir.path());

        assert!(source.read_to_string(Path::new("../secrets.json")).await.is_err());
        assert!(source.read_to_string(Path::new("/etc/passwd")).await.is_err());
    }
}
