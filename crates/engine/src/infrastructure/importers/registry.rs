//! Id-indexed registry of one entity kind.
//!
//! A registry is built in two phases: [`DatasRegistry::new`] only records
//! where the data lives, and [`DatasRegistry::load`] reads and decodes it.
//! Until `load` returns `Ok` every query answers as if the registry were
//! empty, and [`DatasRegistry::state`] tells the two cases apart.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gamedatas_domain::{Decodable, EntityId};

use super::loader::{decode_document, LoadError};
use super::table::EntityTable;
use crate::infrastructure::app_settings::DatasSettings;
use crate::infrastructure::ports::FileSourcePort;

/// Observable lifecycle of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
    Failed,
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unloaded => write!(f, "unloaded"),
            Self::Loaded => write!(f, "loaded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

enum RegistryState<T> {
    Unloaded,
    Loaded(EntityTable<T>),
    Failed(String),
}

/// All entities of kind `T` from one data file, indexed by declared id.
pub struct DatasRegistry<T> {
    source: Arc<dyn FileSourcePort>,
    file: PathBuf,
    document_key: String,
    settings: DatasSettings,
    state: RegistryState<T>,
}

impl<T: Decodable> DatasRegistry<T> {
    /// Registry reading `document_key` from `file`; nothing is read yet.
    pub fn new(
        source: Arc<dyn FileSourcePort>,
        file: impl Into<PathBuf>,
        document_key: impl Into<String>,
        settings: DatasSettings,
    ) -> Self {
        Self {
            source,
            file: file.into(),
            document_key: document_key.into(),
            settings,
            state: RegistryState::Unloaded,
        }
    }

    /// Registry for the standard data file of `T`'s kind.
    pub fn for_kind(source: Arc<dyn FileSourcePort>, settings: DatasSettings) -> Self {
        Self::new(
            source,
            T::KIND.file_path(),
            T::KIND.document_key(),
            settings,
        )
    }

    /// Read, parse, and decode the data file.
    ///
    /// Runs at most once: any later call fails with
    /// [`LoadError::AlreadyLoaded`] and leaves the registry untouched. On
    /// failure the registry moves to [`LoadState::Failed`] and exposes no
    /// entities.
    pub async fn load(&mut self) -> Result<(), LoadError> {
        if !matches!(self.state, RegistryState::Unloaded) {
            return Err(LoadError::AlreadyLoaded);
        }

        match self.read_table().await {
            Ok(table) => {
                self.state = RegistryState::Loaded(table);
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    kind = %T::KIND,
                    path = %self.file.display(),
                    error = %err,
                    "Failed to load datas"
                );
                self.state = RegistryState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    async fn read_table(&self) -> Result<EntityTable<T>, LoadError> {
        let content = self
            .source
            .read_to_string(&self.file)
            .await
            .map_err(|source| LoadError::FileUnavailable {
                path: self.file.clone(),
                source,
            })?;

        let decoded = decode_document::<T>(&content, &self.document_key, &self.settings)?;

        tracing::info!(
            kind = %T::KIND,
            path = %self.file.display(),
            slots = decoded.table.count(),
            entities = decoded.table.len(),
            skipped = decoded.skipped,
            "Loaded datas"
        );

        Ok(decoded.table)
    }
}

impl<T> DatasRegistry<T> {
    /// Entity with the given id; `None` for holes, ids past the end, or
    /// when the registry is not loaded.
    pub fn get(&self, id: impl Into<EntityId>) -> Option<&T> {
        self.table().and_then(|table| table.get(id))
    }

    /// Number of allocated slots (the id space), 0 until loaded.
    pub fn count(&self) -> usize {
        self.table().map_or(0, EntityTable::count)
    }

    /// Number of entities actually present.
    pub fn len(&self) -> usize {
        self.table().map_or(0, EntityTable::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state(&self) -> LoadState {
        match self.state {
            RegistryState::Unloaded => LoadState::Unloaded,
            RegistryState::Loaded(_) => LoadState::Loaded,
            RegistryState::Failed(_) => LoadState::Failed,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == LoadState::Loaded
    }

    /// Why the load failed, if it did.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            RegistryState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&EntityTable<T>> {
        match &self.state {
            RegistryState::Loaded(table) => Some(table),
            _ => None,
        }
    }

    /// Present entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.table().into_iter().flat_map(EntityTable::iter)
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn document_key(&self) -> &str {
        &self.document_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::app_settings::RecordFailurePolicy;
    use crate::infrastructure::ports::MockFileSourcePort;
    use gamedatas_domain::{Armor, Weapon};
    use mockall::predicate::eq;

    fn source_returning(path: &'static str, content: &'static str) -> Arc<dyn FileSourcePort> {
        let mut source = MockFileSourcePort::new();
        source
            .expect_read_to_string()
            .with(eq(PathBuf::from(path)))
            .times(1)
            .returning(move |_| Ok(content.to_string()));
        Arc::new(source)
    }

    #[tokio::test]
    async fn loads_sparse_armors() {
        let source = source_returning(
            "Content/Datas/armors.json",
            r#"{"armors":[{"id":2,"name":"Iron"},{"id":0,"name":"Cloth"}]}"#,
        );
        let mut registry = DatasRegistry::<Armor>::for_kind(source, DatasSettings::default());
        assert_eq!(registry.state(), LoadState::Unloaded);

        registry.load().await.expect("load succeeds");

        assert!(registry.is_loaded());
        assert_eq!(registry.get(0u32).map(|a| a.name.as_str()), Some("Cloth"));
        assert!(registry.get(1u32).is_none());
        assert_eq!(registry.get(2u32).map(|a| a.name.as_str()), Some("Iron"));
        assert!(registry.count() >= 3);
        assert_eq!(registry.len(), 2);

        let ids: Vec<u32> = registry.iter().map(|(id, _)| id.value()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[tokio::test]
    async fn queries_are_empty_before_load() {
        let source: Arc<dyn FileSourcePort> = Arc::new(MockFileSourcePort::new());
        let registry = DatasRegistry::<Armor>::for_kind(source, DatasSettings::default());

        assert_eq!(registry.state(), LoadState::Unloaded);
        assert_eq!(registry.count(), 0);
        assert!(registry.get(0u32).is_none());
        assert!(registry.table().is_none());
        assert_eq!(registry.iter().count(), 0);
    }

    #[tokio::test]
    async fn empty_array_is_loaded_not_failed() {
        let source = source_returning("Content/Datas/armors.json", r#"{"armors":[]}"#);
        let mut registry = DatasRegistry::<Armor>::for_kind(source, DatasSettings::default());

        registry.load().await.expect("empty list loads");

        assert_eq!(registry.state(), LoadState::Loaded);
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());
        assert!(registry.get(0u32).is_none());
    }

    #[tokio::test]
    async fn unreadable_file_fails_the_load() {
        let mut source = MockFileSourcePort::new();
        source
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("no such file")));
        let mut registry =
            DatasRegistry::<Weapon>::for_kind(Arc::new(source), DatasSettings::default());

        let err = registry.load().await.expect_err("file is missing");

        assert!(matches!(
            err,
            LoadError::FileUnavailable { ref path, .. }
                if path == Path::new("Content/Datas/weapons.json")
        ));
        assert_eq!(registry.state(), LoadState::Failed);
        assert!(registry.failure().is_some_and(|r| r.contains("weapons.json")));
        assert_eq!(registry.count(), 0);
    }

    #[tokio::test]
    async fn invalid_record_exposes_no_partial_table() {
        let source = source_returning(
            "Content/Datas/armors.json",
            r#"{"armors":[{"id":0,"name":"Cloth"},{"name":"No id"}]}"#,
        );
        let mut registry = DatasRegistry::<Armor>::for_kind(source, DatasSettings::default());

        let err = registry.load().await.expect_err("strict policy");

        assert!(matches!(err, LoadError::InvalidRecord { index: 1, .. }));
        assert_eq!(registry.state(), LoadState::Failed);
        assert!(registry.get(0u32).is_none());
    }

    #[tokio::test]
    async fn lenient_registry_loads_the_good_records() {
        let source = source_returning(
            "Content/Datas/armors.json",
            r#"{"armors":[{"id":0,"name":"Cloth"},{"name":"No id"}]}"#,
        );
        let settings = DatasSettings::default().with_record_policy(RecordFailurePolicy::Lenient);
        let mut registry = DatasRegistry::<Armor>::for_kind(source, settings);

        registry.load().await.expect("lenient policy");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0u32).map(|a| a.name.as_str()), Some("Cloth"));
    }

    #[tokio::test]
    async fn second_load_is_rejected() {
        let source = source_returning(
            "Content/Datas/armors.json",
            r#"{"armors":[{"id":0,"name":"Cloth"}]}"#,
        );
        let mut registry = DatasRegistry::<Armor>::for_kind(source, DatasSettings::default());

        registry.load().await.expect("first load");
        let err = registry.load().await.expect_err("second load");

        assert!(matches!(err, LoadError::AlreadyLoaded));
        assert!(registry.is_loaded());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn custom_file_and_key() {
        let source = source_returning(
            "mods/extra.json",
            r#"{"list":[{"id":1,"name":"Mithril Shirt"}]}"#,
        );
        let mut registry =
            DatasRegistry::<Armor>::new(source, "mods/extra.json", "list", DatasSettings::default());

        registry.load().await.expect("custom key");

        assert_eq!(registry.document_key(), "list");
        assert_eq!(registry.file(), Path::new("mods/extra.json"));
        assert_eq!(registry.get(1u32).map(|a| a.name.as_str()), Some("Mithril Shirt"));
    }
}
