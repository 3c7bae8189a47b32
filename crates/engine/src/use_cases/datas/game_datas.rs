//! Game datas service - every registry of a project, loaded together.

use std::sync::Arc;
use thiserror::Error;

use gamedatas_domain::{Armor, Decodable, EntityKind, Item, Weapon};

use crate::infrastructure::app_settings::DatasSettings;
use crate::infrastructure::importers::{DatasRegistry, LoadError, LoadState};
use crate::infrastructure::ports::FileSourcePort;

/// Errors that can occur while loading a project's datas.
#[derive(Debug, Error)]
pub enum GameDatasError {
    #[error("Failed to load {kind} datas: {source}")]
    Load {
        kind: EntityKind,
        #[source]
        source: LoadError,
    },
}

impl GameDatasError {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Load { kind, .. } => *kind,
        }
    }
}

/// Load outcome of one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: EntityKind,
    pub state: LoadState,
    /// Allocated slots (highest id + 1).
    pub slots: usize,
    /// Entities actually present.
    pub entities: usize,
}

/// Registries for every entity kind of a project.
pub struct GameDatas {
    pub armors: DatasRegistry<Armor>,
    pub weapons: DatasRegistry<Weapon>,
    pub items: DatasRegistry<Item>,
}

impl GameDatas {
    /// Create unloaded registries sharing one file source and settings.
    pub fn new(source: Arc<dyn FileSourcePort>, settings: DatasSettings) -> Self {
        Self {
            armors: DatasRegistry::for_kind(source.clone(), settings.clone()),
            weapons: DatasRegistry::for_kind(source.clone(), settings.clone()),
            items: DatasRegistry::for_kind(source, settings),
        }
    }

    /// Load every registry concurrently.
    ///
    /// The first failure aborts the whole load; registries whose load was
    /// still in flight stay [`LoadState::Unloaded`].
    pub async fn load(&mut self) -> Result<Vec<KindSummary>, GameDatasError> {
        let Self {
            armors,
            weapons,
            items,
        } = self;

        tokio::try_join!(
            load_kind(armors),
            load_kind(weapons),
            load_kind(items),
        )?;

        Ok(self.summary())
    }

    pub fn is_loaded(&self) -> bool {
        self.summary()
            .iter()
            .all(|summary| summary.state == LoadState::Loaded)
    }

    /// Per-kind state and counts.
    pub fn summary(&self) -> Vec<KindSummary> {
        vec![
            summarize(&self.armors),
            summarize(&self.weapons),
            summarize(&self.items),
        ]
    }
}

async fn load_kind<T: Decodable>(registry: &mut DatasRegistry<T>) -> Result<(), GameDatasError> {
    registry.load().await.map_err(|source| GameDatasError::Load {
        kind: T::KIND,
        source,
    })
}

fn summarize<T: Decodable>(registry: &DatasRegistry<T>) -> KindSummary {
    KindSummary {
        kind: T::KIND,
        state: registry.state(),
        slots: registry.count(),
        entities: registry.len(),
    }
}
