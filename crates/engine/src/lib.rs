//! gamedatas Engine library.
//!
//! Loads a project's game data files into id-indexed registries.
//!
//! ## Structure
//!
//! - `infrastructure/` - File source port and adapter, settings, importers
//! - `use_cases/` - Loading every registry of a project

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::app_settings::{DatasSettings, RecordFailurePolicy};
pub use infrastructure::file_source::TokioFileSource;
pub use infrastructure::importers::{DatasRegistry, EntityTable, LoadError, LoadState};
pub use infrastructure::ports::FileSourcePort;
pub use use_cases::datas::{GameDatas, GameDatasError, KindSummary};
