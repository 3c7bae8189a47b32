//! Data file importers.
//!
//! Loads a project's game data files into id-indexed registries, one per
//! entity kind.

mod loader;
mod registry;
mod table;

pub use loader::{decode_document, decode_value, DecodedDocument, LoadError};
pub use registry::{DatasRegistry, LoadState};
pub use table::EntityTable;
