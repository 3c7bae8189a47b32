//! Turns the text of a data file into an [`EntityTable`].

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

use gamedatas_domain::{declared_id, json_type_name, Decodable, EntityId};

use super::table::EntityTable;
use crate::infrastructure::app_settings::{DatasSettings, RecordFailurePolicy};

/// Errors that can occur while loading a registry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Data file unavailable: {path}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Record at index {index} declares id {id}, above the maximum of {max}")]
    IdOutOfRange { index: usize, id: u64, max: u32 },
    #[error("Registry has already been loaded")]
    AlreadyLoaded,
}

impl LoadError {
    /// Whether this error concerns a single record rather than the whole file.
    pub fn is_record_error(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. } | Self::IdOutOfRange { .. })
    }
}

/// A decoded data file.
#[derive(Debug)]
pub struct DecodedDocument<T> {
    pub table: EntityTable<T>,
    /// Records dropped under [`RecordFailurePolicy::Lenient`].
    pub skipped: usize,
}

/// Parse `content` as JSON and decode the array stored under `document_key`.
pub fn decode_document<T: Decodable>(
    content: &str,
    document_key: &str,
    settings: &DatasSettings,
) -> Result<DecodedDocument<T>, LoadError> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| LoadError::MalformedDocument(format!("invalid JSON: {e}")))?;
    decode_value(&document, document_key, settings)
}

/// Decode the array stored under `document_key` of an already parsed document.
///
/// Records are visited in array order, so when two records share an id the
/// later one wins.
pub fn decode_value<T: Decodable>(
    document: &Value,
    document_key: &str,
    settings: &DatasSettings,
) -> Result<DecodedDocument<T>, LoadError> {
    let Some(root) = document.as_object() else {
        return Err(LoadError::MalformedDocument(format!(
            "top level must be a JSON object, got {}",
            json_type_name(document)
        )));
    };
    let records = match root.get(document_key) {
        Some(Value::Array(records)) => records,
        Some(other) => {
            return Err(LoadError::MalformedDocument(format!(
                "\"{document_key}\" must be an array, got {}",
                json_type_name(other)
            )))
        }
        None => {
            return Err(LoadError::MalformedDocument(format!(
                "missing \"{document_key}\" array"
            )))
        }
    };

    let kind = T::KIND;
    let mut table = EntityTable::with_capacity(records.len() + 1);
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        match decode_one::<T>(index, record, settings.max_id) {
            Ok((id, entity)) => {
                if table.insert(id, entity).is_some() {
                    tracing::debug!(
                        kind = %kind,
                        id = %id,
                        index,
                        "Duplicate id, keeping the later record"
                    );
                }
            }
            Err(err) => match settings.record_policy {
                RecordFailurePolicy::Strict => return Err(err),
                RecordFailurePolicy::Lenient => {
                    tracing::warn!(kind = %kind, index, error = %err, "Skipping record");
                    skipped += 1;
                }
            },
        }
    }

    Ok(DecodedDocument { table, skipped })
}

fn decode_one<T: Decodable>(
    index: usize,
    record: &Value,
    max_id: u32,
) -> Result<(EntityId, T), LoadError> {
    let invalid = |reason: String| LoadError::InvalidRecord { index, reason };

    let raw_id = declared_id(record).map_err(|e| invalid(e.to_string()))?;
    let id = u32::try_from(raw_id)
        .ok()
        .filter(|id| *id <= max_id)
        .ok_or(LoadError::IdOutOfRange {
            index,
            id: raw_id,
            max: max_id,
        })?;

    let entity = T::decode(record).map_err(|e| invalid(e.to_string()))?;
    Ok((EntityId::new(id), entity))
}
