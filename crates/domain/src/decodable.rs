//! Record decoding contract shared by every entity kind.
//!
//! A registry is generic over `T: Decodable`; the type parameter selects both
//! the data file to read and the per-record field mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DomainError;

/// The kinds of game data a project ships, one data file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Armor,
    Weapon,
    Item,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Armor, Self::Weapon, Self::Item];

    /// Data file path, relative to the project root.
    pub fn file_path(self) -> &'static str {
        match self {
            Self::Armor => "Content/Datas/armors.json",
            Self::Weapon => "Content/Datas/weapons.json",
            Self::Item => "Content/Datas/items.json",
        }
    }

    /// Key of the top-level array holding this kind's records.
    pub fn document_key(self) -> &'static str {
        match self {
            Self::Armor => "armors",
            Self::Weapon => "weapons",
            Self::Item => "items",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Armor => write!(f, "armor"),
            Self::Weapon => write!(f, "weapon"),
            Self::Item => write!(f, "item"),
        }
    }
}

/// Capability of turning one JSON record into one typed entity.
pub trait Decodable: Sized {
    /// Kind this type decodes; picks the default file and document key.
    const KIND: EntityKind;

    /// Decode a single record.
    ///
    /// Fails with a [`DomainError`] when a required field is absent or has
    /// the wrong JSON type, or when a kind-specific rule is violated.
    fn decode(record: &Value) -> Result<Self, DomainError>;
}

/// The record's `id` field as declared, before any range check.
///
/// Fails with [`DomainError::InvalidId`] when the id is missing, negative,
/// or not an integer, and with [`DomainError::Parse`] when the record is
/// not an object.
pub fn declared_id(record: &Value) -> Result<u64, DomainError> {
    let Some(fields) = record.as_object() else {
        return Err(DomainError::parse(format!(
            "record must be a JSON object, got {}",
            json_type_name(record)
        )));
    };
    match fields.get("id") {
        None => Err(DomainError::invalid_id("missing \"id\" field")),
        Some(Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
            (Some(id), _) => Ok(id),
            (None, Some(negative)) => Err(DomainError::invalid_id(format!(
                "id must not be negative, got {negative}"
            ))),
            (None, None) => Err(DomainError::invalid_id(format!(
                "id must be an integer, got {n}"
            ))),
        },
        Some(other) => Err(DomainError::invalid_id(format!(
            "id must be an integer, got {}",
            json_type_name(other)
        ))),
    }
}

/// Map a record onto `T` through serde.
///
/// The id is checked first so a bad id is reported as
/// [`DomainError::InvalidId`] rather than a generic parse failure.
pub fn decode_record<T: DeserializeOwned>(record: &Value) -> Result<T, DomainError> {
    let id = declared_id(record)?;
    if u32::try_from(id).is_err() {
        return Err(DomainError::invalid_id(format!("id {id} does not fit in 32 bits")));
    }
    Ok(T::deserialize(record)?)
}

/// Human-readable JSON type name for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
