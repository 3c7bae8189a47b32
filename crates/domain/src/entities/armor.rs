//! Armor entity - equipment worn to reduce incoming damage

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decodable::{decode_record, Decodable, EntityKind};
use crate::error::DomainError;
use crate::ids::EntityId;

/// An armor definition from `armors.json`
///
/// Plain data: every combination of values decoded from a valid record is a
/// valid armor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub id: EntityId,
    pub name: String,
    /// Armor kind id (helmet, body, ...), as configured by the project
    #[serde(rename = "type", default)]
    pub armor_kind: u32,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub description: String,
    /// Characteristic formulas granted while equipped
    #[serde(default)]
    pub characteristics: Vec<String>,
}

impl Decodable for Armor {
    const KIND: EntityKind = EntityKind::Armor;

    fn decode(record: &Value) -> Result<Self, DomainError> {
        let armor: Armor = decode_record(record)?;
        if armor.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Armor {} name cannot be empty",
                armor.id
            )));
        }
        Ok(armor)
    }
}
