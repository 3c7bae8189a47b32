//! Weapon entity - equipment used to attack

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decodable::{decode_record, Decodable, EntityKind};
use crate::error::DomainError;
use crate::ids::EntityId;

fn default_one_hand() -> bool {
    true
}

/// A weapon definition from `weapons.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: EntityId,
    pub name: String,
    /// Weapon kind id (sword, bow, ...)
    #[serde(rename = "type", default)]
    pub weapon_kind: u32,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub description: String,
    /// Whether the weapon leaves the other hand free
    #[serde(default = "default_one_hand")]
    pub one_hand: bool,
    /// Damage formula, evaluated by the battle system
    #[serde(default)]
    pub damage: String,
}

impl Decodable for Weapon {
    const KIND: EntityKind = EntityKind::Weapon;

    fn decode(record: &Value) -> Result<Self, DomainError> {
        let weapon: Weapon = decode_record(record)?;
        if weapon.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Weapon {} name cannot be empty",
                weapon.id
            )));
        }
        Ok(weapon)
    }
}
