//! Item entity - objects carried in the inventory

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decodable::{decode_record, Decodable, EntityKind};
use crate::error::DomainError;
use crate::ids::EntityId;

/// An item definition from `items.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    /// Item kind id (ingredient, key item, ...)
    #[serde(rename = "type", default)]
    pub item_kind: u32,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub description: String,
    /// Whether using the item removes it from the inventory
    #[serde(default)]
    pub consumable: bool,
}

impl Decodable for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn decode(record: &Value) -> Result<Self, DomainError> {
        let item: Item = decode_record(record)?;
        if item.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Item {} name cannot be empty",
                item.id
            )));
        }
        Ok(item)
    }
}
