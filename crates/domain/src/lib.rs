//! gamedatas Domain - game data entities and the record decoding contract.
//!
//! Everything here is pure: no file access, no logging. The engine crate
//! reads data files and drives [`Decodable`] once per record.

pub mod decodable;
pub mod entities;
pub mod error;
pub mod ids;

pub use decodable::{declared_id, decode_record, json_type_name, Decodable, EntityKind};
pub use entities::{Armor, Item, Weapon};
pub use error::DomainError;
pub use ids::EntityId;
