//! Game data entities, one module per kind.

mod armor;
mod item;
mod weapon;

pub use armor::Armor;
pub use item::Item;
pub use weapon::Weapon;
