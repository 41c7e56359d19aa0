//! Data models for Encore

pub mod enums;
pub mod inventory;
pub mod labor_rule;
pub mod labor_union;
pub mod property;
pub mod room;

// Re-export commonly used types
pub use enums::InventoryStatus;
pub use inventory::{InventoryItem, InventoryQuery};
pub use labor_rule::LaborRule;
pub use labor_union::{LaborUnion, UnionEquipmentRequirement, UnionScheduleRule, UnionVenueRule};
pub use property::Property;
pub use room::Room;
