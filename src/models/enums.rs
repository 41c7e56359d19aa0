//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inventory item status codes.
/// Only `Available` stock counts toward order availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum InventoryStatus {
    Available = 0,
    Maintenance = 1,
    Reserved = 2,
    OutOfService = 3,
}

impl From<i16> for InventoryStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => InventoryStatus::Available,
            1 => InventoryStatus::Maintenance,
            2 => InventoryStatus::Reserved,
            // Unknown codes must never count as available stock
            _ => InventoryStatus::OutOfService,
        }
    }
}

impl From<InventoryStatus> for i16 {
    fn from(s: InventoryStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InventoryStatus::Available => "available",
            InventoryStatus::Maintenance => "maintenance",
            InventoryStatus::Reserved => "reserved",
            InventoryStatus::OutOfService => "out_of_service",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for status in [
            InventoryStatus::Available,
            InventoryStatus::Maintenance,
            InventoryStatus::Reserved,
            InventoryStatus::OutOfService,
        ] {
            assert_eq!(InventoryStatus::from(i16::from(status)), status);
        }
    }

    #[test]
    fn test_undefined_codes_are_not_available() {
        for code in [4, 9, 100, -1, i16::MAX] {
            assert_ne!(InventoryStatus::from(code), InventoryStatus::Available);
        }
    }
}
