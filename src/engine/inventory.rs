//! Inventory availability checking

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::enums::InventoryStatus;
use crate::models::inventory::InventoryItem;

/// One requested equipment line in a proposed order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentRequest {
    /// Item name or category ("Wireless Mic", "Audio", ...)
    pub item: String,
    /// Units requested
    pub quantity: i32,
}

/// Availability result for one equipment line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemCheckResult {
    pub item_name: String,
    pub requested: i32,
    pub available: i32,
    pub sufficient: bool,
    /// Names of the inventory rows that matched the request
    pub matching_items: Vec<String>,
}

fn matches_request(item: &InventoryItem, term: &str) -> bool {
    if item.name.eq_ignore_ascii_case(term) {
        return true;
    }
    item.category
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(term))
}

/// Check each requested line against a property's stock.
///
/// A line matches inventory rows by exact item name OR by category
/// (case-insensitive). The OR is deliberately permissive: it can
/// over-count when an item name collides with an unrelated category, a
/// trade-off favoring recall since results are advisory. Only rows with
/// `available` status count. No matching rows is a normal negative
/// result (available 0), not an error.
pub fn check_inventory(
    requests: &[EquipmentRequest],
    stock: &[InventoryItem],
) -> Vec<ItemCheckResult> {
    requests
        .iter()
        .map(|request| {
            let mut available = 0;
            let mut matching_items = Vec::new();
            for item in stock {
                if InventoryStatus::from(item.status) != InventoryStatus::Available {
                    continue;
                }
                if matches_request(item, &request.item) {
                    available += item.quantity_available;
                    matching_items.push(item.name.clone());
                }
            }
            ItemCheckResult {
                item_name: request.item.clone(),
                requested: request.quantity,
                available,
                sufficient: available >= request.quantity,
                matching_items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, quantity: i32, status: i16) -> InventoryItem {
        InventoryItem {
            id: 0,
            property_id: 1,
            name: name.to_string(),
            category: Some(category.to_string()),
            sub_category: None,
            quantity_available: quantity,
            status,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn request(item: &str, quantity: i32) -> EquipmentRequest {
        EquipmentRequest {
            item: item.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_sufficient_by_name() {
        let stock = vec![item("Wireless Mic", "Audio", 5, 0)];
        let results = check_inventory(&[request("Wireless Mic", 3)], &stock);
        assert_eq!(results.len(), 1);
        assert!(results[0].sufficient);
        assert_eq!(results[0].available, 5);
        assert_eq!(results[0].matching_items, vec!["Wireless Mic"]);
    }

    #[test]
    fn test_insufficient_by_name() {
        let stock = vec![item("Wireless Mic", "Audio", 5, 0)];
        let results = check_inventory(&[request("Wireless Mic", 8)], &stock);
        assert!(!results[0].sufficient);
        assert_eq!(results[0].available, 5);
        assert_eq!(results[0].requested, 8);
    }

    #[test]
    fn test_category_match_sums_across_rows() {
        let stock = vec![
            item("Wireless Mic", "Audio", 5, 0),
            item("Wired Mic", "Audio", 3, 0),
            item("Projector", "Video", 2, 0),
        ];
        let results = check_inventory(&[request("Audio", 7)], &stock);
        assert!(results[0].sufficient);
        assert_eq!(results[0].available, 8);
        assert_eq!(results[0].matching_items.len(), 2);
    }

    #[test]
    fn test_non_available_status_excluded() {
        let stock = vec![
            item("Wireless Mic", "Audio", 5, 0),
            item("Wireless Mic", "Audio", 10, 1), // maintenance
            item("Wireless Mic", "Audio", 10, 3), // out of service
        ];
        let results = check_inventory(&[request("Wireless Mic", 6)], &stock);
        assert_eq!(results[0].available, 5);
        assert!(!results[0].sufficient);
    }

    #[test]
    fn test_undefined_status_code_not_counted() {
        // A row with a status code outside the defined range must never
        // add to availability, even if it slipped past write-time checks
        let stock = vec![item("Wireless Mic", "Audio", 5, 9)];
        let results = check_inventory(&[request("Wireless Mic", 3)], &stock);
        assert_eq!(results[0].available, 0);
        assert!(!results[0].sufficient);
        assert!(results[0].matching_items.is_empty());
    }

    #[test]
    fn test_no_match_is_zero_not_error() {
        let results = check_inventory(&[request("Fog Machine", 1)], &[]);
        assert_eq!(results[0].available, 0);
        assert!(!results[0].sufficient);
        assert!(results[0].matching_items.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let stock = vec![item("Wireless Mic", "Audio", 5, 0)];
        let results = check_inventory(&[request("wireless mic", 2)], &stock);
        assert!(results[0].sufficient);
        let results = check_inventory(&[request("AUDIO", 2)], &stock);
        assert!(results[0].sufficient);
    }

    #[test]
    fn test_exact_boundary_is_sufficient() {
        let stock = vec![item("Uplight", "Lighting", 12, 0)];
        let results = check_inventory(&[request("Uplight", 12)], &stock);
        assert!(results[0].sufficient);
    }
}
