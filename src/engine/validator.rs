//! Order validation orchestration
//!
//! Composes the inventory, room, and labor checks into a single report.
//! Inventory shortfalls and a missing room fail the order; labor
//! findings are informational and only ever add warnings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::inventory::{check_inventory, EquipmentRequest, ItemCheckResult};
use crate::engine::labor::{calculate_labor, LaborPlan};
use crate::engine::rooms::{max_capacity, suitable_rooms};
use crate::engine::rules::parse_rules;
use crate::models::labor_rule::LaborRule;
use crate::models::labor_union::UnionVenueRule;
use crate::models::room::Room;

/// Inventory section of a validation report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryCheck {
    pub passed: bool,
    pub items: Vec<ItemCheckResult>,
}

/// Room section of a validation report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomCheck {
    pub passed: bool,
    pub details: String,
}

/// Labor section of a validation report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LaborCheck {
    pub passed: bool,
    pub details: Option<LaborPlan>,
}

/// Full validation verdict for a proposed order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub inventory_check: InventoryCheck,
    pub room_check: RoomCheck,
    pub labor_check: LaborCheck,
}

impl ValidationReport {
    /// Fail-closed report for when validation itself could not run.
    /// Inability to validate is treated as validation failure.
    pub fn service_error(message: &str) -> Self {
        Self {
            valid: false,
            errors: vec![format!("Validation service error: {}", message)],
            warnings: Vec::new(),
            inventory_check: InventoryCheck {
                passed: false,
                items: Vec::new(),
            },
            room_check: RoomCheck {
                passed: false,
                details: "Not checked".to_string(),
            },
            labor_check: LaborCheck {
                passed: false,
                details: None,
            },
        }
    }
}

/// Validate a proposed order against a property's configuration.
///
/// `valid` is false iff any inventory line is insufficient or no room
/// can host the attendee count. Labor findings and unparseable rules
/// populate `warnings` only. Pure over its inputs: identical inputs
/// always yield an identical report.
pub fn validate_order(
    requests: &[EquipmentRequest],
    stock: &[crate::models::inventory::InventoryItem],
    rooms: &[Room],
    rules: &[LaborRule],
    venue_rules: &[UnionVenueRule],
    attendees: Option<i32>,
    event_duration_hours: f64,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Inventory
    let items = check_inventory(requests, stock);
    for item in &items {
        if !item.sufficient {
            errors.push(format!(
                "Insufficient inventory for {}: requested {}, available {}",
                item.item_name, item.requested, item.available
            ));
        }
    }
    let inventory_passed = items.iter().all(|i| i.sufficient);

    // Room capacity
    let room_check = match attendees {
        Some(count) => {
            let suitable = suitable_rooms(rooms, count);
            if let Some(tightest) = suitable.first() {
                RoomCheck {
                    passed: true,
                    details: format!(
                        "{} room(s) can host {} attendees; smallest suitable: {} (capacity {})",
                        suitable.len(),
                        count,
                        tightest.name,
                        tightest.capacity
                    ),
                }
            } else {
                let details = match max_capacity(rooms) {
                    Some(largest) => format!(
                        "No room can accommodate {} attendees (largest room capacity: {})",
                        count, largest
                    ),
                    None => "No rooms are configured for this property".to_string(),
                };
                errors.push(details.clone());
                RoomCheck {
                    passed: false,
                    details,
                }
            }
        }
        None => RoomCheck {
            passed: true,
            details: "Attendee count not provided; room capacity not checked".to_string(),
        },
    };

    // Labor (informational)
    let (specs, rule_warnings) = parse_rules(rules);
    warnings.extend(rule_warnings);
    let plan = calculate_labor(
        &specs,
        venue_rules,
        requests,
        attendees.unwrap_or(0),
        event_duration_hours,
    );
    warnings.extend(plan.warnings.iter().cloned());

    let valid = inventory_passed && room_check.passed;

    ValidationReport {
        valid,
        errors,
        warnings,
        inventory_check: InventoryCheck {
            passed: inventory_passed,
            items,
        },
        room_check,
        labor_check: LaborCheck {
            passed: true,
            details: Some(plan),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::InventoryItem;

    fn item(name: &str, category: &str, quantity: i32) -> InventoryItem {
        InventoryItem {
            id: 0,
            property_id: 1,
            name: name.to_string(),
            category: Some(category.to_string()),
            sub_category: None,
            quantity_available: quantity,
            status: 0,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn room(name: &str, capacity: i32) -> Room {
        Room {
            id: 0,
            property_id: 1,
            name: name.to_string(),
            capacity,
            dimensions: None,
            built_in_av: None,
            features: None,
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

    fn rule(rule_type: &str, rule_data: &str) -> LaborRule {
        LaborRule {
            id: 0,
            property_id: 1,
            rule_type: rule_type.to_string(),
            rule_data: rule_data.to_string(),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_valid_order() {
        let stock = vec![item("Wireless Mic", "Audio", 5)];
        let rooms = vec![room("A", 50), room("B", 200)];
        let report = validate_order(
            &[request("Wireless Mic", 3)],
            &stock,
            &rooms,
            &[],
            &[],
            Some(120),
            4.0,
        );
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(report.inventory_check.passed);
        assert!(report.room_check.passed);
        assert!(report.room_check.details.contains("B"));
    }

    #[test]
    fn test_insufficient_inventory_fails_order() {
        let stock = vec![item("Wireless Mic", "Audio", 5)];
        let report = validate_order(
            &[request("Wireless Mic", 8)],
            &stock,
            &[room("A", 200)],
            &[],
            &[],
            Some(50),
            4.0,
        );
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec!["Insufficient inventory for Wireless Mic: requested 8, available 5"]
        );
    }

    #[test]
    fn test_no_room_fits_fails_with_max_capacity_context() {
        let rooms = vec![room("A", 50), room("B", 200)];
        let report = validate_order(&[], &[], &rooms, &[], &[], Some(300), 4.0);
        assert!(!report.valid);
        assert!(report.errors[0].contains("300"));
        assert!(report.errors[0].contains("200"));
    }

    #[test]
    fn test_no_rooms_configured() {
        let report = validate_order(&[], &[], &[], &[], &[], Some(20), 2.0);
        assert!(!report.valid);
        assert!(report.room_check.details.contains("No rooms are configured"));
    }

    #[test]
    fn test_attendees_not_given_skips_room_check() {
        let report = validate_order(&[], &[], &[], &[], &[], None, 2.0);
        assert!(report.valid);
        assert!(report.room_check.passed);
    }

    #[test]
    fn test_labor_findings_never_fail_order() {
        let rules = vec![rule(
            "union_requirements",
            r#"{"overtime_threshold": 8.0, "requires_union": true}"#,
        )];
        let report = validate_order(
            &[],
            &[],
            &[room("A", 100)],
            &rules,
            &[],
            Some(50),
            12.0,
        );
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("overtime"));
    }

    #[test]
    fn test_malformed_rule_is_warning_only() {
        let rules = vec![
            rule("technician_ratio", "this is not json"),
            rule("setup_time", r#"{"audio_setup": 2.0}"#),
        ];
        let report = validate_order(&[], &[], &[room("A", 100)], &rules, &[], Some(50), 4.0);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("invalid JSON"));
        // computation proceeded with defaults
        let plan = report.labor_check.details.unwrap();
        assert_eq!(plan.technicians_required, 1);
    }

    #[test]
    fn test_idempotence() {
        let stock = vec![item("Wireless Mic", "Audio", 5)];
        let rooms = vec![room("A", 50), room("B", 200)];
        let rules = vec![rule(
            "technician_ratio",
            r#"{"attendees_per_tech": 50, "minimum_techs": 1}"#,
        )];
        let requests = vec![request("Wireless Mic", 3)];
        let a = validate_order(&requests, &stock, &rooms, &rules, &[], Some(120), 4.0);
        let b = validate_order(&requests, &stock, &rooms, &rules, &[], Some(120), 4.0);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_service_error_report_is_fail_closed() {
        let report = ValidationReport::service_error("database unavailable");
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec!["Validation service error: database unavailable"]
        );
        assert!(!report.inventory_check.passed);
        assert!(!report.room_check.passed);
    }
}
