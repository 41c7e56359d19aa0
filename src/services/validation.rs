//! Order validation service
//!
//! Loads a property's configuration (inventory, rooms, labor rules,
//! venue rules) and runs the validation engine over it. The engine never
//! mutates state; each call is self-contained given its inputs, so
//! concurrent validations need no coordination.

use crate::{
    engine::{
        inventory::EquipmentRequest,
        labor::{calculate_labor, LaborPlan},
        rules::parse_rules,
        validator::{validate_order, ValidationReport},
    },
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct ValidationService {
    repository: Repository,
}

impl ValidationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate a proposed order. Fail-closed: if the configuration
    /// cannot be loaded, the caller gets `valid: false` with a generic
    /// service-error entry rather than an HTTP error or a partial
    /// report.
    pub async fn validate_order(
        &self,
        property_id: i32,
        requests: &[EquipmentRequest],
        attendees: Option<i32>,
        event_duration_hours: f64,
    ) -> ValidationReport {
        match self
            .try_validate(property_id, requests, attendees, event_duration_hours)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(property_id, "Order validation failed: {}", e);
                ValidationReport::service_error(&e.to_string())
            }
        }
    }

    async fn try_validate(
        &self,
        property_id: i32,
        requests: &[EquipmentRequest],
        attendees: Option<i32>,
        event_duration_hours: f64,
    ) -> AppResult<ValidationReport> {
        // A missing property is a service-level failure, not an
        // adjustable order input
        self.repository.properties.get_by_id(property_id).await?;

        let stock = self.repository.inventory.list_available(property_id).await?;
        let rooms = self.repository.rooms.list_for_property(property_id).await?;
        let rules = self
            .repository
            .labor_rules
            .list_for_property(property_id)
            .await?;
        let venue_rules = self
            .repository
            .unions
            .venue_rules_for_property(property_id)
            .await?;

        Ok(validate_order(
            requests,
            &stock,
            &rooms,
            &rules,
            &venue_rules,
            attendees,
            event_duration_hours,
        ))
    }

    /// Standalone labor plan for an event (the assistant's
    /// calculate_labor_requirements function). Unparseable rules are
    /// folded into the plan's warnings.
    pub async fn calculate_labor(
        &self,
        property_id: i32,
        equipment: &[EquipmentRequest],
        attendees: i32,
        event_duration_hours: f64,
    ) -> AppResult<LaborPlan> {
        self.repository.properties.get_by_id(property_id).await?;

        let rules = self
            .repository
            .labor_rules
            .list_for_property(property_id)
            .await?;
        let venue_rules = self
            .repository
            .unions
            .venue_rules_for_property(property_id)
            .await?;

        let (specs, mut rule_warnings) = parse_rules(&rules);
        let mut plan = calculate_labor(
            &specs,
            &venue_rules,
            equipment,
            attendees,
            event_duration_hours,
        );
        rule_warnings.append(&mut plan.warnings);
        plan.warnings = rule_warnings;
        Ok(plan)
    }
}
