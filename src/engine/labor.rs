//! Labor requirement calculation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::inventory::EquipmentRequest;
use crate::engine::rules::{
    RuleSpec, DEFAULT_ATTENDEES_PER_TECH, DEFAULT_AUDIO_SETUP_HOURS, DEFAULT_BREAKDOWN_HOURS,
    DEFAULT_LIGHTING_SETUP_HOURS, DEFAULT_MINIMUM_TECHS, DEFAULT_VIDEO_SETUP_HOURS,
};
use crate::models::labor_union::UnionVenueRule;

/// Computed labor requirements for a proposed event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LaborPlan {
    pub technicians_required: i32,
    pub setup_hours: f64,
    pub event_hours: f64,
    pub breakdown_hours: f64,
    /// (setup + event + breakdown) * technicians
    pub total_labor_hours: f64,
    /// Human-readable schedule narrative surfaced to end users
    pub schedule: Vec<String>,
    /// Advisory findings (overtime exposure, ...); never blocking
    pub warnings: Vec<String>,
    /// Venue-specific union rules, surfaced as free text for the caller
    /// to judge relevance; never enforced numerically
    pub venue_rule_advisories: Vec<String>,
}

fn setup_hours_for(category: &str, audio: f64, video: f64, lighting: f64) -> f64 {
    let c = category.to_lowercase();
    if c.contains("audio") {
        audio
    } else if c.contains("video") {
        video
    } else if c.contains("lighting") {
        lighting
    } else {
        0.0
    }
}

/// Format a venue rule as advisory text
pub fn venue_rule_advisory(rule: &UnionVenueRule) -> String {
    match (rule.threshold_value, rule.threshold_unit.as_deref()) {
        (Some(value), Some(unit)) => format!(
            "{} (threshold: {} {}): {}",
            rule.condition_text, value, unit, rule.action_required
        ),
        (Some(value), None) => format!(
            "{} (threshold: {}): {}",
            rule.condition_text, value, rule.action_required
        ),
        _ => format!("{}: {}", rule.condition_text, rule.action_required),
    }
}

/// Compute the labor plan for an event.
///
/// Technician headcount comes from the technician_ratio rule (default
/// 1 per 50 attendees, minimum 1), setup time from per-category
/// setup_time rules matched by substring on "audio"/"video"/"lighting"
/// (unmatched categories contribute nothing), and an overtime warning is
/// added when the event runs past the union_requirements threshold. All
/// findings here are advisory; the plan never fails an order.
pub fn calculate_labor(
    specs: &[RuleSpec],
    venue_rules: &[UnionVenueRule],
    equipment: &[EquipmentRequest],
    attendees: i32,
    event_duration_hours: f64,
) -> LaborPlan {
    let mut attendees_per_tech = DEFAULT_ATTENDEES_PER_TECH;
    let mut minimum_techs = DEFAULT_MINIMUM_TECHS;
    let mut audio_setup = DEFAULT_AUDIO_SETUP_HOURS;
    let mut video_setup = DEFAULT_VIDEO_SETUP_HOURS;
    let mut lighting_setup = DEFAULT_LIGHTING_SETUP_HOURS;
    let mut breakdown_hours = DEFAULT_BREAKDOWN_HOURS;
    let mut overtime_threshold = None;

    for spec in specs {
        match spec {
            RuleSpec::TechnicianRatio {
                attendees_per_tech: ratio,
                minimum_techs: min,
            } => {
                attendees_per_tech = *ratio;
                minimum_techs = *min;
            }
            RuleSpec::SetupTime {
                audio_setup: a,
                video_setup: v,
                lighting_setup: l,
                breakdown: b,
            } => {
                audio_setup = *a;
                video_setup = *v;
                lighting_setup = *l;
                breakdown_hours = *b;
            }
            RuleSpec::UnionRequirements {
                overtime_threshold: threshold,
                ..
            } => {
                overtime_threshold = *threshold;
            }
            RuleSpec::Unknown { .. } => {}
        }
    }

    let ratio_techs = (attendees.max(0) as u32).div_ceil(attendees_per_tech);
    let technicians_required = ratio_techs.max(minimum_techs) as i32;

    let setup_hours: f64 = equipment
        .iter()
        .map(|line| setup_hours_for(&line.item, audio_setup, video_setup, lighting_setup))
        .sum();

    let total_labor_hours =
        (setup_hours + event_duration_hours + breakdown_hours) * technicians_required as f64;

    let mut warnings = Vec::new();
    if let Some(threshold) = overtime_threshold {
        if event_duration_hours > threshold {
            warnings.push(format!(
                "Event duration {:.1}h exceeds the union overtime threshold of {:.1}h; overtime rates may apply",
                event_duration_hours, threshold
            ));
        }
    }

    let schedule = vec![
        format!(
            "Setup: {} technician(s) starting {:.1} hours before the event",
            technicians_required, setup_hours
        ),
        format!(
            "Event: {} technician(s) on site for {:.1} hours",
            technicians_required, event_duration_hours
        ),
        format!(
            "Breakdown: {:.1} hours after the event ends",
            breakdown_hours
        ),
    ];

    let venue_rule_advisories = venue_rules.iter().map(venue_rule_advisory).collect();

    LaborPlan {
        technicians_required,
        setup_hours,
        event_hours: event_duration_hours,
        breakdown_hours,
        total_labor_hours,
        schedule,
        warnings,
        venue_rule_advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(item: &str, quantity: i32) -> EquipmentRequest {
        EquipmentRequest {
            item: item.to_string(),
            quantity,
        }
    }

    fn ratio(attendees_per_tech: u32, minimum_techs: u32) -> RuleSpec {
        RuleSpec::TechnicianRatio {
            attendees_per_tech,
            minimum_techs,
        }
    }

    #[test]
    fn test_technician_count_from_ratio() {
        // ceil(120 / 50) = 3
        let plan = calculate_labor(&[ratio(50, 1)], &[], &[], 120, 4.0);
        assert_eq!(plan.technicians_required, 3);
    }

    #[test]
    fn test_technician_minimum_applies() {
        let plan = calculate_labor(&[ratio(50, 4)], &[], &[], 10, 4.0);
        assert_eq!(plan.technicians_required, 4);
    }

    #[test]
    fn test_default_ratio_when_rule_absent() {
        let plan = calculate_labor(&[], &[], &[], 10, 4.0);
        assert_eq!(plan.technicians_required, 1);
        let plan = calculate_labor(&[], &[], &[], 120, 4.0);
        assert_eq!(plan.technicians_required, 3);
    }

    #[test]
    fn test_setup_time_defaults() {
        let equipment = vec![
            request("Audio package", 1),
            request("Video wall", 1),
            request("Lighting rig", 1),
        ];
        let plan = calculate_labor(&[], &[], &equipment, 10, 4.0);
        assert!((plan.setup_hours - 6.5).abs() < 1e-9); // 2.0 + 1.5 + 3.0
        assert!((plan.breakdown_hours - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmatched_category_contributes_zero() {
        let plan = calculate_labor(&[], &[], &[request("Pipe and drape", 10)], 10, 4.0);
        assert_eq!(plan.setup_hours, 0.0);
    }

    #[test]
    fn test_setup_time_rule_overrides_defaults() {
        let specs = vec![RuleSpec::SetupTime {
            audio_setup: 4.0,
            video_setup: 2.0,
            lighting_setup: 5.0,
            breakdown: 2.5,
        }];
        let plan = calculate_labor(&specs, &[], &[request("Audio console", 1)], 10, 4.0);
        assert!((plan.setup_hours - 4.0).abs() < 1e-9);
        assert!((plan.breakdown_hours - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_labor_hours() {
        // (2.0 setup + 4.0 event + 1.0 breakdown) * 3 techs = 21
        let plan = calculate_labor(&[ratio(50, 1)], &[], &[request("Audio package", 1)], 120, 4.0);
        assert!((plan.total_labor_hours - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_overtime_warning_is_advisory() {
        let specs = vec![RuleSpec::UnionRequirements {
            overtime_threshold: Some(8.0),
            requires_union: Some(true),
        }];
        let plan = calculate_labor(&specs, &[], &[], 50, 10.0);
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("overtime"));

        let plan = calculate_labor(&specs, &[], &[], 50, 8.0);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_schedule_narrative_present() {
        let plan = calculate_labor(&[], &[], &[request("Audio package", 1)], 60, 3.0);
        assert_eq!(plan.schedule.len(), 3);
        assert!(plan.schedule[0].contains("Setup"));
        assert!(plan.schedule[1].contains("2 technician(s)"));
        assert!(plan.schedule[2].contains("Breakdown"));
    }

    #[test]
    fn test_venue_rules_surfaced_as_text() {
        let rule = UnionVenueRule {
            id: 1,
            union_id: 1,
            condition_text: "More than 3 simultaneous ICW rooms".to_string(),
            threshold_value: Some(3.0),
            threshold_unit: Some("rooms".to_string()),
            action_required: "projectionist required".to_string(),
            room_id: None,
        };
        let plan = calculate_labor(&[], std::slice::from_ref(&rule), &[], 10, 2.0);
        assert_eq!(plan.venue_rule_advisories.len(), 1);
        assert!(plan.venue_rule_advisories[0].contains("ICW"));
        assert!(plan.venue_rule_advisories[0].contains("projectionist"));
        // advisory only, never a warning or error
        assert!(plan.warnings.is_empty());
    }
}
