//! Labor rule parsing
//!
//! Labor rules are stored as `(rule_type, rule_data)` pairs where
//! `rule_data` is a free-form JSON document. Known rule types parse into
//! typed variants; unknown types are kept as opaque payloads so new rule
//! kinds can be introduced without a schema migration. A payload that is
//! not valid JSON is reported as a warning and skipped, never a hard
//! error.

use serde::Deserialize;

use crate::models::labor_rule::LaborRule;

/// Default staffing ratio when no technician_ratio rule is configured
pub const DEFAULT_ATTENDEES_PER_TECH: u32 = 50;
pub const DEFAULT_MINIMUM_TECHS: u32 = 1;

/// Default per-category setup hours when no setup_time rule is configured
pub const DEFAULT_AUDIO_SETUP_HOURS: f64 = 2.0;
pub const DEFAULT_VIDEO_SETUP_HOURS: f64 = 1.5;
pub const DEFAULT_LIGHTING_SETUP_HOURS: f64 = 3.0;
pub const DEFAULT_BREAKDOWN_HOURS: f64 = 1.0;

/// A parsed labor rule
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSpec {
    /// Staffing ratio: one technician per N attendees, with a floor
    TechnicianRatio {
        attendees_per_tech: u32,
        minimum_techs: u32,
    },
    /// Setup/breakdown hours per equipment category
    SetupTime {
        audio_setup: f64,
        video_setup: f64,
        lighting_setup: f64,
        breakdown: f64,
    },
    /// Union constraints relevant to scheduling
    UnionRequirements {
        overtime_threshold: Option<f64>,
        requires_union: Option<bool>,
    },
    /// Valid JSON of a type the engine does not interpret
    Unknown { rule_type: String, raw: String },
}

#[derive(Deserialize)]
struct TechnicianRatioData {
    #[serde(default = "default_attendees_per_tech")]
    attendees_per_tech: u32,
    #[serde(default = "default_minimum_techs")]
    minimum_techs: u32,
}

#[derive(Deserialize)]
struct SetupTimeData {
    #[serde(default = "default_audio_setup")]
    audio_setup: f64,
    #[serde(default = "default_video_setup")]
    video_setup: f64,
    #[serde(default = "default_lighting_setup")]
    lighting_setup: f64,
    #[serde(default = "default_breakdown")]
    breakdown: f64,
}

#[derive(Deserialize)]
struct UnionRequirementsData {
    overtime_threshold: Option<f64>,
    requires_union: Option<bool>,
}

fn default_attendees_per_tech() -> u32 {
    DEFAULT_ATTENDEES_PER_TECH
}
fn default_minimum_techs() -> u32 {
    DEFAULT_MINIMUM_TECHS
}
fn default_audio_setup() -> f64 {
    DEFAULT_AUDIO_SETUP_HOURS
}
fn default_video_setup() -> f64 {
    DEFAULT_VIDEO_SETUP_HOURS
}
fn default_lighting_setup() -> f64 {
    DEFAULT_LIGHTING_SETUP_HOURS
}
fn default_breakdown() -> f64 {
    DEFAULT_BREAKDOWN_HOURS
}

/// Parse one rule payload. The error string is a caller-facing warning.
pub fn parse_rule(rule_type: &str, rule_data: &str) -> Result<RuleSpec, String> {
    match rule_type {
        "technician_ratio" => {
            let data: TechnicianRatioData = serde_json::from_str(rule_data)
                .map_err(|e| format!("Skipping technician_ratio rule: invalid JSON ({})", e))?;
            if data.attendees_per_tech == 0 {
                return Err(
                    "Skipping technician_ratio rule: attendees_per_tech must be positive"
                        .to_string(),
                );
            }
            Ok(RuleSpec::TechnicianRatio {
                attendees_per_tech: data.attendees_per_tech,
                minimum_techs: data.minimum_techs.max(1),
            })
        }
        "setup_time" => {
            let data: SetupTimeData = serde_json::from_str(rule_data)
                .map_err(|e| format!("Skipping setup_time rule: invalid JSON ({})", e))?;
            Ok(RuleSpec::SetupTime {
                audio_setup: data.audio_setup,
                video_setup: data.video_setup,
                lighting_setup: data.lighting_setup,
                breakdown: data.breakdown,
            })
        }
        "union_requirements" => {
            let data: UnionRequirementsData = serde_json::from_str(rule_data)
                .map_err(|e| format!("Skipping union_requirements rule: invalid JSON ({})", e))?;
            Ok(RuleSpec::UnionRequirements {
                overtime_threshold: data.overtime_threshold,
                requires_union: data.requires_union,
            })
        }
        other => {
            // Unknown types are tolerated as long as the payload is JSON
            serde_json::from_str::<serde_json::Value>(rule_data)
                .map_err(|e| format!("Skipping {} rule: invalid JSON ({})", other, e))?;
            Ok(RuleSpec::Unknown {
                rule_type: other.to_string(),
                raw: rule_data.to_string(),
            })
        }
    }
}

/// Parse all rules for a property, collecting warnings for the ones skipped
pub fn parse_rules(rules: &[LaborRule]) -> (Vec<RuleSpec>, Vec<String>) {
    let mut specs = Vec::new();
    let mut warnings = Vec::new();
    for rule in rules {
        match parse_rule(&rule.rule_type, &rule.rule_data) {
            Ok(spec) => specs.push(spec),
            Err(warning) => warnings.push(warning),
        }
    }
    (specs, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_technician_ratio() {
        let spec = parse_rule(
            "technician_ratio",
            r#"{"attendees_per_tech": 40, "minimum_techs": 2}"#,
        )
        .unwrap();
        assert_eq!(
            spec,
            RuleSpec::TechnicianRatio {
                attendees_per_tech: 40,
                minimum_techs: 2
            }
        );
    }

    #[test]
    fn test_parse_technician_ratio_zero_ratio_is_warning() {
        let err = parse_rule("technician_ratio", r#"{"attendees_per_tech": 0}"#).unwrap_err();
        assert!(err.contains("attendees_per_tech"));
    }

    #[test]
    fn test_parse_setup_time_with_partial_fields() {
        let spec = parse_rule("setup_time", r#"{"audio_setup": 4.0}"#).unwrap();
        assert_eq!(
            spec,
            RuleSpec::SetupTime {
                audio_setup: 4.0,
                video_setup: DEFAULT_VIDEO_SETUP_HOURS,
                lighting_setup: DEFAULT_LIGHTING_SETUP_HOURS,
                breakdown: DEFAULT_BREAKDOWN_HOURS,
            }
        );
    }

    #[test]
    fn test_parse_union_requirements_tolerates_extra_fields() {
        let spec = parse_rule(
            "union_requirements",
            r#"{"overtime_threshold": 8.0, "requires_union": true, "steward_required": true}"#,
        )
        .unwrap();
        assert_eq!(
            spec,
            RuleSpec::UnionRequirements {
                overtime_threshold: Some(8.0),
                requires_union: Some(true)
            }
        );
    }

    #[test]
    fn test_parse_unknown_type_kept_as_opaque() {
        let spec = parse_rule("meal_penalty", r#"{"after_hours": 5}"#).unwrap();
        match spec {
            RuleSpec::Unknown { rule_type, .. } => assert_eq!(rule_type, "meal_penalty"),
            other => panic!("expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_warning_not_panic() {
        assert!(parse_rule("setup_time", "not json at all").is_err());
        assert!(parse_rule("technician_ratio", "{").is_err());
        assert!(parse_rule("whatever", "{{").is_err());
    }
}
