//! Room capacity and compatibility checks
//!
//! Compatibility is a keyword heuristic over the free-text room
//! descriptions, driven by a fixed table. It is advisory only: the
//! check annotates gaps (portable gear needed) but never fails an
//! order on its own.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::room::Room;

/// One row of the compatibility keyword table: if the equipment string
/// mentions any `equipment_keywords` and the room text mentions none of
/// `room_keywords`, the note and requirement tag are emitted.
struct CompatCheck {
    equipment_keywords: &'static [&'static str],
    room_keywords: &'static [&'static str],
    note: &'static str,
    requirement: &'static str,
}

const COMPAT_CHECKS: &[CompatCheck] = &[
    CompatCheck {
        equipment_keywords: &["projector", "projection"],
        room_keywords: &["projection", "screen"],
        note: "needs portable projection screen",
        requirement: "portable_projection_screen",
    },
    CompatCheck {
        equipment_keywords: &["audio", "sound", "microphone"],
        room_keywords: &["sound", "audio"],
        note: "needs full audio setup",
        requirement: "portable_audio_system",
    },
    CompatCheck {
        equipment_keywords: &["lighting"],
        room_keywords: &["lighting", "stage"],
        note: "lighting may need enhancement",
        requirement: "additional_lighting",
    },
];

/// Room summary included in compatibility results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomSummary {
    pub name: String,
    pub capacity: i32,
    pub dimensions: Option<String>,
    pub built_in_av: Option<String>,
    pub features: Option<String>,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            capacity: room.capacity,
            dimensions: room.dimensions.clone(),
            built_in_av: room.built_in_av.clone(),
            features: room.features.clone(),
        }
    }
}

/// Result of an equipment/room compatibility check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityResult {
    pub compatible: bool,
    pub room: Option<RoomSummary>,
    /// Human-readable findings per equipment line
    pub notes: Vec<String>,
    /// Machine-readable requirement tags (e.g. "portable_audio_system")
    pub additional_requirements: Vec<String>,
    /// Set when the check could not run (e.g. room not found)
    pub reason: Option<String>,
}

/// All rooms that can seat `attendees`, sorted ascending by capacity so
/// the first element is the tightest fit.
pub fn suitable_rooms(rooms: &[Room], attendees: i32) -> Vec<Room> {
    let mut suitable: Vec<Room> = rooms
        .iter()
        .filter(|r| r.capacity >= attendees)
        .cloned()
        .collect();
    suitable.sort_by_key(|r| r.capacity);
    suitable
}

/// Largest configured capacity, for error context when nothing fits
pub fn max_capacity(rooms: &[Room]) -> Option<i32> {
    rooms.iter().map(|r| r.capacity).max()
}

/// Check a room's built-in capabilities against an equipment list.
///
/// A missing room yields `compatible: false` with a reason; this is
/// advisory, not a fatal error. An empty equipment list returns the room
/// info with an explanatory note. The check only ever annotates gaps;
/// it never fails an order outright.
pub fn room_compatibility(room: Option<&Room>, equipment: &[String]) -> CompatibilityResult {
    let Some(room) = room else {
        return CompatibilityResult {
            compatible: false,
            room: None,
            notes: Vec::new(),
            additional_requirements: Vec::new(),
            reason: Some("Room not found".to_string()),
        };
    };

    if equipment.is_empty() {
        return CompatibilityResult {
            compatible: true,
            room: Some(room.into()),
            notes: vec!["No equipment specified; listing room capabilities only".to_string()],
            additional_requirements: Vec::new(),
            reason: None,
        };
    }

    let room_text = format!(
        "{} {}",
        room.built_in_av.as_deref().unwrap_or(""),
        room.features.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let mut notes = Vec::new();
    let mut additional_requirements = Vec::new();

    for equipment_name in equipment {
        let needle = equipment_name.to_lowercase();
        for check in COMPAT_CHECKS {
            let equipment_mentions = check.equipment_keywords.iter().any(|k| needle.contains(k));
            let room_covers = check.room_keywords.iter().any(|k| room_text.contains(k));
            if equipment_mentions && !room_covers {
                notes.push(format!("{}: {}", equipment_name, check.note));
                if !additional_requirements.contains(&check.requirement.to_string()) {
                    additional_requirements.push(check.requirement.to_string());
                }
            }
        }
    }

    CompatibilityResult {
        compatible: true,
        room: Some(room.into()),
        notes,
        additional_requirements,
        reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, capacity: i32, built_in_av: &str, features: &str) -> Room {
        Room {
            id: 0,
            property_id: 1,
            name: name.to_string(),
            capacity,
            dimensions: None,
            built_in_av: Some(built_in_av.to_string()),
            features: Some(features.to_string()),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_suitable_rooms_filters_and_sorts() {
        let rooms = vec![
            room("B", 200, "", ""),
            room("A", 50, "", ""),
            room("C", 120, "", ""),
        ];
        let suitable = suitable_rooms(&rooms, 120);
        let names: Vec<&str> = suitable.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn test_suitable_rooms_empty_when_nothing_fits() {
        let rooms = vec![room("A", 50, "", ""), room("B", 200, "", "")];
        assert!(suitable_rooms(&rooms, 300).is_empty());
        assert_eq!(max_capacity(&rooms), Some(200));
    }

    #[test]
    fn test_tightest_fit_first() {
        let rooms = vec![room("Grand", 500, "", ""), room("Salon", 150, "", "")];
        let suitable = suitable_rooms(&rooms, 100);
        assert_eq!(suitable[0].name, "Salon");
    }

    #[test]
    fn test_missing_room_is_advisory_not_fatal() {
        let result = room_compatibility(None, &["Projector".to_string()]);
        assert!(!result.compatible);
        assert_eq!(result.reason.as_deref(), Some("Room not found"));
    }

    #[test]
    fn test_empty_equipment_list_annotates_only() {
        let r = room("Ballroom", 300, "Built-in sound system", "");
        let result = room_compatibility(Some(&r), &[]);
        assert!(result.compatible);
        assert_eq!(result.notes.len(), 1);
        assert!(result.additional_requirements.is_empty());
    }

    #[test]
    fn test_projector_without_screen_flagged() {
        let r = room("Boardroom", 20, "conference phone", "whiteboard");
        let result = room_compatibility(Some(&r), &["4K Projector".to_string()]);
        assert!(result.compatible);
        assert!(result.notes[0].contains("portable projection screen"));
        assert_eq!(
            result.additional_requirements,
            vec!["portable_projection_screen"]
        );
    }

    #[test]
    fn test_projector_with_screen_not_flagged() {
        let r = room("Theater", 400, "motorized projection screen", "");
        let result = room_compatibility(Some(&r), &["Projector".to_string()]);
        assert!(result.notes.is_empty());
        assert!(result.additional_requirements.is_empty());
    }

    #[test]
    fn test_audio_and_lighting_gaps() {
        let r = room("Loft", 80, "", "exposed brick");
        let result = room_compatibility(
            Some(&r),
            &["Microphone kit".to_string(), "Stage lighting rig".to_string()],
        );
        assert_eq!(result.additional_requirements.len(), 2);
        assert!(result
            .additional_requirements
            .contains(&"portable_audio_system".to_string()));
        assert!(result
            .additional_requirements
            .contains(&"additional_lighting".to_string()));
    }

    #[test]
    fn test_requirement_tags_deduplicated() {
        let r = room("Loft", 80, "", "");
        let result = room_compatibility(
            Some(&r),
            &["Microphone kit".to_string(), "Sound board".to_string()],
        );
        // two notes, one tag
        assert_eq!(result.notes.len(), 2);
        assert_eq!(result.additional_requirements, vec!["portable_audio_system"]);
    }
}
