//! Room management service

use validator::Validate;

use crate::{
    engine::rooms::{room_compatibility, suitable_rooms, CompatibilityResult},
    error::{AppError, AppResult},
    models::room::{CreateRoom, Room, UpdateRoom},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, property_id: i32) -> AppResult<Vec<Room>> {
        // Verify property exists
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.rooms.list_for_property(property_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        self.repository.rooms.get_by_id(id).await
    }

    pub async fn create(&self, property_id: i32, data: &CreateRoom) -> AppResult<Room> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.rooms.create(property_id, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateRoom) -> AppResult<Room> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.rooms.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.rooms.delete(id).await
    }

    /// Rooms that can host the attendee count, tightest fit first
    pub async fn find_suitable(&self, property_id: i32, attendees: i32) -> AppResult<Vec<Room>> {
        self.repository.properties.get_by_id(property_id).await?;
        let rooms = self.repository.rooms.list_for_property(property_id).await?;
        Ok(suitable_rooms(&rooms, attendees))
    }

    /// Heuristic equipment/room compatibility check. An unknown room name
    /// is an advisory negative result, not an error.
    pub async fn check_compatibility(
        &self,
        property_id: i32,
        room_name: &str,
        equipment: &[String],
    ) -> AppResult<CompatibilityResult> {
        self.repository.properties.get_by_id(property_id).await?;
        let room = self
            .repository
            .rooms
            .get_by_name(property_id, room_name)
            .await?;
        Ok(room_compatibility(room.as_ref(), equipment))
    }
}
