//! Labor union management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::labor_union::{
        CreateLaborUnion, CreateUnionEquipmentRequirement, CreateUnionScheduleRule,
        CreateUnionVenueRule, LaborUnion, UnionEquipmentRequirement, UnionScheduleRule,
        UnionVenueRule, UpdateLaborUnion,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UnionsService {
    repository: Repository,
}

impl UnionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, property_id: i32) -> AppResult<Vec<LaborUnion>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.unions.list_for_property(property_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LaborUnion> {
        self.repository.unions.get_by_id(id).await
    }

    pub async fn create(&self, property_id: i32, data: &CreateLaborUnion) -> AppResult<LaborUnion> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.unions.create(property_id, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateLaborUnion) -> AppResult<LaborUnion> {
        self.repository.unions.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.unions.delete(id).await
    }

    // ---- Schedule rules ----

    pub async fn list_schedule_rules(&self, union_id: i32) -> AppResult<Vec<UnionScheduleRule>> {
        self.repository.unions.get_by_id(union_id).await?;
        self.repository.unions.list_schedule_rules(union_id).await
    }

    pub async fn create_schedule_rule(
        &self,
        union_id: i32,
        data: &CreateUnionScheduleRule,
    ) -> AppResult<UnionScheduleRule> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.unions.get_by_id(union_id).await?;
        self.repository
            .unions
            .create_schedule_rule(union_id, data)
            .await
    }

    pub async fn delete_schedule_rule(&self, id: i32) -> AppResult<()> {
        self.repository.unions.delete_schedule_rule(id).await
    }

    // ---- Equipment requirements ----

    pub async fn list_equipment_requirements(
        &self,
        union_id: i32,
    ) -> AppResult<Vec<UnionEquipmentRequirement>> {
        self.repository.unions.get_by_id(union_id).await?;
        self.repository
            .unions
            .list_equipment_requirements(union_id)
            .await
    }

    pub async fn create_equipment_requirement(
        &self,
        union_id: i32,
        data: &CreateUnionEquipmentRequirement,
    ) -> AppResult<UnionEquipmentRequirement> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.unions.get_by_id(union_id).await?;
        self.repository
            .unions
            .create_equipment_requirement(union_id, data)
            .await
    }

    pub async fn delete_equipment_requirement(&self, id: i32) -> AppResult<()> {
        self.repository.unions.delete_equipment_requirement(id).await
    }

    // ---- Venue rules ----

    pub async fn list_venue_rules(&self, union_id: i32) -> AppResult<Vec<UnionVenueRule>> {
        self.repository.unions.get_by_id(union_id).await?;
        self.repository.unions.list_venue_rules(union_id).await
    }

    pub async fn create_venue_rule(
        &self,
        union_id: i32,
        data: &CreateUnionVenueRule,
    ) -> AppResult<UnionVenueRule> {
        self.repository.unions.get_by_id(union_id).await?;
        self.repository.unions.create_venue_rule(union_id, data).await
    }

    pub async fn delete_venue_rule(&self, id: i32) -> AppResult<()> {
        self.repository.unions.delete_venue_rule(id).await
    }
}
