//! Labor rule management service

use crate::{
    error::{AppError, AppResult},
    models::labor_rule::{CreateLaborRule, LaborRule, UpdateLaborRule},
    repository::Repository,
};

#[derive(Clone)]
pub struct LaborRulesService {
    repository: Repository,
}

impl LaborRulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, property_id: i32) -> AppResult<Vec<LaborRule>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository
            .labor_rules
            .list_for_property(property_id)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LaborRule> {
        self.repository.labor_rules.get_by_id(id).await
    }

    pub async fn create(&self, property_id: i32, data: &CreateLaborRule) -> AppResult<LaborRule> {
        // rule_data tolerance is an evaluation-time concern, but reject
        // obviously broken JSON at write time when we can
        if serde_json::from_str::<serde_json::Value>(&data.rule_data).is_err() {
            return Err(AppError::Validation(
                "rule_data must be a valid JSON document".to_string(),
            ));
        }
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.labor_rules.create(property_id, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateLaborRule) -> AppResult<LaborRule> {
        if let Some(ref rule_data) = data.rule_data {
            if serde_json::from_str::<serde_json::Value>(rule_data).is_err() {
                return Err(AppError::Validation(
                    "rule_data must be a valid JSON document".to_string(),
                ));
            }
        }
        self.repository.labor_rules.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.labor_rules.delete(id).await
    }
}
