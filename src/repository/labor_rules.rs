//! Labor rules repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::labor_rule::{CreateLaborRule, LaborRule, UpdateLaborRule},
};

#[derive(Clone)]
pub struct LaborRulesRepository {
    pool: Pool<Postgres>,
}

impl LaborRulesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all labor rules for a property
    pub async fn list_for_property(&self, property_id: i32) -> AppResult<Vec<LaborRule>> {
        let rows = sqlx::query_as::<_, LaborRule>(
            "SELECT * FROM labor_rules WHERE property_id = $1 ORDER BY rule_type, id",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get labor rule by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LaborRule> {
        sqlx::query_as::<_, LaborRule>("SELECT * FROM labor_rules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Labor rule {} not found", id)))
    }

    /// Create a labor rule
    pub async fn create(&self, property_id: i32, data: &CreateLaborRule) -> AppResult<LaborRule> {
        let row = sqlx::query_as::<_, LaborRule>(
            r#"
            INSERT INTO labor_rules (property_id, rule_type, rule_data, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&data.rule_type)
        .bind(&data.rule_data)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a labor rule
    pub async fn update(&self, id: i32, data: &UpdateLaborRule) -> AppResult<LaborRule> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.rule_type, "rule_type");
        add_field!(data.rule_data, "rule_data");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE labor_rules SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, LaborRule>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.rule_type);
        bind_field!(data.rule_data);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Labor rule {} not found", id)))
    }

    /// Delete a labor rule
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM labor_rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Labor rule {} not found", id)));
        }
        Ok(())
    }
}
