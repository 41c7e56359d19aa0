//! Labor unions repository (union records plus child collections)

use chrono::{NaiveTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::labor_union::{
        CreateLaborUnion, CreateUnionEquipmentRequirement, CreateUnionScheduleRule,
        CreateUnionVenueRule, LaborUnion, UnionEquipmentRequirement, UnionScheduleRule,
        UnionVenueRule, UpdateLaborUnion,
    },
};

#[derive(Clone)]
pub struct UnionsRepository {
    pool: Pool<Postgres>,
}

impl UnionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List unions for a property
    pub async fn list_for_property(&self, property_id: i32) -> AppResult<Vec<LaborUnion>> {
        let rows = sqlx::query_as::<_, LaborUnion>(
            "SELECT * FROM labor_unions WHERE property_id = $1 ORDER BY name",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get union by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LaborUnion> {
        sqlx::query_as::<_, LaborUnion>("SELECT * FROM labor_unions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Union {} not found", id)))
    }

    /// Create a union
    pub async fn create(&self, property_id: i32, data: &CreateLaborUnion) -> AppResult<LaborUnion> {
        let row = sqlx::query_as::<_, LaborUnion>(
            r#"
            INSERT INTO labor_unions (
                property_id, name, local_number, trade,
                regular_rate, overtime_rate, doubletime_rate,
                overtime_threshold_hours, doubletime_threshold_hours,
                weekend_rules, holiday_rules
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&data.name)
        .bind(&data.local_number)
        .bind(&data.trade)
        .bind(data.regular_rate)
        .bind(data.overtime_rate)
        .bind(data.doubletime_rate)
        .bind(data.overtime_threshold_hours)
        .bind(data.doubletime_threshold_hours)
        .bind(&data.weekend_rules)
        .bind(&data.holiday_rules)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a union
    pub async fn update(&self, id: i32, data: &UpdateLaborUnion) -> AppResult<LaborUnion> {
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

        add_field!(data.name, "name");
        add_field!(data.local_number, "local_number");
        add_field!(data.trade, "trade");
        add_field!(data.regular_rate, "regular_rate");
        add_field!(data.overtime_rate, "overtime_rate");
        add_field!(data.doubletime_rate, "doubletime_rate");
        add_field!(data.overtime_threshold_hours, "overtime_threshold_hours");
        add_field!(data.doubletime_threshold_hours, "doubletime_threshold_hours");
        add_field!(data.weekend_rules, "weekend_rules");
        add_field!(data.holiday_rules, "holiday_rules");

        let query = format!(
            "UPDATE labor_unions SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, LaborUnion>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.local_number);
        bind_field!(data.trade);
        bind_field!(data.regular_rate);
        bind_field!(data.overtime_rate);
        bind_field!(data.doubletime_rate);
        bind_field!(data.overtime_threshold_hours);
        bind_field!(data.doubletime_threshold_hours);
        bind_field!(data.weekend_rules);
        bind_field!(data.holiday_rules);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Union {} not found", id)))
    }

    /// Delete a union (child rows cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM labor_unions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Union {} not found", id)));
        }
        Ok(())
    }

    // ---- Schedule rules ----

    pub async fn list_schedule_rules(&self, union_id: i32) -> AppResult<Vec<UnionScheduleRule>> {
        let rows = sqlx::query_as::<_, UnionScheduleRule>(
            "SELECT * FROM union_schedule_rules WHERE union_id = $1 ORDER BY day_of_week, start_time",
        )
        .bind(union_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_schedule_rule(
        &self,
        union_id: i32,
        data: &CreateUnionScheduleRule,
    ) -> AppResult<UnionScheduleRule> {
        let start_time = data
            .start_time
            .as_ref()
            .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M").ok());
        let end_time = data
            .end_time
            .as_ref()
            .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M").ok());

        let row = sqlx::query_as::<_, UnionScheduleRule>(
            r#"
            INSERT INTO union_schedule_rules (union_id, day_of_week, start_time, end_time, rate_multiplier)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(union_id)
        .bind(data.day_of_week)
        .bind(start_time)
        .bind(end_time)
        .bind(data.rate_multiplier)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_schedule_rule(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM union_schedule_rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Schedule rule {} not found", id)));
        }
        Ok(())
    }

    // ---- Equipment requirements ----

    pub async fn list_equipment_requirements(
        &self,
        union_id: i32,
    ) -> AppResult<Vec<UnionEquipmentRequirement>> {
        let rows = sqlx::query_as::<_, UnionEquipmentRequirement>(
            "SELECT * FROM union_equipment_requirements WHERE union_id = $1 ORDER BY equipment_category",
        )
        .bind(union_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_equipment_requirement(
        &self,
        union_id: i32,
        data: &CreateUnionEquipmentRequirement,
    ) -> AppResult<UnionEquipmentRequirement> {
        let row = sqlx::query_as::<_, UnionEquipmentRequirement>(
            r#"
            INSERT INTO union_equipment_requirements
                (union_id, equipment_category, equipment_type, minimum_crew_size)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(union_id)
        .bind(&data.equipment_category)
        .bind(&data.equipment_type)
        .bind(data.minimum_crew_size)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_equipment_requirement(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM union_equipment_requirements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Equipment requirement {} not found",
                id
            )));
        }
        Ok(())
    }

    // ---- Venue rules ----

    pub async fn list_venue_rules(&self, union_id: i32) -> AppResult<Vec<UnionVenueRule>> {
        let rows = sqlx::query_as::<_, UnionVenueRule>(
            "SELECT * FROM union_venue_rules WHERE union_id = $1 ORDER BY id",
        )
        .bind(union_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All venue rules configured for a property, across its unions
    /// (engine input; surfaced as advisory text)
    pub async fn venue_rules_for_property(&self, property_id: i32) -> AppResult<Vec<UnionVenueRule>> {
        let rows = sqlx::query_as::<_, UnionVenueRule>(
            r#"
            SELECT vr.* FROM union_venue_rules vr
            JOIN labor_unions u ON u.id = vr.union_id
            WHERE u.property_id = $1
            ORDER BY vr.id
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_venue_rule(
        &self,
        union_id: i32,
        data: &CreateUnionVenueRule,
    ) -> AppResult<UnionVenueRule> {
        let row = sqlx::query_as::<_, UnionVenueRule>(
            r#"
            INSERT INTO union_venue_rules
                (union_id, condition_text, threshold_value, threshold_unit, action_required, room_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(union_id)
        .bind(&data.condition_text)
        .bind(data.threshold_value)
        .bind(&data.threshold_unit)
        .bind(&data.action_required)
        .bind(data.room_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_venue_rule(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM union_venue_rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Venue rule {} not found", id)));
        }
        Ok(())
    }
}
