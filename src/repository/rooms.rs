//! Rooms repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::room::{CreateRoom, Room, UpdateRoom},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List rooms for a property, ascending by capacity
    pub async fn list_for_property(&self, property_id: i32) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE property_id = $1 ORDER BY capacity, name",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Find a property's room by name (case-insensitive)
    pub async fn get_by_name(&self, property_id: i32, name: &str) -> AppResult<Option<Room>> {
        let row = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE property_id = $1 AND LOWER(name) = LOWER($2)",
        )
        .bind(property_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create a room
    pub async fn create(&self, property_id: i32, data: &CreateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (property_id, name, capacity, dimensions, built_in_av, features, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&data.name)
        .bind(data.capacity)
        .bind(&data.dimensions)
        .bind(&data.built_in_av)
        .bind(&data.features)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a room
    pub async fn update(&self, id: i32, data: &UpdateRoom) -> AppResult<Room> {
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
        add_field!(data.capacity, "capacity");
        add_field!(data.dimensions, "dimensions");
        add_field!(data.built_in_av, "built_in_av");
        add_field!(data.features, "features");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE rooms SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Room>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.capacity);
        bind_field!(data.dimensions);
        bind_field!(data.built_in_av);
        bind_field!(data.features);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Delete a room
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }
}
