//! Inventory repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::inventory::{CreateInventoryItem, InventoryItem, InventoryQuery, UpdateInventoryItem},
};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List inventory for a property with optional filters and pagination
    pub async fn list(
        &self,
        property_id: i32,
        query: &InventoryQuery,
    ) -> AppResult<(Vec<InventoryItem>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let mut conditions = vec!["property_id = $1".to_string()];
        let mut idx = 2;

        if query.category.is_some() {
            conditions.push(format!("LOWER(category) = LOWER(${})", idx));
            idx += 1;
        }
        if query.sub_category.is_some() {
            conditions.push(format!("LOWER(sub_category) = LOWER(${})", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!(
                "(name ILIKE '%' || ${} || '%' OR category ILIKE '%' || ${} || '%')",
                idx, idx
            ));
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        // Count total
        let count_q = format!("SELECT COUNT(*) FROM inventory_items {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q).bind(property_id);
        if let Some(ref c) = query.category { count_builder = count_builder.bind(c); }
        if let Some(ref sc) = query.sub_category { count_builder = count_builder.bind(sc); }
        if let Some(ref s) = query.search { count_builder = count_builder.bind(s); }
        let total = count_builder.fetch_one(&self.pool).await?;

        // Fetch rows
        let select_q = format!(
            "SELECT * FROM inventory_items {} ORDER BY category, name LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let mut builder = sqlx::query_as::<_, InventoryItem>(&select_q).bind(property_id);
        if let Some(ref c) = query.category { builder = builder.bind(c); }
        if let Some(ref sc) = query.sub_category { builder = builder.bind(sc); }
        if let Some(ref s) = query.search { builder = builder.bind(s); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok((rows, total))
    }

    /// All available-status stock for a property (engine input)
    pub async fn list_available(&self, property_id: i32) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, InventoryItem>(
            "SELECT * FROM inventory_items WHERE property_id = $1 AND status = 0 ORDER BY name",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get inventory item by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<InventoryItem> {
        sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Create an inventory item
    pub async fn create(
        &self,
        property_id: i32,
        data: &CreateInventoryItem,
    ) -> AppResult<InventoryItem> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory_items
                (property_id, name, category, sub_category, quantity_available, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(&data.sub_category)
        .bind(data.quantity_available)
        .bind(data.status.unwrap_or(0))
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an inventory item
    pub async fn update(&self, id: i32, data: &UpdateInventoryItem) -> AppResult<InventoryItem> {
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
        add_field!(data.category, "category");
        add_field!(data.sub_category, "sub_category");
        add_field!(data.quantity_available, "quantity_available");
        add_field!(data.status, "status");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE inventory_items SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, InventoryItem>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.category);
        bind_field!(data.sub_category);
        bind_field!(data.quantity_available);
        bind_field!(data.status);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Delete an inventory item
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
        }
        Ok(())
    }
}
