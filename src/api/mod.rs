//! API handlers for Encore REST endpoints

pub mod health;
pub mod inventory;
pub mod labor_rules;
pub mod openapi;
pub mod properties;
pub mod rooms;
pub mod unions;
pub mod validation;
