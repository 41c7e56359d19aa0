//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, inventory, labor_rules, properties, rooms, unions, validation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Encore API",
        version = "0.9.0",
        description = "Venue Event Planning REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Encore Team", email = "dev@encore-events.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Properties
        properties::list_properties,
        properties::get_property,
        properties::create_property,
        properties::update_property,
        properties::delete_property,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::find_suitable_rooms,
        rooms::check_room_capabilities,
        // Inventory
        inventory::list_inventory,
        inventory::get_inventory_item,
        inventory::create_inventory_item,
        inventory::update_inventory_item,
        inventory::delete_inventory_item,
        // Labor rules
        labor_rules::list_labor_rules,
        labor_rules::get_labor_rule,
        labor_rules::create_labor_rule,
        labor_rules::update_labor_rule,
        labor_rules::delete_labor_rule,
        // Unions
        unions::list_unions,
        unions::get_union,
        unions::create_union,
        unions::update_union,
        unions::delete_union,
        unions::list_schedule_rules,
        unions::create_schedule_rule,
        unions::delete_schedule_rule,
        unions::list_equipment_requirements,
        unions::create_equipment_requirement,
        unions::delete_equipment_requirement,
        unions::list_venue_rules,
        unions::create_venue_rule,
        unions::delete_venue_rule,
        // Validation
        validation::validate_order,
        validation::calculate_labor,
    ),
    components(
        schemas(
            // Properties
            crate::models::property::Property,
            crate::models::property::CreateProperty,
            crate::models::property::UpdateProperty,
            // Rooms
            crate::models::room::Room,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            rooms::RoomCompatibilityRequest,
            // Inventory
            crate::models::enums::InventoryStatus,
            crate::models::inventory::InventoryItem,
            crate::models::inventory::CreateInventoryItem,
            crate::models::inventory::UpdateInventoryItem,
            crate::models::inventory::InventoryQuery,
            crate::models::inventory::InventoryListResponse,
            // Labor rules
            crate::models::labor_rule::LaborRule,
            crate::models::labor_rule::CreateLaborRule,
            crate::models::labor_rule::UpdateLaborRule,
            // Unions
            crate::models::labor_union::LaborUnion,
            crate::models::labor_union::CreateLaborUnion,
            crate::models::labor_union::UpdateLaborUnion,
            crate::models::labor_union::UnionScheduleRule,
            crate::models::labor_union::CreateUnionScheduleRule,
            crate::models::labor_union::UnionEquipmentRequirement,
            crate::models::labor_union::CreateUnionEquipmentRequirement,
            crate::models::labor_union::UnionVenueRule,
            crate::models::labor_union::CreateUnionVenueRule,
            // Validation engine
            crate::engine::inventory::EquipmentRequest,
            crate::engine::inventory::ItemCheckResult,
            crate::engine::rooms::RoomSummary,
            crate::engine::rooms::CompatibilityResult,
            crate::engine::labor::LaborPlan,
            crate::engine::validator::InventoryCheck,
            crate::engine::validator::RoomCheck,
            crate::engine::validator::LaborCheck,
            crate::engine::validator::ValidationReport,
            validation::ValidateOrderRequest,
            validation::LaborPlanRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "properties", description = "Property management"),
        (name = "rooms", description = "Room management and capacity checks"),
        (name = "inventory", description = "Equipment inventory management"),
        (name = "labor-rules", description = "Labor rule configuration"),
        (name = "unions", description = "Labor union configuration"),
        (name = "validation", description = "Order validation and labor planning")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
