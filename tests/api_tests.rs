//! API integration tests
//!
//! These tests exercise a running server and a seeded database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create a property and return its ID
async fn create_property(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/properties", BASE_URL))
        .json(&json!({ "name": name, "city": "Las Vegas" }))
        .send()
        .await
        .expect("Failed to create property");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_property_crud() {
    let client = Client::new();
    let id = create_property(&client, "Test Convention Center").await;

    let response = client
        .get(format!("{}/properties/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/properties/{}", BASE_URL, id))
        .json(&json!({ "notes": "updated" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/properties/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_room_capacity_must_be_positive() {
    let client = Client::new();
    let property_id = create_property(&client, "Capacity Validation Venue").await;

    let response = client
        .post(format!("{}/properties/{}/rooms", BASE_URL, property_id))
        .json(&json!({ "name": "Broken Room", "capacity": 0 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_validate_order_sufficient() {
    let client = Client::new();
    let property_id = create_property(&client, "Order Validation Venue").await;

    client
        .post(format!("{}/properties/{}/rooms", BASE_URL, property_id))
        .json(&json!({ "name": "Ballroom", "capacity": 200 }))
        .send()
        .await
        .expect("Failed to create room");

    client
        .post(format!("{}/properties/{}/inventory", BASE_URL, property_id))
        .json(&json!({
            "name": "Wireless Mic",
            "category": "Audio",
            "quantity_available": 5
        }))
        .send()
        .await
        .expect("Failed to create inventory");

    let response = client
        .post(format!("{}/properties/{}/validate-order", BASE_URL, property_id))
        .json(&json!({
            "equipment_list": [{ "item": "Wireless Mic", "quantity": 3 }],
            "attendees": 120,
            "event_duration_hours": 4.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["valid"], true);
    assert_eq!(body["inventory_check"]["items"][0]["available"], 5);
    assert_eq!(body["inventory_check"]["items"][0]["sufficient"], true);
}

#[tokio::test]
#[ignore]
async fn test_validate_order_insufficient_inventory() {
    let client = Client::new();
    let property_id = create_property(&client, "Shortfall Venue").await;

    client
        .post(format!("{}/properties/{}/rooms", BASE_URL, property_id))
        .json(&json!({ "name": "Hall", "capacity": 300 }))
        .send()
        .await
        .expect("Failed to create room");

    client
        .post(format!("{}/properties/{}/inventory", BASE_URL, property_id))
        .json(&json!({
            "name": "Wireless Mic",
            "category": "Audio",
            "quantity_available": 5
        }))
        .send()
        .await
        .expect("Failed to create inventory");

    let response = client
        .post(format!("{}/properties/{}/validate-order", BASE_URL, property_id))
        .json(&json!({
            "equipment_list": [{ "item": "Wireless Mic", "quantity": 8 }],
            "attendees": 100,
            "event_duration_hours": 4.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["errors"][0],
        "Insufficient inventory for Wireless Mic: requested 8, available 5"
    );
}

#[tokio::test]
#[ignore]
async fn test_suitable_rooms_sorted_ascending() {
    let client = Client::new();
    let property_id = create_property(&client, "Room Sort Venue").await;

    for (name, capacity) in [("A", 50), ("B", 200), ("C", 120)] {
        client
            .post(format!("{}/properties/{}/rooms", BASE_URL, property_id))
            .json(&json!({ "name": name, "capacity": capacity }))
            .send()
            .await
            .expect("Failed to create room");
    }

    let response = client
        .get(format!(
            "{}/properties/{}/rooms/suitable?attendees=120",
            BASE_URL, property_id
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    let rooms = body.as_array().expect("Expected array");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["name"], "C");
    assert_eq!(rooms[1]["name"], "B");
}

#[tokio::test]
#[ignore]
async fn test_room_capabilities_unknown_room() {
    let client = Client::new();
    let property_id = create_property(&client, "Capabilities Venue").await;

    let response = client
        .post(format!(
            "{}/properties/{}/rooms/capabilities",
            BASE_URL, property_id
        ))
        .json(&json!({
            "room_name": "Nonexistent",
            "equipment_list": ["Projector"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["compatible"], false);
    assert_eq!(body["reason"], "Room not found");
}

#[tokio::test]
#[ignore]
async fn test_labor_plan_with_defaults() {
    let client = Client::new();
    let property_id = create_property(&client, "Labor Plan Venue").await;

    let response = client
        .post(format!("{}/properties/{}/labor-plan", BASE_URL, property_id))
        .json(&json!({
            "equipment_list": [{ "item": "Audio package", "quantity": 1 }],
            "attendees": 120,
            "event_duration_hours": 4.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    // ceil(120 / 50) = 3 with the default ratio
    assert_eq!(body["technicians_required"], 3);
    assert_eq!(body["setup_hours"], 2.0);
    assert_eq!(body["breakdown_hours"], 1.0);
    assert!(body["schedule"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_labor_rule_rejects_invalid_json() {
    let client = Client::new();
    let property_id = create_property(&client, "Rule Validation Venue").await;

    let response = client
        .post(format!(
            "{}/properties/{}/labor-rules",
            BASE_URL, property_id
        ))
        .json(&json!({
            "rule_type": "technician_ratio",
            "rule_data": "not json"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_inventory_search() {
    let client = Client::new();
    let property_id = create_property(&client, "Inventory Search Venue").await;

    for (name, category) in [
        ("Wireless Mic", "Audio"),
        ("Mixing Console", "Audio"),
        ("4K Projector", "Video"),
    ] {
        client
            .post(format!("{}/properties/{}/inventory", BASE_URL, property_id))
            .json(&json!({
                "name": name,
                "category": category,
                "quantity_available": 2
            }))
            .send()
            .await
            .expect("Failed to create inventory");
    }

    let response = client
        .get(format!(
            "{}/properties/{}/inventory?category=Audio",
            BASE_URL, property_id
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_items"], 2);
    assert!(body["items"].is_array());
}
