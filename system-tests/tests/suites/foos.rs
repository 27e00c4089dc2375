// system-tests/tests/suites/foos.rs
// ============================================================================
// Module: Foo Contract Tests
// Description: End-to-end foo lifecycle over HTTP.
// Purpose: Ensure foo status codes, bodies, and messages match the contract.
// Dependencies: system-tests helpers
// ============================================================================

use std::error::Error;

use reqwest::Method;
use serde_json::json;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn foo_lifecycle_round_trips() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();

    let created = client.post("/foos", &json!({"name": "survey", "description": "first"})).await?;
    assert_eq!(created.status, 201);
    assert_eq!(created.body, json!({"name": "survey", "description": "first", "bars": []}));

    let fetched = client.get("/foos/survey").await?;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body, created.body);

    let replaced = client.put("/foos/survey", &json!({"description": "second"})).await?;
    assert_eq!(replaced.status, 200);
    assert_eq!(replaced.body["description"], "second");

    let deleted = client.delete("/foos/survey").await?;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body["name"], "survey");

    let missing = client.get("/foos/survey").await?;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.message(), Some("foo 'survey' not found"));
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn foo_create_defaults_and_ordering() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();

    let created = client.post("/foos", &json!({"name": "b", "extra": 1})).await?;
    assert_eq!(created.status, 201);
    assert_eq!(created.body, json!({"name": "b", "description": "", "bars": []}));
    client.post("/foos", &json!({"name": "a"})).await?;

    let listing = client.get("/foos").await?;
    let names: Vec<_> = listing
        .body
        .as_array()
        .map(|foos| foos.iter().filter_map(|foo| foo["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["b", "a"]);
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn foo_create_rejects_bad_payloads() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();

    let missing_name = client.post("/foos", &json!({"description": "x"})).await?;
    assert_eq!(missing_name.status, 400);
    assert_eq!(missing_name.message(), Some("name is a required field"));

    client.post("/foos", &json!({"name": "dup"})).await?;
    let duplicate = client.post("/foos", &json!({"name": "dup"})).await?;
    assert_eq!(duplicate.status, 400);
    assert_eq!(duplicate.message(), Some("name must be unique"));

    let malformed = client.send_raw(Method::POST, "/foos", "{not json").await?;
    assert_eq!(malformed.status, 400);
    assert_eq!(malformed.message(), Some("request body is not valid JSON"));

    let array = client.send_raw(Method::POST, "/foos", "[1, 2]").await?;
    assert_eq!(array.status, 400);
    assert_eq!(array.message(), Some("request body must be a JSON object"));
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn foo_replace_enforces_name_and_fields() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    client.post("/foos", &json!({"name": "fixed"})).await?;

    let renamed = client.put("/foos/fixed", &json!({"name": "other"})).await?;
    assert_eq!(renamed.status, 400);
    assert_eq!(renamed.message(), Some("name cannot be changed"));

    let same_name =
        client.put("/foos/fixed", &json!({"name": "fixed", "description": "ok"})).await?;
    assert_eq!(same_name.status, 200);
    assert_eq!(same_name.body["description"], "ok");

    let unknown = client.put("/foos/fixed", &json!({"zeta": 1, "alpha": 2})).await?;
    assert_eq!(unknown.status, 400);
    assert_eq!(unknown.message(), Some("unrecognized fields: alpha, zeta"));

    let missing = client.put("/foos/absent", &json!({"description": "x"})).await?;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.message(), Some("foo absent not found"));

    let delete_missing = client.delete("/foos/absent").await?;
    assert_eq!(delete_missing.status, 404);
    assert_eq!(delete_missing.message(), Some("foo absent not found"));
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn foo_replace_keeps_bars_and_delete_cascades() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    client.post("/foos", &json!({"name": "parent"})).await?;
    client.post("/foos/parent/bar", &json!({"id": "1", "category": "c"})).await?;

    let replaced = client.put("/foos/parent", &json!({"description": "new"})).await?;
    assert_eq!(replaced.body["bars"].as_array().map(Vec::len), Some(1));

    let deleted = client.delete("/foos/parent").await?;
    assert_eq!(deleted.body["bars"].as_array().map(Vec::len), Some(1));

    client.post("/foos", &json!({"name": "parent"})).await?;
    let bars = client.get("/foos/parent/bar").await?;
    assert_eq!(bars.body, json!([]));
    server.shutdown().await?;
    Ok(())
}
