// system-tests/tests/suites/bars.rs
// ============================================================================
// Module: Bar Contract Tests
// Description: End-to-end bar flows nested under a foo.
// Purpose: Ensure bar keys, partial updates, and messages match the contract.
// Dependencies: system-tests helpers
// ============================================================================

use std::error::Error;

use serde_json::Value;
use serde_json::json;

use crate::helpers;
use crate::helpers::client::SurveyClient;

async fn seed_foo(client: &SurveyClient, name: &str) -> Result<(), Box<dyn Error>> {
    let response = client.post("/foos", &json!({"name": name})).await?;
    if response.status != 201 {
        return Err(format!("seed foo {name} failed with {}", response.status).into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bar_lifecycle_round_trips() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    seed_foo(client, "f").await?;

    let created = client
        .post("/foos/f/bar", &json!({"id": "1", "category": "red", "baz": {"size": 3}}))
        .await?;
    assert_eq!(created.status, 201);
    assert_eq!(
        created.body,
        json!({"id": "1", "category": "red", "description": "", "baz": {"size": 3}})
    );

    let fetched = client.get("/foos/f/bar/1").await?;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body, created.body);

    let patched = client.patch("/foos/f/bar/1", &json!({"description": "patched"})).await?;
    assert_eq!(patched.status, 200);
    assert_eq!(patched.body["description"], "patched");
    assert_eq!(patched.body["category"], "red");
    assert_eq!(patched.body["baz"], json!({"size": 3}));

    let replaced = client
        .put("/foos/f/bar/1", &json!({"category": "blue", "description": "", "baz": null}))
        .await?;
    assert_eq!(replaced.status, 200);
    assert_eq!(replaced.body, json!({"id": "1", "category": "blue", "description": "", "baz": null}));

    let foo = client.get("/foos/f").await?;
    assert_eq!(foo.body["bars"], json!([replaced.body]));

    let deleted = client.delete("/foos/f/bar/1").await?;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body, replaced.body);

    let missing = client.get("/foos/f/bar/1").await?;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.message(), Some("bar 1 not found"));
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bar_keys_are_unique_per_foo() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    seed_foo(client, "left").await?;
    seed_foo(client, "right").await?;

    assert_eq!(client.post("/foos/left/bar", &json!({"id": "x", "category": "a"})).await?.status, 201);
    assert_eq!(client.post("/foos/left/bar", &json!({"id": "x", "category": "b"})).await?.status, 201);
    assert_eq!(client.post("/foos/right/bar", &json!({"id": "x", "category": "a"})).await?.status, 201);

    let duplicate = client.post("/foos/left/bar", &json!({"id": "x", "category": "a"})).await?;
    assert_eq!(duplicate.status, 400);
    assert_eq!(duplicate.message(), Some("id and category must be unique"));

    let first = client.get("/foos/left/bar/x").await?;
    assert_eq!(first.body["category"], "a");

    let collision = client.patch("/foos/left/bar/x", &json!({"category": "b"})).await?;
    assert_eq!(collision.status, 400);
    assert_eq!(collision.message(), Some("id and category must be unique"));

    let listing = client.get("/foos/left/bar").await?;
    let categories: Vec<_> = listing
        .body
        .as_array()
        .map(|bars| bars.iter().filter_map(|bar| bar["category"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(categories, vec!["a", "b"]);
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bar_create_validates_payload() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    seed_foo(client, "f").await?;

    let no_id = client.post("/foos/f/bar", &json!({})).await?;
    assert_eq!(no_id.status, 400);
    assert_eq!(no_id.message(), Some("id is a required field"));

    let no_category = client.post("/foos/f/bar", &json!({"id": "1"})).await?;
    assert_eq!(no_category.status, 400);
    assert_eq!(no_category.message(), Some("category is a required field"));

    let bad_baz = client.post("/foos/f/bar", &json!({"id": "1", "category": "c", "baz": 5})).await?;
    assert_eq!(bad_baz.status, 400);
    assert_eq!(bad_baz.message(), Some("baz must be an object"));

    let no_foo = client.post("/foos/ghost/bar", &json!({"id": "1", "category": "c"})).await?;
    assert_eq!(no_foo.status, 404);
    assert_eq!(no_foo.message(), Some("foo ghost not found"));

    let list_no_foo = client.get("/foos/ghost/bar").await?;
    assert_eq!(list_no_foo.status, 404);
    assert_eq!(list_no_foo.message(), Some("foo ghost not found"));
    server.shutdown().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bar_updates_reject_unknown_and_partial_bodies() -> Result<(), Box<dyn Error>> {
    let server = helpers::harness::spawn_default_server().await?;
    let client = server.client();
    seed_foo(client, "f").await?;
    client.post("/foos/f/bar", &json!({"id": "1", "category": "c", "baz": {"k": true}})).await?;

    let rename = client.patch("/foos/f/bar/1", &json!({"id": "2"})).await?;
    assert_eq!(rename.status, 400);
    assert_eq!(rename.message(), Some("unrecognized fields: id"));

    let partial = client.put("/foos/f/bar/1", &json!({"category": "c"})).await?;
    assert_eq!(partial.status, 400);
    assert_eq!(partial.message(), Some("category, description, and baz are required"));

    let cleared = client.patch("/foos/f/bar/1", &json!({"baz": null})).await?;
    assert_eq!(cleared.status, 200);
    assert_eq!(cleared.body["baz"], Value::Null);

    let missing_bar = client.patch("/foos/f/bar/9", &json!({"description": "x"})).await?;
    assert_eq!(missing_bar.status, 404);
    assert_eq!(missing_bar.message(), Some("bar 9 not found"));

    let missing_foo = client.delete("/foos/ghost/bar/1").await?;
    assert_eq!(missing_foo.status, 404);
    assert_eq!(missing_foo.message(), Some("foo ghost not found"));
    server.shutdown().await?;
    Ok(())
}
