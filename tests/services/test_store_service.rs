use std::sync::Arc;

use anyhow::Result;
use schemadiff::{services::StoreService, types::SchemaChunk};

use crate::common::{FailingEmbedder, init_test_env};

fn chunk(schema: &str, table: &str, content: &str) -> SchemaChunk {
    SchemaChunk {
        content: content.to_string(),
        schema: schema.to_string(),
        table: table.to_string(),
    }
}

#[tokio::test]
async fn test_store_assigns_chunk_ids() -> Result<()> {
    let env = init_test_env().await?;
    let store = &env.services.store_service;

    let stored = store
        .store_schemas(&[
            chunk("hr", "users", "CREATE TABLE users (id INT);"),
            chunk("hr", "users", "CREATE TABLE users (id BIGINT);"),
            chunk("hr", "roles", "CREATE TABLE roles (id INT);"),
        ])
        .await?;
    assert_eq!(stored, 3);

    let ids: Vec<String> = store
        .get_repo()
        .find_by_schema("hr")
        .await?
        .into_iter()
        .map(|m| m.chunk_id)
        .collect();
    assert_eq!(ids, vec!["hr_users_1", "hr_users_2", "hr_roles_1"]);

    Ok(())
}

#[tokio::test]
async fn test_store_replaces_only_schemas_in_batch() -> Result<()> {
    let env = init_test_env().await?;
    let store = &env.services.store_service;

    store
        .store_schemas(&[
            chunk("hr", "users", "CREATE TABLE users (id INT);"),
            chunk("hr", "roles", "CREATE TABLE roles (id INT);"),
            chunk("crm", "accounts", "CREATE TABLE accounts (id INT);"),
        ])
        .await?;

    store
        .store_schemas(&[chunk("hr", "teams", "CREATE TABLE teams (id INT);")])
        .await?;

    let hr = store.records_for_schema("hr").await?;
    assert_eq!(hr.len(), 1);
    assert_eq!(hr[0].table_name, "teams");

    let crm = store.records_for_schema("crm").await?;
    assert_eq!(crm.len(), 1);
    assert_eq!(crm[0].ddl, "CREATE TABLE accounts (id INT);");

    assert_eq!(store.get_repo().count().await?, 2);
    assert_eq!(store.schema_names().await?, vec!["crm", "hr"]);

    Ok(())
}

#[tokio::test]
async fn test_store_keeps_previous_chunks_when_embedding_fails() -> Result<()> {
    let env = init_test_env().await?;
    let store = &env.services.store_service;

    store
        .store_schemas(&[chunk("hr", "users", "CREATE TABLE users (id INT);")])
        .await?;

    let failing = StoreService::new(store.get_repo(), Arc::new(FailingEmbedder));
    let result = failing
        .store_schemas(&[
            chunk("hr", "users", "CREATE TABLE users (id BIGINT);"),
            chunk("hr", "roles", "CREATE TABLE roles (id INT);"),
        ])
        .await;
    assert!(result.is_err());

    assert_eq!(store.get_repo().count().await?, 1);
    let hr = store.records_for_schema("hr").await?;
    assert_eq!(hr.len(), 1);
    assert_eq!(hr[0].ddl, "CREATE TABLE users (id INT);");

    Ok(())
}

#[tokio::test]
async fn test_store_empty_batch() -> Result<()> {
    let env = init_test_env().await?;
    assert_eq!(env.services.store_service.store_schemas(&[]).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_retrieve_similar_excludes_query_schema() -> Result<()> {
    let env = init_test_env().await?;
    let store = &env.services.store_service;

    store
        .store_schemas(&[
            chunk("hr", "users", "CREATE TABLE users (id INT);"),
            chunk("crm", "users", "CREATE TABLE users (id INT);"),
            chunk(
                "crm",
                "payments",
                "CREATE TABLE payments (amount DECIMAL(10,2), currency VARCHAR(3));",
            ),
        ])
        .await?;

    let hits = store
        .retrieve_similar("CREATE TABLE users (id INT);", "hr", 5)
        .await?;

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.schema == "crm"));
    assert_eq!(hits[0].chunk_id, "crm_users_1");
    assert!(hits[0].score >= hits[1].score);

    Ok(())
}

#[tokio::test]
async fn test_retrieve_similar_filters_after_cut() -> Result<()> {
    let env = init_test_env().await?;
    let store = &env.services.store_service;

    store
        .store_schemas(&[
            chunk("hr", "users", "CREATE TABLE users (id INT);"),
            chunk("crm", "users", "CREATE TABLE users (id INT);"),
        ])
        .await?;

    // Equal scores are ordered by chunk id, so crm_users_1 takes the single slot.
    let from_hr = store
        .retrieve_similar("CREATE TABLE users (id INT);", "hr", 1)
        .await?;
    assert_eq!(from_hr.len(), 1);
    assert_eq!(from_hr[0].chunk_id, "crm_users_1");

    let from_crm = store
        .retrieve_similar("CREATE TABLE users (id INT);", "crm", 1)
        .await?;
    assert!(from_crm.is_empty());

    Ok(())
}
