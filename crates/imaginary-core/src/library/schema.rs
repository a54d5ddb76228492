//! Idempotent schema setup for the library store.

use sqlx::postgres::PgPool;

use super::postgres::map_sqlx_err;
use super::LibraryResult;

/// Create the library tables if they do not exist yet.
///
/// `ON DELETE SET NULL` makes a collection delete revert its member images
/// to "no collection" instead of leaving a dangling reference.
pub async fn ensure_schema(pool: &PgPool) -> LibraryResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(map_sqlx_err)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS generated_images (
            id UUID PRIMARY KEY,
            url TEXT NOT NULL,
            prompt TEXT NOT NULL,
            model TEXT,
            collection_id UUID REFERENCES collections(id) ON DELETE SET NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            is_favorite BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(map_sqlx_err)?;

    Ok(())
}
