//! PostgreSQL implementation of the library repository.

use async_trait::async_trait;
use chrono::Utc;
use imaginary_types::error::LibraryError;
use imaginary_types::models::{Collection, ImageFilter, LibraryImage};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use uuid::Uuid;

use super::{LibraryRepository, LibraryResult};

pub(crate) fn map_sqlx_err(err: sqlx::Error) -> LibraryError {
    LibraryError::Database(err.to_string())
}

fn row_to_collection(row: &PgRow) -> Collection {
    Collection {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

fn row_to_image(row: &PgRow) -> LibraryImage {
    LibraryImage {
        id: row.get("id"),
        url: row.get("url"),
        prompt: row.get("prompt"),
        model: row.get("model"),
        collection_id: row.get("collection_id"),
        created_at: row.get("created_at"),
        is_favorite: row.get("is_favorite"),
    }
}

/// SELECT statement for the image list, with conjunctive filter clauses.
///
/// Bind order when present: collection id first, then the search pattern.
/// The favorite clause needs no bind.
fn image_query_sql(filter: &ImageFilter) -> String {
    let mut sql = String::from(
        "SELECT id, url, prompt, model, collection_id, created_at, is_favorite \
         FROM generated_images",
    );

    let mut clauses: Vec<String> = Vec::new();
    let mut idx = 1;
    if filter.collection_id.is_some() {
        clauses.push(format!("collection_id = ${}", idx));
        idx += 1;
    }
    if filter.search.is_some() {
        clauses.push(format!("prompt ILIKE ${}", idx));
    }
    if filter.favorites_only {
        clauses.push("is_favorite IS TRUE".to_string());
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");
    sql
}

/// Library repository backed by a Postgres pool.
#[derive(Clone)]
pub struct PgLibraryRepository {
    pool: PgPool,
}

impl PgLibraryRepository {
    /// Connect and prepare the schema.
    pub async fn connect(database_url: &str) -> LibraryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(map_sqlx_err)?;

        super::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LibraryRepository for PgLibraryRepository {
    async fn list_collections(&self) -> LibraryResult<Vec<Collection>> {
        let rows = sqlx::query(
            "SELECT id, name, description, created_at FROM collections ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.iter().map(row_to_collection).collect())
    }

    async fn create_collection(
        &self,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection> {
        let collection =
            Collection { id: Uuid::new_v4(), name, description, created_at: Utc::now() };

        sqlx::query(
            "INSERT INTO collections (id, name, description, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(collection.id)
        .bind(&collection.name)
        .bind(&collection.description)
        .bind(collection.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(collection)
    }

    async fn update_collection(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> LibraryResult<Collection> {
        let row = sqlx::query(
            "UPDATE collections SET name = $2, description = $3 WHERE id = $1 \
             RETURNING id, name, description, created_at",
        )
        .bind(id)
        .bind(&name)
        .bind(&description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?
        .ok_or_else(|| LibraryError::NotFound {
            entity: "collection".to_string(),
            id: id.to_string(),
        })?;

        Ok(row_to_collection(&row))
    }

    async fn delete_collection(&self, id: Uuid) -> LibraryResult<()> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::NotFound {
                entity: "collection".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_images(&self, filter: &ImageFilter) -> LibraryResult<Vec<LibraryImage>> {
        let sql = image_query_sql(filter);
        let mut query = sqlx::query(&sql);
        if let Some(collection_id) = filter.collection_id {
            query = query.bind(collection_id);
        }
        if let Some(search) = &filter.search {
            query = query.bind(format!("%{}%", search));
        }

        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_err)?;
        Ok(rows.iter().map(row_to_image).collect())
    }

    async fn insert_image(
        &self,
        url: String,
        prompt: String,
        model: Option<String>,
    ) -> LibraryResult<LibraryImage> {
        let image = LibraryImage {
            id: Uuid::new_v4(),
            url,
            prompt,
            model,
            collection_id: None,
            created_at: Utc::now(),
            is_favorite: None,
        };

        sqlx::query(
            "INSERT INTO generated_images (id, url, prompt, model, collection_id, created_at, is_favorite) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(image.id)
        .bind(&image.url)
        .bind(&image.prompt)
        .bind(&image.model)
        .bind(image.collection_id)
        .bind(image.created_at)
        .bind(image.is_favorite)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(image)
    }

    async fn set_image_collection(
        &self,
        id: Uuid,
        collection_id: Option<Uuid>,
    ) -> LibraryResult<()> {
        let result = sqlx::query("UPDATE generated_images SET collection_id = $2 WHERE id = $1")
            .bind(id)
            .bind(collection_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() });
        }
        Ok(())
    }

    async fn set_image_favorite(&self, id: Uuid, is_favorite: bool) -> LibraryResult<()> {
        let result = sqlx::query("UPDATE generated_images SET is_favorite = $2 WHERE id = $1")
            .bind(id)
            .bind(is_favorite)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() });
        }
        Ok(())
    }

    async fn assign_images(&self, ids: &[Uuid], collection_id: Option<Uuid>) -> LibraryResult<u64> {
        let result =
            sqlx::query("UPDATE generated_images SET collection_id = $2 WHERE id = ANY($1)")
                .bind(ids)
                .bind(collection_id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        Ok(result.rows_affected())
    }

    async fn delete_images(&self, ids: &[Uuid]) -> LibraryResult<u64> {
        let result = sqlx::query("DELETE FROM generated_images WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(result.rows_affected())
    }

    async fn delete_image(&self, id: Uuid) -> LibraryResult<()> {
        let result = sqlx::query("DELETE FROM generated_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(LibraryError::NotFound { entity: "image".to_string(), id: id.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_image_query() {
        let sql = image_query_sql(&ImageFilter::default());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_collection_filter_binds_first() {
        let filter = ImageFilter {
            collection_id: Some(Uuid::nil()),
            search: Some("dragon".to_string()),
            favorites_only: true,
        };
        let sql = image_query_sql(&filter);
        assert!(sql.contains("collection_id = $1"));
        assert!(sql.contains("prompt ILIKE $2"));
        assert!(sql.contains("is_favorite IS TRUE"));
        assert_eq!(sql.matches(" AND ").count(), 2);
    }

    #[test]
    fn test_search_only_filter() {
        let filter = ImageFilter {
            collection_id: None,
            search: Some("dragon".to_string()),
            favorites_only: false,
        };
        let sql = image_query_sql(&filter);
        assert!(sql.contains("prompt ILIKE $1"));
        assert!(!sql.contains("collection_id"));
    }
}
