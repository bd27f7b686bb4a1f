//! SQLite-backed document store.
//!
//! One table holds every collection. Rows are namespaced by project id so
//! several deployments can share a database file.
//!
//! Deleting a row records its last version in `document_tombstones` (via a
//! trigger, in the same statement). Re-creating the id continues from that
//! version, so a precondition read before the delete can never match again.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

use crate::infrastructure::ports::{
    ClockPort, Document, DocumentStore, Fields, Precondition, RepoError,
};

/// SQLite implementation of the document store port.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    project: String,
    clock: Arc<dyn ClockPort>,
}

impl SqliteDocumentStore {
    pub async fn new(
        db_path: &str,
        project: impl Into<String>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                project TEXT NOT NULL,
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                fields_json TEXT NOT NULL,
                version INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (project, collection, id)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS document_tombstones (
                project TEXT NOT NULL,
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                version INTEGER NOT NULL,
                PRIMARY KEY (project, collection, id)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        sqlx::query(
            r#"
            CREATE TRIGGER IF NOT EXISTS documents_tombstone
            AFTER DELETE ON documents
            BEGIN
                INSERT OR REPLACE INTO document_tombstones (project, collection, id, version)
                VALUES (OLD.project, OLD.collection, OLD.id, OLD.version);
            END
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        Ok(Self {
            pool,
            project: project.into(),
            clock,
        })
    }

    fn encode(fields: &Fields) -> Result<String, RepoError> {
        serde_json::to_string(fields).map_err(RepoError::serialization)
    }

    fn decode(row: &SqliteRow) -> Result<Document, RepoError> {
        let id: String = row.get("id");
        let json: String = row.get("fields_json");
        let version: i64 = row.get("version");
        let fields: Fields = serde_json::from_str(&json).map_err(RepoError::serialization)?;
        let version = u64::try_from(version)
            .map_err(|_| RepoError::serialization(format!("negative version for {id}")))?;
        Ok(Document {
            id,
            version,
            fields,
        })
    }

    /// Insert a document that must not exist yet. Returns its version, or
    /// `None` when a live document already holds the id.
    async fn insert_new(
        &self,
        collection: &str,
        id: &str,
        json: &str,
    ) -> Result<Option<u64>, RepoError> {
        let now = self.clock.now().to_rfc3339();
        let row = sqlx::query(
            r#"
            INSERT INTO documents (project, collection, id, fields_json, version, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, COALESCE(
                (SELECT version FROM document_tombstones
                 WHERE project = ?1 AND collection = ?2 AND id = ?3), 0) + 1, ?5, ?5)
            ON CONFLICT(project, collection, id) DO NOTHING
            RETURNING version
            "#,
        )
        .bind(self.project.as_str())
        .bind(collection)
        .bind(id)
        .bind(json)
        .bind(now.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        row.map(|row| {
            let version: i64 = row.get("version");
            u64::try_from(version)
                .map_err(|_| RepoError::serialization(format!("negative version for {id}")))
        })
        .transpose()
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepoError> {
        let row = sqlx::query(
            "SELECT id, fields_json, version FROM documents WHERE project = ? AND collection = ? AND id = ?",
        )
        .bind(self.project.as_str())
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("get", e))?;

        row.as_ref().map(Self::decode).transpose()
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, fields_json, version FROM documents WHERE project = ? AND collection = ? ORDER BY rowid",
        )
        .bind(self.project.as_str())
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list", e))?;

        rows.iter().map(Self::decode).collect()
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepoError> {
        let json = Self::encode(&fields)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO documents (project, collection, id, fields_json, version, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, COALESCE(
                (SELECT version FROM document_tombstones
                 WHERE project = ?1 AND collection = ?2 AND id = ?3), 0) + 1, ?5, ?5)
            ON CONFLICT(project, collection, id) DO UPDATE SET
                fields_json = excluded.fields_json,
                version = documents.version + 1,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(self.project.as_str())
        .bind(collection)
        .bind(id)
        .bind(json)
        .bind(now.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("set", e))?;

        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, RepoError> {
        let json = Self::encode(&fields)?;
        let id = Uuid::new_v4().to_string();
        match self.insert_new(collection, &id, &json).await? {
            Some(_) => Ok(id),
            None => Err(RepoError::conflict(collection, id)),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM documents WHERE project = ? AND collection = ? AND id = ?")
            .bind(self.project.as_str())
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete", e))?;
        Ok(())
    }

    async fn set_if(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        precondition: Precondition,
    ) -> Result<u64, RepoError> {
        let json = Self::encode(&fields)?;

        match precondition {
            Precondition::Absent => self
                .insert_new(collection, id, &json)
                .await?
                .ok_or_else(|| RepoError::conflict(collection, id)),
            Precondition::Version(expected) => {
                let expected_db = i64::try_from(expected)
                    .map_err(|_| RepoError::conflict(collection, id))?;
                let now = self.clock.now().to_rfc3339();
                let result = sqlx::query(
                    r#"
                    UPDATE documents
                    SET fields_json = ?, version = version + 1, updated_at = ?
                    WHERE project = ? AND collection = ? AND id = ? AND version = ?
                    "#,
                )
                .bind(json)
                .bind(now)
                .bind(self.project.as_str())
                .bind(collection)
                .bind(id)
                .bind(expected_db)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("set_if", e))?;

                if result.rows_affected() == 1 {
                    Ok(expected + 1)
                } else {
                    Err(RepoError::conflict(collection, id))
                }
            }
        }
    }

    async fn delete_if(
        &self,
        collection: &str,
        id: &str,
        precondition: Precondition,
    ) -> Result<(), RepoError> {
        match precondition {
            // Nothing to delete: this is a plain read and, like any read, may be
            // outdated as soon as it returns.
            Precondition::Absent => match self.get(collection, id).await? {
                None => Ok(()),
                Some(_) => Err(RepoError::conflict(collection, id)),
            },
            Precondition::Version(expected) => {
                let expected_db = i64::try_from(expected)
                    .map_err(|_| RepoError::conflict(collection, id))?;
                let result = sqlx::query(
                    "DELETE FROM documents WHERE project = ? AND collection = ? AND id = ? AND version = ?",
                )
                .bind(self.project.as_str())
                .bind(collection)
                .bind(id)
                .bind(expected_db)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("delete_if", e))?;

                if result.rows_affected() == 1 {
                    Ok(())
                } else {
                    Err(RepoError::conflict(collection, id))
                }
            }
        }
    }
}
