//! File repository implementation.

use sqlx::PgPool;

use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::file::{File, NewFile};

const FILE_COLUMNS: &str = "id, name, parent_id, path, size, created_at, updated_at";

/// Repository for file rows.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every file row.
    pub async fn find_all(&self) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files ORDER BY name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::StoreUnavailable, "Failed to list files", e))
    }

    /// List the files directly inside a folder.
    pub async fn find_by_parent(&self, parent_id: &FolderId) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE parent_id = $1 ORDER BY name ASC, id ASC"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::StoreUnavailable, "Failed to list folder files", e)
        })
    }

    /// Insert a file. A missing size falls back to 0.
    pub async fn create(&self, data: &NewFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(&format!(
            "INSERT INTO files (id, name, parent_id, path, size) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) RETURNING {FILE_COLUMNS}"
        ))
        .bind(&data.id)
        .bind(&data.name)
        .bind(&data.parent_id)
        .bind(&data.path)
        .bind(data.size)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Failed to create file '{}'", data.id),
                e,
            )
        })
    }

    /// Count all files.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to count files", e)
            })?;
        Ok(count as u64)
    }
}
