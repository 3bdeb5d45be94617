//! In-memory namespace store.
//!
//! Holds both tables behind one lock and enforces the same constraints the
//! SQL schema does: unique ids per kind, parents that exist, non-negative
//! sizes, and cascade removal of descendant folders and their files.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_core::types::{FileId, FolderId};
use foldertree_entity::{File, Folder, NewFile, NewFolder};

use super::NamespaceStore;

const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Default)]
struct Tables {
    folders: BTreeMap<FolderId, Folder>,
    files: BTreeMap<FileId, File>,
}

/// Process-local namespace store.
#[derive(Debug, Clone, Default)]
pub struct MemoryNamespaceStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryNamespaceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folder. The path is stored exactly as given.
    pub async fn insert_folder(&self, data: NewFolder) -> AppResult<Folder> {
        if !data.id.is_well_formed() {
            return Err(constraint(format!("invalid folder id '{}'", data.id)));
        }
        check_name(&data.name)?;

        let mut tables = self.tables.write().await;
        if tables.folders.contains_key(&data.id) {
            return Err(constraint(format!("duplicate folder id '{}'", data.id)));
        }
        if let Some(parent) = &data.parent_id {
            if !tables.folders.contains_key(parent) {
                return Err(constraint(format!("parent folder '{parent}' does not exist")));
            }
        }

        let now = Utc::now();
        let folder = Folder {
            id: data.id,
            name: data.name,
            parent_id: data.parent_id,
            path: data.path,
            created_at: Some(now),
            updated_at: Some(now),
        };
        tables.folders.insert(folder.id.clone(), folder.clone());
        Ok(folder)
    }

    /// Insert a file. A missing size falls back to 0.
    pub async fn insert_file(&self, data: NewFile) -> AppResult<File> {
        if !data.id.is_well_formed() {
            return Err(constraint(format!("invalid file id '{}'", data.id)));
        }
        check_name(&data.name)?;
        let size = data.size.unwrap_or(0);
        if size < 0 {
            return Err(constraint(format!("negative size for file '{}'", data.id)));
        }

        let mut tables = self.tables.write().await;
        if tables.files.contains_key(&data.id) {
            return Err(constraint(format!("duplicate file id '{}'", data.id)));
        }
        if !tables.folders.contains_key(&data.parent_id) {
            return Err(constraint(format!(
                "parent folder '{}' does not exist",
                data.parent_id
            )));
        }

        let now = Utc::now();
        let file = File {
            id: data.id,
            name: data.name,
            parent_id: data.parent_id,
            path: data.path,
            size: Some(size),
            created_at: Some(now),
            updated_at: Some(now),
        };
        tables.files.insert(file.id.clone(), file.clone());
        Ok(file)
    }

    /// Delete a folder together with every descendant folder and every
    /// file inside any of them. Returns `false` if the folder did not exist.
    pub async fn delete_folder(&self, id: &FolderId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.folders.contains_key(id) {
            return Ok(false);
        }

        let mut doomed: HashSet<FolderId> = HashSet::from([id.clone()]);
        let mut frontier = vec![id.clone()];
        while let Some(current) = frontier.pop() {
            for folder in tables.folders.values() {
                if folder.parent_id.as_ref() == Some(&current) && doomed.insert(folder.id.clone())
                {
                    frontier.push(folder.id.clone());
                }
            }
        }

        tables.folders.retain(|fid, _| !doomed.contains(fid));
        let before = tables.files.len();
        tables.files.retain(|_, file| !doomed.contains(&file.parent_id));

        debug!(
            folder_id = %id,
            folders_removed = doomed.len(),
            files_removed = before - tables.files.len(),
            "Folder deleted with cascade"
        );
        Ok(true)
    }
}

#[async_trait]
impl NamespaceStore for MemoryNamespaceStore {
    async fn list_all_folders(&self) -> AppResult<Vec<Folder>> {
        let tables = self.tables.read().await;
        Ok(sorted_folders(tables.folders.values()))
    }

    async fn list_all_files(&self) -> AppResult<Vec<File>> {
        let tables = self.tables.read().await;
        Ok(sorted_files(tables.files.values()))
    }

    async fn list_folders_by_parent(
        &self,
        parent_id: Option<&FolderId>,
    ) -> AppResult<Vec<Folder>> {
        let tables = self.tables.read().await;
        Ok(sorted_folders(
            tables
                .folders
                .values()
                .filter(|f| f.parent_id.as_ref() == parent_id),
        ))
    }

    async fn list_files_by_parent(&self, parent_id: &FolderId) -> AppResult<Vec<File>> {
        let tables = self.tables.read().await;
        Ok(sorted_files(
            tables.files.values().filter(|f| &f.parent_id == parent_id),
        ))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

fn constraint(message: String) -> AppError {
    AppError::store_unavailable(format!("Constraint violation: {message}"))
}

fn check_name(name: &str) -> AppResult<()> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(constraint(format!("name exceeds {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

fn sorted_folders<'a>(folders: impl Iterator<Item = &'a Folder>) -> Vec<Folder> {
    let mut out: Vec<Folder> = folders.cloned().collect();
    out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    out
}

fn sorted_files<'a>(files: impl Iterator<Item = &'a File>) -> Vec<File> {
    let mut out: Vec<File> = files.cloned().collect();
    out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    out
}
