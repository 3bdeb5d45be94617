//! Namespace inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use foldertree_core::error::AppError;
use foldertree_core::types::{ApiResponse, ROOT_TOKEN};
use foldertree_entity::{File, Folder};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List every folder
    List,
    /// List every file
    Files,
    /// List the immediate children of a folder
    Children {
        /// Folder ID, or "root" for top-level folders
        #[arg(default_value = ROOT_TOKEN)]
        parent: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent
    parent: String,
    /// Path
    path: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            parent: f
                .parent_id
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            path: f.path.clone(),
        }
    }
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: String,
    /// Name
    name: String,
    /// Folder
    folder: String,
    /// Path
    path: String,
    /// Size in bytes
    size: i64,
}

impl From<&File> for FileRow {
    fn from(f: &File) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            folder: f.parent_id.to_string(),
            path: f.path.clone(),
            size: f.size.unwrap_or(0),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let service = super::namespace_service(&config).await?;

    match &args.command {
        FolderCommand::List => {
            let folders = unwrap_envelope(service.get_all_folders().await)?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Files => {
            let files = unwrap_envelope(service.get_all_files().await)?;
            let rows: Vec<FileRow> = files.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Children { parent } => {
            let children = unwrap_envelope(service.get_children_by_token(parent).await)?;
            match format {
                OutputFormat::Json => output::print_json(&children),
                OutputFormat::Table => {
                    let folders: Vec<FolderRow> =
                        children.folders.iter().map(FolderRow::from).collect();
                    let files: Vec<FileRow> = children.files.iter().map(FileRow::from).collect();
                    output::print_heading("Folders");
                    output::print_list(&folders, format);
                    output::print_heading("Files");
                    output::print_list(&files, format);
                }
            }
        }
    }

    Ok(())
}

fn unwrap_envelope<T>(resp: ApiResponse<T>) -> Result<T, AppError> {
    resp.into_result().map_err(AppError::store_unavailable)
}
