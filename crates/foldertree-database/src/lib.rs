//! # foldertree-database
//!
//! Persistence for the folder/file forest: PostgreSQL connection
//! management, migrations, concrete repositories, and the
//! [`NamespaceStore`] trait with its PostgreSQL and in-memory backends.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryNamespaceStore, NamespaceStore, PgNamespaceStore, StoreManager};
