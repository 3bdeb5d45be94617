//! Namespace listing and traversal.

pub mod service;

pub use service::NamespaceService;
