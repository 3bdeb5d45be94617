//! # foldertree-service
//!
//! Stateless read services over the namespace store. Services follow
//! constructor injection: the store handle is provided at construction
//! time as an `Arc`.

pub mod namespace;

pub use namespace::NamespaceService;
