//! Folder domain entities.

pub mod children;
pub mod model;

pub use children::FolderChildren;
pub use model::{Folder, NewFolder};
