//! Parent reference decoded from the caller-facing token.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::FolderId;

/// Token callers use to address the root level.
pub const ROOT_TOKEN: &str = "root";

/// Where a children lookup is anchored.
///
/// The string token is decoded once at the API boundary; internal code
/// only ever matches on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ParentRef {
    /// Folders with no parent.
    Root,
    /// Direct children of a real folder.
    Folder(FolderId),
}

impl ParentRef {
    /// Decode a caller token. Only the exact string `"root"` selects the
    /// root level; every other value is taken as a folder identifier.
    pub fn from_token(token: &str) -> Self {
        if token == ROOT_TOKEN {
            Self::Root
        } else {
            Self::Folder(FolderId::new(token))
        }
    }

    /// The folder identifier, or `None` at the root level.
    pub fn folder_id(&self) -> Option<&FolderId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(id),
        }
    }
}

impl From<Option<FolderId>> for ParentRef {
    fn from(id: Option<FolderId>) -> Self {
        id.map_or(Self::Root, Self::Folder)
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_TOKEN),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_token() {
        assert_eq!(ParentRef::from_token("root"), ParentRef::Root);
        assert!(ParentRef::from_token("root").folder_id().is_none());
    }

    #[test]
    fn test_other_tokens_are_folders() {
        for token in ["F1", "Root", "ROOT", " root", ""] {
            let parent = ParentRef::from_token(token);
            assert_eq!(parent, ParentRef::Folder(FolderId::new(token)));
            assert!(parent.folder_id().is_some());
        }
    }

    #[test]
    fn test_display_roundtrips_token() {
        assert_eq!(ParentRef::Root.to_string(), "root");
        assert_eq!(ParentRef::from_token("F2").to_string(), "F2");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ParentRef::from(None), ParentRef::Root);
        assert_eq!(
            ParentRef::from(Some(FolderId::new("F1"))),
            ParentRef::Folder(FolderId::new("F1"))
        );
    }
}
