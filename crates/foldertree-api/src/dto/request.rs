//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Path parameters of `GET /folders/{parentId}/children`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChildrenPath {
    /// `"root"` or a folder identifier.
    #[serde(rename = "parentId")]
    #[validate(
        length(min = 1, max = 36, message = "parentId must be 1 to 36 characters"),
        custom(function = "printable_token")
    )]
    pub parent_id: String,
}

/// Ids are stored as text columns, which cannot hold control characters.
fn printable_token(token: &str) -> Result<(), ValidationError> {
    if token.chars().any(char::is_control) {
        let mut err = ValidationError::new("control_character");
        err.message = Some("parentId must not contain control characters".into());
        return Err(err);
    }
    Ok(())
}
