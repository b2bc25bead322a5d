//! Use-case errors.
//!
//! Authorization failures exist only at this layer; the aggregates never
//! know who is acting.

use std::fmt;
use thiserror::Error;

use crate::domain::colli::ColliError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Kind of entity a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Colli,
    Letter,
    Comment,
    User,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Entity::Colli => "Colli",
            Entity::Letter => "Letter",
            Entity::Comment => "Comment",
            Entity::User => "User",
        };
        f.write_str(s)
    }
}

/// Errors returned by command and query handlers.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// The actor is not allowed to perform the action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Colli(#[from] ColliError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A port (repository, user lookup) failed.
    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl UseCaseError {
    pub fn not_found(entity: Entity, id: impl ToString) -> Self {
        UseCaseError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        UseCaseError::Forbidden(reason.into())
    }

    /// Stable code handed to the transport layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            UseCaseError::NotFound { entity, .. } => match entity {
                Entity::Colli => ErrorCode::ColliNotFound,
                Entity::Letter => ErrorCode::LetterNotFound,
                Entity::Comment => ErrorCode::CommentNotFound,
                Entity::User => ErrorCode::UserNotFound,
            },
            UseCaseError::Forbidden(_) => ErrorCode::Forbidden,
            UseCaseError::Colli(e) => e.code(),
            UseCaseError::Validation(_) => ErrorCode::ValidationFailed,
            UseCaseError::Infrastructure(e) => e.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colli::ColliStatus;
    use crate::domain::foundation::ColliId;

    #[test]
    fn not_found_maps_to_entity_code() {
        let id = ColliId::new();
        let err = UseCaseError::not_found(Entity::Colli, id);
        assert_eq!(err.code(), ErrorCode::ColliNotFound);
        assert_eq!(err.to_string(), format!("Colli not found: {id}"));
        assert_eq!(
            UseCaseError::not_found(Entity::Comment, "c").code(),
            ErrorCode::CommentNotFound
        );
    }

    #[test]
    fn wrapped_errors_keep_their_codes() {
        let inactive: UseCaseError = ColliError::Inactive {
            current: ColliStatus::Pending,
            attempted: "post letter",
        }
        .into();
        assert_eq!(inactive.code(), ErrorCode::InactiveColli);

        let invalid: UseCaseError = ValidationError::empty_field("content").into();
        assert_eq!(invalid.code(), ErrorCode::ValidationFailed);

        let db: UseCaseError = DomainError::database("connection reset").into();
        assert_eq!(db.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn forbidden_carries_reason() {
        let err = UseCaseError::forbidden("only managers can accept members");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.to_string(), "Forbidden: only managers can accept members");
    }
}
