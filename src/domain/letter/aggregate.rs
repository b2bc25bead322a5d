//! Letter aggregate.
//!
//! Letters are posted inside a Colli but hold only its ID. Whether the
//! sender may post or delete is decided by the application layer against
//! a freshly loaded Colli.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    validate_text, ColliId, LetterId, Timestamp, UserId, ValidationError,
};

/// Minimum length of a text letter, in characters.
pub const MIN_TEXT_LENGTH: usize = 10;

/// Maximum length of a letter body or caption, in characters.
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Kind of letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterType {
    /// A written letter; `content` is required.
    Text,

    /// An uploaded file; `file_url` is required, `content` is an optional caption.
    File,
}

impl LetterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterType::Text => "TEXT",
            LetterType::File => "FILE",
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter aggregate.
///
/// # Invariants
///
/// - TEXT letters have `content` of at least 10 characters
/// - FILE letters have a non-empty `file_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    id: LetterId,
    colli_id: ColliId,
    sender_id: UserId,
    letter_type: LetterType,
    content: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Letter {
    /// Create a text letter.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooShort` / `TooLong` on `content`
    pub fn create_text(
        colli_id: ColliId,
        sender_id: UserId,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        validate_text("content", &content, MIN_TEXT_LENGTH, Some(MAX_CONTENT_LENGTH))?;
        Ok(Self::build(
            colli_id,
            sender_id,
            LetterType::Text,
            Some(content.trim().to_string()),
            None,
            None,
        ))
    }

    /// Create a file letter pointing at already-stored content.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `file_url` is blank
    /// - `TooLong` if the caption exceeds the content limit
    pub fn create_file(
        colli_id: ColliId,
        sender_id: UserId,
        file_url: impl Into<String>,
        file_name: Option<String>,
        caption: Option<String>,
    ) -> Result<Self, ValidationError> {
        let file_url = file_url.into();
        if file_url.trim().is_empty() {
            return Err(ValidationError::empty_field("file_url"));
        }
        let caption = caption
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(c) = &caption {
            validate_text("content", c, 1, Some(MAX_CONTENT_LENGTH))?;
        }
        let file_name = file_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self::build(
            colli_id,
            sender_id,
            LetterType::File,
            caption,
            Some(file_url.trim().to_string()),
            file_name,
        ))
    }

    /// Reconstitute a letter from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: LetterId,
        colli_id: ColliId,
        sender_id: UserId,
        letter_type: LetterType,
        content: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            colli_id,
            sender_id,
            letter_type,
            content,
            file_url,
            file_name,
            created_at,
            updated_at,
        }
    }

    fn build(
        colli_id: ColliId,
        sender_id: UserId,
        letter_type: LetterType,
        content: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: LetterId::new(),
            colli_id,
            sender_id,
            letter_type,
            content,
            file_url,
            file_name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &LetterId {
        &self.id
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn letter_type(&self) -> LetterType {
        self.letter_type
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_author(&self, user_id: &UserId) -> bool {
        &self.sender_id == user_id
    }
}
