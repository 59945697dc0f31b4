use thiserror::Error;

/// A problem with one form field, shown inline under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} can only contain letters, numbers, and underscores")]
    InvalidCharacters { field: &'static str },

    #[error("enter a valid e-mail address")]
    InvalidEmail,

    #[error("{name} is larger than {max_mb} MB")]
    FileTooLarge { name: String, max_mb: u64 },

    #[error("{name} is neither a .zip archive nor an image")]
    UnsupportedFileType { name: String },

    #[error("select a .zip archive with the game build")]
    MissingArchive,
}

impl FieldError {
    /// Form slot the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field }
            | FieldError::TooShort { field, .. }
            | FieldError::TooLong { field, .. }
            | FieldError::InvalidCharacters { field } => *field,
            FieldError::InvalidEmail => "email",
            FieldError::FileTooLarge { .. }
            | FieldError::UnsupportedFileType { .. }
            | FieldError::MissingArchive => "files",
        }
    }
}
