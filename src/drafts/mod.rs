//! View-scoped form state.
//!
//! Each form page owns one draft inside an `RwSignal` for as long as it is
//! mounted. Inputs mutate a single slot through the methods here; submit reads
//! the whole draft at once. Nothing is persisted.

mod auth;
mod upload;

pub use auth::{AuthDraft, AuthMode, Credentials};
pub use upload::{
    GenreState, UploadDraft, UploadSubmission, ARCHIVE_EXTENSION, IMAGE_EXTENSIONS,
    MAX_DESCRIPTION_CHARS, MAX_FILE_NAME_CHARS, MAX_UPLOAD_BYTES, MAX_UPLOAD_MB,
};
