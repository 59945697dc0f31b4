use crate::error::FieldError;
use crate::models::{Category, SelectedFile};
use serde::{Deserialize, Serialize};

pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_FILE_NAME_CHARS: usize = 255;
pub const MAX_UPLOAD_MB: u64 = 50;
pub const MAX_UPLOAD_BYTES: u64 = MAX_UPLOAD_MB * 1024 * 1024;

/// Game builds are uploaded as an archive.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Thumbnail formats accepted next to the archive.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadDraft {
    /// `None` until a genre is picked; the placeholder option cannot be re-selected.
    pub genre: Option<Category>,
    pub description: String,
    /// `None` when nothing is selected. Never `Some(vec![])`.
    pub files: Option<Vec<SelectedFile>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreState {
    Unset,
    Selected,
}

impl GenreState {
    pub fn css_class(&self) -> &'static str {
        match self {
            GenreState::Unset => "",
            GenreState::Selected => "selected",
        }
    }
}

/// Snapshot of the whole draft taken on submit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadSubmission {
    pub genre: Option<Category>,
    pub description: String,
    pub files: Option<Vec<SelectedFile>>,
}

impl UploadDraft {
    pub fn select_genre(&mut self, genre: Category) {
        self.genre = Some(genre);
    }

    /// Apply the raw value of the genre `<select>`. Unknown labels (the empty
    /// placeholder included) leave the current genre alone.
    pub fn set_genre_label(&mut self, label: &str) {
        if let Some(genre) = Category::parse(label) {
            self.select_genre(genre);
        }
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Replace the selection with exactly `files`.
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = if files.is_empty() { None } else { Some(files) };
    }

    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }

    pub fn genre_state(&self) -> GenreState {
        if self.genre.is_some() {
            GenreState::Selected
        } else {
            GenreState::Unset
        }
    }

    pub fn submission(&self) -> UploadSubmission {
        UploadSubmission {
            genre: self.genre,
            description: self.description.clone(),
            files: self.files.clone(),
        }
    }

    /// Everything that would stop the storage backend from accepting this
    /// draft. An empty list means the draft looks publishable.
    ///
    /// A selection needs at least one `.zip` build; images ride along as
    /// thumbnails.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.genre.is_none() {
            errors.push(FieldError::Required { field: "genre" });
        }

        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push(FieldError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_CHARS,
            });
        }

        match &self.files {
            None => errors.push(FieldError::Required { field: "files" }),
            Some(files) => {
                let mut has_archive = false;
                for file in files {
                    if file.name.chars().count() > MAX_FILE_NAME_CHARS {
                        errors.push(FieldError::TooLong {
                            field: "file name",
                            max: MAX_FILE_NAME_CHARS,
                        });
                    }
                    match file.extension().as_deref() {
                        Some(ARCHIVE_EXTENSION) => has_archive = true,
                        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => {}
                        _ => errors.push(FieldError::UnsupportedFileType {
                            name: file.name.clone(),
                        }),
                    }
                    if file.size_bytes > MAX_UPLOAD_BYTES {
                        errors.push(FieldError::FileTooLarge {
                            name: file.name.clone(),
                            max_mb: MAX_UPLOAD_MB,
                        });
                    }
                }
                if !has_archive {
                    errors.push(FieldError::MissingArchive);
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip(name: &str) -> SelectedFile {
        SelectedFile::new(name, 1024)
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = UploadDraft::default();
        assert_eq!(draft.genre, None);
        assert_eq!(draft.description, "");
        assert_eq!(draft.files, None);
        assert_eq!(draft.genre_state(), GenreState::Unset);
        assert_eq!(draft.genre_state().css_class(), "");
    }

    #[test]
    fn test_select_same_genre_twice_is_unchanged() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Fighting);
        let once = draft.clone();
        draft.select_genre(Category::Fighting);
        assert_eq!(draft, once);
        assert_eq!(draft.genre_state(), GenreState::Selected);
    }

    #[test]
    fn test_placeholder_label_does_not_unset_genre() {
        let mut draft = UploadDraft::default();
        draft.set_genre_label("");
        assert_eq!(draft.genre, None);
        draft.set_genre_label("Sports");
        draft.set_genre_label("");
        assert_eq!(draft.genre, Some(Category::Sports));
    }

    #[test]
    fn test_file_selection_replaces_previous() {
        let mut draft = UploadDraft::default();
        draft.set_files(vec![zip("a1.zip"), zip("a2.zip")]);
        draft.set_files(vec![zip("b.zip")]);
        assert_eq!(draft.files, Some(vec![zip("b.zip")]));
        assert_eq!(draft.file_count(), 1);
    }

    #[test]
    fn test_clearing_file_selection_gives_none() {
        let mut draft = UploadDraft::default();
        draft.set_files(vec![zip("a.zip")]);
        draft.set_files(Vec::new());
        assert_eq!(draft.files, None);
        assert_eq!(draft.file_count(), 0);
    }

    #[test]
    fn test_fields_update_independently() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Casual);
        draft.set_files(vec![zip("a.zip")]);
        draft.set_description("first".to_string());
        draft.set_description("second".to_string());
        assert_eq!(draft.genre, Some(Category::Casual));
        assert_eq!(draft.file_count(), 1);
        assert_eq!(draft.description, "second");
    }

    #[test]
    fn test_submission_reads_whole_draft() {
        let mut draft = UploadDraft::default();
        draft.set_genre_label("Puzzle");
        draft.set_description("test".to_string());
        draft.set_files(vec![zip("one.zip"), zip("two.zip")]);

        let submission = draft.submission();
        assert_eq!(submission.genre, Some(Category::Puzzle));
        assert_eq!(submission.description, "test");
        assert_eq!(submission.files.as_ref().map(Vec::len), Some(2));

        let json = serde_json::to_value(&submission).expect("submission serializes");
        assert_eq!(json["genre"], "Puzzle");
        assert_eq!(json["files"][1]["name"], "two.zip");
    }

    #[test]
    fn test_empty_draft_reports_missing_genre_and_files() {
        let errors = UploadDraft::default().validate();
        assert_eq!(
            errors,
            vec![
                FieldError::Required { field: "genre" },
                FieldError::Required { field: "files" },
            ]
        );
    }

    #[test]
    fn test_complete_draft_is_valid() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Adventure);
        draft.set_files(vec![zip("build.ZIP")]);
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_archive_with_thumbnail_is_valid() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Puzzle);
        draft.set_files(vec![zip("build.zip"), zip("cover.PNG")]);
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_images_alone_need_an_archive() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Puzzle);
        draft.set_files(vec![zip("cover.png"), zip("shot.webp")]);
        assert_eq!(draft.validate(), vec![FieldError::MissingArchive]);
    }

    #[test]
    fn test_validation_flags_oversized_and_foreign_files() {
        let mut draft = UploadDraft::default();
        draft.select_genre(Category::Adventure);
        draft.set_description("x".repeat(MAX_DESCRIPTION_CHARS + 1));
        draft.set_files(vec![
            SelectedFile::new("huge.zip", MAX_UPLOAD_BYTES + 1),
            zip("setup.exe"),
        ]);

        let errors = draft.validate();
        assert!(errors.contains(&FieldError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_CHARS
        }));
        assert!(errors.contains(&FieldError::FileTooLarge {
            name: "huge.zip".to_string(),
            max_mb: MAX_UPLOAD_MB
        }));
        assert!(errors.contains(&FieldError::UnsupportedFileType {
            name: "setup.exe".to_string()
        }));
    }
}
