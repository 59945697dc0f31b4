use crate::routes::AppRoute;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Fixed game genre set, in display order.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub enum Category {
    Adventure,
    Puzzle,
    Fighting,
    Sports,
    Casual,
}

impl Category {
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Exact label match; anything else (including the select placeholder)
    /// is `None`.
    pub fn parse(label: &str) -> Option<Category> {
        label.parse().ok()
    }
}

/// One card on the home grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    /// 1-based ordinal.
    pub id: u32,
    pub image_ref: String,
    pub alt_text: String,
    pub title: String,
    pub blurb: String,
}

impl CatalogEntry {
    /// Synthesize `count` placeholder entries sharing one image.
    pub fn placeholders(count: u32, image_ref: &str) -> Vec<CatalogEntry> {
        (1..=count)
            .map(|id| CatalogEntry {
                id,
                image_ref: image_ref.to_string(),
                alt_text: format!("Game {}", id),
                title: "Game Title".to_string(),
                blurb: "Short description...".to_string(),
            })
            .collect()
    }

    pub fn play_route(&self) -> AppRoute {
        AppRoute::Game {
            id: self.id.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    Default,
    /// Compact header used above forms.
    Auth,
}

impl HeaderVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            HeaderVariant::Default => "header",
            HeaderVariant::Auth => "header auth-header",
        }
    }
}

/// What a page asks its header to show. Built once by the page and never
/// changed afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    pub show_auth_action: bool,
    pub show_profile_action: bool,
    pub variant: HeaderVariant,
}

impl HeaderConfig {
    pub fn home() -> Self {
        Self {
            show_auth_action: true,
            show_profile_action: false,
            variant: HeaderVariant::Default,
        }
    }

    pub fn auth() -> Self {
        Self {
            show_auth_action: false,
            show_profile_action: true,
            variant: HeaderVariant::Auth,
        }
    }

    pub fn member() -> Self {
        Self {
            show_auth_action: false,
            show_profile_action: true,
            variant: HeaderVariant::Default,
        }
    }

    /// Controls to render, left to right.
    pub fn controls(&self) -> Vec<HeaderControl> {
        let mut controls = vec![HeaderControl::Logo];
        if self.show_auth_action {
            controls.push(HeaderControl::SignUp);
        }
        if self.show_profile_action {
            controls.push(HeaderControl::Profile);
        }
        controls
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderControl {
    Logo,
    SignUp,
    Profile,
}

impl HeaderControl {
    pub fn target(&self) -> AppRoute {
        match self {
            HeaderControl::Logo => AppRoute::Home,
            HeaderControl::SignUp => AppRoute::SignUp,
            HeaderControl::Profile => AppRoute::Profile,
        }
    }
}

/// Entries of the signed-in member menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum ProfileAction {
    UserInfo,
    LikedGames,
    UploadGame,
    LogOut,
}

impl ProfileAction {
    pub fn all() -> Vec<ProfileAction> {
        ProfileAction::iter().collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileAction::UserInfo => "User Info",
            ProfileAction::LikedGames => "Liked Games",
            ProfileAction::UploadGame => "Upload a Game",
            ProfileAction::LogOut => "Log out",
        }
    }

    /// `None` for entries whose page does not exist yet.
    pub fn target(&self) -> Option<AppRoute> {
        match self {
            ProfileAction::UploadGame => Some(AppRoute::Upload),
            ProfileAction::LogOut => Some(AppRoute::Home),
            ProfileAction::UserInfo | ProfileAction::LikedGames => None,
        }
    }
}

/// Metadata of a file picked in the upload form. Contents are never read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercased extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
