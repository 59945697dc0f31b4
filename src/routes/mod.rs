//! Typed navigation targets.
//!
//! `leptos_router` owns history, the address bar and path matching (the
//! `<Routes>` table lives in `app`). This module names the pages, the path a
//! navigation request pushes and the document title each page shows.

use leptos::prelude::*;

/// One entry per page the client can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    Home,
    /// `/signup`
    SignUp,
    /// `/signin`, also reachable as `/login`
    SignIn,
    /// `/profile`
    Profile,
    /// `/upload`
    Upload,
    /// `/game/{id}`; the id is an opaque string, never parsed.
    Game { id: String },
    /// Any path the route table does not know.
    NotFound { path: String },
}

impl AppRoute {
    /// Canonical path pushed when navigating to this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::SignUp => "/signup".to_string(),
            Self::SignIn => "/signin".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Upload => "/upload".to_string(),
            Self::Game { id } => format!("/game/{}", id),
            Self::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Home => "GameHost".to_string(),
            Self::SignUp => "Sign up · GameHost".to_string(),
            Self::SignIn => "Sign in · GameHost".to_string(),
            Self::Profile => "Profile · GameHost".to_string(),
            Self::Upload => "Upload a game · GameHost".to_string(),
            Self::Game { id } => format!("Game {} · GameHost", id),
            Self::NotFound { .. } => "Not found · GameHost".to_string(),
        }
    }
}

/// The single capability leaf views get: ask for another route.
///
/// Provided as context by the app root inside `<Router>`; leaves call
/// [`Navigator::go`] and never see the router itself.
#[derive(Clone, Copy)]
pub struct Navigator(Callback<AppRoute>);

impl Navigator {
    pub fn new(handler: impl Fn(AppRoute) + Send + Sync + 'static) -> Self {
        Self(Callback::new(handler))
    }

    pub fn go(&self, route: AppRoute) {
        self.0.run(route);
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Keep the document title in step with the page that is showing.
pub fn use_route_title(route: impl Fn() -> AppRoute + 'static) {
    Effect::new(move |_| {
        let route = route();
        log::debug!("showing {:?}", route);
        document().set_title(&route.title());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<AppRoute> {
        vec![
            AppRoute::Home,
            AppRoute::SignUp,
            AppRoute::SignIn,
            AppRoute::Profile,
            AppRoute::Upload,
            AppRoute::Game {
                id: "42".to_string(),
            },
        ]
    }

    #[test]
    fn test_paths_are_canonical() {
        let paths: Vec<String> = pages().iter().map(AppRoute::path).collect();
        assert_eq!(
            paths,
            ["/", "/signup", "/signin", "/profile", "/upload", "/game/42"]
        );
    }

    #[test]
    fn test_game_id_passes_through_untouched() {
        for id in ["7", "007", "not-a-number"] {
            let route = AppRoute::Game { id: id.to_string() };
            assert_eq!(route.path(), format!("/game/{id}"));
        }
    }

    #[test]
    fn test_not_found_keeps_requested_path() {
        let route = AppRoute::NotFound {
            path: "/settings".to_string(),
        };
        assert_eq!(route.path(), "/settings");
        assert_eq!(route.title(), "Not found · GameHost");
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: Vec<String> = pages().iter().map(AppRoute::title).collect();
        for (i, title) in titles.iter().enumerate() {
            assert!(!titles[i + 1..].contains(title), "{title} repeats");
        }
    }

    #[test]
    fn test_titles_mention_game_id() {
        let title = AppRoute::Game {
            id: "abc".to_string(),
        }
        .title();
        assert!(title.contains("abc"));
    }
}
