use crate::error::FieldError;
use crate::routes::AppRoute;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 30;
pub const PASSWORD_MIN_CHARS: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("e-mail pattern is valid")
});

/// Characters rejected in an address even when the pattern above lets them by.
const EMAIL_FORBIDDEN: &[char] = &['<', '>', '"', '\'', ';', '\\'];

/// Which of the two credential forms is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    SignIn,
}

impl AuthMode {
    pub fn has_username(&self) -> bool {
        matches!(self, AuthMode::SignUp)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign up",
            AuthMode::SignIn => "Sign in",
        }
    }

    pub fn social_label(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign up with Google",
            AuthMode::SignIn => "Sign in with Google",
        }
    }

    pub fn alternate_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Already have an account?",
            AuthMode::SignIn => "Don't have an account?",
        }
    }

    pub fn alternate_label(&self) -> &'static str {
        self.alternate().submit_label()
    }

    /// The other form.
    pub fn alternate(&self) -> AuthMode {
        match self {
            AuthMode::SignUp => AuthMode::SignIn,
            AuthMode::SignIn => AuthMode::SignUp,
        }
    }

    pub fn route(&self) -> AppRoute {
        match self {
            AuthMode::SignUp => AppRoute::SignUp,
            AuthMode::SignIn => AppRoute::SignIn,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthDraft {
    mode: AuthMode,
    /// Only present in sign-up mode.
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

/// Request body for the auth backend.
#[derive(Serialize, Clone, PartialEq)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

impl AuthDraft {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            username: mode.has_username().then(String::new),
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Ignored in sign-in mode, which has no username slot.
    pub fn set_username(&mut self, username: String) {
        if let Some(slot) = self.username.as_mut() {
            *slot = username;
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.as_ref().map(|u| u.trim().to_string()),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Some(username) = &self.username {
            errors.extend(validate_username(username.trim()));
        }
        errors.extend(validate_email(self.email.trim()));

        let password_len = self.password.chars().count();
        if password_len == 0 {
            errors.push(FieldError::Required { field: "password" });
        } else if password_len < PASSWORD_MIN_CHARS {
            errors.push(FieldError::TooShort {
                field: "password",
                min: PASSWORD_MIN_CHARS,
            });
        }

        errors
    }
}

fn validate_username(username: &str) -> Option<FieldError> {
    let len = username.chars().count();
    if len == 0 {
        return Some(FieldError::Required { field: "username" });
    }
    if len < USERNAME_MIN_CHARS {
        return Some(FieldError::TooShort {
            field: "username",
            min: USERNAME_MIN_CHARS,
        });
    }
    if len > USERNAME_MAX_CHARS {
        return Some(FieldError::TooLong {
            field: "username",
            max: USERNAME_MAX_CHARS,
        });
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Some(FieldError::InvalidCharacters { field: "username" });
    }
    None
}

fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::Required { field: "email" });
    }
    let empty_label = email.split_once('@').is_some_and(|(_, domain)| domain.contains(".."));
    if !EMAIL_PATTERN.is_match(email) || email.contains(EMAIL_FORBIDDEN) || empty_label {
        return Some(FieldError::InvalidEmail);
    }
    None
}

// Keep passwords out of logs.
impl fmt::Debug for AuthDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthDraft")
            .field("mode", &self.mode)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: AuthMode) -> AuthDraft {
        let mut draft = AuthDraft::new(mode);
        draft.set_username("player_one".to_string());
        draft.set_email("player@example.com".to_string());
        draft.set_password("hunter2hunter2".to_string());
        draft
    }

    #[test]
    fn test_username_slot_only_in_signup() {
        assert_eq!(AuthDraft::new(AuthMode::SignUp).username, Some(String::new()));
        assert_eq!(AuthDraft::new(AuthMode::SignIn).username, None);

        let mut draft = AuthDraft::new(AuthMode::SignIn);
        draft.set_username("ignored".to_string());
        assert_eq!(draft.username, None);
    }

    #[test]
    fn test_email_edit_leaves_other_fields_alone() {
        let mut draft = filled(AuthMode::SignUp);
        draft.set_email("other@example.com".to_string());
        assert_eq!(draft.username.as_deref(), Some("player_one"));
        assert_eq!(draft.password, "hunter2hunter2");
        assert_eq!(draft.email, "other@example.com");
    }

    #[test]
    fn test_filled_drafts_validate() {
        assert!(filled(AuthMode::SignUp).validate().is_empty());
        assert!(filled(AuthMode::SignIn).validate().is_empty());
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let errors = AuthDraft::new(AuthMode::SignUp).validate();
        let fields: Vec<&str> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, ["username", "email", "password"]);
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(
            validate_username("ab"),
            Some(FieldError::TooShort {
                field: "username",
                min: USERNAME_MIN_CHARS
            })
        );
        assert_eq!(
            validate_username(&"a".repeat(USERNAME_MAX_CHARS + 1)),
            Some(FieldError::TooLong {
                field: "username",
                max: USERNAME_MAX_CHARS
            })
        );
        assert_eq!(
            validate_username("bad name"),
            Some(FieldError::InvalidCharacters { field: "username" })
        );
        assert_eq!(validate_username("Good_Name_42"), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("a@b.co"), None);
        assert_eq!(validate_email("first.last+tag@mail.example.org"), None);
        for bad in ["plain", "@example.com", "a@b", "a@.com", "a@b.", "a@b@c.com"] {
            assert_eq!(validate_email(bad), Some(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_email_rejects_spaces_markup_and_short_tld() {
        for bad in ["a b@c.d", "x<y@ex.com", "a@b.c", "a@b..com", "a;b@ex.com", "a@ex.c0m"] {
            assert_eq!(validate_email(bad), Some(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_short_password() {
        let mut draft = filled(AuthMode::SignIn);
        draft.set_password("short".to_string());
        assert_eq!(
            draft.validate(),
            vec![FieldError::TooShort {
                field: "password",
                min: PASSWORD_MIN_CHARS
            }]
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let draft = filled(AuthMode::SignUp);
        let rendered = format!("{:?} {:?}", draft, draft.credentials());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("player@example.com"));
    }

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_value(filled(AuthMode::SignIn).credentials())
            .expect("credentials serialize");
        assert!(body.get("username").is_none());
        assert_eq!(body["email"], "player@example.com");

        let body = serde_json::to_value(filled(AuthMode::SignUp).credentials())
            .expect("credentials serialize");
        assert_eq!(body["username"], "player_one");
    }

    #[test]
    fn test_alternate_links_point_at_each_other() {
        assert_eq!(AuthMode::SignUp.alternate().route(), AppRoute::SignIn);
        assert_eq!(AuthMode::SignIn.alternate().route(), AppRoute::SignUp);
        assert_eq!(AuthMode::SignUp.alternate_label(), "Sign in");
        assert_eq!(AuthMode::SignUp.alternate().route().path(), "/signin");
    }
}
