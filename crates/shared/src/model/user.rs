use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::model::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Maker,
    Eater,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Maker => "maker",
            Role::Eater => "eater",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "maker" => Some(Role::Maker),
            "eater" => Some(Role::Eater),
            _ => None,
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Maker => "/maker",
            Role::Eater => "/eater",
        }
    }

    pub fn login_path(&self) -> String {
        format!("/login?role={}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login response from the remote API. `role` stays a string there.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub message: String,
}

impl AuthUser {
    /// Where the login screen sends this user next.
    pub fn redirect_path(&self) -> &'static str {
        Role::parse(&self.role).map_or("/", |role| role.home_path())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl Session {
    pub fn new(user_id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
            profile: None,
        }
    }

    pub fn local_part(&self) -> &str {
        email_local_part(&self.email)
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {}!", self.local_part())
    }
}

pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// Name put on an order: the email local part with runs of non-word
/// characters collapsed to a space, or `Eater` if nothing is left.
pub fn eater_display_name(email: &str) -> String {
    let mut name = String::with_capacity(email.len());
    let mut in_gap = false;

    for ch in email_local_part(email).chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch);
            in_gap = false;
        } else if !in_gap {
            name.push(' ');
            in_gap = true;
        }
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Eater".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_collapses_punctuation() {
        assert_eq!(eater_display_name("jane.doe+food@mail.com"), "jane doe food");
        assert_eq!(eater_display_name("snake_case@mail.com"), "snake_case");
        assert_eq!(eater_display_name("...@mail.com"), "Eater");
        assert_eq!(eater_display_name(""), "Eater");
    }

    #[test]
    fn display_name_treats_non_ascii_as_separator() {
        assert_eq!(eater_display_name("zoë@mail.com"), "zo");
    }

    #[test]
    fn login_redirect_follows_role() {
        let mut user = AuthUser {
            id: 1,
            email: "chef@mail.com".into(),
            role: "maker".into(),
            message: String::new(),
        };
        assert_eq!(user.redirect_path(), "/maker");
        user.role = "eater".into();
        assert_eq!(user.redirect_path(), "/eater");
        user.role = "admin".into();
        assert_eq!(user.redirect_path(), "/");
    }

    #[test]
    fn session_greets_by_local_part() {
        let session = Session::new(3, "chef@mail.com", Role::Maker);
        assert_eq!(session.greeting(), "Hi, chef!");
        assert_eq!(Role::Eater.login_path(), "/login?role=eater");
    }
}
