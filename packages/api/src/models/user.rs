//! # Identity of the signed-in user
//!
//! ## [`Claims`]
//!
//! The decoded payload of a bearer credential, or the body `GET /auth/me`
//! returns for it. The backend does not commit to a schema here, so claims are
//! kept as an opaque JSON object with typed accessors for the handful of keys
//! the UI reads:
//!
//! - `role`: see [`Role`].
//! - `_id` / `id` / `user_id`: the account id, whichever appears first. The
//!   JWT `sub` is not an account id (it may be the email) and is never read.
//! - `email`, `prenom`, `nom`: profile fields used for greetings and forms.
//!
//! ## [`Role`]
//!
//! `Guest` describes nobody signed in. A signed-in principal is `Admin` or
//! `Clerk` when the `role` claim says so and `Member` otherwise.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Authorisation level of the current visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Member,
    Clerk,
    Admin,
}

impl Role {
    /// Role of a signed-in principal given its `role` claim.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
            Some("admin") => Role::Admin,
            Some("clerk") => Role::Clerk,
            _ => Role::Member,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Member => "member",
            Role::Clerk => "clerk",
            Role::Admin => "admin",
        }
    }
}

/// Opaque claims record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// String value of `key`; numbers are rendered as text.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_claim(self.get_str("role").as_deref())
    }

    pub fn user_id(&self) -> Option<String> {
        ["_id", "id", "user_id"]
            .iter()
            .find_map(|key| self.get_str(key))
    }

    pub fn email(&self) -> Option<String> {
        self.get_str("email")
    }

    pub fn first_name(&self) -> Option<String> {
        self.get_str("prenom")
    }

    pub fn last_name(&self) -> Option<String> {
        self.get_str("nom")
    }

    /// "Prénom Nom" when known, else the email, else the id.
    pub fn display_name(&self) -> String {
        let full = [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.email().or_else(|| self.user_id()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(json: &str) -> Claims {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_role_from_claim() {
        assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
        assert_eq!(Role::from_claim(Some(" Clerk ")), Role::Clerk);
        assert_eq!(Role::from_claim(Some("user")), Role::Member);
        assert_eq!(Role::from_claim(None), Role::Member);
    }

    #[test]
    fn test_accessors() {
        let c = claims(r#"{"_id":"665f","email":"ada@example.org","prenom":"Ada","nom":"Lovelace","role":"clerk"}"#);
        assert_eq!(c.role(), Role::Clerk);
        assert_eq!(c.user_id().as_deref(), Some("665f"));
        assert_eq!(c.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_user_id_fallbacks() {
        assert_eq!(claims(r#"{"id":"u-7"}"#).user_id().as_deref(), Some("u-7"));
        assert_eq!(claims(r#"{"user_id":42}"#).user_id().as_deref(), Some("42"));
        assert_eq!(claims(r#"{"id":""}"#).user_id(), None);
    }

    #[test]
    fn test_user_id_ignores_subject() {
        assert_eq!(claims(r#"{"sub":"ada@example.org"}"#).user_id(), None);
        let c = claims(r#"{"sub":"ada@example.org","_id":"665f"}"#);
        assert_eq!(c.user_id().as_deref(), Some("665f"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(claims(r#"{"email":"a@b.c"}"#).display_name(), "a@b.c");
        assert_eq!(claims(r#"{"prenom":"Ada"}"#).display_name(), "Ada");
        assert_eq!(claims(r#"{}"#).display_name(), "");
    }
}
