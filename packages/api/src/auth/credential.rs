//! Bearer credentials and local decoding of their claims.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::AuthError;
use crate::models::Claims;

/// Opaque bearer string issued by `POST /auth/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the payload segment without verifying the signature.
    ///
    /// Only the backend can vouch for a credential; this is for reading the
    /// role and identity it carries.
    pub fn claims(&self) -> Result<Claims, AuthError> {
        let mut segments = self.0.split('.');
        let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
            return Err(AuthError::Malformed("expected dot-separated segments".into()));
        };
        let payload = payload.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| URL_SAFE_NO_PAD.decode(payload.replace('+', "-").replace('/', "_")))
            .map_err(|e| AuthError::Malformed(format!("payload is not base64: {e}")))?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(fields)) => Ok(Claims::new(fields)),
            Ok(_) => Err(AuthError::Malformed("payload is not a JSON object".into())),
            Err(e) => Err(AuthError::Malformed(format!("payload is not JSON: {e}"))),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Build an unsigned credential carrying `claims`. Test helper for callers
/// that need a decodable token without a backend.
pub fn unsigned_credential(claims: &Map<String, Value>) -> Credential {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(Value::Object(claims.clone()).to_string());
    Credential::new(format!("{header}.{payload}."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_decodes_role_and_identity() {
        let credential = unsigned_credential(&object(json!({
            "sub": "ada@example.org",
            "_id": "665f",
            "role": "admin",
            "exp": 1_900_000_000u64
        })));
        let claims = credential.claims().unwrap();
        assert_eq!(claims.role(), Role::Admin);
        assert_eq!(claims.user_id().as_deref(), Some("665f"));
        assert_eq!(claims.email(), None);
    }

    #[test]
    fn test_accepts_padded_and_standard_alphabet() {
        // standard alphabet, padded
        let payload = base64::engine::general_purpose::STANDARD.encode(r#"{"role":"clerk","n":"??>"}"#);
        let credential = Credential::new(format!("h.{payload}.s"));
        assert_eq!(credential.claims().unwrap().role(), Role::Clerk);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Credential::new("not-a-token").claims(),
            Err(AuthError::Malformed(_))
        ));
        assert!(matches!(
            Credential::new("a.%%%.c").claims(),
            Err(AuthError::Malformed(_))
        ));
        let array = URL_SAFE_NO_PAD.encode("[1,2]");
        assert!(matches!(
            Credential::new(format!("a.{array}.c")).claims(),
            Err(AuthError::Malformed(_))
        ));
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::new("secret.token.value");
        assert_eq!(format!("{credential:?}"), "Credential(..)");
        assert_eq!(credential.as_str(), "secret.token.value");
    }

    #[test]
    fn test_trims_whitespace() {
        assert!(Credential::new("   ").is_empty());
        assert_eq!(Credential::new(" a.b.c\n").as_str(), "a.b.c");
    }
}
