//! Bearer credentials: local decoding, and the source the client reads them
//! from on every request.

mod credential;

pub use credential::{unsigned_credential, Credential};

/// Where [`ApiClient`](crate::ApiClient) finds the credential to attach.
///
/// Consulted at call time, so a request always carries whatever the session
/// holds at that moment.
pub trait CredentialSource {
    fn credential(&self) -> Option<Credential>;
}

/// Never attaches anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn credential(&self) -> Option<Credential> {
        None
    }
}

impl CredentialSource for Credential {
    fn credential(&self) -> Option<Credential> {
        Some(self.clone())
    }
}
