//! Bearer credential and admin session

use std::fmt;

use menu_shared::AdminLabels;

use crate::error::ClientError;

/// Bearer token obtained from the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Reads an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        let token = token.trim();
        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Some(Self::new(token))
        } else {
            None
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Holds the credential for one admin session. Nothing is persisted; logging
/// out drops the token.
#[derive(Debug, Default, Clone)]
pub struct AdminSession {
    credential: Option<Credential>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session resumed from a token handed over by the caller. Blank tokens
    /// count as signed out.
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            credential: token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(Credential::new),
        }
    }

    pub fn sign_in(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn sign_out(&mut self) {
        self.credential = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Result<&Credential, ClientError> {
        self.credential.as_ref().ok_or(ClientError::NotAuthenticated)
    }

    pub fn status<'a>(&self, labels: &'a AdminLabels) -> &'a str {
        if self.is_signed_in() {
            &labels.signed_in
        } else {
            &labels.signed_out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_authorization() {
        assert_eq!(
            Credential::from_authorization("Bearer abc.def"),
            Some(Credential::new("abc.def"))
        );
        assert_eq!(
            Credential::from_authorization("bearer  xyz "),
            Some(Credential::new("xyz"))
        );
        assert_eq!(Credential::from_authorization("Basic abc"), None);
        assert_eq!(Credential::from_authorization("Bearer "), None);
        assert_eq!(Credential::from_authorization("token"), None);
    }

    #[test]
    fn test_debug_hides_token() {
        assert_eq!(format!("{:?}", Credential::new("secret")), "Credential(***)");
    }

    #[test]
    fn test_session_lifecycle() {
        let labels = AdminLabels::default();
        let mut session = AdminSession::new();
        assert_eq!(session.status(&labels), "Inte inloggad.");
        assert!(matches!(session.credential(), Err(ClientError::NotAuthenticated)));

        session.sign_in(Credential::new("t"));
        assert_eq!(session.status(&labels), "Inloggad.");
        assert_eq!(session.credential().unwrap().token(), "t");

        session.sign_out();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_blank_token_is_signed_out() {
        assert!(!AdminSession::from_token(Some("  ")).is_signed_in());
        assert!(!AdminSession::from_token(None).is_signed_in());
        assert!(AdminSession::from_token(Some("abc")).is_signed_in());
    }
}
