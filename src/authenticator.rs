//! The platform credential-creation capability.

use async_trait::async_trait;

use crate::types::{CredentialResult, DecodedChallenge};

#[derive(Debug, thiserror::Error)]
pub enum AuthenticatorError {
    /// The user dismissed the prompt, no eligible authenticator was present,
    /// or the platform gave up waiting for user presence.
    #[error("creation aborted")]
    Aborted,
    /// The platform rejected the request outright.
    #[error("platform: {0}")]
    Platform(String),
}

/// Credential-creation capability, implemented outside this crate.
///
/// Implementations wrap whatever the host exposes: a browser bridge, a
/// CTAP2 device, a platform keystore. The ceremony treats the call as a
/// single suspension point of platform-defined duration; it resolves only
/// once the user confirms presence or declines.
///
/// Implementations receive the challenge and user handle as raw bytes,
/// never as base64url text, and must only return a [`CredentialResult`]
/// the platform actually produced.
#[async_trait]
pub trait Authenticator {
    async fn create_credential(
        &self,
        request: &DecodedChallenge,
    ) -> Result<CredentialResult, AuthenticatorError>;
}
