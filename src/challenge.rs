//! Challenge fetch, the first stage of the ceremony.

use crate::config::Config;
use crate::types::ChallengePayload;

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    /// Rejected before any network call.
    #[error("an identifier is required")]
    EmptyIdentifier,
    #[error("challenge request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("challenge endpoint returned status {0}")]
    Status(u16),
    #[error("malformed challenge response: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Fetches the registration challenge for `identifier`.
///
/// One GET, no retry: registration is user-initiated, and a silent second
/// GET would issue a second challenge without the user's awareness. The
/// payload's binary fields come back still base64url-encoded; transport
/// parsing and challenge decoding are separate stages.
pub(crate) async fn request_challenge(
    http: &reqwest::Client,
    config: &Config,
    identifier: &str,
) -> Result<ChallengePayload, ChallengeError> {
    if identifier.is_empty() {
        return Err(ChallengeError::EmptyIdentifier);
    }

    let url = config.challenge_url(identifier);
    tracing::debug!(url = %url, "Requesting registration challenge");

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(ChallengeError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChallengeError::Status(status.as_u16()));
    }

    let payload = response
        .json::<ChallengePayload>()
        .await
        .map_err(ChallengeError::Malformed)?;

    tracing::debug!(identifier, "Challenge received");
    Ok(payload)
}
