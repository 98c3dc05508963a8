//! Attestation submission, the final stage of the ceremony.

use crate::config::Config;
use crate::types::{CredentialResult, RegistrationSubmission};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("submission rejected with status {0}")]
    Rejected(u16),
}

/// Re-encodes `credential` for JSON transport and posts it to the finish
/// endpoint.
///
/// A non-2xx response (duplicate credential, expired challenge) is terminal
/// from this layer's perspective; the success body is opaque beyond its
/// status. One POST, no retry.
pub(crate) async fn submit_registration(
    http: &reqwest::Client,
    config: &Config,
    identifier: &str,
    credential: &CredentialResult,
) -> Result<(), SubmitError> {
    let submission = RegistrationSubmission::from(credential);

    let url = config.finish_url(identifier);
    tracing::debug!(url = %url, credential_id = %submission.id, "Submitting attestation");

    let response = http
        .post(&url)
        .json(&submission)
        .send()
        .await
        .map_err(SubmitError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Rejected(status.as_u16()));
    }

    tracing::debug!(identifier, "Attestation accepted");
    Ok(())
}
