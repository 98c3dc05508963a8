//! The credential-creation ceremony: decode the challenge, hand it to the
//! authenticator, classify what came back.

use crate::authenticator::{Authenticator, AuthenticatorError};
use crate::codec;
use crate::types::{ChallengePayload, CredentialResult, DecodedChallenge};

#[derive(Debug, thiserror::Error)]
pub enum CeremonyError {
    /// A binary field of the challenge is not valid base64url text.
    #[error("malformed challenge field `{field}`: {source}")]
    MalformedChallenge {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },
    /// The user or platform declined the prompt.
    #[error("creation aborted")]
    Aborted,
    /// The platform failed outright.
    #[error("authenticator: {0}")]
    Authenticator(String),
}

/// Decodes the two binary-over-base64url fields of a challenge payload.
pub(crate) fn decode_challenge(
    payload: &ChallengePayload,
) -> Result<DecodedChallenge, CeremonyError> {
    let challenge = codec::decode(&payload.public_key.challenge).map_err(|source| {
        CeremonyError::MalformedChallenge {
            field: "challenge",
            source,
        }
    })?;
    let user_id = codec::decode(&payload.public_key.user.id).map_err(|source| {
        CeremonyError::MalformedChallenge {
            field: "user.id",
            source,
        }
    })?;

    Ok(DecodedChallenge {
        challenge,
        user_id,
        user_display: payload.public_key.user.display.clone(),
        params: payload.public_key.params.clone(),
    })
}

/// Runs one credential creation against `authenticator`.
///
/// The authenticator call is the single suspension point of unbounded
/// duration in the whole ceremony: it waits on user presence or an
/// explicit cancellation. A declined or aborted creation is terminal;
/// fresh user intent is required for another attempt, so there is no retry.
pub(crate) async fn create_credential<A>(
    authenticator: &A,
    payload: ChallengePayload,
) -> Result<CredentialResult, CeremonyError>
where
    A: Authenticator + ?Sized,
{
    // 1. Decode. The authenticator never sees malformed input.
    let request = decode_challenge(&payload)?;

    // 2. Invoke.
    tracing::debug!(
        challenge_len = request.challenge.len(),
        user_id_len = request.user_id.len(),
        "Invoking authenticator"
    );
    let result = authenticator.create_credential(&request).await;

    // 3. Classify.
    match result {
        Ok(credential) => {
            tracing::info!(credential_id = %credential.id, "Credential created");
            Ok(credential)
        }
        Err(AuthenticatorError::Aborted) => Err(CeremonyError::Aborted),
        Err(AuthenticatorError::Platform(message)) => Err(CeremonyError::Authenticator(message)),
    }
}
