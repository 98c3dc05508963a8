//! Payloads exchanged with the relying party and the authenticator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec;
use crate::error::FailureReason;

/// Server-issued registration challenge, exactly as it arrives on the wire.
///
/// Only the two binary-over-base64url fields are modeled; everything else in
/// the creation options (relying party, algorithm parameters, timeouts,
/// excluded credentials) is opaque to this client and carried through
/// untouched for the authenticator.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengePayload {
    #[serde(rename = "publicKey")]
    pub public_key: CreationOptions,
}

/// The `publicKey` block of a challenge payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreationOptions {
    /// Server-generated random value, base64url text on the wire.
    pub challenge: String,
    pub user: UserIdentity,
    /// Remaining creation options (`rp`, `pubKeyCredParams`, ...), opaque here.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// The user-identity block: a binary handle plus display metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UserIdentity {
    /// User handle, base64url text on the wire.
    pub id: String,
    /// Display metadata (`name`, `displayName`, ...), opaque here.
    #[serde(flatten)]
    pub display: Map<String, Value>,
}

/// A challenge payload with its binary fields decoded, ready to hand to the
/// authenticator. Lives only for the duration of that invocation.
#[derive(Debug, Clone)]
pub struct DecodedChallenge {
    pub challenge: Vec<u8>,
    pub user_id: Vec<u8>,
    pub user_display: Map<String, Value>,
    pub params: Map<String, Value>,
}

/// Output of a successful authenticator invocation.
///
/// Never constructed by this crate itself; only `Authenticator`
/// implementations produce one.
#[derive(Debug, Clone)]
pub struct CredentialResult {
    /// Short text form of the credential identifier.
    pub id: String,
    /// Raw credential identifier bytes.
    pub raw_id: Vec<u8>,
    /// Credential type tag, `"public-key"` in practice.
    pub credential_type: String,
    /// Attestation object proving the credential's provenance.
    pub attestation_object: Vec<u8>,
    /// Serialized client data the authenticator bound the challenge to.
    pub client_data_json: Vec<u8>,
}

/// A credential result with every binary field re-encoded for JSON
/// transport. Derived one-to-one from a [`CredentialResult`] and discarded
/// once the finish call completes.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationSubmission {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub response: AttestationResponse,
}

/// The `response` block of a registration submission.
#[derive(Debug, Clone, Serialize)]
pub struct AttestationResponse {
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

impl From<&CredentialResult> for RegistrationSubmission {
    fn from(credential: &CredentialResult) -> Self {
        Self {
            id: credential.id.clone(),
            raw_id: codec::encode(&credential.raw_id),
            credential_type: credential.credential_type.clone(),
            response: AttestationResponse {
                attestation_object: codec::encode(&credential.attestation_object),
                client_data_json: codec::encode(&credential.client_data_json),
            },
        }
    }
}

/// Terminal result of one registration attempt, the only state the caller
/// observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CeremonyOutcome {
    Registered {
        identifier: String,
    },
    Failed {
        identifier: String,
        reason: FailureReason,
    },
}

impl CeremonyOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::Registered { identifier } | Self::Failed { identifier, .. } => identifier,
        }
    }
}
