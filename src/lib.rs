pub mod authenticator;
pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub(crate) mod ceremony;
pub(crate) mod challenge;
pub(crate) mod submit;

pub use authenticator::{Authenticator, AuthenticatorError};
pub use config::Config;
pub use error::{Error, FailureReason};
pub use types::{CeremonyOutcome, ChallengePayload, CredentialResult, DecodedChallenge};

/// Drives registration ceremonies against one relying party.
///
/// Each [`register`](Self::register) call owns its identifier, challenge,
/// and credential from start to finish; concurrent calls share nothing but
/// the HTTP connection pool, so double-submit guarding belongs to the
/// caller.
pub struct RegistrationClient {
    http: reqwest::Client,
    config: Config,
}

impl RegistrationClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Runs one full registration ceremony for `identifier`:
    /// challenge fetch, credential creation, attestation submission.
    ///
    /// Always resolves to exactly one [`CeremonyOutcome`]: every stage
    /// failure is classified at this boundary rather than propagated, so no
    /// error escapes unreported. Nothing is retried and nothing persists on
    /// failure.
    pub async fn register<A>(&self, authenticator: &A, identifier: &str) -> CeremonyOutcome
    where
        A: Authenticator + ?Sized,
    {
        match self.run_ceremony(authenticator, identifier).await {
            Ok(()) => {
                tracing::info!(identifier, "Registration complete");
                CeremonyOutcome::Registered {
                    identifier: identifier.to_string(),
                }
            }
            Err(error) => {
                let reason = error.reason();
                tracing::warn!(identifier, %error, "Registration failed");
                CeremonyOutcome::Failed {
                    identifier: identifier.to_string(),
                    reason,
                }
            }
        }
    }

    async fn run_ceremony<A>(&self, authenticator: &A, identifier: &str) -> error::Result<()>
    where
        A: Authenticator + ?Sized,
    {
        let payload = challenge::request_challenge(&self.http, &self.config, identifier).await?;
        let credential = ceremony::create_credential(authenticator, payload).await?;
        submit::submit_registration(&self.http, &self.config, identifier, &credential).await?;
        Ok(())
    }
}
