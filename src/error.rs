use crate::challenge::ChallengeError;
use crate::ceremony::CeremonyError;
use crate::submit::SubmitError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("challenge: {0}")]
    Challenge(#[from] ChallengeError),
    #[error("ceremony: {0}")]
    Ceremony(#[from] CeremonyError),
    #[error("submit: {0}")]
    Submit(#[from] SubmitError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Terminal classification of a failed attempt, surfaced to the caller in
/// the ceremony outcome. Every pipeline error maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InvalidInput,
    Network,
    MalformedResponse,
    MalformedChallenge,
    CeremonyAborted,
    Authenticator,
    SubmissionRejected,
}

impl Error {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Challenge(ChallengeError::EmptyIdentifier) => FailureReason::InvalidInput,
            Self::Challenge(ChallengeError::Network(_) | ChallengeError::Status(_)) => {
                FailureReason::Network
            }
            Self::Challenge(ChallengeError::Malformed(_)) => FailureReason::MalformedResponse,
            Self::Ceremony(CeremonyError::MalformedChallenge { .. }) => {
                FailureReason::MalformedChallenge
            }
            Self::Ceremony(CeremonyError::Aborted) => FailureReason::CeremonyAborted,
            Self::Ceremony(CeremonyError::Authenticator(_)) => FailureReason::Authenticator,
            Self::Submit(SubmitError::Network(_) | SubmitError::Rejected(_)) => {
                FailureReason::SubmissionRejected
            }
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::InvalidInput => "an identifier is required",
            Self::Network => "could not reach the registration service",
            Self::MalformedResponse => "unreadable challenge response",
            Self::MalformedChallenge => "challenge payload is not valid base64url",
            Self::CeremonyAborted => "credential creation was cancelled",
            Self::Authenticator => "authenticator failure",
            Self::SubmissionRejected => "registration was rejected by the server",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_mapping() {
        let cases: Vec<(Error, FailureReason)> = vec![
            (
                ChallengeError::EmptyIdentifier.into(),
                FailureReason::InvalidInput,
            ),
            (ChallengeError::Status(500).into(), FailureReason::Network),
            (
                CeremonyError::Aborted.into(),
                FailureReason::CeremonyAborted,
            ),
            (
                CeremonyError::Authenticator("dead".into()).into(),
                FailureReason::Authenticator,
            ),
            (
                SubmitError::Rejected(409).into(),
                FailureReason::SubmissionRejected,
            ),
        ];
        for (error, reason) in cases {
            assert_eq!(error.reason(), reason, "{error}");
        }
    }

    #[test]
    fn test_malformed_challenge_reason() {
        let source = crate::codec::decode("AQ==").unwrap_err();
        let error: Error = CeremonyError::MalformedChallenge {
            field: "challenge",
            source,
        }
        .into();
        assert_eq!(error.reason(), FailureReason::MalformedChallenge);
    }
}
