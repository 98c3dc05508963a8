pub const CHALLENGE_PATH: &str = "/register/challenge";
pub const FINISH_PATH: &str = "/register/finish";

/// Relying-party endpoint configuration for one registration client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the relying party, e.g. `https://login.example.com`.
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// `GET` endpoint issuing a challenge for `identifier`.
    ///
    /// The identifier is interpolated as-is; callers own any stricter
    /// validation than the non-empty check the pipeline performs.
    pub(crate) fn challenge_url(&self, identifier: &str) -> String {
        format!("{}{}/{}", self.base_url, CHALLENGE_PATH, identifier)
    }

    /// `POST` endpoint verifying and storing the finished credential.
    pub(crate) fn finish_url(&self, identifier: &str) -> String {
        format!("{}{}/{}", self.base_url, FINISH_PATH, identifier)
    }
}
