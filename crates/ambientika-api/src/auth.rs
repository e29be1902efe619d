use secrecy::SecretString;

/// Default Ambientika cloud host. No other deployments are known.
pub const DEFAULT_HOST: &str = "https://app.ambientika.eu:4521";

/// Account credentials for the Ambientika cloud.
///
/// Immutable after construction; the password never appears in logs or
/// serialized output.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}
