use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Environment variable {0} is not set")]
    MissingEnvironment(String),

    #[error("Credentials have expired")]
    Expired,

    #[error("Credentials unavailable: {0}")]
    Unavailable(String),
}
