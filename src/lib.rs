pub mod config;
pub mod credentials;
pub mod errors;

// Public re-exports for easy access
pub use config::{Configuration, ConfigurationBuilder};
pub use credentials::{
    Credentials, CredentialsProvider, EnvCredentialsProvider, StaticCredentialsProvider,
};
pub use errors::CredentialsError;
