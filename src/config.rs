use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::credentials::CredentialsProvider;

/// Connection settings a client needs before it can reach a broker cluster.
///
/// Built once through [`Configuration::builder`], immutable afterwards.
/// Cloning shares the credentials-provider handle, so a finished value can be
/// handed to the connection, auth and RPC layers without further locking.
#[derive(Clone)]
pub struct Configuration {
    /// Broker access-point addresses, kept opaque. The connection manager
    /// owns the encoding and its validation.
    endpoints: String,

    /// Logical namespace scoping every resource this client addresses.
    resource_namespace: String,

    /// Supplies auth material per request. `None` = unauthenticated.
    credentials_provider: Option<Arc<dyn CredentialsProvider>>,

    /// Upper bound the runtime applies to outbound requests.
    request_timeout: Duration,

    /// Whether the transport must be encrypted.
    tls: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoints: String::new(),
            resource_namespace: String::new(),
            credentials_provider: None,         // unauthenticated
            request_timeout: Duration::from_secs(3),
            tls: false,
        }
    }
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn endpoints(&self) -> &str {
        &self.endpoints
    }

    pub fn resource_namespace(&self) -> &str {
        &self.resource_namespace
    }

    pub fn credentials_provider(&self) -> Option<&Arc<dyn CredentialsProvider>> {
        self.credentials_provider.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn tls(&self) -> bool {
        self.tls
    }
}

// The provider is a trait object, so it is rendered opaquely and compared by
// handle identity rather than by value.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("endpoints", &self.endpoints)
            .field("resource_namespace", &self.resource_namespace)
            .field(
                "credentials_provider",
                &self.credentials_provider.as_ref().map(|_| "<provider>"),
            )
            .field("request_timeout", &self.request_timeout)
            .field("tls", &self.tls)
            .finish()
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        let same_provider = match (&self.credentials_provider, &other.credentials_provider) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        self.endpoints == other.endpoints
            && self.resource_namespace == other.resource_namespace
            && same_provider
            && self.request_timeout == other.request_timeout
            && self.tls == other.tls
    }
}

/// Fluent accumulator for [`Configuration`].
///
/// Setters move the builder through the chain and `build` consumes it, so a
/// builder cannot be reused after finalization. Repeated calls to the same
/// setter are legal; the last value wins.
#[derive(Default)]
pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    pub fn endpoints(mut self, endpoints: impl Into<String>) -> Self {
        self.configuration.endpoints = endpoints.into();
        self
    }

    pub fn resource_namespace(mut self, resource_namespace: impl Into<String>) -> Self {
        self.configuration.resource_namespace = resource_namespace.into();
        self
    }

    pub fn credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.configuration.credentials_provider = Some(provider);
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.configuration.request_timeout = request_timeout;
        self
    }

    pub fn tls(mut self, tls: bool) -> Self {
        self.configuration.tls = tls;
        self
    }

    pub fn build(self) -> Configuration {
        debug!(
            endpoints = %self.configuration.endpoints,
            namespace = %self.configuration.resource_namespace,
            timeout_ms = self.configuration.request_timeout.as_millis() as u64,
            tls = self.configuration.tls,
            authenticated = self.configuration.credentials_provider.is_some(),
            "client configuration built"
        );
        self.configuration
    }
}
