use std::sync::Arc;
use std::time::Duration;

use rapidq_config::{
    Configuration, Credentials, CredentialsError, CredentialsProvider, StaticCredentialsProvider,
};

#[test]
fn test_full_builder_chain() {
    let provider: Arc<dyn CredentialsProvider> =
        Arc::new(StaticCredentialsProvider::new("ak", "secret"));

    let config = Configuration::builder()
        .endpoints("broker-0:8081;broker-1:8081")
        .resource_namespace("orders")
        .credentials_provider(Arc::clone(&provider))
        .request_timeout(Duration::from_secs(5))
        .tls(true)
        .build();

    assert_eq!(config.endpoints(), "broker-0:8081;broker-1:8081");
    assert_eq!(config.resource_namespace(), "orders");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert!(config.tls());
    assert!(Arc::ptr_eq(
        config.credentials_provider().expect("provider missing"),
        &provider
    ));
}

#[test]
fn test_identical_builder_sequences_produce_equal_configurations() {
    let provider: Arc<dyn CredentialsProvider> =
        Arc::new(StaticCredentialsProvider::new("ak", "secret"));

    let first = Configuration::builder()
        .endpoints("broker:8081")
        .resource_namespace("orders")
        .credentials_provider(Arc::clone(&provider))
        .request_timeout(Duration::from_secs(5))
        .tls(true)
        .build();

    let second = Configuration::builder()
        .endpoints("broker:8081")
        .resource_namespace("orders")
        .credentials_provider(Arc::clone(&provider))
        .request_timeout(Duration::from_secs(5))
        .tls(true)
        .build();

    assert_eq!(first, second);
}

#[test]
fn test_independent_builders_do_not_cross_contaminate() {
    let producer = Configuration::builder()
        .endpoints("broker-a:8081")
        .resource_namespace("tenant-a")
        .tls(true);
    let consumer = Configuration::builder()
        .endpoints("broker-b:8081")
        .resource_namespace("tenant-b");

    let producer = producer.build();
    let consumer = consumer.build();

    assert_eq!(producer.endpoints(), "broker-a:8081");
    assert_eq!(producer.resource_namespace(), "tenant-a");
    assert!(producer.tls());

    assert_eq!(consumer.endpoints(), "broker-b:8081");
    assert_eq!(consumer.resource_namespace(), "tenant-b");
    assert!(!consumer.tls());
    assert_ne!(producer, consumer);
}

// Caller-supplied provider, e.g. one backed by a token service.
struct FlakyTokenProvider {
    reachable: bool,
}

impl CredentialsProvider for FlakyTokenProvider {
    fn credentials(&self) -> Result<Credentials, CredentialsError> {
        if !self.reachable {
            return Err(CredentialsError::Unavailable(
                "token service unreachable".to_string(),
            ));
        }
        Ok(Credentials::with_session_token("ak", "secret", "sess-1"))
    }
}

#[test]
fn test_caller_supplied_provider_failures_surface_at_use() {
    let config = Configuration::builder()
        .credentials_provider(Arc::new(FlakyTokenProvider { reachable: false }))
        .build();

    // Building never fails; the retrieval error shows up when the runtime asks.
    let provider = config.credentials_provider().expect("provider missing");
    match provider.credentials() {
        Err(CredentialsError::Unavailable(reason)) => {
            assert_eq!(reason, "token service unreachable")
        }
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[test]
fn test_configuration_is_shareable_across_threads() {
    let config = Configuration::builder()
        .endpoints("broker:8081")
        .credentials_provider(Arc::new(StaticCredentialsProvider::new("ak", "secret")))
        .build();

    let shared = Arc::new(config);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&shared);
            std::thread::spawn(move || {
                assert_eq!(config.endpoints(), "broker:8081");
                let provider = config.credentials_provider().expect("provider missing");
                let creds = provider.credentials().expect("credentials failed");
                assert_eq!(creds.access_key, "ak");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}
