use crate::domain::{Fix, Provider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Seam to whatever owns the OS test-provider API, typically the HTTP
/// bridge running on the device.
#[async_trait]
pub trait ProviderGateway: Debug + Send + Sync {
    /// Whether this process is currently the designated mock location source.
    async fn is_authorized(&self) -> bool;

    async fn register(&self, provider: Provider, fix: &Fix) -> Result<(), GatewayError>;

    /// Tolerant of providers that were never registered.
    async fn unregister(&self, provider: Provider);
}

#[derive(Error, Debug, PartialEq)]
pub enum GatewayError {
    #[error("could not reach the location bridge: {0}")]
    Transport(String),
    #[error("the bridge rejected provider '{provider}' with status {status}")]
    Rejected { provider: Provider, status: u16 },
}

#[cfg(test)]
pub use fake::{FakeGateway, GatewayCall};
