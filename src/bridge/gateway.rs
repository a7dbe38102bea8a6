use crate::app_config::AppConfig;
use crate::domain::gateway::{GatewayError, ProviderGateway};
use crate::domain::{Fix, Provider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Talks to the device-side agent that owns the OS test-provider API.
#[derive(Debug)]
pub struct BridgeGateway {
    client: Client,
    config: Arc<AppConfig>,
}

impl BridgeGateway {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        BridgeGateway { client, config }
    }

    fn provider_url(&self, provider: Provider) -> String {
        format!("{}/mock/providers/{}", self.config.bridge().url(), provider.id())
    }
}

#[derive(Deserialize)]
struct AuthorizationGet {
    authorized: bool,
}

#[async_trait]
impl ProviderGateway for BridgeGateway {
    // An unreachable bridge counts as "not authorized", the caller cannot
    // tell the difference and must not start mocking either way.
    #[instrument(skip(self))]
    async fn is_authorized(&self) -> bool {
        let url = format!("{}/mock/authorization", self.config.bridge().url());
        let response = self.client.get(url).send().await.and_then(|response| response.error_for_status());

        match response {
            Ok(response) => match response.json::<AuthorizationGet>().await {
                Ok(authorization) => authorization.authorized,
                Err(e) => {
                    warn!("⚠️ Unable to read the mock authorization response: {}", e);
                    false
                }
            },
            Err(e) => {
                warn!("⚠️ Unable to query the mock authorization: {}", e);
                false
            }
        }
    }

    #[instrument(skip(self, fix), fields(provider = %provider))]
    async fn register(&self, provider: Provider, fix: &Fix) -> Result<(), GatewayError> {
        let response = self
            .client
            .put(self.provider_url(provider))
            .json(fix)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected {
                provider,
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    #[instrument(skip(self), fields(provider = %provider))]
    async fn unregister(&self, provider: Provider) {
        match self.client.delete(self.provider_url(provider)).send().await {
            Err(e) => warn!("⚠️ Unable to unregister provider '{}': {}", provider, e),
            // Not found means nothing was registered, which is fine
            Ok(response) if !response.status().is_success() && response.status() != StatusCode::NOT_FOUND => {
                warn!(status_code = %response.status(), "⚠️ Unable to unregister provider '{}'", provider);
            }
            Ok(_) => {}
        }
    }
}
