use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, BridgeClientError> {
    let mut headers = header::HeaderMap::new();
    let mut api_key_value = HeaderValue::from_str(config.bridge().api_key())?;
    api_key_value.set_sensitive(true);
    headers.insert("bridge-api-key", api_key_value);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum BridgeClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("bridge client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_bridge_api_key_header() -> Result<(), BridgeClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("bridge-api-key", "key")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().bridge_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the header is set
        mock.assert();

        Ok(())
    }
}
