use std::time::Duration;
use reqwest::{Client, Response, RequestBuilder};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use crate::config::HttpConfig;
use crate::error::{Error, Result};
use tracing::{debug, warn};

pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(settings: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in settings.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value)
            ) {
                headers.insert(header_name, header_value);
                debug!(
                    header_key = key,
                    header_value = value,
                    "Adding header"
                );
            } else {
                warn!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        debug!(
            browser = ?settings.browser,
            timeout_secs = settings.timeout_secs,
            "Creating client with browser identity"
        );

        let client = Client::builder()
            .user_agent(settings.browser.user_agent())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            headers,
        })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.get(url);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        debug!(
            url = url,
            headers = ?self.headers,
            "Creating GET request with headers"
        );

        request
    }

    /// Sends `request`, turning any non-2xx status into [`Error::Fetch`].
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        let status = response.status();
        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                url = %response.url(),
                "Unexpected status code"
            );
            return Err(Error::Fetch(format!(
                "App Store page returned HTTP {}",
                status.as_u16()
            )));
        }

        Ok(response)
    }

    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send(self.get(url)).await?;
        let body = response.text().await?;

        debug!(url = url, body_len = body.len(), "Body received");

        Ok(body)
    }
}
