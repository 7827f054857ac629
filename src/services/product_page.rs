use async_trait::async_trait;
use tracing::{debug, info};
use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::Result;
use crate::models::{AppId, Country};

/// Something that can hand back the product page HTML for an app.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, app_id: &AppId, country: &Country) -> Result<String>;
}

pub struct ProductPageService {
    client: HttpClient,
    base_url: String,
}

impl ProductPageService {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(&settings.http)?;
        Ok(Self {
            client,
            base_url: settings.store.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, app_id: &AppId, country: &Country) -> String {
        format!("{}/{}/app/id{}", self.base_url, country, app_id)
    }
}

#[async_trait]
impl PageSource for ProductPageService {
    async fn fetch_page(&self, app_id: &AppId, country: &Country) -> Result<String> {
        let url = self.page_url(app_id, country);

        info!(
            app_id = %app_id,
            country = %country,
            url = url,
            "Fetching product page"
        );

        let html = self.client.get_text(&url).await?;

        debug!(
            app_id = %app_id,
            html_len = html.len(),
            "Product page fetched"
        );

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_storefront_url() {
        let mut settings = Settings::default();
        settings.store.base_url = "https://apps.apple.com/".to_string();
        let service = ProductPageService::new(&settings).unwrap();

        let url = service.page_url(&"310633997".parse::<AppId>().unwrap(), &"UA".parse::<Country>().unwrap());

        assert_eq!(url, "https://apps.apple.com/ua/app/id310633997");
    }
}
