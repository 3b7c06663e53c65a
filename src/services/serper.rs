use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::article::NewsArticle;

const SERPER_NEWS_URL: &str = "https://google.serper.dev/news";

/// Narrow seam over the news search so pipeline tests can substitute a
/// deterministic result list.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    async fn search_news(&self, query: &str) -> anyhow::Result<Vec<NewsArticle>>;
}

pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

#[derive(Serialize)]
struct NewsQuery {
    q: String,
}

#[derive(Deserialize)]
struct NewsResponse {
    #[serde(default)]
    news: Vec<NewsArticle>,
}

impl SerperClient {
    pub fn new(api_key: String) -> Self {
        SerperClient {
            client: reqwest::Client::new(),
            api_key,
            url: SERPER_NEWS_URL.to_string(),
        }
    }
}

#[async_trait]
impl NewsSearch for SerperClient {
    async fn search_news(&self, query: &str) -> anyhow::Result<Vec<NewsArticle>> {
        let response = self
            .client
            .post(self.url.clone())
            .header("X-API-KEY", self.api_key.clone())
            .json(&NewsQuery {
                q: query.to_string(),
            })
            .send()
            .await?;

        let payload = response.json::<NewsResponse>().await?;
        log::info!("Serper returned {} news entries", payload.news.len());

        Ok(payload.news)
    }
}
