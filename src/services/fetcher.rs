use async_trait::async_trait;
use thirtyfour::{error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("webdriver request failed: {0}")]
    Driver(#[from] WebDriverError),
    #[error("page source was empty for {0}")]
    EmptyPage(String),
}

/// Narrow seam over the rendered-page fetch so pipeline tests can feed
/// canned markup instead of driving a browser.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn page_source(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages through a WebDriver endpoint. Each call opens its own
/// headless Chrome session and quits it before returning, so one bad link
/// never leaks browser state into the next.
pub struct BrowserFetcher {
    webdriver_url: String,
}

impl BrowserFetcher {
    pub fn new(webdriver_url: String) -> Self {
        BrowserFetcher { webdriver_url }
    }
}

#[async_trait]
impl PageSource for BrowserFetcher {
    async fn page_source(&self, url: &str) -> Result<String, FetchError> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;

        let driver = WebDriver::new(&self.webdriver_url, caps).await?;
        let outcome = load_page(&driver, url).await;

        // Quit the session on both paths before inspecting the result.
        if let Err(e) = driver.quit().await {
            log::error!("Failed to close webdriver session: {:?}", e);
        }

        let html = outcome?;
        if html.trim().is_empty() {
            return Err(FetchError::EmptyPage(url.to_string()));
        }

        Ok(html)
    }
}

async fn load_page(driver: &WebDriver, url: &str) -> Result<String, WebDriverError> {
    driver.goto(url).await?;
    driver.source().await
}
