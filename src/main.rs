use std::{io, path::Path};

use env_logger::Env;
use glean::{
    configuration::get_configuration,
    services::{
        fetcher::BrowserFetcher,
        openai_client::OpenaiClient,
        product_pipeline::{run_session, ENHANCE_TEMPERATURE, OUTPUT_FILE},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let openai_api_key = configuration
        .openai_api_key
        .expect("OPENAI_API_KEY is not set.");

    let fetcher = BrowserFetcher::new(configuration.webdriver_url);
    let openai_client = OpenaiClient::new(openai_api_key, ENHANCE_TEMPERATURE);

    println!("Enter eBay product links (empty line to finish):");
    let stdin = io::stdin();
    run_session(
        stdin.lock(),
        &fetcher,
        &openai_client,
        Path::new(OUTPUT_FILE),
    )
    .await?;

    Ok(())
}
