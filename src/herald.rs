use std::net::TcpListener;

use env_logger::Env;
use glean::{
    configuration::get_configuration,
    services::{
        news_pipeline::SUMMARY_TEMPERATURE, openai_client::OpenaiClient, serper::SerperClient,
    },
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let openai_api_key = configuration
        .openai_api_key
        .expect("OPENAI_API_KEY is not set.");
    let serper_api_key = configuration
        .serper_api_key
        .expect("SERPER_API_KEY is not set.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;
    log::info!("Serving the news search form on {}", listener.local_addr()?);

    let openai_client = OpenaiClient::new(openai_api_key, SUMMARY_TEMPERATURE);
    let serper_client = SerperClient::new(serper_api_key);

    run(listener, openai_client, serper_client)?.await
}
