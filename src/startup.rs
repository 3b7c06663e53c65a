use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::news_route,
    services::{openai_client::OpenaiClient, serper::SerperClient},
};

pub fn run(
    listener: TcpListener,
    openai_client: OpenaiClient,
    serper_client: SerperClient,
) -> Result<Server, std::io::Error> {
    let openai_client = web::Data::new(openai_client);
    let serper_client = web::Data::new(serper_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(news_route::index)
            .service(news_route::search)
            .app_data(openai_client.clone())
            .app_data(serper_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
