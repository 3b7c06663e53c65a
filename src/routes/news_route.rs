use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::services::{
    news_pipeline::{search_and_summarize, NewsOutcome},
    openai_client::OpenaiClient,
    serper::SerperClient,
};

#[derive(Template, Default)]
#[template(path = "news.html")]
struct NewsPageTemplate {
    query: String,
    articles: Option<String>,
    summary: Option<String>,
    warning: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct SearchForm {
    query: String,
    time_period: String,
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body(NewsPageTemplate::default().render().unwrap())
}

#[post("/search")]
async fn search(
    form: web::Form<SearchForm>,
    serper_client: web::Data<SerperClient>,
    openai_client: web::Data<OpenaiClient>,
) -> HttpResponse {
    let query = form.query.trim().to_string();
    if query.is_empty() {
        let page = NewsPageTemplate {
            warning: Some("Please enter a topic to search.".to_string()),
            ..Default::default()
        };
        return HttpResponse::Ok().body(page.render().unwrap());
    }

    // The period is context for the reader only; the search request never
    // carries it.
    log::info!("Searching news for {:?} ({})", query, form.time_period);

    let outcome =
        search_and_summarize(serper_client.get_ref(), openai_client.get_ref(), &query).await;

    let page = match outcome {
        NewsOutcome::NoResults => NewsPageTemplate {
            query,
            warning: Some("No news found.".to_string()),
            ..Default::default()
        },
        NewsOutcome::Report { articles, summary } => NewsPageTemplate {
            query,
            articles: Some(articles),
            summary: Some(summary),
            ..Default::default()
        },
        NewsOutcome::Failed { articles, message } => NewsPageTemplate {
            query,
            articles,
            error: Some(message),
            ..Default::default()
        },
    };

    HttpResponse::Ok().body(page.render().unwrap())
}
