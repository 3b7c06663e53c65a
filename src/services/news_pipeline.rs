use crate::{
    domain::article::format_articles,
    services::{openai_client::Generate, serper::NewsSearch},
};

pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// What the search page renders for one submitted query.
#[derive(Debug)]
pub enum NewsOutcome {
    /// The search returned nothing; the summarizer was never invoked.
    NoResults,
    Report {
        articles: String,
        summary: String,
    },
    /// A remote call failed. `articles` carries the formatted block when the
    /// search itself had already succeeded.
    Failed {
        articles: Option<String>,
        message: String,
    },
}

fn summary_prompt(articles: &str) -> String {
    format!(
        "Below is a list of news headlines with short summaries. Summarize \
         the overall trends and main topics in a clear and concise English \
         paragraph.\n\nNews List:\n{}\n\nSummary:",
        articles
    )
}

pub async fn search_and_summarize(
    search: &impl NewsSearch,
    llm: &impl Generate,
    query: &str,
) -> NewsOutcome {
    let articles = match search.search_news(query).await {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("News search failed: {:?}", e);
            return NewsOutcome::Failed {
                articles: None,
                message: e.to_string(),
            };
        }
    };

    let block = format_articles(&articles);
    if block.trim().is_empty() {
        return NewsOutcome::NoResults;
    }

    match llm.generate(&summary_prompt(&block)).await {
        Ok(summary) => NewsOutcome::Report {
            articles: block,
            summary,
        },
        Err(e) => {
            log::error!("Summary call failed: {:?}", e);
            NewsOutcome::Failed {
                articles: Some(block),
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::anyhow;
    use async_trait::async_trait;

    use super::{search_and_summarize, Generate, NewsOutcome, NewsSearch};
    use crate::{domain::article::NewsArticle, services::openai_client::LlmError};

    struct StubSearch {
        articles: Option<Vec<NewsArticle>>,
    }

    #[async_trait]
    impl NewsSearch for StubSearch {
        async fn search_news(&self, _query: &str) -> anyhow::Result<Vec<NewsArticle>> {
            self.articles
                .clone()
                .ok_or_else(|| anyhow!("serper unreachable"))
        }
    }

    struct StubLlm {
        calls: Mutex<u32>,
        fail: bool,
    }

    impl StubLlm {
        fn replying() -> Self {
            StubLlm {
                calls: Mutex::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            StubLlm {
                calls: Mutex::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl Generate for StubLlm {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            *self.calls.lock().unwrap() += 1;
            match self.fail {
                true => Err(LlmError::NoChoices),
                false => Ok("One tidy paragraph.".to_string()),
            }
        }
    }

    fn article(title: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            snippet: "a snippet".to_string(),
            link: "https://news.example/a".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_search_results_skip_the_summarizer() {
        let search = StubSearch {
            articles: Some(vec![]),
        };
        let llm = StubLlm::replying();

        let outcome = search_and_summarize(&search, &llm, "AI").await;

        assert!(matches!(outcome, NewsOutcome::NoResults));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn search_failure_reports_the_error_without_articles() {
        let search = StubSearch { articles: None };
        let llm = StubLlm::replying();

        let outcome = search_and_summarize(&search, &llm, "AI").await;

        match outcome {
            NewsOutcome::Failed { articles, message } => {
                assert_eq!(articles, None);
                assert!(message.contains("serper unreachable"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn summary_failure_keeps_the_formatted_articles() {
        let search = StubSearch {
            articles: Some(vec![article("Chip exports tighten")]),
        };
        let llm = StubLlm::failing();

        let outcome = search_and_summarize(&search, &llm, "chips").await;

        match outcome {
            NewsOutcome::Failed { articles, message } => {
                let block = articles.expect("articles block should survive");
                assert!(block.contains("Chip exports tighten"));
                assert!(message.contains("no choices"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn report_carries_block_and_summary() {
        let search = StubSearch {
            articles: Some(vec![
                article("Chip exports tighten"),
                article("Model releases slow down"),
            ]),
        };
        let llm = StubLlm::replying();

        let outcome = search_and_summarize(&search, &llm, "AI").await;

        match outcome {
            NewsOutcome::Report { articles, summary } => {
                assert!(articles.starts_with("- Chip exports tighten"));
                assert!(articles.contains("Model releases slow down"));
                assert_eq!(summary, "One tidy paragraph.");
            }
            other => panic!("expected Report, got {:?}", other),
        }
        assert_eq!(llm.call_count(), 1);
    }
}
