use itertools::Itertools;
use serde::Deserialize;

/// One news search hit. Serper omits fields freely, so each one defaults to
/// empty text rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// Renders the search hits into the block handed to the summarizer, one line
/// per article in API order. An empty slice produces an empty block, which
/// callers treat as "no results".
pub fn format_articles(articles: &[NewsArticle]) -> String {
    articles
        .iter()
        .map(|article| {
            format!(
                "- {}: {} (More: {})",
                article.title, article.snippet, article.link
            )
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{format_articles, NewsArticle};

    fn article(title: &str, snippet: &str, link: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn formats_one_line_per_article_in_order() {
        let articles = [
            article(
                "Chip exports tighten",
                "New rules land next quarter",
                "https://news.example/chips",
            ),
            article(
                "Model releases slow down",
                "Labs shift to efficiency",
                "https://news.example/models",
            ),
        ];

        let block = format_articles(&articles);

        assert_eq!(
            block,
            "- Chip exports tighten: New rules land next quarter (More: https://news.example/chips)\n\
             - Model releases slow down: Labs shift to efficiency (More: https://news.example/models)"
        );
    }

    #[test]
    fn absent_fields_render_as_empty_text() {
        let decoded: NewsArticle = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(decoded.snippet, "");
        assert_eq!(decoded.link, "");

        let block = format_articles(&[decoded]);
        assert_eq!(block, "- Only a title:  (More: )");
    }

    #[test]
    fn empty_result_list_produces_empty_block() {
        assert_eq!(format_articles(&[]), "");
    }
}
