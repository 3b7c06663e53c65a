use serde::{Deserialize, Serialize};

/// Placeholder for any listing field that could not be located on the page.
pub const NOT_AVAILABLE: &str = "N/A";

/// Listings never expose a scrapeable description, so every record starts
/// with this fixed text and the model writes the real one.
pub const FALLBACK_DESCRIPTION: &str = "Description was not available on the page.";

/// One scraped eBay listing. Built per fetched link; the only field set
/// after construction is `enhanced_description`, once the model has
/// rewritten the copy. `link` is always the accepted input URL, even when
/// every scraped field fell back to [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: String,
    pub rating: String,
    pub link: String,
    pub enhanced_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Product, FALLBACK_DESCRIPTION};

    #[test]
    fn serialized_record_keeps_field_order() {
        let product = Product {
            name: "Wireless Mouse".to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            price: "US $12.99".to_string(),
            rating: "4.8".to_string(),
            link: "https://www.ebay.com/itm/111".to_string(),
            enhanced_description: Some("A crisp, comfortable mouse.".to_string()),
        };

        let json = serde_json::to_string_pretty(&product).unwrap();
        let keys: Vec<&str> = json
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .filter_map(|line| line.split_once('"').map(|(key, _)| key))
            .collect();

        assert_eq!(
            keys,
            vec![
                "name",
                "description",
                "price",
                "rating",
                "link",
                "enhanced_description",
            ]
        );
    }
}
