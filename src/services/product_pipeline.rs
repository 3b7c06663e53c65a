use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Context;

use crate::{
    domain::product::Product,
    services::{
        extractor::extract_product,
        fetcher::{FetchError, PageSource},
        openai_client::{Generate, LlmError},
    },
};

pub const OUTPUT_FILE: &str = "products.json";
pub const ENHANCE_TEMPERATURE: f32 = 0.7;

#[derive(thiserror::Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// A link is accepted when it carries an http scheme and points into the
/// eBay marketplace. Anything else is rejected and the user prompted again.
pub fn validate_listing_url(url: &str) -> bool {
    url.starts_with("http") && url.contains("ebay.com")
}

fn enhancement_prompt(product: &Product) -> String {
    format!(
        "You are given details scraped from an online product listing. \
         Write an attractive and fluent product description.\n\n\
         Product name: {}\n\
         Description: {}\n\
         Price: {}\n\
         Rating: {}\n\n\
         Improved description:",
        product.name, product.description, product.price, product.rating
    )
}

fn comparison_prompt(products: &[Product]) -> serde_json::Result<String> {
    let listing = serde_json::to_string_pretty(products)?;
    Ok(format!(
        "You are given details for several products. Compare them and \
         recommend the best option based on value for money.\n\n\
         Products:\n{}\n\nSummary:",
        listing
    ))
}

/// Fetch one listing, extract its fields and let the model rewrite the copy.
pub async fn process_listing(
    fetcher: &impl PageSource,
    llm: &impl Generate,
    url: &str,
) -> Result<Product, ProcessError> {
    let html = fetcher.page_source(url).await?;
    let mut product = extract_product(&html, url);

    let enhanced = llm.generate(&enhancement_prompt(&product)).await?;
    product.enhanced_description = Some(enhanced);

    Ok(product)
}

pub fn save_products(products: &[Product], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(products)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// One free-text paragraph over the whole accumulated list, requested once.
pub async fn compare_products(llm: &impl Generate, products: &[Product]) -> anyhow::Result<String> {
    let prompt = comparison_prompt(products)?;
    let summary = llm.generate(&prompt).await?;
    Ok(summary)
}

/*
 Drives one scout run over `input`:
 1. Read one link per line until a blank line or EOF
 2. Reject links that are not eBay product URLs and prompt again
 3. Fetch, extract and enhance each accepted link; a failed link is
    reported and skipped
 4. Write every collected record to `output_path`
 5. Ask the model once to compare all records
*/
pub async fn run_session<R: BufRead>(
    mut input: R,
    fetcher: &impl PageSource,
    llm: &impl Generate,
    output_path: &Path,
) -> anyhow::Result<(Vec<Product>, Option<String>)> {
    let mut products: Vec<Product> = vec![];

    loop {
        print!("Link: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let url = line.trim();
        if url.is_empty() {
            break;
        }
        if !validate_listing_url(url) {
            println!("Malformed link, try again.");
            continue;
        }

        match process_listing(fetcher, llm, url).await {
            Ok(product) => {
                println!("Fetched: {}", product.name);
                products.push(product);
            }
            Err(e) => {
                log::error!("Failed to process {}: {:?}", url, e);
                println!("Error: {}", e);
            }
        }
    }

    if products.is_empty() {
        println!("No products to process.");
        return Ok((products, None));
    }

    save_products(&products, output_path)?;
    println!(
        "\nSaved {} products to {}",
        products.len(),
        output_path.display()
    );

    let comparison = match compare_products(llm, &products).await {
        Ok(summary) => {
            println!("\nComparison:\n{}", summary);
            Some(summary)
        }
        Err(e) => {
            log::error!("Comparison call failed: {:?}", e);
            println!("Error: {}", e);
            None
        }
    };

    Ok((products, comparison))
}
