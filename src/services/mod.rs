pub mod extractor;
pub mod fetcher;
pub mod news_pipeline;
pub mod openai_client;
pub mod product_pipeline;
pub mod serper;

pub use extractor::*;
pub use fetcher::*;
pub use news_pipeline::*;
pub use openai_client::*;
pub use product_pipeline::*;
pub use serper::*;
