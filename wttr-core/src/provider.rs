use crate::{Config, WeatherQuery, error::Result, provider::wttr::WttrProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Source of raw current-conditions payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `query` and return the response body.
    async fn fetch(&self, query: &WeatherQuery) -> Result<Vec<u8>>;
}

/// Construct the wttr.in provider from config (base URL and request timeout).
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>> {
    let provider = WttrProvider::new(config.base_url(), config.timeout())?;
    Ok(Box::new(provider))
}
