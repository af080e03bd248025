//! Core library for the `wttr-bar` status-bar module.
//!
//! This crate defines:
//! - Query validation and the wttr.in payload model
//! - Emoji lookups for condition codes and moon phases
//! - Composition of the Waybar `text`/`tooltip` output
//! - The wttr.in provider and configuration handling
//!
//! It is used by `wttr-bar`, but can also be reused by other status-bar frontends.

pub mod compose;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod symbols;

pub use compose::compose;
pub use config::Config;
pub use error::{Result, WttrError};
pub use model::{TemperatureUnit, WaybarOutput, WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config, wttr::decode};

/// Fetch, decode and compose in one go.
pub async fn current_status(provider: &dyn WeatherProvider, query: &WeatherQuery) -> Result<WaybarOutput> {
    let body = provider.fetch(query).await?;
    let report = decode(&body)?;
    compose(&report, query.unit())
}
