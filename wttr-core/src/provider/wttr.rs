use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::{Result, WttrError},
    model::{WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// JSON v2: current conditions, nearest area and the daily forecast without hourly data.
const FORMAT: &str = "j2";

#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: Url,
    http: Client,
}

impl WttrProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|_| WttrError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(WttrError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(timeout).build().map_err(WttrError::Client)?;

        Ok(Self { base_url, http })
    }

    /// `<base>/<city>?format=j2&lang=<lang>`, with the city percent-encoded as one path segment.
    pub fn request_url(&self, query: &WeatherQuery) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| WttrError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(query.city());

        url.query_pairs_mut().append_pair("format", FORMAT).append_pair("lang", query.lang());

        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<Vec<u8>> {
        let url = self.request_url(query)?;
        debug!(%url, "requesting current conditions");

        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| WttrError::Network { url: url.to_string(), source })?;

        // wttr.in answers unknown locations with an error body; the decoder reports it.
        let status = res.status();
        if !status.is_success() {
            warn!(%status, %url, "weather service returned a non-success status");
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| WttrError::Network { url: url.to_string(), source })?;

        debug!(bytes = body.len(), %status, "received weather payload");
        Ok(body.to_vec())
    }
}

/// Parse a wttr.in `j2` body and make sure every sequence the composer reads is non-empty.
pub fn decode(body: &[u8]) -> Result<WeatherReport> {
    let report: WeatherReport = serde_json::from_slice(body)?;

    debug!(
        current_condition = report.current_condition.len(),
        nearest_area = report.nearest_area.len(),
        weather = report.weather.len(),
        "decoded weather report"
    );

    report.validate()?;
    Ok(report)
}
