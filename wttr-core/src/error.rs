use thiserror::Error;

/// Everything that can go wrong between reading the flags and printing the module output.
#[derive(Debug, Error)]
pub enum WttrError {
    #[error("The --{name} argument can have a maximum of {max} {} (e.g., {example}).", characters(.max))]
    InvalidArgument {
        name: &'static str,
        max: usize,
        example: &'static str,
    },

    #[error("Failed to fetch weather from {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to initialise HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Invalid weather service URL '{0}'")]
    InvalidUrl(String),

    #[error("Failed to parse weather service JSON")]
    Decode(#[from] serde_json::Error),

    #[error("Weather service returned no `{0}` data (unknown location?)")]
    EmptyData(&'static str),

    #[error("Failed to encode module output as JSON")]
    Encode(#[source] serde_json::Error),
}

fn characters(max: &usize) -> &'static str {
    if *max == 1 { "character" } else { "characters" }
}

pub type Result<T> = std::result::Result<T, WttrError>;
