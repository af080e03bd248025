use std::path::PathBuf;

use clap::Parser;
use wttr_core::{Config, WeatherQuery, provider_from_config};

/// Top-level CLI struct.
///
/// Unset flags fall back to the config file, then to `en`, an empty city and `C`.
#[derive(Debug, Parser)]
#[command(name = "wttr-bar", version, about = "Current wttr.in conditions as a Waybar custom module")]
pub struct Cli {
    /// Language code passed through to wttr.in, at most 2 characters (default "en").
    #[arg(long)]
    pub lang: Option<String>,

    /// City to look up; empty lets wttr.in locate you by IP (default "").
    #[arg(long)]
    pub city: Option<String>,

    /// Temperature unit, "C" or "F", at most 1 character (default "C").
    #[arg(long)]
    pub unit: Option<String>,

    /// Read defaults from this TOML file instead of the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Resolve flags against `config` and validate lengths.
    pub fn query(&self, config: &Config) -> wttr_core::Result<WeatherQuery> {
        WeatherQuery::new(
            self.city.as_deref().unwrap_or(config.city()),
            self.lang.as_deref().unwrap_or(config.lang()),
            self.unit.as_deref().unwrap_or(config.unit()),
        )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let query = self.query(&config)?;
        tracing::debug!(?query, "resolved query");

        let provider = provider_from_config(&config)?;
        let output = wttr_core::current_status(provider.as_ref(), &query).await?;

        println!("{}", output.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wttr_core::{TemperatureUnit, WttrError};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wttr-bar").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn no_flags_gives_builtin_defaults() {
        let query = parse(&[]).query(&Config::default()).unwrap();
        assert_eq!(query.lang(), "en");
        assert_eq!(query.city(), "");
        assert_eq!(query.unit(), &TemperatureUnit::Celsius);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            lang: Some("de".into()),
            city: Some("Berlin".into()),
            unit: Some("F".into()),
            ..Default::default()
        };

        let query = parse(&["--city", "Paris", "--unit", "C"]).query(&config).unwrap();
        assert_eq!(query.city(), "Paris");
        assert_eq!(query.lang(), "de");
        assert_eq!(query.unit(), &TemperatureUnit::Celsius);
    }

    #[test]
    fn empty_city_flag_overrides_config_city() {
        let config = Config { city: Some("Berlin".into()), ..Default::default() };
        let query = parse(&["--city", ""]).query(&config).unwrap();
        assert_eq!(query.city(), "");
    }

    #[tokio::test]
    async fn long_lang_fails_before_any_request() {
        // Port 9 (discard) would surface as a network error if a request went out.
        let path = std::env::temp_dir().join(format!("wttr-bar-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "base_url = \"http://127.0.0.1:9\"\ntimeout_secs = 1\n").unwrap();

        let cli = parse(&["--lang", "eng", "--config", path.to_str().unwrap()]);
        let err = cli.run().await.unwrap_err();
        std::fs::remove_file(&path).unwrap();

        let err = err.downcast::<WttrError>().expect("typed error");
        assert!(matches!(err, WttrError::InvalidArgument { name: "lang", .. }));
        assert_eq!(err.to_string(), "The --lang argument can have a maximum of 2 characters (e.g., en).");
    }

    #[test]
    fn long_unit_is_rejected() {
        let err = parse(&["--unit", "CC"]).query(&Config::default()).unwrap_err();
        assert!(matches!(err, WttrError::InvalidArgument { name: "unit", max: 1, .. }));
    }

    #[test]
    fn invalid_config_value_is_validated_too() {
        let config = Config { lang: Some("eng".into()), ..Default::default() };
        assert!(parse(&[]).query(&config).is_err());
    }

    #[test]
    fn unknown_unit_passes_validation() {
        let query = parse(&["--unit", "K"]).query(&Config::default()).unwrap();
        assert_eq!(query.unit().as_str(), "K");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/wttr-bar.toml"]);
        assert!(cli.load_config().is_err());
    }
}
