use serde::{Deserialize, Serialize};

use crate::error::{Result, WttrError};

pub const MAX_LANG_LEN: usize = 2;
pub const MAX_UNIT_LEN: usize = 1;

/// Temperature unit requested on the command line.
///
/// Anything other than `C` or `F` is carried through verbatim: it still ends up
/// after the degree sign, but no temperature is selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Other(String),
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TemperatureUnit {
    fn from(value: &str) -> Self {
        match value {
            "C" => TemperatureUnit::Celsius,
            "F" => TemperatureUnit::Fahrenheit,
            other => TemperatureUnit::Other(other.to_string()),
        }
    }
}

/// A validated request for current conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
    lang: String,
    unit: TemperatureUnit,
}

impl WeatherQuery {
    /// Validate flag lengths and build the query.
    ///
    /// `city` may be empty, in which case the service resolves the location itself.
    pub fn new(city: impl Into<String>, lang: impl Into<String>, unit: &str) -> Result<Self> {
        let lang = lang.into();

        if lang.chars().count() > MAX_LANG_LEN {
            return Err(WttrError::InvalidArgument { name: "lang", max: MAX_LANG_LEN, example: "en" });
        }
        if unit.chars().count() > MAX_UNIT_LEN {
            return Err(WttrError::InvalidArgument { name: "unit", max: MAX_UNIT_LEN, example: "C" });
        }

        Ok(Self { city: city.into(), lang, unit: TemperatureUnit::from(unit) })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn unit(&self) -> &TemperatureUnit {
        &self.unit
    }
}

/// `{"value": "..."}` wrapper used throughout the `nearest_area` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueEntry {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "FeelsLikeF")]
    pub feels_like_f: String,
    #[serde(rename = "cloudcover")]
    pub cloud_cover: String,
    pub humidity: String,
    #[serde(rename = "localObsDateTime")]
    pub local_obs_date_time: String,
    pub observation_time: String,
    #[serde(rename = "precipInches")]
    pub precip_inches: String,
    #[serde(rename = "precipMM")]
    pub precip_mm: String,
    pub pressure: String,
    #[serde(rename = "pressureInches")]
    pub pressure_inches: String,
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "temp_F")]
    pub temp_f: String,
    #[serde(rename = "uvIndex")]
    pub uv_index: String,
    pub visibility: String,
    #[serde(rename = "visibilityMiles")]
    pub visibility_miles: String,
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    #[serde(rename = "winddir16Point")]
    pub winddir_16_point: String,
    #[serde(rename = "winddirDegree")]
    pub winddir_degree: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NearestArea {
    pub area_name: Vec<ValueEntry>,
    pub country: Vec<ValueEntry>,
    pub weather_url: Vec<ValueEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Astronomy {
    pub moon_illumination: String,
    pub moon_phase: String,
    pub moonrise: String,
    pub moonset: String,
    pub sunrise: String,
    pub sunset: String,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyForecast {
    pub astronomy: Vec<Astronomy>,
    #[serde(rename = "avgtempC")]
    pub avg_temp_c: String,
    #[serde(rename = "avgtempF")]
    pub avg_temp_f: String,
    pub date: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
    #[serde(rename = "maxtempF")]
    pub max_temp_f: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    #[serde(rename = "mintempF")]
    pub min_temp_f: String,
    #[serde(rename = "sunHour")]
    pub sun_hour: String,
    #[serde(rename = "totalSnow_cm")]
    pub total_snow_cm: String,
    #[serde(rename = "uvIndex")]
    pub uv_index: String,
}

/// Decoded wttr.in `format=j2` payload.
///
/// The service encodes every number as a string; only the first entry of each
/// top-level sequence is ever consulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    pub current_condition: Vec<CurrentCondition>,
    pub nearest_area: Vec<NearestArea>,
    pub weather: Vec<DailyForecast>,
}

impl WeatherReport {
    pub fn current(&self) -> Result<&CurrentCondition> {
        self.current_condition.first().ok_or(WttrError::EmptyData("current_condition"))
    }

    pub fn area_name(&self) -> Result<&str> {
        let area = self.nearest_area.first().ok_or(WttrError::EmptyData("nearest_area"))?;
        area.area_name
            .first()
            .map(|entry| entry.value.as_str())
            .ok_or(WttrError::EmptyData("nearest_area.areaName"))
    }

    pub fn astronomy(&self) -> Result<&Astronomy> {
        let today = self.weather.first().ok_or(WttrError::EmptyData("weather"))?;
        today.astronomy.first().ok_or(WttrError::EmptyData("weather.astronomy"))
    }

    /// Check every position the composer indexes into.
    pub fn validate(&self) -> Result<()> {
        self.current()?;
        self.area_name()?;
        self.astronomy()?;
        Ok(())
    }
}

/// Waybar custom-module payload. Field names are fixed by Waybar's `return-type: json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaybarOutput {
    pub text: String,
    pub tooltip: String,
}

impl WaybarOutput {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(WttrError::Encode)
    }
}
