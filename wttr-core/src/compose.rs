use crate::{
    error::Result,
    model::{TemperatureUnit, WaybarOutput, WeatherReport},
    symbols::{moon_phase_emoji, weather_emoji},
};

/// Shape a decoded report into the Waybar `text`/`tooltip` pair.
///
/// `text` is the condition emoji, the feels-like temperature in the requested
/// unit, a degree sign and the unit letter. An unrecognised unit selects no
/// temperature, so e.g. `K` renders as `☀️°K`.
pub fn compose(report: &WeatherReport, unit: &TemperatureUnit) -> Result<WaybarOutput> {
    let current = report.current()?;

    let temperature = match unit {
        TemperatureUnit::Celsius => current.feels_like_c.as_str(),
        TemperatureUnit::Fahrenheit => current.feels_like_f.as_str(),
        TemperatureUnit::Other(raw) => {
            tracing::warn!(unit = %raw, "unsupported temperature unit, leaving temperature empty");
            ""
        }
    };

    let text = format!("{}{temperature}°{unit}", weather_emoji(&current.weather_code));

    let tooltip = format!(
        "City: {}\nWind: {} km/h \nMoon: {}",
        report.area_name()?,
        current.windspeed_kmph,
        moon_phase_emoji(&report.astronomy()?.moon_phase),
    );

    Ok(WaybarOutput { text, tooltip })
}
