//! Emoji lookups for wttr.in condition codes and moon phases.
//!
//! Condition codes are the WWO codes listed in wttr.in's `lib/constants.py`.

/// Glyph returned for any code or phase that is not in a table.
pub const UNKNOWN: &str = "❓";

/// Map a three-digit condition code (e.g. `"113"`) to its emoji.
pub fn weather_emoji(code: &str) -> &'static str {
    match code {
        "113" => "☀️",
        "116" => "🌤️",
        "119" => "☁️",
        "122" => "☁️☁️",
        "143" | "248" | "260" => "🌫️",
        "176" | "263" | "353" => "🌦️",
        "179" | "266" | "293" | "296" | "299" | "302" | "305" | "308" | "356" | "359" | "362"
        | "365" | "374" => "🌧️",
        "182" | "185" | "227" | "230" | "281" | "284" | "311" | "314" | "317" | "320" | "323"
        | "326" | "329" | "332" | "335" | "338" | "350" | "368" | "371" | "377" | "395" => "🌨️",
        "200" | "386" | "389" | "392" => "⛈️",
        _ => {
            tracing::warn!(code, "unknown weather condition code");
            UNKNOWN
        }
    }
}

/// Map an English moon phase name (e.g. `"Waxing Gibbous"`) to its emoji. Case-sensitive.
pub fn moon_phase_emoji(phase: &str) -> &'static str {
    match phase {
        "New" => "🌑",
        "Waxing Crescent" => "🌒",
        "First Quarter" => "🌓",
        "Waxing Gibbous" => "🌔",
        "Full" => "🌕",
        "Waning Gibbous" => "🌖",
        "Third Quarter" => "🌗",
        "Waning Crescent" => "🌘",
        _ => {
            tracing::warn!(phase, "unknown moon phase");
            UNKNOWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONDITIONS: &[(&str, &str)] = &[
        ("113", "☀️"),
        ("116", "🌤️"),
        ("119", "☁️"),
        ("122", "☁️☁️"),
        ("143", "🌫️"),
        ("176", "🌦️"),
        ("179", "🌧️"),
        ("182", "🌨️"),
        ("185", "🌨️"),
        ("200", "⛈️"),
        ("227", "🌨️"),
        ("230", "🌨️"),
        ("248", "🌫️"),
        ("260", "🌫️"),
        ("263", "🌦️"),
        ("266", "🌧️"),
        ("281", "🌨️"),
        ("284", "🌨️"),
        ("293", "🌧️"),
        ("296", "🌧️"),
        ("299", "🌧️"),
        ("302", "🌧️"),
        ("305", "🌧️"),
        ("308", "🌧️"),
        ("311", "🌨️"),
        ("314", "🌨️"),
        ("317", "🌨️"),
        ("320", "🌨️"),
        ("323", "🌨️"),
        ("326", "🌨️"),
        ("329", "🌨️"),
        ("332", "🌨️"),
        ("335", "🌨️"),
        ("338", "🌨️"),
        ("350", "🌨️"),
        ("353", "🌦️"),
        ("356", "🌧️"),
        ("359", "🌧️"),
        ("362", "🌧️"),
        ("365", "🌧️"),
        ("368", "🌨️"),
        ("371", "🌨️"),
        ("374", "🌧️"),
        ("377", "🌨️"),
        ("386", "⛈️"),
        ("389", "⛈️"),
        ("392", "⛈️"),
        ("395", "🌨️"),
    ];

    #[test]
    fn every_condition_code_maps_to_its_glyph() {
        for (code, glyph) in CONDITIONS {
            assert_eq!(weather_emoji(code), *glyph, "code {code}");
        }
    }

    #[test]
    fn unknown_condition_codes_fall_back() {
        for code in ["999", "", "abc", " 113", "113 "] {
            assert_eq!(weather_emoji(code), UNKNOWN, "code {code:?}");
        }
    }

    #[test]
    fn every_moon_phase_maps_to_its_glyph() {
        let phases = [
            ("New", "🌑"),
            ("Waxing Crescent", "🌒"),
            ("First Quarter", "🌓"),
            ("Waxing Gibbous", "🌔"),
            ("Full", "🌕"),
            ("Waning Gibbous", "🌖"),
            ("Third Quarter", "🌗"),
            ("Waning Crescent", "🌘"),
        ];
        for (phase, glyph) in phases {
            assert_eq!(moon_phase_emoji(phase), glyph, "phase {phase}");
        }
    }

    #[test]
    fn moon_phase_lookup_is_exact() {
        for phase in ["new", "FULL", "Last Quarter", "", "Full "] {
            assert_eq!(moon_phase_emoji(phase), UNKNOWN, "phase {phase:?}");
        }
    }
}
