use crate::platform::PlatformType;

/// Marker color for platform types missing from the table
pub const FALLBACK_COLOR: &str = "#FFFFFF";

/// Display colors keyed by platform type name
pub const PLATFORM_COLORS: &[(&str, &str)] = &[
    ("AUTONOMOUS PINNIPEDS", "#FF0000"),
    ("C-MAN WEATHER STATIONS", "#FF7F00"),
    ("CLIMATE REFERENCE MOORED BUOYS", "#FFD400"),
    ("DRIFTING BUOYS (GENERIC)", "#FFFF00"),
    ("GLIDERS", "#BFFF00"),
    ("ICE BUOYS", "#6AFF00"),
    ("MOORED BUOYS (GENERIC)", "#00EAFF"),
    ("OCEAN TRANSPORT STATIONS (GENERIC)", "#0095FF"),
    ("PROFILING FLOATS AND GLIDERS (GENERIC)", "#0040FF"),
    ("RESEARCH", "#AA00FF"),
    ("SHIPS (GENERIC)", "#FF00AA"),
    ("SHORE AND BOTTOM STATIONS (GENERIC)", "#EDB9B9"),
    ("TIDE GAUGE STATIONS (GENERIC)", "#E7E9B9"),
    ("TROPICAL MOORED BUOYS", "#B9EDE0"),
    ("TSUNAMI WARNING STATIONS", "#B9D7ED"),
    ("UNKNOWN", "#DCB9ED"),
    ("UNMANNED SURFACE VEHICLE", "#8F2323"),
    ("VOLUNTEER OBSERVING SHIPS", "#8F6A23"),
    ("VOLUNTEER OBSERVING SHIPS (GENERIC)", "#4F8F23"),
    ("VOSCLIM", "#23628F"),
    ("WEATHER AND OCEAN OBS", "#6B238F"),
    ("WEATHER BUOYS", "#000000"),
    ("WEATHER OBS", "#737373"),
];

/// Display color for a platform type's map markers.
/// Types missing from the table get [`FALLBACK_COLOR`] rather than an error.
pub fn platform_color(platform_type: &PlatformType) -> &'static str {
    PLATFORM_COLORS
        .iter()
        .find(|(name, _)| *name == platform_type.as_str())
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformType;

    #[test]
    fn test_known_platform_colors() {
        assert_eq!(
            platform_color(&PlatformType::new("MOORED BUOYS (GENERIC)")),
            "#00EAFF"
        );
        assert_eq!(platform_color(&PlatformType::new("GLIDERS")), "#BFFF00");
        assert_eq!(platform_color(&PlatformType::new("WEATHER BUOYS")), "#000000");
    }

    #[test]
    fn test_unknown_type_gets_fallback() {
        assert_eq!(
            platform_color(&PlatformType::new("SPACE ELEVATOR")),
            FALLBACK_COLOR
        );
    }

    #[test]
    fn test_table_size() {
        assert_eq!(PLATFORM_COLORS.len(), 23);
    }
}
