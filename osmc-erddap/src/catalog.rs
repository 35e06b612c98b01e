use crate::platform::PlatformType;

/// Surface variables reported by each observing platform type, in the
/// order they are requested from ERDDAP and charted.
pub const SURFACE_VARIABLES: &[(&str, &[&str])] = &[
    (
        "C-MAN WEATHER STATIONS",
        &["sst", "atmp", "slp", "windspd", "winddir"],
    ),
    ("DRIFTING BUOYS (GENERIC)", &["sst", "slp"]),
    ("ICE BUOYS", &["slp"]),
    (
        "MOORED BUOYS (GENERIC)",
        &["sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"],
    ),
    (
        "RESEARCH",
        &["sst", "atmp", "slp", "windspd", "winddir", "dewpoint"],
    ),
    (
        "SHIPS (GENERIC)",
        &["sst", "atmp", "slp", "windspd", "winddir", "clouds", "dewpoint"],
    ),
    (
        "SHORE AND BOTTOM STATIONS (GENERIC)",
        &["sst", "atmp", "precip", "slp", "windspd", "winddir", "clouds", "dewpoint"],
    ),
    (
        "TIDE GAUGE STATIONS (GENERIC)",
        &["sst", "atmp", "slp", "windspd", "winddir", "dewpoint"],
    ),
    ("TROPICAL MOORED BUOYS", &["sst", "atmp", "windspd", "winddir"]),
    ("TSUNAMI WARNING STATIONS", &["water_col_ht"]),
    ("UNKNOWN", &["waterlevel_met_res", "waterlevel_wrt_lcd"]),
    ("UNMANNED SURFACE VEHICLE", &["sst", "atmp", "slp", "hur"]),
    (
        "VOLUNTEER OBSERVING SHIPS",
        &["sst", "atmp", "slp", "windspd", "winddir", "clouds", "dewpoint"],
    ),
    (
        "VOLUNTEER OBSERVING SHIPS (GENERIC)",
        &["sst", "atmp", "slp", "windspd", "winddir", "wvht", "clouds", "dewpoint"],
    ),
    ("VOSCLIM", &["waterlevel_met_res", "waterlevel_wrt_lcd"]),
    (
        "WEATHER AND OCEAN OBS",
        &["sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"],
    ),
    (
        "WEATHER BUOYS",
        &["sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"],
    ),
    ("WEATHER OBS", &["atmp", "slp", "windspd", "winddir"]),
];

/// Depth-resolved variables reported by each profiling platform type.
pub const DEPTH_VARIABLES: &[(&str, &[&str])] = &[
    ("AUTONOMOUS PINNIPEDS", &["ztmp"]),
    ("CLIMATE REFERENCE MOORED BUOYS", &["ztmp", "zsal"]),
    ("GLIDERS", &["ztmp", "zsal"]),
    ("ICE BUOYS", &["ztmp"]),
    ("OCEAN TRANSPORT STATIONS (GENERIC)", &["ztmp", "zsal"]),
    ("PROFILING FLOATS AND GLIDERS (GENERIC)", &["ztmp", "zsal"]),
    ("SHORE AND BOTTOM STATIONS (GENERIC)", &["ztmp", "zsal"]),
    ("TROPICAL MOORED BUOYS", &["ztmp", "zsal"]),
];

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    name: &str,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(platform_type, _)| *platform_type == name)
        .map(|(_, variables)| *variables)
        .unwrap_or(&[])
}

/// Surface variables a platform type can report.
/// Unknown types get an empty set rather than an error.
pub fn surface_variables(platform_type: &PlatformType) -> &'static [&'static str] {
    lookup(SURFACE_VARIABLES, platform_type.as_str())
}

/// Depth-resolved variables a platform type can report.
/// Unknown types get an empty set rather than an error.
pub fn depth_variables(platform_type: &PlatformType) -> &'static [&'static str] {
    lookup(DEPTH_VARIABLES, platform_type.as_str())
}

/// Chart title for a variable label. Labels without a known title pass
/// through unchanged.
pub fn variable_title<'a>(label: &'a str) -> &'a str {
    match label {
        "sst" => "Sea Surface Temperature",
        "atmp" => "Air Temperature",
        "slp" => "Sea Level Pressure",
        "windspd" => "Wind Speed",
        "winddir" => "Wind Direction",
        "wvht" => "Wave Height",
        "dewpoint" => "Dew Point",
        "precip" => "Precipitation",
        "clouds" => "Cloud Cover",
        "hur" => "Relative Humidity",
        "water_col_ht" => "Water Column Height",
        "waterlevel_met_res" => "Water Level (Met Residual)",
        "waterlevel_wrt_lcd" => "Water Level (Chart Datum)",
        "zsal" => "Salinity",
        "ztmp" => "Temperature",
        _ => label,
    }
}
