use crate::colors;
use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical OSMC platform type name, e.g. "MOORED BUOYS (GENERIC)".
///
/// Type names arrive as free-form strings in the platform feed. Lookups
/// against the variable catalog and the color table are total, so an
/// unrecognized name is a valid value that simply has no capabilities.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub struct PlatformType(pub String);

impl PlatformType {
    pub fn new(name: impl Into<String>) -> Self {
        PlatformType(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlatformType {
    fn from(name: &str) -> Self {
        PlatformType(name.to_string())
    }
}

/// Represents one observing platform from the OSMC location feed.
///
/// Each entry is the most recent report of a platform within the
/// location window, as returned by the `orderByMax("platform_code,time")`
/// query against the GTS observation table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// WMO or GTS platform code (e.g., "41001" for a moored buoy)
    pub platform_code: String,
    /// Observing platform category, drives catalog and color lookups
    pub platform_type: PlatformType,
    /// Time of the platform's most recent report
    pub time: DateTime<Utc>,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
}

impl Platform {
    /// Parse a platform location CSV string into a vector of Platforms.
    ///
    /// Expected CSV columns: platform_code, platform_type, time, longitude, latitude.
    /// ERDDAP emits a units row directly under the header; it is skipped.
    /// Rows with an unparseable timestamp are dropped with a warning.
    pub fn parse_platform_csv(csv_object: &str) -> Result<Vec<Platform>, std::io::Error> {
        let mut platform_list: Vec<Platform> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for (index, row) in rdr.records().enumerate() {
            let record = row?;
            // units row
            if index == 0 {
                continue;
            }
            let platform_code = String::from(record.get(0).unwrap_or("").trim());
            let platform_type = PlatformType::new(record.get(1).unwrap_or("").trim());
            let time = match osmc_utils::time::parse_time(record.get(2).unwrap_or("")) {
                Ok(time) => time,
                Err(err) => {
                    log::warn!(
                        "dropping platform row for {}: bad timestamp ({})",
                        platform_code,
                        err
                    );
                    continue;
                }
            };
            let longitude = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let latitude = record
                .get(4)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let platform = Platform {
                platform_code,
                platform_type,
                time,
                longitude,
                latitude,
            };
            platform_list.push(platform);
        }
        Ok(platform_list)
    }

    /// Display color for this platform's map marker
    pub fn color(&self) -> &'static str {
        colors::platform_color(&self.platform_type)
    }

    /// Hover label for this platform's map marker
    pub fn marker_text(&self) -> String {
        format!(
            "Platform code = {}\nPlatform type = {}",
            self.platform_code, self.platform_type
        )
    }

    /// Header line identifying this platform above its observation charts
    pub fn header_title(&self) -> String {
        format!(
            "Platform code={} Platform type={}",
            self.platform_code, self.platform_type
        )
    }
}
