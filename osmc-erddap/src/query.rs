use crate::catalog;
use crate::platform::PlatformType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default ERDDAP endpoint serving the OSMC GTS observation table
pub const DEFAULT_BASE_URL: &str = "http://dunkel.pmel.noaa.gov:8336/erddap/tabledap";

/// Dataset identifier of the near-real-time GTS observation table
pub const DATASET_ID: &str = "osmc_gts";

/// Platform location snapshots cover the trailing week
pub const DEFAULT_LOCATION_WINDOW_DAYS: u32 = 7;

/// Observation charts cover the trailing two weeks
pub const DEFAULT_PLOT_WINDOW_DAYS: u32 = 14;

/// Whether a query asks for surface readings or depth-resolved profiles
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationCategory {
    Surface,
    Depth,
}

/// Lower bound of a query's time window.
///
/// ERDDAP accepts both relative expressions ("now-14days") and absolute
/// timestamps; absolute bounds keep queries reproducible when the feed
/// stops updating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowStart {
    NowMinusDays(u32),
    Absolute(DateTime<Utc>),
}

impl WindowStart {
    /// Render the bound as ERDDAP expects it in a time constraint
    pub fn to_erddap(&self) -> String {
        match self {
            WindowStart::NowMinusDays(days) => format!("now-{}days", days),
            WindowStart::Absolute(time) => osmc_utils::time::format_time(time),
        }
    }
}

/// One ready-to-render tabledap query for a single platform.
///
/// `variables` is the full ordered column list as requested from the
/// service: `time` (and `observation_depth` for depth queries) followed
/// by the platform type's catalog variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub category: ObservationCategory,
    pub variables: Vec<String>,
    pub platform_code: String,
    pub window_start: WindowStart,
    /// Server-side sort keys, ascending
    pub sort_keys: Vec<String>,
}

impl QueryDescriptor {
    /// Render the descriptor as a tabledap CSV URL
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.csv?{}&platform_code=\"{}\"&orderBy(\"{}\")&time>{}",
            base_url,
            DATASET_ID,
            self.variables.join("%2C"),
            self.platform_code,
            self.sort_keys.join(","),
            self.window_start.to_erddap()
        )
    }
}

/// The surface and depth queries for one platform selection.
/// `None` means the platform type has no capabilities in that category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPair {
    pub surface: Option<QueryDescriptor>,
    pub depth: Option<QueryDescriptor>,
}

/// Build the surface and depth queries for a platform.
///
/// A category whose catalog set is empty (including every unrecognized
/// platform type) yields `None` for that slot; selecting such a platform
/// is not an error.
pub fn build_queries(
    platform_code: &str,
    platform_type: &PlatformType,
    window_start: &WindowStart,
) -> QueryPair {
    let surface_variables = catalog::surface_variables(platform_type);
    let surface = if surface_variables.is_empty() {
        None
    } else {
        let mut variables = vec![String::from("time")];
        variables.extend(surface_variables.iter().map(|v| v.to_string()));
        Some(QueryDescriptor {
            category: ObservationCategory::Surface,
            variables,
            platform_code: platform_code.to_string(),
            window_start: window_start.clone(),
            sort_keys: vec![String::from("time")],
        })
    };

    let depth_variables = catalog::depth_variables(platform_type);
    let depth = if depth_variables.is_empty() {
        None
    } else {
        let mut variables = vec![String::from("time"), String::from("observation_depth")];
        variables.extend(depth_variables.iter().map(|v| v.to_string()));
        Some(QueryDescriptor {
            category: ObservationCategory::Depth,
            variables,
            platform_code: platform_code.to_string(),
            window_start: window_start.clone(),
            sort_keys: vec![String::from("time"), String::from("observation_depth")],
        })
    };

    QueryPair { surface, depth }
}

/// URL of the platform location snapshot: the latest report per platform
/// within the window, one row each.
pub fn platform_locations_url(base_url: &str, window_start: &WindowStart) -> String {
    format!(
        "{}/{}.csv?platform_code%2Cplatform_type%2Ctime%2Clongitude%2Clatitude&distinct()&orderByMax(\"platform_code,time\")&time>={}",
        base_url,
        DATASET_ID,
        window_start.to_erddap()
    )
}
